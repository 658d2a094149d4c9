use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use minesweep_core::{BoardConfig, GameError, Game};
use rand::Rng;

use crate::command::{Command, is_yes};
use crate::view::BoardView;

enum RoundEnd {
    Finished,
    NewGame,
    Quit,
}

/// Drives one [`Game`] from line based input until the player quits.
pub struct Session<R> {
    game: Game<R>,
    cheat: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(game: Game<R>, cheat: bool) -> Self {
        Self { game, cheat }
    }

    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        loop {
            if self.cheat {
                let board = self.game.board();
                writeln!(output, "{}\n{}", board.mine_sheet(), board.count_sheet())?;
            }

            let play_again = match self.play_round(input, output)? {
                RoundEnd::Quit => false,
                RoundEnd::NewGame => true,
                RoundEnd::Finished => {
                    write!(output, "Play again? [y/N] ")?;
                    output.flush()?;
                    read_line(input)?.is_some_and(|line| is_yes(&line))
                }
            };
            if !play_again {
                return Ok(());
            }

            let config = self.game.config();
            self.game.restart(config);
        }
    }

    fn play_round(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<RoundEnd> {
        loop {
            write!(output, "{}> ", BoardView::new(&self.game))?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(RoundEnd::Quit);
            };
            let coords = match line.parse() {
                Ok(Command::Reveal(coords)) => coords,
                Ok(Command::NewGame) => return Ok(RoundEnd::NewGame),
                Ok(Command::Quit) => return Ok(RoundEnd::Quit),
                Err(err) => {
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            let report = match self.game.reveal(coords) {
                Ok(report) => report,
                Err(GameError::OutOfBounds) => {
                    let (rows, columns) = self.game.size();
                    writeln!(output, "Pick a row below {rows} and a column below {columns}")?;
                    continue;
                }
                Err(err) => return Err(err).context("Could not reveal cell"),
            };

            if report.exposed_mine() {
                self.game.loss_sweep().context("Could not expose board")?;
                writeln!(output, "{}You lost! You found a mine!", BoardView::new(&self.game))?;
                return Ok(RoundEnd::Finished);
            }
            if report.triggered_win() {
                writeln!(output, "{}You won! You avoided all mines!", BoardView::new(&self.game))?;
                return Ok(RoundEnd::Finished);
            }
        }
    }
}

/// Asks for dimensions and mine count until they form a valid board, `None` on end of input.
pub fn prompt_config(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<BoardConfig>> {
    loop {
        let Some(rows) = prompt_number(input, output, "How many rows?")? else {
            return Ok(None);
        };
        let Some(columns) = prompt_number(input, output, "How many columns?")? else {
            return Ok(None);
        };
        let Some(mines) = prompt_number(input, output, "How many mines?")? else {
            return Ok(None);
        };

        match BoardConfig::new(rows, columns, mines) {
            Ok(config) => return Ok(Some(config)),
            Err(err) => writeln!(output, "{err}, try again")?,
        }
    }
}

fn prompt_number<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<Option<T>> {
    loop {
        write!(output, "{message} ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "`{}` is not a valid number", line.trim())?,
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Could not read input")?;
    Ok((read > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::{Board, GameStatus};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::io::Cursor;

    fn session(size: (u8, u8), mines: &[(u8, u8)]) -> Session<SmallRng> {
        let board = Board::from_mine_coords(size, mines).unwrap();
        Session::new(Game::from_board(board, SmallRng::seed_from_u64(0)), false)
    }

    fn play(session: &mut Session<SmallRng>, input: &str) -> String {
        let mut output = Vec::new();
        session
            .run(&mut Cursor::new(input.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn winning_then_declining_exits() {
        let mut session = session((1, 3), &[(0, 0)]);

        let output = play(&mut session, "0 1\n0 2\nn\n");

        assert!(output.contains("You won!"));
        assert!(output.ends_with("Play again? [y/N] "));
        assert_eq!(session.game.status(), GameStatus::Won);
    }

    #[test]
    fn losing_sweeps_the_board() {
        let mut session = session((2, 2), &[(1, 1)]);

        let output = play(&mut session, "1 1\n");

        assert!(output.contains("You lost!"));
        assert_eq!(session.game.revealed_count(), 4);
    }

    #[test]
    fn bad_lines_are_reprompted() {
        let mut session = session((2, 2), &[(1, 1)]);

        let output = play(&mut session, "hello\n5 5\nq\n");

        assert!(output.contains("Expected exactly a row and a column"));
        assert!(output.contains("Pick a row below 2 and a column below 2"));
        assert_eq!(session.game.revealed_count(), 0);
    }

    #[test]
    fn playing_again_deals_a_new_board() {
        let mut session = session((2, 2), &[(1, 1)]);

        play(&mut session, "1 1\ny\nq\n");

        assert_eq!(session.game.status(), GameStatus::InProgress);
        assert_eq!(session.game.revealed_count(), 0);
        assert_eq!(session.game.board().mine_count(), 1);
    }

    #[test]
    fn cheat_sheets_are_printed_per_game() {
        let mut session = session((1, 2), &[(0, 1)]);
        session.cheat = true;

        let output = play(&mut session, "q\n");

        assert!(output.starts_with("| O | X |\n\n| 1 | 0 |\n"));
    }

    #[test]
    fn config_prompt_retries_until_valid() {
        let mut output = Vec::new();
        let input = "abc\n2\n2\n4\n3\n3\n2\n";

        let config = prompt_config(&mut Cursor::new(input.as_bytes()), &mut output).unwrap();

        assert_eq!(config, Some(BoardConfig::new(3, 3, 2).unwrap()));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("`abc` is not a valid number"));
        assert!(output.contains("mine count must leave at least one safe cell, try again"));
    }

    #[test]
    fn config_prompt_stops_at_end_of_input() {
        let mut output = Vec::new();
        let config = prompt_config(&mut Cursor::new(&b"4\n"[..]), &mut output).unwrap();
        assert_eq!(config, None);
    }
}
