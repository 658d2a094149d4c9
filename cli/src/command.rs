use std::str::FromStr;

use minesweep_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    NewGame,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type a row and a column, `n` for a new game or `q` to quit")]
    Empty,
    #[error("`{0}` is not a valid row or column")]
    BadCoord(String),
    #[error("Expected exactly a row and a column, got `{0}`")]
    Unrecognized(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "n" | "new" => return Ok(Self::NewGame),
            "q" | "quit" => return Ok(Self::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(CommandError::Unrecognized(line.to_owned()));
        };

        Ok(Self::Reveal((parse_coord(row)?, parse_coord(col)?)))
    }
}

fn parse_coord(part: &str) -> Result<Coord, CommandError> {
    part.parse()
        .map_err(|_| CommandError::BadCoord(part.to_owned()))
}

/// Answer to the play again question, anything but yes means no.
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!("3 4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  0,12 ".parse(), Ok(Command::Reveal((0, 12))));
        assert_eq!("7, 1\n".parse(), Ok(Command::Reveal((7, 1))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("n".parse(), Ok(Command::NewGame));
        assert_eq!("NEW".parse(), Ok(Command::NewGame));
        assert_eq!("q\n".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "1 -2".parse::<Command>(),
            Err(CommandError::BadCoord("-2".into()))
        );
        assert_eq!(
            "1 300".parse::<Command>(),
            Err(CommandError::BadCoord("300".into()))
        );
        assert_eq!(
            "1 2 3".parse::<Command>(),
            Err(CommandError::Unrecognized("1 2 3".into()))
        );
    }

    #[test]
    fn only_yes_means_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("nope"));
    }
}
