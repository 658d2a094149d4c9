use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use minesweep_core::{BoardConfig, CellCount, Coord, Game};

mod command;
mod session;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for BoardConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => BoardConfig::beginner(),
            Preset::Intermediate => BoardConfig::intermediate(),
            Preset::Expert => BoardConfig::expert(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, overrides the explicit dimensions
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Number of rows
    #[arg(short, long)]
    rows: Option<Coord>,

    /// Number of columns
    #[arg(short, long)]
    columns: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print where the mines are at the start of every game
    #[arg(long)]
    cheat: bool,
}

impl Args {
    /// Config from the command line, if it names a complete and valid one.
    fn board_config(&self) -> Option<BoardConfig> {
        if let Some(preset) = self.preset {
            return Some(preset.into());
        }
        let (rows, columns, mines) = (self.rows?, self.columns?, self.mines?);
        BoardConfig::new(rows, columns, mines)
            .inspect_err(|err| log::error!("Ignoring board from arguments: {err}"))
            .ok()
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let config = match args.board_config() {
        Some(config) => config,
        None => match session::prompt_config(&mut input, &mut output)? {
            Some(config) => config,
            None => return Ok(()),
        },
    };
    let seed = args.seed.unwrap_or_else(time_seed);
    log::debug!("seed: {seed}");

    session::Session::new(Game::new(config, seed), args.cheat).run(&mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_wins_over_dimensions() {
        let args = Args::parse_from(["minesweep", "--preset", "expert", "-r", "3"]);
        assert_eq!(args.board_config(), Some(BoardConfig::expert()));
    }

    #[test]
    fn dimensions_need_all_three_values() {
        let args = Args::parse_from(["minesweep", "-r", "3", "-c", "4"]);
        assert_eq!(args.board_config(), None);

        let args = Args::parse_from(["minesweep", "-r", "3", "-c", "4", "-m", "5"]);
        assert_eq!(args.board_config(), BoardConfig::new(3, 4, 5).ok());
    }

    #[test]
    fn invalid_dimensions_fall_back_to_prompt() {
        let args = Args::parse_from(["minesweep", "-r", "2", "-c", "2", "-m", "4"]);
        assert_eq!(args.board_config(), None);
    }
}
