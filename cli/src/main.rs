use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::{Board, GameConfig, StartTile};

mod command;
mod render;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Preset {
    /// 9x9 with 10 mines
    Beginner,
    /// 16x16 with 40 mines
    Intermediate,
    /// 16x30 with 99 mines
    Expert,
}

impl Preset {
    fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board preset, individual dimensions below take precedence
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,

    /// Number of rows
    #[arg(long, value_name = "N")]
    rows: Option<i64>,

    /// Number of columns
    #[arg(long, value_name = "N")]
    cols: Option<i64>,

    /// Number of mines
    #[arg(short, long, value_name = "N")]
    mines: Option<i64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also keep the neighbours of the first cell free, so the first reveal always opens a region
    #[arg(long)]
    zero_start: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let preset = self.preset.config();
        let rows = self.rows.unwrap_or(preset.rows.into());
        let cols = self.cols.unwrap_or(preset.cols.into());
        let mines = self.mines.unwrap_or(preset.mines.into());
        GameConfig::new(rows, cols, mines).context("Cannot start a game with these settings")
    }

    fn start_tile(&self) -> StartTile {
        if self.zero_start {
            StartTile::AlwaysZero
        } else {
            StartTile::SimpleSafe
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let board = Board::from_config(config)?
        .with_seed(seed)
        .with_start_tile(args.start_tile());

    let mut session = session::Session::new(board, args.seed.is_some());
    session.play(std::io::stdin().lock(), std::io::stdout().lock())
}
