//! Command-line interface for xo.

use crate::players::Controller;
use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use std::path::PathBuf;
use xo::Mark;

/// xo - A Tic-tac-toe game
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "A Tic-tac-toe game.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who controls x (default: human)
    #[arg(short = 'x', value_enum)]
    pub x: Option<Controller>,

    /// Who controls o (default: computer)
    #[arg(short = 'o', value_enum)]
    pub o: Option<Controller>,

    /// The number of rounds to let two computer players play (default: 50)
    #[arg(short, long, value_name = "n", allow_negative_numbers = true)]
    pub rounds: Option<i64>,

    /// Who plays first (default: x)
    #[arg(
        short,
        long,
        value_parser = PossibleValuesParser::new(["x", "o"]).try_map(|s| s.parse::<Mark>()),
    )]
    pub first: Option<Mark>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's choice among equally good moves
    #[arg(long)]
    pub seed: Option<u64>,
}
