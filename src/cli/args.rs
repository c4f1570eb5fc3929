//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::accumulator::OverflowPolicy;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Running-total accumulator
#[derive(Parser, Debug)]
#[command(
    name = "adder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Running-total accumulator",
    long_about = "Accumulate integers into a running total. With no command, adds 10, 20 and 30 and prints the total.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add 10, 20 and 30 and print the total
    Run,

    /// Accumulate the given values
    Sum {
        /// Values to add, in order
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Starting total (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        initial: Option<i64>,

        /// Overflow policy: wrap, saturate or error (overrides config)
        #[arg(short, long)]
        policy: Option<OverflowPolicy>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute n!
    Factorial {
        n: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set up .adder directory with default configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}
