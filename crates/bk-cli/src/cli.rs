//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::group::GroupArgs;
use crate::commands::interleave::InterleaveArgs;
use crate::commands::stats::StatsArgs;

/// Booking grouper.
///
/// Compacts per-day project bookings into date ranges with their distinct
/// project allocations.
#[derive(Debug, Parser)]
#[command(name = "bk", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group bookings from a JSON file (or stdin) into date ranges.
    Group(GroupArgs),

    /// Merge two integer lists so each second item follows its first.
    Interleave(InterleaveArgs),

    /// Show max, average and closest-to-average of integers.
    Stats(StatsArgs),
}
