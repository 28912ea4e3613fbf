//! Interleave command for positional list merging.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::Config;

#[derive(Debug, Args)]
pub struct InterleaveArgs {
    /// Comma-separated first list (e.g., 1,3,5).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub first: Vec<i64>,

    /// Comma-separated second list (e.g., 2,4,6).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub second: Vec<i64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &InterleaveArgs, config: &Config) -> Result<()> {
    let merged = bk_core::interleave(&args.first, &args.second);

    if args.json || config.json {
        writeln!(writer, "{}", serde_json::to_string(&merged)?)?;
    } else {
        let line = merged
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")?;
    }

    Ok(())
}
