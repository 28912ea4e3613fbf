//! Stats command for quick summaries of integer lists.

use std::io::Write;

use anyhow::Result;
use bk_core::stats::{average_or_none, closest_to_average, with_max};
use clap::Args;
use serde::Serialize;

use crate::Config;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Values to summarize.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Summary of a list of values. Absent fields mean the list was empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub max: Option<i64>,
    pub average: Option<f64>,
    pub closest_to_average: Option<i64>,
}

impl StatsSummary {
    pub fn from_values(values: &[i64]) -> Self {
        Self {
            count: values.len(),
            max: with_max(values, |v| *v).copied(),
            average: average_or_none(values),
            closest_to_average: closest_to_average(values),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, args: &StatsArgs, config: &Config) -> Result<()> {
    let summary = StatsSummary::from_values(&args.values);

    if args.json || config.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    let plural = if summary.count == 1 { "" } else { "s" };
    writeln!(writer, "count: {} value{plural}", summary.count)?;
    writeln!(writer, "max: {}", or_dash(summary.max))?;
    writeln!(
        writer,
        "average: {}",
        or_dash(summary.average.map(|avg| format!("{avg:.2}")))
    )?;
    writeln!(writer, "closest: {}", or_dash(summary.closest_to_average))?;
    Ok(())
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
