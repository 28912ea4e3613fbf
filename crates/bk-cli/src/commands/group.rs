//! Group command for compacting bookings into date ranges.
//!
//! Reads a JSON array of bookings from a file or stdin and prints one line per
//! date range (or the groupings as JSON with `--json`).

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bk_core::{Booking, BookingGrouping, DateOrder, Pairing, group_bookings};
use clap::Args;

use crate::Config;

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// JSON file with bookings. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Pairing policy (first-two or adjacent). Overrides config.
    #[arg(long)]
    pub pairing: Option<Pairing>,

    /// Sort dates ascending instead of requiring sorted input.
    #[arg(long)]
    pub sort_dates: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &GroupArgs, config: &Config) -> Result<()> {
    let bookings = load_bookings(args.input.as_deref())?;

    let mut options = config.grouping_options();
    if let Some(pairing) = args.pairing {
        options.pairing = pairing;
    }
    if args.sort_dates {
        options.date_order = DateOrder::Ascending;
    }
    tracing::debug!(?options, bookings = bookings.len(), "grouping bookings");

    let groupings = group_bookings(&bookings, &options)
        .context("failed to group bookings (use --sort-dates for unsorted input)")?;

    if args.json || config.json {
        render_json(writer, &groupings)
    } else {
        render_table(writer, &groupings)
    }
}

/// Reads bookings from `path`, or stdin for `None` / `-`.
pub fn load_bookings(path: Option<&Path>) -> Result<Vec<Booking>> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read bookings from stdin")?;
            raw
        }
    };

    parse_bookings(&raw)
}

fn parse_bookings(raw: &str) -> Result<Vec<Booking>> {
    serde_json::from_str(raw).context("invalid bookings JSON")
}

fn render_json<W: Write>(writer: &mut W, groupings: &[BookingGrouping]) -> Result<()> {
    let json = serde_json::to_string_pretty(groupings)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn render_table<W: Write>(writer: &mut W, groupings: &[BookingGrouping]) -> Result<()> {
    if groupings.is_empty() {
        writeln!(writer, "No bookings.")?;
        return Ok(());
    }

    for grouping in groupings {
        let items = grouping
            .items
            .iter()
            .map(|item| format!("{}={}", item.project, item.allocation))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "{} .. {}  {items}", grouping.from, grouping.to)?;
    }

    Ok(())
}
