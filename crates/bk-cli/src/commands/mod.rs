//! CLI subcommand implementations.

pub mod group;
pub mod interleave;
pub mod stats;
