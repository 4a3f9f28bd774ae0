// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// rdm: roadmap report generator.
///
/// Queries an issue tracker's search API for epics and milestones, buckets
/// the epics into a WBS x fiscal-year grid, and renders a static HTML
/// report with blocking-epic annotations and an orphan list.
#[derive(Parser, Debug)]
#[command(name = "rdm")]
#[command(about = "Generate a WBS x fiscal-year roadmap report from an issue tracker")]
#[command(
    after_help = "Examples:\n  \
    rdm --out report.html                 Fetch and write the report\n  \
    rdm --no-done --out report.html       Hide completed epics\n  \
    rdm --dump-snapshots                  Capture query results for offline use\n  \
    rdm --offline --out report.html       Rebuild the report from snapshots"
)]
pub struct Cli {
    /// Hide blocking epics (they are shown by default)
    #[arg(long)]
    pub no_blockers: bool,

    /// Hide completed ("Done") epics everywhere, including effort totals
    #[arg(long)]
    pub no_done: bool,

    /// Write the report to this file (default: discard the output)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Config file path
    #[arg(long, default_value = "rdm.toml")]
    pub config: PathBuf,

    /// Read the two query results from snapshot files instead of fetching
    #[arg(long, conflicts_with = "dump_snapshots")]
    pub offline: bool,

    /// Fetch live, then write the raw query results to the snapshot files
    #[arg(long)]
    pub dump_snapshots: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
