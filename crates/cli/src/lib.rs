// SPDX-License-Identifier: MIT

//! rdmrs - library behind the `rdm` roadmap report generator.
//!
//! The pipeline is a linear fetch -> classify -> render pass, executed once
//! per invocation:
//!
//! - [`Config`] - endpoint, queries, field names, taxonomy, snapshot paths
//! - [`source`] - the query source (live HTTP or offline snapshots)
//! - `rdm_core` - classification, grid building, milestone bucketing
//! - [`render`] - the static HTML document
//!
//! [`run`] is the entry point used by both the binary and the spec tests.

pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod source;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};

use rdm_core::ClassifyOptions;

/// Execute one invocation. This is the main entry point for library users
/// and provides a testable way to run the tool without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        completions::generate_completions(shell);
        return Ok(());
    }

    // a missing config file is only an error when a non-default path was given
    let explicit_config = cli.config != std::path::Path::new("rdm.toml");
    let config = Config::load(&cli.config, explicit_config)?;

    let raw = if cli.offline {
        source::load_snapshots(&config)?
    } else {
        source::fetch_live(&config)?
    };
    if cli.dump_snapshots {
        source::dump_snapshots(&config, &raw)?;
    }

    let options = ClassifyOptions {
        show_done: !cli.no_done,
        show_blockers: !cli.no_blockers,
    };
    report::run(&config, &raw, options, cli.out.as_deref())
}
