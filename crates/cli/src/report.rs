// SPDX-License-Identifier: MIT

//! Report orchestration: one sequential pass from the two raw result sets
//! to the written document.

use std::fs;
use std::path::Path;

use rdm_core::{classify_all, collect_milestones, ClassifyOptions, IssueRecord, StatusIndex};

use crate::config::Config;
use crate::error::Result;
use crate::render::{render_report, ReportInput};
use crate::source::RawResults;

/// Build the report from raw results and write it to `out`, if given.
///
/// Rendering always runs, so data-contract violations (e.g. a bad milestone
/// version label) surface even when the output is discarded.
pub fn run(
    config: &Config,
    raw: &RawResults,
    options: ClassifyOptions,
    out: Option<&Path>,
) -> Result<()> {
    let (epics, milestones) = raw.decode()?;
    let taxonomy = config.taxonomy();
    let field_names = config.field_names();

    // the status index covers the full primary result set, before any drop
    let index = StatusIndex::build(&epics.issues);
    tracing::debug!(issues = epics.issues.len(), indexed = index.len(), "status index built");

    let milestone_buckets = collect_milestones(&milestones.issues, &taxonomy)?;

    let records: Vec<IssueRecord> = epics
        .issues
        .iter()
        .map(|issue| IssueRecord::from_raw(issue, &field_names))
        .collect();

    let classified = classify_all(&records, &index, &taxonomy, options);
    tracing::info!(
        issues = records.len(),
        orphans = classified.orphans.len(),
        total_effort = classified.totals.sum(),
        "classification pass complete"
    );

    let html = render_report(&ReportInput {
        taxonomy: &taxonomy,
        grid: &classified.grid,
        orphans: &classified.orphans,
        totals: &classified.totals,
        milestones: &milestone_buckets,
        browse_url: &config.browse_url,
        title: &config.title,
        graph_url: config.graph_url.as_deref(),
    });

    if let Some(path) = out {
        fs::write(path, html)?;
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
