// SPDX-License-Identifier: MIT

//! Resolution of "is blocked by" links against the primary result set.

use std::collections::HashMap;

use crate::record::{IssueRecord, RawIssue};

/// The relationship label, read from the blocked issue's perspective.
const BLOCKED_BY_LABEL: &str = "is blocked by";

/// A blocker, annotated with the status looked up from the primary result
/// set. Blockers are not placed in the grid, so they carry no period class
/// or fiscal year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockerEntry {
    pub key: String,
    pub summary: String,
    /// None when the blocker's key is outside the primary query result
    /// (e.g. another project).
    pub status: Option<String>,
}

/// Key -> status index over the full primary result set, built once before
/// classification so blocker lookups never depend on processing order.
#[derive(Debug, Default)]
pub struct StatusIndex {
    by_key: HashMap<String, String>,
}

impl StatusIndex {
    /// Index every issue key in the primary result set.
    pub fn build(issues: &[RawIssue]) -> Self {
        let by_key = issues
            .iter()
            .map(|issue| (issue.key.clone(), issue.fields.status.name.clone()))
            .collect();
        StatusIndex { by_key }
    }

    pub fn status_of(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Resolve an issue's blockers, preserving link order.
///
/// Links are filtered to "is blocked by" with a present target; a link whose
/// target was deleted is skipped, not errored. No deduplication: a blocker
/// linked twice appears twice.
pub fn resolve_blockers(record: &IssueRecord, index: &StatusIndex) -> Vec<BlockerEntry> {
    record
        .links
        .iter()
        .filter(|link| link.inward_label == BLOCKED_BY_LABEL)
        .filter_map(|link| link.target.as_ref())
        .map(|target| BlockerEntry {
            key: target.key.clone(),
            summary: target.summary.clone(),
            status: index.status_of(&target.key).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
#[path = "blockers_tests.rs"]
mod tests;
