// SPDX-License-Identifier: MIT

//! Milestone collection: bucketing the secondary query's records by fiscal
//! year only. No WBS, no classification ambiguity, and no orphan path -- a
//! milestone that cannot be placed is a data-contract violation.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::taxonomy::Taxonomy;

/// Top-level search response for the milestone query.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneResult {
    pub issues: Vec<RawMilestone>,
}

/// One raw milestone entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMilestone {
    pub key: String,
    pub fields: RawMilestoneFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMilestoneFields {
    pub summary: String,
    /// Version labels; the first one carries the fiscal year ("F17" -> FY17).
    #[serde(rename = "fixVersions", default)]
    pub fix_versions: Vec<RawVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVersion {
    pub name: String,
}

/// A milestone ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneEntry {
    pub key: String,
    pub summary: String,
}

/// Milestones bucketed by fiscal year, in taxonomy column order.
#[derive(Debug, Clone)]
pub struct MilestoneBuckets {
    buckets: Vec<(String, Vec<MilestoneEntry>)>,
}

impl MilestoneBuckets {
    pub fn get(&self, fiscal_year: &str) -> &[MilestoneEntry] {
        self.buckets
            .iter()
            .find(|(fy, _)| fy == fiscal_year)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// (fiscal year, entries) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MilestoneEntry])> {
        self.buckets
            .iter()
            .map(|(fy, entries)| (fy.as_str(), entries.as_slice()))
    }
}

/// Derive the fiscal year from a version label: "F17" -> "FY17".
///
/// The label's first character is a marker; everything after it must be the
/// 2-digit year.
fn fiscal_year_of_label(key: &str, label: &str) -> Result<String> {
    let year = label.get(1..).unwrap_or_default();
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadVersionLabel {
            key: key.to_string(),
            label: label.to_string(),
        });
    }
    Ok(format!("FY{year}"))
}

/// Bucket every milestone by fiscal year, preserving arrival order.
///
/// Fatal on a missing or unparsable version label, or on a label mapping
/// outside the enumerated years.
pub fn collect_milestones(
    milestones: &[RawMilestone],
    taxonomy: &Taxonomy,
) -> Result<MilestoneBuckets> {
    let mut buckets: Vec<(String, Vec<MilestoneEntry>)> = taxonomy
        .fiscal_years
        .iter()
        .map(|fy| (fy.clone(), Vec::new()))
        .collect();

    for milestone in milestones {
        let label = milestone
            .fields
            .fix_versions
            .first()
            .ok_or_else(|| Error::MissingVersionLabel {
                key: milestone.key.clone(),
            })?;
        let fy = fiscal_year_of_label(&milestone.key, &label.name)?;
        let (_, entries) = buckets
            .iter_mut()
            .find(|(year, _)| *year == fy)
            .ok_or_else(|| Error::UnknownFiscalYear {
                key: milestone.key.clone(),
                fy: fy.clone(),
            })?;
        entries.push(MilestoneEntry {
            key: milestone.key.clone(),
            summary: milestone.fields.summary.clone(),
        });
    }

    Ok(MilestoneBuckets { buckets })
}

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;
