// SPDX-License-Identifier: MIT

//! Raw search-payload types and the normalized issue record.
//!
//! The raw types mirror the tracker's search response shape closely enough
//! for serde to decode it; normalization then extracts the handful of typed
//! fields the classifier needs. Custom attributes (WBS code, effort points)
//! live under tracker-instance-specific field names, so they are decoded
//! into a loose map and picked out by configured name.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level search response for the epic query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub issues: Vec<RawIssue>,
}

/// One raw issue entry as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub key: String,
    pub fields: RawFields,
}

/// The `fields` object of a raw issue.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFields {
    pub summary: String,
    pub status: RawStatus,
    #[serde(default)]
    pub issuelinks: Vec<RawLink>,
    /// Instance-specific custom fields (`customfield_*`), kept untyped.
    #[serde(flatten)]
    pub custom: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStatus {
    pub name: String,
}

/// One entry of an issue's link list.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    #[serde(rename = "type")]
    pub link_type: RawLinkType,
    /// The issue on the inward side of the link. Absent when the link points
    /// the other way, or when the target was deleted.
    #[serde(rename = "inwardIssue")]
    pub inward_issue: Option<RawLinkedIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLinkType {
    /// Relationship label read from this issue's perspective,
    /// e.g. "is blocked by".
    pub inward: String,
}

/// The lightweight payload carried by a resolvable link target.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLinkedIssue {
    pub key: String,
    pub fields: RawLinkedFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLinkedFields {
    pub summary: String,
}

/// Names of the instance-specific custom fields to normalize from.
#[derive(Debug, Clone)]
pub struct FieldNames {
    /// Field holding the WBS code, e.g. "customfield_10500".
    pub wbs: String,
    /// Field holding the effort (story point) value, e.g. "customfield_10202".
    pub effort: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            wbs: "customfield_10500".to_string(),
            effort: "customfield_10202".to_string(),
        }
    }
}

/// A normalized link: relationship label plus the target, if resolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLink {
    pub inward_label: String,
    pub target: Option<LinkedIssue>,
}

/// Key and summary of a linked issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedIssue {
    pub key: String,
    pub summary: String,
}

/// The normalized, immutable view of one issue the classifier works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub key: String,
    pub summary: String,
    pub status: String,
    /// WBS code, when the custom field is present and a string.
    pub wbs: Option<String>,
    /// Effort points, 0 when the custom field is absent or null.
    pub effort: u32,
    pub links: Vec<IssueLink>,
}

impl IssueRecord {
    /// Normalize one raw issue.
    ///
    /// Effort coercion is lenient: a missing, null, or non-numeric value
    /// becomes 0, and fractional values truncate. Everything else is carried
    /// as-is; a malformed record surfaces downstream as an orphan, not as an
    /// error here.
    pub fn from_raw(raw: &RawIssue, fields: &FieldNames) -> Self {
        let wbs = raw
            .fields
            .custom
            .get(&fields.wbs)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let effort = raw
            .fields
            .custom
            .get(&fields.effort)
            .and_then(|v| v.as_f64())
            .map(|v| if v < 0.0 { 0 } else { v as u32 })
            .unwrap_or(0);

        let links = raw
            .fields
            .issuelinks
            .iter()
            .map(|link| IssueLink {
                inward_label: link.link_type.inward.clone(),
                target: link.inward_issue.as_ref().map(|t| LinkedIssue {
                    key: t.key.clone(),
                    summary: t.fields.summary.clone(),
                }),
            })
            .collect();

        IssueRecord {
            key: raw.key.clone(),
            summary: raw.fields.summary.clone(),
            status: raw.fields.status.name.clone(),
            wbs,
            effort,
            links,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
