// SPDX-License-Identifier: MIT

//! Tool configuration, loaded from `rdm.toml`.
//!
//! Every field has a default, so the tool runs without a config file at
//! all. The file overrides the search endpoint, the two query expressions,
//! the custom field names, and the taxonomy (WBS rows, fiscal years, cycle
//! tokens) when a different breakdown is wanted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use rdm_core::{FieldNames, Taxonomy};

use crate::error::{Error, Result};

fn default_title() -> String {
    "Roadmap report".to_string()
}

fn default_search_url() -> String {
    "https://jira.lsstcorp.org/rest/api/2/search".to_string()
}

fn default_browse_url() -> String {
    "https://jira.lsstcorp.org/browse".to_string()
}

fn default_epic_query() -> String {
    "project = DM AND issuetype = Epic AND Team = \"Data Access and Database\"".to_string()
}

fn default_milestone_query() -> String {
    "project = \"DM Long-range  Planning\" AND wbs ~ \"02C.06*\" AND type = milestone"
        .to_string()
}

fn default_max_results() -> u32 {
    10_000
}

fn default_epic_snapshot() -> PathBuf {
    PathBuf::from("epics.snapshot.json")
}

fn default_milestone_snapshot() -> PathBuf {
    PathBuf::from("milestones.snapshot.json")
}

/// Custom field names, as a nested config table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsConfig {
    pub wbs: String,
    pub effort: String,
}

/// Snapshot file locations for offline mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    #[serde(default = "default_epic_snapshot")]
    pub epics: PathBuf,
    #[serde(default = "default_milestone_snapshot")]
    pub milestones: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            epics: default_epic_snapshot(),
            milestones: default_milestone_snapshot(),
        }
    }
}

/// The full tool configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Report page title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Optional link to a milestone dependency graph, shown above the grid.
    #[serde(default)]
    pub graph_url: Option<String>,
    /// Search endpoint accepting `maxResults` and `jql` parameters.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Base URL issue keys are linked under in the report.
    #[serde(default = "default_browse_url")]
    pub browse_url: String,
    /// Query expression selecting the epics.
    #[serde(default = "default_epic_query")]
    pub epic_query: String,
    /// Query expression selecting the milestones.
    #[serde(default = "default_milestone_query")]
    pub milestone_query: String,
    /// Result-count cap sent with each query.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Custom field names for WBS and effort.
    #[serde(default)]
    pub fields: Option<FieldsConfig>,
    /// Snapshot file locations.
    #[serde(default)]
    pub snapshots: SnapshotConfig,
    /// Taxonomy override; defaults to the historical breakdown.
    #[serde(default)]
    pub taxonomy: Option<Taxonomy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_title(),
            graph_url: None,
            search_url: default_search_url(),
            browse_url: default_browse_url(),
            epic_query: default_epic_query(),
            milestone_query: default_milestone_query(),
            max_results: default_max_results(),
            fields: None,
            snapshots: SnapshotConfig::default(),
            taxonomy: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file is only an error when the caller explicitly asked for
    /// it (`required`); otherwise defaults apply, which keeps the bare
    /// `rdm` invocation working in any directory.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                return Err(Error::ConfigNotFound(path.display().to_string()));
            }
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject taxonomies whose cycle tokens map outside the fiscal years,
    /// so classification can rely on every cycle having a column.
    fn validate(&self) -> Result<()> {
        let Some(taxonomy) = &self.taxonomy else {
            return Ok(());
        };
        if taxonomy.wbs.is_empty() {
            return Err(Error::InvalidConfig("taxonomy.wbs must not be empty".to_string()));
        }
        if taxonomy.fiscal_years.is_empty() {
            return Err(Error::InvalidConfig(
                "taxonomy.fiscal_years must not be empty".to_string(),
            ));
        }
        for token in &taxonomy.cycles {
            let fy = Taxonomy::fiscal_year_of_cycle(token);
            if !taxonomy.has_fiscal_year(&fy) {
                return Err(Error::CycleOutsideYears {
                    token: token.clone(),
                    fy,
                });
            }
        }
        Ok(())
    }

    /// The taxonomy to report on.
    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy.clone().unwrap_or_default()
    }

    /// The custom field names to normalize from.
    pub fn field_names(&self) -> FieldNames {
        match &self.fields {
            Some(fields) => FieldNames {
                wbs: fields.wbs.clone(),
                effort: fields.effort.clone(),
            },
            None => FieldNames::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
