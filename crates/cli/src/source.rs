// SPDX-License-Identifier: MIT

//! The query source: live fetch against the search endpoint, plus the
//! offline snapshot cache.
//!
//! Snapshots are the raw response bodies, written and read verbatim, so
//! offline runs see byte-for-byte what the live fetch saw. One blocking
//! request per data source, no retries; any transport or decode failure is
//! fatal for the whole run.

use std::fs;
use std::time::Duration;

use rdm_core::{MilestoneResult, SearchResult};

use crate::config::Config;
use crate::error::{Error, Result};

/// The two raw response bodies, in epic/milestone order.
#[derive(Debug, Clone)]
pub struct RawResults {
    pub epics: String,
    pub milestones: String,
}

impl RawResults {
    /// Decode both payloads. A structurally invalid payload is fatal.
    pub fn decode(&self) -> Result<(SearchResult, MilestoneResult)> {
        let epics = serde_json::from_str(&self.epics).map_err(Error::Payload)?;
        let milestones = serde_json::from_str(&self.milestones).map_err(Error::Payload)?;
        Ok((epics, milestones))
    }
}

/// Issue both queries against the configured search endpoint.
pub fn fetch_live(config: &Config) -> Result<RawResults> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let epics = run_query(&client, config, &config.epic_query)?;
    let milestones = run_query(&client, config, &config.milestone_query)?;
    Ok(RawResults { epics, milestones })
}

fn run_query(client: &reqwest::blocking::Client, config: &Config, query: &str) -> Result<String> {
    tracing::info!(url = %config.search_url, query, "running search query");
    let body = client
        .get(config.search_url.as_str())
        .query(&[
            ("maxResults", config.max_results.to_string().as_str()),
            ("jql", query),
        ])
        .send()?
        .error_for_status()?
        .text()?;
    Ok(body)
}

/// Read both snapshots back.
pub fn load_snapshots(config: &Config) -> Result<RawResults> {
    let epics = read_snapshot(&config.snapshots.epics)?;
    let milestones = read_snapshot(&config.snapshots.milestones)?;
    Ok(RawResults { epics, milestones })
}

fn read_snapshot(path: &std::path::Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::SnapshotNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Write both raw bodies to the configured snapshot paths.
pub fn dump_snapshots(config: &Config, results: &RawResults) -> Result<()> {
    fs::write(&config.snapshots.epics, &results.epics)?;
    fs::write(&config.snapshots.milestones, &results.milestones)?;
    tracing::info!(
        epics = %config.snapshots.epics.display(),
        milestones = %config.snapshots.milestones.display(),
        "snapshots written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
