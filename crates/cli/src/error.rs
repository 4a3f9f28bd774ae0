// SPDX-License-Identifier: MIT

use thiserror::Error;

/// All possible errors that can occur in the rdmrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}\n  hint: pass --config or create rdm.toml in the working directory")]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("cycle token '{token}' maps to {fy}, which is not in fiscal_years\n  hint: every cycle's 2-digit year must have a matching FY column")]
    CycleOutsideYears { token: String, fy: String },

    #[error("query failed: {0}\n  hint: check the endpoint URL and network, or run with --offline")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed search payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("snapshot not found: {0}\n  hint: run once with --dump-snapshots to capture one")]
    SnapshotNotFound(String),

    #[error(transparent)]
    Core(#[from] rdm_core::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rdmrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
