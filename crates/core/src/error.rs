// SPDX-License-Identifier: MIT

//! Error types for rdm-core operations.

use thiserror::Error;

/// All possible errors that can occur in rdm-core operations.
///
/// Only milestone collection can fail: milestones have no orphan path, so a
/// record that cannot be placed is a data-contract violation, not a skip.
#[derive(Debug, Error)]
pub enum Error {
    #[error("milestone {key} has no version label")]
    MissingVersionLabel { key: String },

    #[error("milestone {key} has unparsable version label '{label}'\n  hint: expected a letter followed by a 2-digit year, e.g. 'F17'")]
    BadVersionLabel { key: String, label: String },

    #[error("milestone {key} maps to fiscal year '{fy}' which is not in the configured range")]
    UnknownFiscalYear { key: String, fy: String },
}

/// A specialized Result type for rdm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
