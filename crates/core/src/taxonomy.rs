// SPDX-License-Identifier: MIT

//! Fixed enumerations the grid is keyed by: WBS rows, fiscal years, and
//! cycle tokens.
//!
//! These are data rather than logic, so they can be overridden from
//! configuration, but classification only ever does membership lookups
//! against them -- there is no pattern matching on unknown tokens.

use serde::{Deserialize, Serialize};

/// One row of the report: a WBS code plus its human-readable title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbsRow {
    /// Work-breakdown-structure code, e.g. "02C.06.02.03".
    pub code: String,
    /// Display title, e.g. "Query Services".
    pub title: String,
}

/// The enumerated sets that define the report grid.
///
/// Order is significant everywhere: rows and columns render in the order
/// listed here, and the grid pre-initializes one cell per (code, year) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Grid rows, in render order.
    pub wbs: Vec<WbsRow>,
    /// Grid columns ("FY14".."FY20"), in render order.
    pub fiscal_years: Vec<String>,
    /// Recognized 3-character cycle tokens (period letter + 2-digit year).
    pub cycles: Vec<String>,
}

impl Taxonomy {
    /// True if `code` is one of the enumerated WBS codes.
    pub fn has_wbs(&self, code: &str) -> bool {
        self.wbs.iter().any(|row| row.code == code)
    }

    /// True if `token` is one of the enumerated fiscal years.
    pub fn has_fiscal_year(&self, token: &str) -> bool {
        self.fiscal_years.iter().any(|fy| fy == token)
    }

    /// True if `token` is one of the enumerated cycle tokens.
    pub fn has_cycle(&self, token: &str) -> bool {
        self.cycles.iter().any(|c| c == token)
    }

    /// Synthesize the fiscal year for a cycle token: "W16" -> "FY16".
    ///
    /// Everything after the single-letter period marker is taken verbatim.
    pub fn fiscal_year_of_cycle(token: &str) -> String {
        format!("FY{}", token.get(1..).unwrap_or_default())
    }
}

impl Default for Taxonomy {
    /// The historical Data Access and Database breakdown this report was
    /// built for.
    fn default() -> Self {
        let wbs = [
            ("02C.06.00", "Data Access and Database"),
            ("02C.06.01.01", "Catalogs, Alerts and Metadata"),
            ("02C.06.01.02", "Image and File Archive"),
            ("02C.06.02.01", "Data Access Client Framework"),
            ("02C.06.02.02", "Web Services"),
            ("02C.06.02.03", "Query Services"),
            ("02C.06.02.04", "Image and File Services"),
            ("02C.06.02.05", "Catalog Services"),
        ]
        .into_iter()
        .map(|(code, title)| WbsRow {
            code: code.to_string(),
            title: title.to_string(),
        })
        .collect();

        let fiscal_years = ["FY14", "FY15", "FY16", "FY17", "FY18", "FY19", "FY20"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let cycles = [
            "W14", "S14", "W15", "S15", "W16", "X16", "F16", "S17", "F17", "F18", "S18",
            "F19", "S19", "F20", "S20",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Taxonomy {
            wbs,
            fiscal_years,
            cycles,
        }
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
