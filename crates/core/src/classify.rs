// SPDX-License-Identifier: MIT

//! Epic classification: placing each normalized issue into a (WBS, fiscal
//! year) cell, the orphan list, or dropping it, in strict priority order.
//!
//! Three outcomes, evaluated first-match-wins:
//!
//! 1. direct match -- WBS enumerated and the summary starts with an
//!    enumerated 4-character fiscal-year token ("FY17 ...");
//! 2. cycle match -- WBS enumerated and the summary starts with an
//!    enumerated 3-character cycle token ("W16 ..."); the fiscal year is
//!    synthesized from the token's 2-digit year;
//! 3. orphan -- everything else, summary kept unmodified.

use std::fmt;

use crate::blockers::{resolve_blockers, BlockerEntry, StatusIndex};
use crate::grid::{EffortTotals, Grid};
use crate::record::IssueRecord;
use crate::taxonomy::Taxonomy;

/// Issues whose summary contains this marker are reporting noise and are
/// dropped unconditionally.
pub const NOISE_MARKER: &str = "KPM Measurement";

/// Status name that marks completed work.
pub const DONE_STATUS: &str = "Done";

/// Coarse period within a fiscal year, derived from a cycle token.
///
/// The variant order is the render order within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PeriodClass {
    /// Winter/Spring semantic period.
    A,
    /// Extra/Summer/Fall semantic period.
    B,
    /// No cycle qualifier (direct fiscal-year match, orphans, blockers).
    Unspecified,
}

impl PeriodClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodClass::A => "A",
            PeriodClass::B => "B",
            PeriodClass::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for PeriodClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a cycle token to its period class.
///
/// This table encodes the historical summer->fall / winter->spring naming
/// shift: all winter and spring cycles are A, extra and all summer/fall
/// cycles are B, except the first two spring cycles which predate the shift.
/// It is a lookup table, not a rule -- new tokens are classified by
/// extending it, never by pattern-guessing.
pub fn period_class_for(token: &str) -> PeriodClass {
    if token.starts_with('W') {
        return PeriodClass::A;
    }
    if token.starts_with('X') {
        return PeriodClass::B;
    }
    if token.starts_with('F') {
        return PeriodClass::B;
    }
    if token == "S14" || token == "S15" {
        return PeriodClass::B;
    }
    PeriodClass::A
}

/// An issue after classification, carrying derived fields for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEpic {
    pub key: String,
    /// Summary with the matched period-token prefix stripped; orphans keep
    /// the full original summary.
    pub summary: String,
    pub status: String,
    pub effort: u32,
    pub class: PeriodClass,
    /// Resolved fiscal year; None for orphans.
    pub fiscal_year: Option<String>,
    pub blocked_by: Vec<BlockerEntry>,
}

impl ClassifiedEpic {
    pub fn is_done(&self) -> bool {
        self.status == DONE_STATUS
    }
}

/// Flags controlling the classification pass.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    /// When false, issues with status "Done" are dropped before
    /// classification: no cell, no orphan, no effort contribution.
    pub show_done: bool,
    /// When false, blocking-link resolution is skipped entirely and every
    /// epic's blocker list is empty.
    pub show_blockers: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        ClassifyOptions {
            show_done: true,
            show_blockers: true,
        }
    }
}

/// The result of one classification pass.
#[derive(Debug)]
pub struct Classified {
    pub grid: Grid,
    pub orphans: Vec<ClassifiedEpic>,
    pub totals: EffortTotals,
}

/// Classify every record into the grid, the orphan list, or nothing.
///
/// Classified (non-orphan) effort accumulates into the per-fiscal-year
/// totals regardless of period class; orphans contribute nothing.
pub fn classify_all(
    records: &[IssueRecord],
    index: &StatusIndex,
    taxonomy: &Taxonomy,
    options: ClassifyOptions,
) -> Classified {
    let mut grid = Grid::new(taxonomy);
    let mut totals = EffortTotals::new(taxonomy);
    let mut orphans = Vec::new();

    for record in records {
        if record.status == DONE_STATUS && !options.show_done {
            continue;
        }
        if record.summary.contains(NOISE_MARKER) {
            continue;
        }

        let blocked_by = if options.show_blockers {
            resolve_blockers(record, index)
        } else {
            Vec::new()
        };

        let wbs_ok = record
            .wbs
            .as_deref()
            .is_some_and(|code| taxonomy.has_wbs(code));

        // Direct match: 4-character fiscal-year prefix.
        let fy_token = record
            .summary
            .get(..4)
            .filter(|tok| taxonomy.has_fiscal_year(tok));
        if let (true, Some(tok)) = (wbs_ok, fy_token) {
            let fy = tok.to_string();
            let epic = ClassifiedEpic {
                key: record.key.clone(),
                summary: record.summary[4..].to_string(),
                status: record.status.clone(),
                effort: record.effort,
                class: PeriodClass::Unspecified,
                fiscal_year: Some(fy.clone()),
                blocked_by,
            };
            place(&mut grid, &mut totals, &mut orphans, record, &fy, epic);
            continue;
        }

        // Cycle match: 3-character cycle prefix, fiscal year synthesized.
        let cycle_token = record.summary.get(..3).filter(|tok| taxonomy.has_cycle(tok));
        if let (true, Some(tok)) = (wbs_ok, cycle_token) {
            let fy = Taxonomy::fiscal_year_of_cycle(tok);
            let epic = ClassifiedEpic {
                key: record.key.clone(),
                summary: record.summary[3..].to_string(),
                status: record.status.clone(),
                effort: record.effort,
                class: period_class_for(tok),
                fiscal_year: Some(fy.clone()),
                blocked_by,
            };
            place(&mut grid, &mut totals, &mut orphans, record, &fy, epic);
            continue;
        }

        // Orphan: full original summary, no fiscal year, no period class.
        tracing::debug!(key = %record.key, "issue did not classify, keeping as orphan");
        orphans.push(ClassifiedEpic {
            key: record.key.clone(),
            summary: record.summary.clone(),
            status: record.status.clone(),
            effort: record.effort,
            class: PeriodClass::Unspecified,
            fiscal_year: None,
            blocked_by,
        });
    }

    Classified {
        grid,
        orphans,
        totals,
    }
}

/// Place a classified epic into its cell, or fall back to the orphan list
/// when the taxonomy maps the cycle to a year outside the grid.
fn place(
    grid: &mut Grid,
    totals: &mut EffortTotals,
    orphans: &mut Vec<ClassifiedEpic>,
    record: &IssueRecord,
    fy: &str,
    epic: ClassifiedEpic,
) {
    // record.wbs was checked against the taxonomy before we got here
    let wbs = record.wbs.as_deref().unwrap_or_default();
    match grid.push(wbs, fy, epic) {
        None => {
            totals.add(fy, record.effort);
            tracing::debug!(key = %record.key, wbs, fy, effort = record.effort, "classified");
        }
        Some(mut rejected) => {
            tracing::warn!(key = %record.key, fy, "no grid cell for fiscal year, keeping as orphan");
            rejected.summary = record.summary.clone();
            rejected.class = PeriodClass::Unspecified;
            rejected.fiscal_year = None;
            orphans.push(rejected);
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
