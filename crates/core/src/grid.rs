// SPDX-License-Identifier: MIT

//! The WBS × fiscal-year matrix and the per-year effort totals.
//!
//! Every (WBS, fiscal-year) pair in the taxonomy exists as a cell from
//! construction on -- cells are never absent, only empty. The enumerated
//! sets are small (single digits per axis), so rows and cells are plain
//! vectors scanned linearly.

use crate::classify::ClassifiedEpic;
use crate::taxonomy::{Taxonomy, WbsRow};

/// One cell: the epics classified into a (WBS, fiscal-year) pair, in
/// arrival order.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub fiscal_year: String,
    pub epics: Vec<ClassifiedEpic>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.epics.is_empty()
    }

    /// Epics in render order: class A, then B, then Unspecified, relative
    /// arrival order preserved within each class.
    pub fn ordered(&self) -> Vec<&ClassifiedEpic> {
        let mut epics: Vec<&ClassifiedEpic> = self.epics.iter().collect();
        // Vec::sort_by_key is stable, which is what keeps arrival order
        epics.sort_by_key(|epic| epic.class);
        epics
    }
}

/// One row: a WBS entry plus one cell per fiscal year, in column order.
#[derive(Debug, Clone)]
pub struct GridRow {
    pub wbs: WbsRow,
    pub cells: Vec<GridCell>,
}

/// The full matrix, rows and columns in taxonomy order.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<GridRow>,
}

impl Grid {
    /// Build the matrix with every cell present and empty.
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let rows = taxonomy
            .wbs
            .iter()
            .map(|wbs| GridRow {
                wbs: wbs.clone(),
                cells: taxonomy
                    .fiscal_years
                    .iter()
                    .map(|fy| GridCell {
                        fiscal_year: fy.clone(),
                        epics: Vec::new(),
                    })
                    .collect(),
            })
            .collect();
        Grid { rows }
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn cell(&self, wbs: &str, fiscal_year: &str) -> Option<&GridCell> {
        self.rows
            .iter()
            .find(|row| row.wbs.code == wbs)?
            .cells
            .iter()
            .find(|cell| cell.fiscal_year == fiscal_year)
    }

    /// Append an epic to its cell in arrival order.
    ///
    /// Returns the epic back when no such cell exists, so the caller can
    /// route it elsewhere instead of losing it.
    pub fn push(
        &mut self,
        wbs: &str,
        fiscal_year: &str,
        epic: ClassifiedEpic,
    ) -> Option<ClassifiedEpic> {
        let Some(row) = self.rows.iter_mut().find(|row| row.wbs.code == wbs) else {
            return Some(epic);
        };
        let Some(cell) = row
            .cells
            .iter_mut()
            .find(|cell| cell.fiscal_year == fiscal_year)
        else {
            return Some(epic);
        };
        cell.epics.push(epic);
        None
    }
}

/// Accumulated effort per fiscal year, in column order, seeded to 0 for
/// every enumerated year.
#[derive(Debug, Clone)]
pub struct EffortTotals {
    totals: Vec<(String, u32)>,
}

impl EffortTotals {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let totals = taxonomy
            .fiscal_years
            .iter()
            .map(|fy| (fy.clone(), 0))
            .collect();
        EffortTotals { totals }
    }

    /// Add effort to a year's total. Unknown years are ignored; the
    /// classifier only calls this after a successful grid placement.
    pub fn add(&mut self, fiscal_year: &str, effort: u32) {
        if let Some(entry) = self.totals.iter_mut().find(|(fy, _)| fy == fiscal_year) {
            entry.1 += effort;
        }
    }

    pub fn get(&self, fiscal_year: &str) -> u32 {
        self.totals
            .iter()
            .find(|(fy, _)| fy == fiscal_year)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }

    /// (fiscal year, total) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.totals.iter().map(|(fy, total)| (fy.as_str(), *total))
    }

    /// Sum across all years.
    pub fn sum(&self) -> u32 {
        self.totals.iter().map(|(_, total)| total).sum()
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
