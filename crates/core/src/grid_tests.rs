// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]

use super::*;
use crate::classify::{ClassifiedEpic, PeriodClass};

fn epic(key: &str, class: PeriodClass) -> ClassifiedEpic {
    ClassifiedEpic {
        key: key.to_string(),
        summary: format!("summary of {key}"),
        status: "To Do".to_string(),
        effort: 0,
        class,
        fiscal_year: None,
        blocked_by: Vec::new(),
    }
}

#[test]
fn every_cell_exists_from_construction() {
    let taxonomy = Taxonomy::default();
    let grid = Grid::new(&taxonomy);

    assert_eq!(grid.rows().len(), taxonomy.wbs.len());
    for wbs in &taxonomy.wbs {
        for fy in &taxonomy.fiscal_years {
            let cell = grid.cell(&wbs.code, fy);
            assert!(cell.is_some(), "missing cell ({}, {})", wbs.code, fy);
            assert!(cell.unwrap().is_empty());
        }
    }
}

#[test]
fn push_appends_in_arrival_order() {
    let mut grid = Grid::new(&Taxonomy::default());
    assert!(grid.push("02C.06.00", "FY15", epic("DM-1", PeriodClass::A)).is_none());
    assert!(grid.push("02C.06.00", "FY15", epic("DM-2", PeriodClass::A)).is_none());

    let cell = grid.cell("02C.06.00", "FY15").unwrap();
    assert_eq!(cell.epics[0].key, "DM-1");
    assert_eq!(cell.epics[1].key, "DM-2");
}

#[test]
fn push_returns_epic_for_unknown_cell() {
    let mut grid = Grid::new(&Taxonomy::default());
    assert!(grid.push("02C.99.00", "FY15", epic("DM-1", PeriodClass::A)).is_some());
    assert!(grid.push("02C.06.00", "FY99", epic("DM-2", PeriodClass::A)).is_some());
}

#[test]
fn ordered_sorts_by_class_stably() {
    let mut grid = Grid::new(&Taxonomy::default());
    for (key, class) in [
        ("DM-1", PeriodClass::Unspecified),
        ("DM-2", PeriodClass::B),
        ("DM-3", PeriodClass::A),
        ("DM-4", PeriodClass::B),
        ("DM-5", PeriodClass::A),
    ] {
        grid.push("02C.06.00", "FY15", epic(key, class));
    }

    let cell = grid.cell("02C.06.00", "FY15").unwrap();
    let keys: Vec<&str> = cell.ordered().iter().map(|e| e.key.as_str()).collect();
    // A's in arrival order, then B's in arrival order, then Unspecified
    assert_eq!(keys, ["DM-3", "DM-5", "DM-2", "DM-4", "DM-1"]);
}

#[test]
fn totals_seed_every_year_to_zero() {
    let taxonomy = Taxonomy::default();
    let totals = EffortTotals::new(&taxonomy);
    assert_eq!(totals.iter().count(), taxonomy.fiscal_years.len());
    assert!(totals.iter().all(|(_, total)| total == 0));
    assert_eq!(totals.sum(), 0);
}

#[test]
fn totals_accumulate_per_year() {
    let mut totals = EffortTotals::new(&Taxonomy::default());
    totals.add("FY16", 10);
    totals.add("FY16", 20);
    totals.add("FY14", 5);
    totals.add("FY99", 100); // ignored

    assert_eq!(totals.get("FY16"), 30);
    assert_eq!(totals.get("FY14"), 5);
    assert_eq!(totals.get("FY99"), 0);
    assert_eq!(totals.sum(), 35);
}

#[test]
fn totals_iterate_in_column_order() {
    let totals = EffortTotals::new(&Taxonomy::default());
    let years: Vec<&str> = totals.iter().map(|(fy, _)| fy).collect();
    assert_eq!(years[0], "FY14");
    assert_eq!(years[years.len() - 1], "FY20");
}
