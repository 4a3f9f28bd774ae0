// SPDX-License-Identifier: MIT

//! rdm-core: classification and bucketing for the roadmap report.
//!
//! This crate holds the pure logic of the report pipeline: normalizing raw
//! issue records, classifying each into a (WBS, fiscal-year) cell or the
//! orphan list, resolving blocking links, bucketing milestones, and
//! accumulating effort totals. It does no I/O -- fetching and rendering
//! live in the `rdm` CLI crate.

pub mod blockers;
pub mod classify;
pub mod error;
pub mod grid;
pub mod milestone;
pub mod record;
pub mod taxonomy;

pub use blockers::{resolve_blockers, BlockerEntry, StatusIndex};
pub use classify::{
    classify_all, period_class_for, Classified, ClassifiedEpic, ClassifyOptions, PeriodClass,
};
pub use error::{Error, Result};
pub use grid::{EffortTotals, Grid, GridCell, GridRow};
pub use milestone::{collect_milestones, MilestoneBuckets, MilestoneEntry, MilestoneResult};
pub use record::{FieldNames, IssueRecord, RawIssue, SearchResult};
pub use taxonomy::{Taxonomy, WbsRow};
