//! Competition scheduler and schedule metrics.
//!
//! # Algorithm
//!
//! `Scheduler` places students greedily: the student's resolved day, then
//! time blocks in construction order, then sections first-fit. It is not
//! optimal; some packings a global search would find are missed.
//!
//! # Review
//!
//! `export_for_review` / `apply_review_edits` round-trip staff and student
//! assignments through an external editor.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes section usage and time utilization.

mod competition;
mod kpi;
mod review;

pub use competition::{CompetitionType, Placement, Scheduler, SectionRef};
pub use kpi::ScheduleKpi;
pub use review::{SectionSummary, StudentEntry};
