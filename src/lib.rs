//! Music festival competition scheduling.
//!
//! Allocates registered students into time-boxed performance sections for a
//! two-day regular competition or a single-day command performance.
//!
//! # Modules
//!
//! - **`models`**: `Student`, `Section`, `TimeBlock`, section rules
//! - **`scheduler`**: `Scheduler` (build, place, staff, look up), review
//!   export / re-import, utilization KPIs
//! - **`algorithm`**: `SchedulingAlgorithm`, which checks feasibility,
//!   resolves day preferences and drives placement
//! - **`config`**: competition layout loaded from TOML
//! - **`validation`**: registrant and configuration integrity checks
//!
//! # Architecture
//!
//! Placement is greedy and deterministic: registrants are taken in
//! ascending skill level, each goes to its resolved day, and the first
//! section with room that passes its rules takes it. Any student that
//! cannot be placed aborts the whole run.
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
