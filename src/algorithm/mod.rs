//! Scheduling run: registrants in, populated scheduler out.
//!
//! # Components
//!
//! - **`Registrant`**: inbound record from the registration store
//! - **`ResolutionContext`**: load-balancing state for "either" day requests
//! - **`SchedulingAlgorithm`**: validation, feasibility, ordering and placement
//!
//! A run is a single synchronous pass. Any failure aborts it and no partial
//! schedule is returned.

mod context;
mod engine;
mod registrant;

pub use context::{DayTotals, ResolutionContext};
pub use engine::{check_feasibility, DayResolution, ScheduleOutcome, SchedulingAlgorithm};
pub use registrant::Registrant;
