//! Competition domain models.
//!
//! Leaf-to-root building blocks of a competition schedule.
//!
//! | Type | Role |
//! |------|------|
//! | `Student` | One performer with a resolved day |
//! | `Section` | Capacity-bounded set of students in one room |
//! | `TimeBlock` | Concurrent sections sharing a start time |
//! | `SectionRules` | Song-repetition and level-grouping policy |

mod rules;
mod section;
mod student;
mod time_block;

pub use rules::{LevelGrouping, Rejection, SectionRules};
pub use section::{performance_budget, Section};
pub use student::{
    Classification, Day, DayPreference, Student, StudentId, StudentKey, StudentLookup, HIGH_LEVEL,
    LOW_LEVEL, MAX_SONGS,
};
pub use time_block::{upper_half_start, TimeBlock};
