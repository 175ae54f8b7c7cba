//! Error types for festival-schedule.
//!
//! Every variant of [`ScheduleError`] is terminal for a run: nothing is
//! retried internally and a failed run leaves no usable schedule. The
//! caller adjusts its configuration and starts over with a new scheduler.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Day;
use crate::scheduler::CompetitionType;
use crate::validation::ValidationError;

/// Scheduling error.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A builder was called on a scheduler of the other competition type.
    #[error("builder for {expected:?} competition called on a {found:?} scheduler")]
    ConfigurationMismatch {
        expected: CompetitionType,
        found: CompetitionType,
    },

    /// The day structure was already built.
    #[error("scheduler structure has already been built")]
    AlreadyBuilt,

    /// An operation needs the day structure, which has not been built.
    #[error("scheduler structure has not been built")]
    NotBuilt,

    /// Registrant demand exceeds configured capacity.
    #[error("registrants need {required} minutes of play time but only {available} are available")]
    InfeasibleCapacity { required: u64, available: u64 },

    /// No section on the student's day accepted the student.
    #[error("could not place {student} ({play_time} min) on {day}")]
    PlacementFailure {
        student: String,
        day: Day,
        play_time: u32,
    },

    /// The student's day is not part of this competition.
    #[error("{day} is not a day of this competition")]
    DayNotScheduled { day: Day },

    /// Not enough reservable sections for the requested master classes.
    #[error("{day}: requested {requested} master-class sections, reserved only {reserved}")]
    MasterSectionsExhausted {
        day: Day,
        requested: usize,
        reserved: usize,
    },

    /// Staff list too short to cover every section.
    #[error("{role} list too short: {needed} needed, {available} available")]
    StaffingExhausted {
        role: &'static str,
        needed: usize,
        available: usize,
    },

    /// Review edits do not line up with the schedule.
    #[error("review edits do not match schedule at position {position}: {message}")]
    ReconciliationMismatch { position: usize, message: String },

    /// Registrant or configuration data failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for ScheduleError.
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
