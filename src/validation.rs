//! Input validation for competition runs.
//!
//! Checks registrant records and competition configuration before any
//! capacity is computed. Detects:
//! - Skill levels outside the festival range
//! - Missing names and zero play times
//! - Duplicate registrant IDs
//! - Degenerate block layouts and play-time shares
//! - Master-class requests the day layout cannot hold

use std::collections::HashSet;
use thiserror::Error;

use crate::algorithm::Registrant;
use crate::config::{CompetitionConfig, DayConfig, RegularConfig};
use crate::models::{Day, HIGH_LEVEL, LOW_LEVEL};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Skill level outside `[LOW_LEVEL, HIGH_LEVEL]`.
    LevelOutOfRange,
    /// First or last name is blank.
    MissingName,
    /// A registrant with nothing to play.
    ZeroPlayTime,
    /// Two registrants share the same ID.
    DuplicateId,
    /// Time block duration is zero.
    InvalidDuration,
    /// Play-time share is 0 or above 100 percent.
    InvalidPlayTimePercent,
    /// A day has time blocks but no sections in them.
    MissingSections,
    /// More master-class sections than the day can reserve.
    MasterCapacity,
    /// Instructor duration is zero or exceeds a section budget.
    InvalidInstructorDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates registrant records.
///
/// Checks:
/// 1. Skill level within `[LOW_LEVEL, HIGH_LEVEL]`
/// 2. First and last name present
/// 3. Non-zero total play time
/// 4. No duplicate explicit IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_registrants(registrants: &[Registrant]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (i, r) in registrants.iter().enumerate() {
        let name = format!("{} {}", r.first_name, r.last_name);

        if !(LOW_LEVEL..=HIGH_LEVEL).contains(&r.skill_level) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelOutOfRange,
                format!(
                    "Registrant {i} ({}) has level {}, expected {LOW_LEVEL}..={HIGH_LEVEL}",
                    name.trim(),
                    r.skill_level
                ),
            ));
        }

        if r.first_name.trim().is_empty() || r.last_name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Registrant {i} is missing a first or last name"),
            ));
        }

        if r.total_play_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPlayTime,
                format!("Registrant {i} ({}) has no play time", name.trim()),
            ));
        }

        if let Some(id) = r.id {
            if !ids.insert(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate registrant ID: {id}"),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates a competition configuration.
///
/// Checks:
/// 1. Non-zero block duration
/// 2. Play-time percent in `1..=100`
/// 3. Every day with blocks has sections in them
/// 4. Master-class sections fit the reservable half of each day
/// 5. Instructor duration set and within a section budget when masters are requested
pub fn validate_config(config: &CompetitionConfig) -> ValidationResult {
    let mut errors = Vec::new();

    match config {
        CompetitionConfig::Regular(regular) => {
            check_block(
                regular.time_block_duration,
                regular.play_time_percent,
                &mut errors,
            );
            check_day(Day::Saturday, &regular.saturday, &mut errors);
            check_day(Day::Sunday, &regular.sunday, &mut errors);
            check_masters(regular, &mut errors);
        }
        CompetitionConfig::Command(command) => {
            check_block(
                command.time_block_duration,
                command.play_time_percent,
                &mut errors,
            );
            if command.time_blocks == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingSections,
                    "Command performance has no time blocks",
                ));
            }
        }
    }

    finish(errors)
}

fn check_block(duration: u32, percent: u32, errors: &mut Vec<ValidationError>) {
    if duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "Time block duration must be positive",
        ));
    }
    if percent == 0 || percent > 100 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPlayTimePercent,
            format!("Play-time percent {percent} outside 1..=100"),
        ));
    }
}

fn check_day(day: Day, layout: &DayConfig, errors: &mut Vec<ValidationError>) {
    if layout.time_blocks > 0 && layout.concurrent_sections == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingSections,
            format!("{day} has {} time blocks but no sections", layout.time_blocks),
        ));
    }

    let slots = layout.reservable_master_slots();
    if layout.master_sections > slots {
        errors.push(ValidationError::new(
            ValidationErrorKind::MasterCapacity,
            format!(
                "{day} requests {} master-class sections, only {slots} can be reserved",
                layout.master_sections
            ),
        ));
    }
}

fn check_masters(config: &RegularConfig, errors: &mut Vec<ValidationError>) {
    if config.saturday.master_sections + config.sunday.master_sections == 0 {
        return;
    }

    let duration = config.master_instructor_duration;
    let budget = config.section_budget();
    if duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInstructorDuration,
            "Master-class sections requested without an instructor duration",
        ));
    } else if duration > budget {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInstructorDuration,
            format!("Instructor duration {duration} exceeds section budget {budget}"),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
