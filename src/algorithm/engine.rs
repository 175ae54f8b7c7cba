//! Scheduling run orchestration.
//!
//! # Algorithm
//! 1. Validate registrants and configuration, reporting every issue.
//! 2. Feasibility: total registrant play time against configured capacity.
//!    Fails before any scheduler is built.
//! 3. Build the day structure for the competition type.
//! 4. Order registrants by ascending skill level, keeping registration order
//!    within a level.
//! 5. Resolve each registrant's day (load-balancing "either") and place it.
//!    The first placement failure aborts the run.
//!
//! # Complexity
//! O(n log n) for ordering plus O(n × b × s) for placement, where n is the
//! number of registrants.

use tracing::{debug, info, warn};

use super::{Registrant, ResolutionContext};
use crate::config::CompetitionConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Day, DayPreference, StudentId};
use crate::scheduler::{Placement, ScheduleKpi, Scheduler};
use crate::validation::{validate_config, validate_registrants};

/// How one registrant was resolved and placed.
#[derive(Debug, Clone, PartialEq)]
pub struct DayResolution {
    pub student: StudentId,
    pub name: String,
    pub preference: DayPreference,
    pub placement: Placement,
}

impl DayResolution {
    /// The resolved day.
    pub fn day(&self) -> Day {
        self.placement.day
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// The populated scheduler.
    pub scheduler: Scheduler,
    /// Resolutions in processing order (level, then registration).
    pub resolutions: Vec<DayResolution>,
    /// Final day-resolution state.
    pub context: ResolutionContext,
}

impl ScheduleOutcome {
    /// Utilization metrics of the finished schedule.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.scheduler)
    }
}

/// Drives one scheduling run for a competition configuration.
///
/// # Example
///
/// ```
/// use festival_schedule::algorithm::{Registrant, SchedulingAlgorithm};
/// use festival_schedule::config::{DayConfig, RegularConfig};
/// use festival_schedule::models::Day;
///
/// let config = RegularConfig::new(60)
///     .with_saturday(DayConfig::new(2, 2))
///     .with_sunday(DayConfig::new(2, 2));
///
/// let registrants = vec![
///     Registrant::new("Clara", "Wieck")
///         .with_level(5)
///         .with_play_time(12)
///         .with_available_days("Saturday"),
///     Registrant::new("Robert", "Schumann")
///         .with_level(4)
///         .with_play_time(9),
/// ];
///
/// let outcome = SchedulingAlgorithm::new(config.into()).run(&registrants).unwrap();
/// assert_eq!(outcome.scheduler.student_count(), 2);
/// // "Either" with Saturday already requested goes to Sunday
/// assert_eq!(outcome.resolutions[0].day(), Day::Sunday);
/// ```
#[derive(Debug, Clone)]
pub struct SchedulingAlgorithm {
    config: CompetitionConfig,
}

impl SchedulingAlgorithm {
    pub fn new(config: CompetitionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompetitionConfig {
        &self.config
    }

    /// Runs validation, feasibility, construction and placement.
    ///
    /// # Errors
    /// - `InvalidInput` if registrants or configuration fail validation.
    /// - `InfeasibleCapacity` if demand exceeds capacity.
    /// - `MasterSectionsExhausted` if master classes cannot be reserved.
    /// - `PlacementFailure` on the first registrant no section accepts.
    pub fn run(&self, registrants: &[Registrant]) -> Result<ScheduleOutcome> {
        self.validate(registrants)?;
        let required = check_feasibility(registrants, &self.config)?;
        info!(
            registrants = registrants.len(),
            required,
            available = self.config.available_capacity(),
            "capacity check passed"
        );

        let mut scheduler = Scheduler::new(self.config.competition_type());
        match &self.config {
            CompetitionConfig::Regular(config) => scheduler.build_regular(config)?,
            CompetitionConfig::Command(config) => scheduler.build_command(config)?,
        }

        let mut context = ResolutionContext::from_registrants(registrants);
        let mut resolutions = Vec::with_capacity(registrants.len());

        for registrant in by_level(registrants) {
            let day = match self.config {
                CompetitionConfig::Regular(_) => context.resolve(
                    registrant.day_preference,
                    registrant.total_play_time,
                ),
                CompetitionConfig::Command(_) => Day::CommandPerformance,
            };

            let student = registrant.to_student(day);
            let id = student.id;
            let name = student.full_name();
            debug!(%name, level = student.skill_level, %day, "scheduling registrant");

            let placement = scheduler.schedule(student)?;
            resolutions.push(DayResolution {
                student: id,
                name,
                preference: registrant.day_preference,
                placement,
            });
        }

        info!(
            students = resolutions.len(),
            either_saturday = context.either_saturday,
            either_sunday = context.either_sunday,
            "placement finished"
        );
        Ok(ScheduleOutcome {
            scheduler,
            resolutions,
            context,
        })
    }

    fn validate(&self, registrants: &[Registrant]) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(e) = validate_config(&self.config) {
            errors.extend(e);
        }
        if let Err(e) = validate_registrants(registrants) {
            errors.extend(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            warn!(count = errors.len(), "input failed validation");
            Err(ScheduleError::InvalidInput(errors))
        }
    }
}

/// Compares total registrant play time with configured capacity.
///
/// Returns the required play time when it fits.
///
/// # Errors
/// `InfeasibleCapacity` when required exceeds available.
pub fn check_feasibility(registrants: &[Registrant], config: &CompetitionConfig) -> Result<u64> {
    let required: u64 = registrants
        .iter()
        .map(|r| u64::from(r.total_play_time))
        .sum();
    let available = config.available_capacity();
    if required > available {
        warn!(required, available, "registrant demand exceeds capacity");
        return Err(ScheduleError::InfeasibleCapacity {
            required,
            available,
        });
    }
    Ok(required)
}

/// Registrants in ascending level, stable within a level.
fn by_level(registrants: &[Registrant]) -> Vec<&Registrant> {
    let mut ordered: Vec<&Registrant> = registrants.iter().collect();
    ordered.sort_by_key(|r| r.skill_level);
    ordered
}
