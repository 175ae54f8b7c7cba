//! Day-resolution state for load-balancing "either" requests.

use tracing::debug;

use super::Registrant;
use crate::models::{Day, DayPreference};

/// Requested play time per day preference (minutes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTotals {
    pub saturday: u64,
    pub sunday: u64,
    pub either: u64,
}

impl DayTotals {
    /// Sums play time by preference over all registrants.
    pub fn from_registrants(registrants: &[Registrant]) -> Self {
        let mut totals = Self::default();
        for r in registrants {
            totals.add(r.day_preference, r.total_play_time);
        }
        totals
    }

    /// Adds one registrant's play time under its preference.
    pub fn add(&mut self, preference: DayPreference, play_time: u32) {
        let minutes = u64::from(play_time);
        match preference {
            DayPreference::Saturday => self.saturday += minutes,
            DayPreference::Sunday => self.sunday += minutes,
            DayPreference::Either => self.either += minutes,
        }
    }

    /// Total requested play time.
    pub fn total(&self) -> u64 {
        self.saturday + self.sunday + self.either
    }
}

/// Running state of a regular-competition day resolution.
///
/// Fixed-day requests form the baseline. Each "either" student is committed
/// to whichever day currently carries less play time, and the committed time
/// counts toward that day for every later decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    /// Requested totals computed before resolution starts.
    pub requested: DayTotals,
    /// "Either" play time committed to Saturday so far.
    pub either_saturday: u64,
    /// "Either" play time committed to Sunday so far.
    pub either_sunday: u64,
}

impl ResolutionContext {
    /// Creates a context from precomputed totals.
    pub fn new(requested: DayTotals) -> Self {
        Self {
            requested,
            ..Default::default()
        }
    }

    pub fn from_registrants(registrants: &[Registrant]) -> Self {
        Self::new(DayTotals::from_registrants(registrants))
    }

    /// Saturday baseline plus "either" time committed to Saturday.
    pub fn saturday_load(&self) -> u64 {
        self.requested.saturday + self.either_saturday
    }

    /// Sunday baseline plus "either" time committed to Sunday.
    pub fn sunday_load(&self) -> u64 {
        self.requested.sunday + self.either_sunday
    }

    /// "Either" play time not yet committed.
    pub fn either_pending(&self) -> u64 {
        self.requested
            .either
            .saturating_sub(self.either_saturday + self.either_sunday)
    }

    /// Resolves one preference to a concrete day.
    ///
    /// Fixed preferences pass through unchanged. "Either" goes to Saturday
    /// only when Saturday's load is strictly lower; ties go to Sunday.
    pub fn resolve(&mut self, preference: DayPreference, play_time: u32) -> Day {
        match preference {
            DayPreference::Saturday => Day::Saturday,
            DayPreference::Sunday => Day::Sunday,
            DayPreference::Either => {
                let (saturday, sunday) = (self.saturday_load(), self.sunday_load());
                let day = if saturday < sunday {
                    self.either_saturday += u64::from(play_time);
                    Day::Saturday
                } else {
                    self.either_sunday += u64::from(play_time);
                    Day::Sunday
                };
                debug!(%day, saturday, sunday, play_time, "resolved either request");
                day
            }
        }
    }
}
