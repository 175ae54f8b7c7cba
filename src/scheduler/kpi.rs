//! Schedule utilization metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Students scheduled | Students across all sections |
//! | Sections used | Sections holding at least one student |
//! | Capacity | Sum of section budgets (minutes) |
//! | Scheduled time | Sum of consumed budget (minutes) |
//! | Utilization | Scheduled time / capacity |

use std::collections::BTreeMap;

use super::Scheduler;
use crate::models::Day;

/// Schedule utilization summary.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    pub students_scheduled: usize,
    pub sections_total: usize,
    pub sections_used: usize,
    pub master_sections: usize,
    /// Performance minutes available (minutes).
    pub capacity_minutes: u64,
    /// Performance minutes consumed (minutes).
    pub scheduled_minutes: u64,
    /// Overall utilization (0.0..1.0).
    pub utilization: f64,
    /// Per-day utilization.
    pub utilization_by_day: BTreeMap<Day, f64>,
}

impl ScheduleKpi {
    /// Computes metrics over the current schedule.
    pub fn calculate(scheduler: &Scheduler) -> Self {
        let mut students_scheduled = 0;
        let mut sections_total = 0;
        let mut sections_used = 0;
        let mut master_sections = 0;
        let mut per_day: BTreeMap<Day, (u64, u64)> = BTreeMap::new();

        for r in scheduler.sections() {
            sections_total += 1;
            students_scheduled += r.section.len();
            if !r.section.is_empty() {
                sections_used += 1;
            }
            if r.section.is_master() {
                master_sections += 1;
            }
            let entry = per_day.entry(r.day).or_insert((0, 0));
            entry.0 += u64::from(r.section.budget());
            entry.1 += u64::from(r.section.used());
        }

        let capacity_minutes: u64 = per_day.values().map(|(c, _)| c).sum();
        let scheduled_minutes: u64 = per_day.values().map(|(_, u)| u).sum();
        let utilization_by_day = per_day
            .into_iter()
            .map(|(day, (capacity, used))| (day, ratio(used, capacity)))
            .collect();

        Self {
            students_scheduled,
            sections_total,
            sections_used,
            master_sections,
            capacity_minutes,
            scheduled_minutes,
            utilization: ratio(scheduled_minutes, capacity_minutes),
            utilization_by_day,
        }
    }

    /// Sections with no students.
    pub fn empty_sections(&self) -> usize {
        self.sections_total - self.sections_used
    }
}

fn ratio(used: u64, capacity: u64) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        used as f64 / capacity as f64
    }
}
