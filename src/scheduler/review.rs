//! Post-scheduling review round-trip.
//!
//! After placement the chairman edits staff and moves students around in an
//! external editor. The schedule is exported as one [`SectionSummary`] per
//! section in day → block → section order, and the edited list comes back
//! through [`Scheduler::apply_review_edits`].
//!
//! Edits are metadata only: budgets, level ranges and song counts keep the
//! values from the placement pass.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Scheduler;
use crate::error::{Result, ScheduleError};
use crate::models::{Day, Student, StudentId, StudentKey};

/// Editable view of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub day: Day,
    pub block_index: usize,
    pub section_index: usize,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub judges: Vec<String>,
    #[serde(default)]
    pub proctors: Vec<String>,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

/// A student as it appears in a review payload.
///
/// `id` is set on export. Entries without one are matched on name, level
/// and songs instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentEntry {
    #[serde(default)]
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub skill_level: u8,
    #[serde(default)]
    pub songs: Vec<String>,
    #[serde(default)]
    pub play_time: u32,
}

impl StudentEntry {
    fn key(&self) -> StudentKey {
        StudentKey {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            skill_level: self.skill_level,
            songs: self.songs.clone(),
        }
    }

    fn matches(&self, student: &Student) -> bool {
        match self.id {
            Some(id) => student.id == id,
            None => student.matches_key(&self.key()),
        }
    }

    fn label(&self) -> String {
        match self.id {
            Some(id) => format!("{} {} ({id})", self.first_name, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl From<&Student> for StudentEntry {
    fn from(student: &Student) -> Self {
        Self {
            id: Some(student.id),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            skill_level: student.skill_level,
            songs: student.songs.clone(),
            play_time: student.play_time,
        }
    }
}

impl Scheduler {
    /// Exports every section in traversal order.
    pub fn export_for_review(&self) -> Vec<SectionSummary> {
        self.sections()
            .map(|r| SectionSummary {
                day: r.day,
                block_index: r.block_index,
                section_index: r.section_index,
                start_time: r.block.start_time(),
                room: r.block.room(r.section_index).unwrap_or_default().to_string(),
                is_master: r.section.is_master(),
                judges: r.section.judges.clone(),
                proctors: r.section.proctors.clone(),
                students: r.section.students().iter().map(StudentEntry::from).collect(),
            })
            .collect()
    }

    /// Applies edited section summaries positionally.
    ///
    /// The payload must list every section exactly once in traversal order.
    /// Each student entry must resolve to a distinct scheduled student; a
    /// student left out of every section is dropped from the schedule.
    /// Nothing changes unless the whole payload checks out.
    pub fn apply_review_edits(&mut self, edits: Vec<SectionSummary>) -> Result<()> {
        if !self.is_built() {
            return Err(ScheduleError::NotBuilt);
        }

        let positions: Vec<(Day, usize, usize)> = self
            .sections()
            .map(|r| (r.day, r.block_index, r.section_index))
            .collect();
        if edits.len() != positions.len() {
            return Err(ScheduleError::ReconciliationMismatch {
                position: edits.len().min(positions.len()),
                message: format!(
                    "expected {} sections, got {}",
                    positions.len(),
                    edits.len()
                ),
            });
        }
        for (position, (edit, expected)) in edits.iter().zip(&positions).enumerate() {
            let found = (edit.day, edit.block_index, edit.section_index);
            if found != *expected {
                return Err(ScheduleError::ReconciliationMismatch {
                    position,
                    message: format!("expected section {expected:?}, got {found:?}"),
                });
            }
        }

        let scheduled: Vec<&Student> = self
            .sections()
            .flat_map(|r| r.section.students().iter())
            .collect();
        let mut taken: HashSet<StudentId> = HashSet::new();
        let mut resolved: Vec<Vec<Student>> = Vec::with_capacity(edits.len());

        for (position, edit) in edits.iter().enumerate() {
            let mut students = Vec::with_capacity(edit.students.len());
            for entry in &edit.students {
                let student = scheduled
                    .iter()
                    .find(|s| entry.matches(s) && !taken.contains(&s.id))
                    .ok_or_else(|| ScheduleError::ReconciliationMismatch {
                        position,
                        message: format!("unknown or repeated student {}", entry.label()),
                    })?;
                taken.insert(student.id);

                let mut student = (*student).clone();
                student.day = edit.day;
                students.push(student);
            }
            resolved.push(students);
        }

        let dropped = scheduled.len() - taken.len();
        if dropped > 0 {
            warn!(dropped, "review edits removed students from the schedule");
        }

        for ((section, edit), students) in self.sections_mut().into_iter().zip(edits).zip(resolved)
        {
            section.judges = edit.judges;
            section.proctors = edit.proctors;
            section.replace_students(students);
        }
        debug!(sections = positions.len(), "applied review edits");
        Ok(())
    }
}
