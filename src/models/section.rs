//! Section model.
//!
//! A section is the atomic scheduling unit: one room, one judging panel,
//! a time budget, and the students who perform in it.
//!
//! # Capacity
//! Only a fraction of a time block's wall-clock duration is reservable for
//! performance (80% by default); the rest is judging and transition
//! overhead. See [`performance_budget`].
//!
//! # Acceptance
//! An ordinary section accepts a student iff all hold:
//! 1. remaining budget ≥ the student's play time,
//! 2. the level-grouping policy admits the student's level,
//! 3. none of the student's songs would pass the repetition threshold.
//!
//! A master-class section accepts only master-class students, charges each
//! the fixed instructor duration, and ignores the song and level rules.

use std::collections::HashMap;

use super::{Rejection, SectionRules, Student};

/// Performance minutes available in a block of `duration` minutes.
///
/// `floor(duration × play_time_percent / 100)`.
pub fn performance_budget(duration: u32, play_time_percent: u32) -> u32 {
    (u64::from(duration) * u64::from(play_time_percent) / 100) as u32
}

/// A single concurrent section within a time block.
#[derive(Debug, Clone)]
pub struct Section {
    budget: u32,
    remaining: u32,
    rules: SectionRules,
    /// Per-student instructor minutes once reserved as master class.
    master_duration: Option<u32>,
    level_range: Option<(u8, u8)>,
    song_counts: HashMap<String, u32>,
    students: Vec<Student>,
    /// Assigned judges.
    pub judges: Vec<String>,
    /// Assigned proctors.
    pub proctors: Vec<String>,
}

impl Section {
    /// Creates an empty ordinary section with the given performance budget.
    pub fn new(budget: u32, rules: SectionRules) -> Self {
        Self {
            budget,
            remaining: budget,
            rules,
            master_duration: None,
            level_range: None,
            song_counts: HashMap::new(),
            students: Vec::new(),
            judges: Vec::new(),
            proctors: Vec::new(),
        }
    }

    /// Total performance budget (minutes).
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Unconsumed budget (minutes).
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consumed budget (minutes).
    pub fn used(&self) -> u32 {
        self.budget - self.remaining
    }

    pub fn rules(&self) -> &SectionRules {
        &self.rules
    }

    /// Whether this section was reserved for master class.
    pub fn is_master(&self) -> bool {
        self.master_duration.is_some()
    }

    /// Instructor minutes charged per master-class student.
    pub fn master_duration(&self) -> Option<u32> {
        self.master_duration
    }

    /// `(min, max)` level over students accepted so far.
    pub fn level_range(&self) -> Option<(u8, u8)> {
        self.level_range
    }

    /// How many accepted students play `song`.
    pub fn song_count(&self, song: &str) -> u32 {
        self.song_counts.get(song).copied().unwrap_or(0)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Minutes this section would charge for `student`.
    pub fn charge_for(&self, student: &Student) -> u32 {
        self.master_duration.unwrap_or(student.play_time)
    }

    /// Checks every acceptance rule without mutating.
    pub fn check(&self, student: &Student) -> Result<(), Rejection> {
        if self.is_master() != student.is_master() {
            return Err(if self.is_master() {
                Rejection::MasterClassOnly
            } else {
                Rejection::OrdinaryOnly
            });
        }

        let required = self.charge_for(student);
        if self.remaining < required {
            return Err(Rejection::InsufficientTime {
                remaining: self.remaining,
                required,
            });
        }

        if self.is_master() {
            return Ok(());
        }

        if !self
            .rules
            .level_grouping
            .permits(self.level_range, student.skill_level)
        {
            // permits() only fails on a non-empty section
            let range = self.level_range.unwrap_or((student.skill_level, student.skill_level));
            return Err(Rejection::LevelMismatch {
                level: student.skill_level,
                range,
            });
        }

        if let Some(song) = self.rules.blocked_song(&self.song_counts, &student.songs) {
            return Err(Rejection::SongThreshold {
                song: song.to_string(),
            });
        }

        Ok(())
    }

    /// Whether [`Section::accept`] would succeed.
    pub fn can_accept(&self, student: &Student) -> bool {
        self.check(student).is_ok()
    }

    /// Accepts the student, or hands it back untouched.
    ///
    /// On success the budget, level range and song counts are updated.
    pub fn accept(&mut self, student: Student) -> Result<(), Student> {
        if let Err(reason) = self.check(&student) {
            tracing::trace!(student = %student.id, ?reason, "section rejected student");
            return Err(student);
        }

        self.remaining -= self.charge_for(&student);
        if !self.is_master() {
            let level = student.skill_level;
            self.level_range = Some(match self.level_range {
                Some((min, max)) => (min.min(level), max.max(level)),
                None => (level, level),
            });
            for song in &student.songs {
                *self.song_counts.entry(song.clone()).or_insert(0) += 1;
            }
        }
        self.students.push(student);
        Ok(())
    }

    /// Converts an empty ordinary section into a master-class section.
    ///
    /// Returns `false` if the section already holds students or is already
    /// master class.
    pub fn reserve_as_master(&mut self, instructor_duration: u32) -> bool {
        if self.is_master() || !self.is_empty() {
            return false;
        }
        self.master_duration = Some(instructor_duration);
        true
    }

    /// First accepted student matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students.iter().find(|s| predicate(s))
    }

    /// Overwrites the student list after a review edit.
    ///
    /// Budget, level range and song counts keep the values from the
    /// original placement pass.
    pub(crate) fn replace_students(&mut self, students: Vec<Student>) {
        self.students = students;
    }
}
