//! Time block model.
//!
//! A time block is a slot of wall-clock time holding a fixed number of
//! concurrent sections. Placement is first-fit over the sections in index
//! order.

use chrono::NaiveTime;

use super::{Day, Section, SectionRules, Student};

/// First index of the upper half of `len` blocks or sections.
///
/// Indices at or past the real midpoint, `ceil(len / 2)`, held at `len - 1`
/// so a single block or section still has one eligible slot.
pub fn upper_half_start(len: usize) -> usize {
    len.div_ceil(2).min(len.saturating_sub(1))
}

/// A time slot with concurrent sections.
///
/// The section count is fixed at construction.
#[derive(Debug, Clone)]
pub struct TimeBlock {
    day: Day,
    start_time: Option<NaiveTime>,
    sections: Vec<Section>,
    rooms: Vec<String>,
}

impl TimeBlock {
    /// Creates a block of `section_count` empty sections.
    ///
    /// `rooms[k]` labels section `k`; missing or blank entries fall back to
    /// the 1-based section number.
    pub fn new(
        day: Day,
        section_count: usize,
        budget: u32,
        rules: SectionRules,
        rooms: &[String],
    ) -> Self {
        let sections = (0..section_count)
            .map(|_| Section::new(budget, rules))
            .collect();
        let rooms = (0..section_count)
            .map(|k| match rooms.get(k) {
                Some(room) if !room.trim().is_empty() => room.clone(),
                _ => (k + 1).to_string(),
            })
            .collect();
        Self {
            day,
            start_time: None,
            sections,
            rooms,
        }
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of concurrent sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Room label of section `index`.
    pub fn room(&self, index: usize) -> Option<&str> {
        self.rooms.get(index).map(String::as_str)
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// First index eligible for master-class reservation.
    fn master_start(&self) -> usize {
        upper_half_start(self.sections.len())
    }

    /// Places the student in the first section that accepts it.
    ///
    /// Returns the section index, or hands the student back if no section
    /// accepts. Rejecting sections are left untouched.
    pub fn place(&mut self, student: Student) -> Result<usize, Student> {
        let mut student = student;
        for (index, section) in self.sections.iter_mut().enumerate() {
            match section.accept(student) {
                Ok(()) => return Ok(index),
                Err(rejected) => student = rejected,
            }
        }
        Err(student)
    }

    /// Reserves one section of the upper half for master class.
    ///
    /// Scans indices from [`upper_half_start`] up, highest first, and
    /// returns the index reserved, or `None` if none is available.
    pub fn reserve_master_section(&mut self, instructor_duration: u32) -> Option<usize> {
        let start = self.master_start();
        (start..self.sections.len())
            .rev()
            .find(|&k| self.sections[k].reserve_as_master(instructor_duration))
    }

    /// Upper-half sections that could still be reserved.
    pub fn reservable_master_slots(&self) -> usize {
        self.sections[self.master_start()..]
            .iter()
            .filter(|s| !s.is_master() && s.is_empty())
            .count()
    }

    /// Number of master-class sections.
    pub fn master_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_master()).count()
    }
}
