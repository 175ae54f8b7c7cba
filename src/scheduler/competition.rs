//! Competition scheduler.
//!
//! Owns the day → time block → section tree of one competition.
//!
//! # Lifecycle
//! 1. `Scheduler::new(type)` creates an empty scheduler.
//! 2. `build_regular` or `build_command` (matching the type) lays out the
//!    blocks and sections exactly once. A regular build also reserves the
//!    requested master-class sections.
//! 3. `schedule` places students one at a time; staffing and review edits
//!    mutate section contents only.
//!
//! # Placement
//! A student goes to its resolved day. Blocks are scanned in construction
//! order and sections first-fit within each block. No backtracking.
//!
//! # Complexity
//! O(b × s) per student, where b = blocks on the day, s = sections per block.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{CommandConfig, DayConfig, RegularConfig};
use crate::error::{Result, ScheduleError};
use crate::models::{
    upper_half_start, Classification, Day, Section, SectionRules, Student, StudentLookup,
    TimeBlock,
};

/// Competition type, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    /// Saturday and Sunday, concurrent sections, optional master classes.
    Regular,
    /// A single day with one section per block.
    Command,
}

#[derive(Debug, Clone)]
enum Days {
    Regular {
        saturday: Vec<TimeBlock>,
        sunday: Vec<TimeBlock>,
    },
    Command {
        performance: Vec<TimeBlock>,
    },
}

/// Where a student was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub day: Day,
    pub block_index: usize,
    pub section_index: usize,
}

/// A section together with its position in the traversal.
#[derive(Debug, Clone, Copy)]
pub struct SectionRef<'a> {
    pub day: Day,
    pub block_index: usize,
    pub section_index: usize,
    pub block: &'a TimeBlock,
    pub section: &'a Section,
}

/// The competition scheduler.
///
/// # Example
///
/// ```
/// use festival_schedule::config::{DayConfig, RegularConfig};
/// use festival_schedule::models::{Day, Student};
/// use festival_schedule::scheduler::{CompetitionType, Scheduler};
///
/// let config = RegularConfig::new(60)
///     .with_saturday(DayConfig::new(2, 2))
///     .with_sunday(DayConfig::new(2, 2));
///
/// let mut scheduler = Scheduler::new(CompetitionType::Regular);
/// scheduler.build_regular(&config).unwrap();
///
/// let student = Student::new("Clara", "Wieck", Day::Sunday).with_play_time(10);
/// let placement = scheduler.schedule(student).unwrap();
/// assert_eq!(placement.day, Day::Sunday);
/// assert_eq!(placement.block_index, 0);
/// assert_eq!(placement.section_index, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    competition_type: CompetitionType,
    days: Option<Days>,
}

impl Scheduler {
    /// Creates an empty scheduler of the given type.
    pub fn new(competition_type: CompetitionType) -> Self {
        Self {
            competition_type,
            days: None,
        }
    }

    pub fn competition_type(&self) -> CompetitionType {
        self.competition_type
    }

    /// Whether the day structure has been built.
    pub fn is_built(&self) -> bool {
        self.days.is_some()
    }

    fn ensure_buildable(&self, expected: CompetitionType) -> Result<()> {
        if self.competition_type != expected {
            return Err(ScheduleError::ConfigurationMismatch {
                expected,
                found: self.competition_type,
            });
        }
        if self.is_built() {
            return Err(ScheduleError::AlreadyBuilt);
        }
        Ok(())
    }

    /// Lays out Saturday and Sunday and reserves master-class sections.
    ///
    /// Nothing is kept if any step fails.
    pub fn build_regular(&mut self, config: &RegularConfig) -> Result<()> {
        self.ensure_buildable(CompetitionType::Regular)?;

        let rules = config.section_rules();
        let budget = config.section_budget();
        let duration = config.time_block_duration;

        let mut saturday = build_day(Day::Saturday, &config.saturday, duration, budget, rules);
        reserve_master_sections(
            Day::Saturday,
            &mut saturday,
            config.saturday.master_sections,
            config.master_instructor_duration,
        )?;

        let mut sunday = build_day(Day::Sunday, &config.sunday, duration, budget, rules);
        reserve_master_sections(
            Day::Sunday,
            &mut sunday,
            config.sunday.master_sections,
            config.master_instructor_duration,
        )?;

        info!(
            saturday_blocks = saturday.len(),
            sunday_blocks = sunday.len(),
            budget,
            "built regular competition"
        );
        self.days = Some(Days::Regular { saturday, sunday });
        Ok(())
    }

    /// Lays out a command performance: one section per block, no master class.
    pub fn build_command(&mut self, config: &CommandConfig) -> Result<()> {
        self.ensure_buildable(CompetitionType::Command)?;

        let budget = config.section_budget();
        let performance = build_day(
            Day::CommandPerformance,
            &config.day(),
            config.time_block_duration,
            budget,
            SectionRules::new(),
        );

        info!(blocks = performance.len(), budget, "built command performance");
        self.days = Some(Days::Command { performance });
        Ok(())
    }

    /// Places a student on its resolved day.
    ///
    /// A command performance has no master-class sections, so master-class
    /// students are placed there as ordinary performers.
    ///
    /// # Errors
    /// - `NotBuilt` before a builder ran.
    /// - `DayNotScheduled` if the day is not part of this competition.
    /// - `PlacementFailure` if every block of the day rejects the student.
    pub fn schedule(&mut self, student: Student) -> Result<Placement> {
        let day = student.day;
        let mut student = student;
        if self.competition_type == CompetitionType::Command && student.is_master() {
            debug!(student = %student.id, "no master class at command performance");
            student.classification = Classification::Other;
        }
        let blocks = self.day_mut(day)?;

        for (block_index, block) in blocks.iter_mut().enumerate() {
            match block.place(student) {
                Ok(section_index) => {
                    let placement = Placement {
                        day,
                        block_index,
                        section_index,
                    };
                    debug!(?placement, "placed student");
                    return Ok(placement);
                }
                Err(rejected) => student = rejected,
            }
        }

        warn!(
            student = %student.full_name(),
            %day,
            play_time = student.play_time,
            "no section accepted student"
        );
        Err(ScheduleError::PlacementFailure {
            student: student.full_name(),
            day,
            play_time: student.play_time,
        })
    }

    /// Days in traversal order with their blocks. Empty before build.
    pub fn days(&self) -> Vec<(Day, &[TimeBlock])> {
        match &self.days {
            None => Vec::new(),
            Some(Days::Regular { saturday, sunday }) => vec![
                (Day::Saturday, saturday.as_slice()),
                (Day::Sunday, sunday.as_slice()),
            ],
            Some(Days::Command { performance }) => {
                vec![(Day::CommandPerformance, performance.as_slice())]
            }
        }
    }

    /// Blocks of one day.
    pub fn day(&self, day: Day) -> Option<&[TimeBlock]> {
        self.days()
            .into_iter()
            .find(|(d, _)| *d == day)
            .map(|(_, blocks)| blocks)
    }

    fn day_mut(&mut self, day: Day) -> Result<&mut Vec<TimeBlock>> {
        match (&mut self.days, day) {
            (None, _) => Err(ScheduleError::NotBuilt),
            (Some(Days::Regular { saturday, .. }), Day::Saturday) => Ok(saturday),
            (Some(Days::Regular { sunday, .. }), Day::Sunday) => Ok(sunday),
            (Some(Days::Command { performance }), Day::CommandPerformance) => Ok(performance),
            (Some(_), day) => Err(ScheduleError::DayNotScheduled { day }),
        }
    }

    /// Every section in day → block → section order.
    pub fn sections(&self) -> impl Iterator<Item = SectionRef<'_>> + '_ {
        self.days().into_iter().flat_map(|(day, blocks)| {
            blocks
                .iter()
                .enumerate()
                .flat_map(move |(block_index, block)| {
                    block
                        .sections()
                        .iter()
                        .enumerate()
                        .map(move |(section_index, section)| SectionRef {
                            day,
                            block_index,
                            section_index,
                            block,
                            section,
                        })
                })
        })
    }

    /// Mutable sections in the same order as [`Scheduler::sections`].
    pub(crate) fn sections_mut(&mut self) -> Vec<&mut Section> {
        let days: Vec<&mut Vec<TimeBlock>> = match &mut self.days {
            None => Vec::new(),
            Some(Days::Regular { saturday, sunday }) => vec![saturday, sunday],
            Some(Days::Command { performance }) => vec![performance],
        };
        days.into_iter()
            .flat_map(|blocks| blocks.iter_mut())
            .flat_map(|block| block.sections_mut().iter_mut())
            .collect()
    }

    /// Total number of sections.
    pub fn section_count(&self) -> usize {
        self.sections().count()
    }

    /// Total number of scheduled students.
    pub fn student_count(&self) -> usize {
        self.sections().map(|r| r.section.len()).sum()
    }

    /// Assigns `per_section` judges to every section, consuming the list in
    /// traversal order.
    ///
    /// Fails without assigning anyone if the list is too short.
    pub fn assign_judges(&mut self, judges: &[String], per_section: usize) -> Result<()> {
        if !self.is_built() {
            return Err(ScheduleError::NotBuilt);
        }
        let sections = self.sections_mut();
        let needed = sections.len() * per_section;
        if judges.len() < needed {
            warn!(needed, available = judges.len(), "not enough judges");
            return Err(ScheduleError::StaffingExhausted {
                role: "judge",
                needed,
                available: judges.len(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            section.judges = judges[i * per_section..(i + 1) * per_section].to_vec();
        }
        debug!(assigned = needed, "assigned judges");
        Ok(())
    }

    /// Assigns one proctor to every section in traversal order.
    ///
    /// Fails without assigning anyone if the list is too short.
    pub fn assign_proctors(&mut self, proctors: &[String]) -> Result<()> {
        if !self.is_built() {
            return Err(ScheduleError::NotBuilt);
        }
        let sections = self.sections_mut();
        if proctors.len() < sections.len() {
            warn!(needed = sections.len(), available = proctors.len(), "not enough proctors");
            return Err(ScheduleError::StaffingExhausted {
                role: "proctor",
                needed: sections.len(),
                available: proctors.len(),
            });
        }

        let assigned = sections.len();
        for (section, proctor) in sections.into_iter().zip(proctors) {
            section.proctors = vec![proctor.clone()];
        }
        debug!(assigned, "assigned proctors");
        Ok(())
    }

    /// First scheduled student matching `lookup`, depth-first.
    pub fn find_student(&self, lookup: &StudentLookup) -> Option<&Student> {
        self.sections()
            .find_map(|r| r.section.find(|s| lookup.matches(s)))
    }

    /// Where a student currently sits.
    pub fn placement_of(&self, lookup: &StudentLookup) -> Option<Placement> {
        self.sections()
            .find(|r| r.section.find(|s| lookup.matches(s)).is_some())
            .map(|r| Placement {
                day: r.day,
                block_index: r.block_index,
                section_index: r.section_index,
            })
    }

    /// Scheduled students registered by one teacher, in traversal order.
    pub fn students_by_teacher(&self, teacher_email: &str) -> Vec<&Student> {
        self.sections()
            .flat_map(|r| r.section.students().iter())
            .filter(|s| {
                s.teacher_email
                    .as_deref()
                    .is_some_and(|email| email.eq_ignore_ascii_case(teacher_email))
            })
            .collect()
    }
}

fn build_day(
    day: Day,
    layout: &DayConfig,
    duration: u32,
    budget: u32,
    rules: SectionRules,
) -> Vec<TimeBlock> {
    (0..layout.time_blocks)
        .map(|i| {
            let block = TimeBlock::new(
                day,
                layout.concurrent_sections,
                budget,
                rules,
                &layout.rooms,
            );
            match layout.block_start(i, duration) {
                Some(start) => block.with_start_time(start),
                None => block,
            }
        })
        .collect()
}

/// Reserves `requested` master-class sections on one day.
///
/// Each sweep visits the upper half of the blocks (see [`upper_half_start`])
/// from the last one down
/// and reserves at most one section per block. A sweep that reserves
/// nothing ends the loop with `MasterSectionsExhausted`.
fn reserve_master_sections(
    day: Day,
    blocks: &mut [TimeBlock],
    requested: usize,
    instructor_duration: u32,
) -> Result<()> {
    let first_eligible = upper_half_start(blocks.len());
    let mut reserved = 0;

    while reserved < requested {
        let before = reserved;
        for (offset, block) in blocks[first_eligible..].iter_mut().enumerate().rev() {
            if reserved == requested {
                break;
            }
            if let Some(section_index) = block.reserve_master_section(instructor_duration) {
                reserved += 1;
                debug!(
                    %day,
                    block_index = first_eligible + offset,
                    section_index,
                    "reserved master-class section"
                );
            }
        }
        if reserved == before {
            warn!(%day, requested, reserved, "ran out of master-class slots");
            return Err(ScheduleError::MasterSectionsExhausted {
                day,
                requested,
                reserved,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, LevelGrouping, StudentId};

    fn regular(sat: DayConfig, sun: DayConfig) -> Scheduler {
        let config = RegularConfig::new(60)
            .with_saturday(sat)
            .with_sunday(sun)
            .with_master_instructor_duration(12);
        let mut scheduler = Scheduler::new(CompetitionType::Regular);
        scheduler.build_regular(&config).unwrap();
        scheduler
    }

    fn student(name: &str, day: Day, play_time: u32) -> Student {
        Student::new(name, "Test", day).with_play_time(play_time)
    }

    fn names(n: usize, prefix: &str) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_build_regular_structure() {
        let s = regular(DayConfig::new(3, 2), DayConfig::new(2, 4));
        assert!(s.is_built());
        assert_eq!(s.day(Day::Saturday).unwrap().len(), 3);
        assert_eq!(s.day(Day::Sunday).unwrap().len(), 2);
        assert_eq!(s.day(Day::Sunday).unwrap()[0].section_count(), 4);
        assert!(s.day(Day::CommandPerformance).is_none());
        assert_eq!(s.section_count(), 3 * 2 + 2 * 4);
        assert!(s.sections().all(|r| r.section.budget() == 48));
    }

    #[test]
    fn test_build_command_structure() {
        let mut s = Scheduler::new(CompetitionType::Command);
        s.build_command(&CommandConfig::new(4, 30)).unwrap();
        let blocks = s.day(Day::CommandPerformance).unwrap();
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.section_count() == 1));
        assert_eq!(s.section_count(), 4);
    }

    #[test]
    fn test_builder_type_mismatch() {
        let mut s = Scheduler::new(CompetitionType::Command);
        let err = s.build_regular(&RegularConfig::new(60)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::ConfigurationMismatch {
                expected: CompetitionType::Regular,
                found: CompetitionType::Command
            }
        ));
        assert!(!s.is_built());

        let mut s = Scheduler::new(CompetitionType::Regular);
        let err = s.build_command(&CommandConfig::new(1, 30)).unwrap_err();
        assert!(matches!(err, ScheduleError::ConfigurationMismatch { .. }));
    }

    #[test]
    fn test_build_twice() {
        let mut s = regular(DayConfig::new(1, 1), DayConfig::new(1, 1));
        let err = s.build_regular(&RegularConfig::new(60)).unwrap_err();
        assert!(matches!(err, ScheduleError::AlreadyBuilt));
    }

    #[test]
    fn test_schedule_before_build() {
        let mut s = Scheduler::new(CompetitionType::Regular);
        let err = s.schedule(student("a", Day::Saturday, 5)).unwrap_err();
        assert!(matches!(err, ScheduleError::NotBuilt));
    }

    #[test]
    fn test_schedule_wrong_day() {
        let mut s = regular(DayConfig::new(1, 1), DayConfig::new(1, 1));
        let err = s
            .schedule(student("a", Day::CommandPerformance, 5))
            .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::DayNotScheduled {
                day: Day::CommandPerformance
            }
        ));
    }

    #[test]
    fn test_schedule_fills_blocks_in_order() {
        let mut s = regular(DayConfig::new(2, 2), DayConfig::new(1, 1));
        let placements: Vec<_> = (0..4)
            .map(|i| s.schedule(student(&format!("s{i}"), Day::Saturday, 30)).unwrap())
            .collect();
        let positions: Vec<_> = placements
            .iter()
            .map(|p| (p.block_index, p.section_index))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        let err = s.schedule(student("late", Day::Saturday, 30)).unwrap_err();
        assert!(matches!(err, ScheduleError::PlacementFailure { day: Day::Saturday, .. }));
        // Sunday still open
        assert!(s.schedule(student("sun", Day::Sunday, 30)).is_ok());
    }

    #[test]
    fn test_per_section_capacity_enforced() {
        // 2 × 2 on Saturday, 48 minutes each; 50 fits in aggregate but not anywhere
        let mut s = regular(DayConfig::new(2, 2), DayConfig::default());
        let err = s.schedule(student("long", Day::Saturday, 50)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::PlacementFailure {
                play_time: 50,
                ..
            }
        ));
        assert_eq!(s.student_count(), 0);
    }

    #[test]
    fn test_master_reservation_bias() {
        let s = regular(DayConfig::new(4, 4).with_master_sections(1), DayConfig::default());
        let masters: Vec<_> = s
            .sections()
            .filter(|r| r.section.is_master())
            .map(|r| (r.block_index, r.section_index))
            .collect();
        assert_eq!(masters, vec![(3, 3)]);
    }

    #[test]
    fn test_master_reservation_round_robin() {
        // one per eligible block per sweep, last block first
        let s = regular(DayConfig::new(4, 4).with_master_sections(3), DayConfig::default());
        let masters: Vec<_> = s
            .sections()
            .filter(|r| r.section.is_master())
            .map(|r| (r.block_index, r.section_index))
            .collect();
        assert_eq!(masters, vec![(2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_master_reservation_exhausted() {
        let config = RegularConfig::new(60)
            .with_saturday(DayConfig::new(2, 2).with_master_sections(2))
            .with_master_instructor_duration(10);
        let mut s = Scheduler::new(CompetitionType::Regular);
        let err = s.build_regular(&config).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::MasterSectionsExhausted {
                day: Day::Saturday,
                requested: 2,
                reserved: 1
            }
        ));
        assert!(!s.is_built());
    }

    #[test]
    fn test_master_reservation_odd_blocks() {
        // blocks 0..3: only block 2 is past the midpoint
        let s = regular(DayConfig::new(3, 4).with_master_sections(2), DayConfig::default());
        let masters: Vec<_> = s
            .sections()
            .filter(|r| r.section.is_master())
            .map(|r| (r.block_index, r.section_index))
            .collect();
        assert_eq!(masters, vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn test_command_places_master_students() {
        let mut s = Scheduler::new(CompetitionType::Command);
        s.build_command(&CommandConfig::new(2, 30)).unwrap();
        let m = student("m", Day::CommandPerformance, 5)
            .with_classification(Classification::Master);
        let p = s.schedule(m).unwrap();
        assert_eq!((p.block_index, p.section_index), (0, 0));
        let placed = s.sections().next().unwrap().section.students()[0].clone();
        assert_eq!(placed.classification, Classification::Other);
    }

    #[test]
    fn test_default_grouping_tolerates_adjacent_levels_only() {
        let mut s = regular(DayConfig::new(1, 1), DayConfig::default());
        s.schedule(student("a", Day::Saturday, 5).with_level(1)).unwrap();
        s.schedule(student("b", Day::Saturday, 5).with_level(2)).unwrap();
        let err = s
            .schedule(student("c", Day::Saturday, 5).with_level(11))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::PlacementFailure { .. }));
        assert_eq!(s.student_count(), 2);
    }

    #[test]
    fn test_master_students_use_master_sections() {
        let mut s = regular(DayConfig::new(2, 2).with_master_sections(1), DayConfig::default());
        let m = student("m", Day::Saturday, 5).with_classification(Classification::Master);
        let p = s.schedule(m).unwrap();
        assert_eq!((p.block_index, p.section_index), (1, 1));

        // 48 / 12 = 4 master students fit
        for i in 0..3 {
            let m = student(&format!("m{i}"), Day::Saturday, 5)
                .with_classification(Classification::Master);
            s.schedule(m).unwrap();
        }
        let overflow = student("m4", Day::Saturday, 5).with_classification(Classification::Master);
        assert!(s.schedule(overflow).is_err());
    }

    #[test]
    fn test_strict_grouping_across_blocks() {
        let config = RegularConfig::new(60)
            .with_saturday(DayConfig::new(2, 1))
            .with_level_grouping(LevelGrouping::Strict);
        let mut s = Scheduler::new(CompetitionType::Regular);
        s.build_regular(&config).unwrap();

        s.schedule(student("a", Day::Saturday, 5).with_level(2)).unwrap();
        let p = s.schedule(student("b", Day::Saturday, 5).with_level(3)).unwrap();
        assert_eq!(p.block_index, 1);
        assert!(s.schedule(student("c", Day::Saturday, 5).with_level(4)).is_err());
    }

    #[test]
    fn test_start_times_and_rooms() {
        let start = chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let s = regular(
            DayConfig::new(2, 2)
                .with_start_time(start)
                .with_rooms(vec!["Hall".into()]),
            DayConfig::default(),
        );
        let blocks = s.day(Day::Saturday).unwrap();
        assert_eq!(blocks[1].start_time(), chrono::NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(blocks[1].room(0), Some("Hall"));
        assert_eq!(blocks[1].room(1), Some("2"));
    }

    #[test]
    fn test_assign_judges() {
        let mut s = regular(DayConfig::new(1, 2), DayConfig::new(1, 1));
        s.assign_judges(&names(6, "j"), 2).unwrap();
        let judges: Vec<_> = s.sections().map(|r| r.section.judges.clone()).collect();
        assert_eq!(
            judges,
            vec![
                vec!["j0".to_string(), "j1".to_string()],
                vec!["j2".to_string(), "j3".to_string()],
                vec!["j4".to_string(), "j5".to_string()],
            ]
        );
    }

    #[test]
    fn test_assign_judges_exhausted() {
        let mut s = regular(DayConfig::new(1, 2), DayConfig::new(1, 1));
        let err = s.assign_judges(&names(5, "j"), 2).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::StaffingExhausted {
                role: "judge",
                needed: 6,
                available: 5
            }
        ));
        assert!(s.sections().all(|r| r.section.judges.is_empty()));
    }

    #[test]
    fn test_assign_proctors() {
        let mut s = regular(DayConfig::new(1, 2), DayConfig::new(1, 1));
        assert!(matches!(
            s.assign_proctors(&names(2, "p")),
            Err(ScheduleError::StaffingExhausted { role: "proctor", .. })
        ));
        s.assign_proctors(&names(4, "p")).unwrap();
        let proctors: Vec<_> = s.sections().map(|r| r.section.proctors.clone()).collect();
        assert_eq!(
            proctors,
            vec![vec!["p0".to_string()], vec!["p1".to_string()], vec!["p2".to_string()]]
        );
    }

    #[test]
    fn test_staffing_before_build() {
        let mut s = Scheduler::new(CompetitionType::Regular);
        assert!(matches!(s.assign_proctors(&[]), Err(ScheduleError::NotBuilt)));
        assert!(matches!(s.assign_judges(&[], 1), Err(ScheduleError::NotBuilt)));
    }

    #[test]
    fn test_find_student() {
        let mut s = regular(DayConfig::new(1, 2), DayConfig::new(1, 1));
        let a = student("a", Day::Saturday, 40).with_level(3).with_song("x");
        let a_id = a.id;
        let a_key = a.key();
        s.schedule(a).unwrap();
        s.schedule(student("b", Day::Sunday, 10)).unwrap();

        assert_eq!(s.find_student(&StudentLookup::Id(a_id)).unwrap().first_name, "a");
        assert_eq!(s.find_student(&StudentLookup::Key(a_key)).unwrap().id, a_id);
        assert!(s.find_student(&StudentLookup::Id(StudentId::new())).is_none());

        let p = s.placement_of(&StudentLookup::Id(a_id)).unwrap();
        assert_eq!(p.day, Day::Saturday);
    }

    #[test]
    fn test_students_by_teacher() {
        let mut s = regular(DayConfig::new(1, 2), DayConfig::new(1, 1));
        s.schedule(student("a", Day::Saturday, 5).with_teacher_email("t@x.org"))
            .unwrap();
        s.schedule(student("b", Day::Sunday, 5).with_teacher_email("T@X.org"))
            .unwrap();
        s.schedule(student("c", Day::Saturday, 5).with_teacher_email("other@x.org"))
            .unwrap();
        s.schedule(student("d", Day::Saturday, 5)).unwrap();

        let found: Vec<_> = s
            .students_by_teacher("t@x.org")
            .into_iter()
            .map(|st| st.first_name.as_str())
            .collect();
        assert_eq!(found, vec!["a", "b"]);
    }
}
