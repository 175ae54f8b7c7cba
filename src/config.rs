//! Chairman-supplied competition configuration.
//!
//! Loaded from TOML. A regular competition:
//!
//! ```toml
//! type = "regular"
//! time_block_duration = 45
//! song_threshold = 2
//! group_by_level = true
//! master_instructor_duration = 15
//!
//! [saturday]
//! time_blocks = 8
//! concurrent_sections = 4
//! master_sections = 2
//! start_time = "09:00:00"
//! rooms = ["Recital Hall", "Room 101"]
//!
//! [sunday]
//! time_blocks = 6
//! concurrent_sections = 3
//! ```
//!
//! A command performance needs only `type = "command"`, `time_blocks` and
//! `time_block_duration`.

use std::path::Path;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{performance_budget, upper_half_start, Day, LevelGrouping, SectionRules};
use crate::scheduler::CompetitionType;

/// Share of a time block reserved for performance, in percent.
pub const DEFAULT_PLAY_TIME_PERCENT: u32 = 80;

fn default_play_time_percent() -> u32 {
    DEFAULT_PLAY_TIME_PERCENT
}

/// Configuration for either competition type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompetitionConfig {
    Regular(RegularConfig),
    Command(CommandConfig),
}

impl CompetitionConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn competition_type(&self) -> CompetitionType {
        match self {
            CompetitionConfig::Regular(_) => CompetitionType::Regular,
            CompetitionConfig::Command(_) => CompetitionType::Command,
        }
    }

    /// Total performance minutes across every section of every day.
    pub fn available_capacity(&self) -> u64 {
        match self {
            CompetitionConfig::Regular(c) => c.available_capacity(),
            CompetitionConfig::Command(c) => c.available_capacity(),
        }
    }
}

impl From<RegularConfig> for CompetitionConfig {
    fn from(config: RegularConfig) -> Self {
        CompetitionConfig::Regular(config)
    }
}

impl From<CommandConfig> for CompetitionConfig {
    fn from(config: CommandConfig) -> Self {
        CompetitionConfig::Command(config)
    }
}

/// Layout of one competition day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayConfig {
    /// Number of time blocks.
    pub time_blocks: usize,
    /// Concurrent sections per block.
    pub concurrent_sections: usize,
    /// Sections to reserve for master class.
    #[serde(default)]
    pub master_sections: usize,
    /// Start of the first block.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Room label overrides by section index.
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl DayConfig {
    /// Creates a day of `time_blocks` × `concurrent_sections`.
    pub fn new(time_blocks: usize, concurrent_sections: usize) -> Self {
        Self {
            time_blocks,
            concurrent_sections,
            ..Default::default()
        }
    }

    /// Sets the number of master-class sections.
    pub fn with_master_sections(mut self, count: usize) -> Self {
        self.master_sections = count;
        self
    }

    /// Sets the first block's start time.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets room label overrides.
    pub fn with_rooms(mut self, rooms: Vec<String>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Start of block `index`, blocks running back to back.
    ///
    /// `None` without a start time or when the offset is out of range.
    pub fn block_start(&self, index: usize, duration: u32) -> Option<NaiveTime> {
        let start = self.start_time?;
        let minutes = i64::try_from(index).ok()?.checked_mul(i64::from(duration))?;
        Duration::try_minutes(minutes).map(|offset| start + offset)
    }

    /// Total number of sections.
    pub fn section_count(&self) -> usize {
        self.time_blocks * self.concurrent_sections
    }

    /// Sections eligible for master-class reservation.
    ///
    /// Upper half of the blocks × upper half of each block's sections.
    pub fn reservable_master_slots(&self) -> usize {
        let blocks = self.time_blocks - upper_half_start(self.time_blocks);
        let sections = self.concurrent_sections - upper_half_start(self.concurrent_sections);
        blocks * sections
    }

    /// Performance minutes for this day given a per-section budget.
    pub fn capacity(&self, budget: u32) -> u64 {
        self.section_count() as u64 * u64::from(budget)
    }
}

/// A two-day regular competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularConfig {
    /// Wall-clock length of each time block (minutes).
    pub time_block_duration: u32,
    #[serde(default)]
    pub saturday: DayConfig,
    #[serde(default)]
    pub sunday: DayConfig,
    /// Max repeats of one song per section. 0 = unlimited.
    #[serde(default)]
    pub song_threshold: u32,
    /// Chairman's yes/no "single level per section".
    #[serde(default)]
    pub group_by_level: bool,
    /// Explicit grouping mode; overrides `group_by_level`.
    #[serde(default)]
    pub level_grouping: Option<LevelGrouping>,
    /// Instructor minutes per master-class student.
    #[serde(default)]
    pub master_instructor_duration: u32,
    #[serde(default = "default_play_time_percent")]
    pub play_time_percent: u32,
}

impl RegularConfig {
    /// Creates a configuration with empty days.
    pub fn new(time_block_duration: u32) -> Self {
        Self {
            time_block_duration,
            saturday: DayConfig::default(),
            sunday: DayConfig::default(),
            song_threshold: 0,
            group_by_level: false,
            level_grouping: None,
            master_instructor_duration: 0,
            play_time_percent: DEFAULT_PLAY_TIME_PERCENT,
        }
    }

    pub fn with_saturday(mut self, day: DayConfig) -> Self {
        self.saturday = day;
        self
    }

    pub fn with_sunday(mut self, day: DayConfig) -> Self {
        self.sunday = day;
        self
    }

    /// Sets the song-repetition threshold.
    pub fn with_song_threshold(mut self, threshold: u32) -> Self {
        self.song_threshold = threshold;
        self
    }

    /// Sets the yes/no level grouping flag.
    pub fn with_group_by_level(mut self, group_by_level: bool) -> Self {
        self.group_by_level = group_by_level;
        self
    }

    /// Sets an explicit grouping mode.
    pub fn with_level_grouping(mut self, grouping: LevelGrouping) -> Self {
        self.level_grouping = Some(grouping);
        self
    }

    /// Sets the instructor minutes per master-class student.
    pub fn with_master_instructor_duration(mut self, minutes: u32) -> Self {
        self.master_instructor_duration = minutes;
        self
    }

    /// Sets the performance share of each block.
    pub fn with_play_time_percent(mut self, percent: u32) -> Self {
        self.play_time_percent = percent;
        self
    }

    /// Effective grouping mode.
    pub fn level_grouping(&self) -> LevelGrouping {
        self.level_grouping
            .unwrap_or_else(|| LevelGrouping::from_group_by_level(self.group_by_level))
    }

    /// Rules applied to every ordinary section.
    pub fn section_rules(&self) -> SectionRules {
        SectionRules::new()
            .with_song_threshold(self.song_threshold)
            .with_level_grouping(self.level_grouping())
    }

    /// Performance minutes per section.
    pub fn section_budget(&self) -> u32 {
        performance_budget(self.time_block_duration, self.play_time_percent)
    }

    /// Layout of `day`, if this competition holds it.
    pub fn day(&self, day: Day) -> Option<&DayConfig> {
        match day {
            Day::Saturday => Some(&self.saturday),
            Day::Sunday => Some(&self.sunday),
            Day::CommandPerformance => None,
        }
    }

    pub fn available_capacity(&self) -> u64 {
        let budget = self.section_budget();
        self.saturday.capacity(budget) + self.sunday.capacity(budget)
    }
}

/// A single-day command performance: one section per block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub time_blocks: usize,
    /// Wall-clock length of each time block (minutes).
    pub time_block_duration: u32,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default = "default_play_time_percent")]
    pub play_time_percent: u32,
}

impl CommandConfig {
    pub fn new(time_blocks: usize, time_block_duration: u32) -> Self {
        Self {
            time_blocks,
            time_block_duration,
            start_time: None,
            play_time_percent: DEFAULT_PLAY_TIME_PERCENT,
        }
    }

    /// Sets the first block's start time.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the performance share of each block.
    pub fn with_play_time_percent(mut self, percent: u32) -> Self {
        self.play_time_percent = percent;
        self
    }

    /// The day layout: `time_blocks` × 1.
    pub fn day(&self) -> DayConfig {
        DayConfig {
            time_blocks: self.time_blocks,
            concurrent_sections: 1,
            master_sections: 0,
            start_time: self.start_time,
            rooms: Vec::new(),
        }
    }

    /// Performance minutes per section.
    pub fn section_budget(&self) -> u32 {
        performance_budget(self.time_block_duration, self.play_time_percent)
    }

    pub fn available_capacity(&self) -> u64 {
        self.day().capacity(self.section_budget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGULAR: &str = r#"
        type = "regular"
        time_block_duration = 60
        song_threshold = 2
        group_by_level = true
        master_instructor_duration = 15

        [saturday]
        time_blocks = 4
        concurrent_sections = 3
        master_sections = 1
        start_time = "09:00:00"
        rooms = ["Recital Hall"]

        [sunday]
        time_blocks = 2
        concurrent_sections = 2
    "#;

    #[test]
    fn test_parse_regular() {
        let config = CompetitionConfig::from_toml_str(REGULAR).unwrap();
        assert_eq!(config.competition_type(), CompetitionType::Regular);

        let CompetitionConfig::Regular(c) = config else {
            panic!("expected regular config");
        };
        assert_eq!(c.time_block_duration, 60);
        assert_eq!(c.play_time_percent, DEFAULT_PLAY_TIME_PERCENT);
        assert_eq!(c.level_grouping(), LevelGrouping::Strict);
        assert_eq!(c.saturday.master_sections, 1);
        assert_eq!(c.saturday.rooms, vec!["Recital Hall".to_string()]);
        assert_eq!(c.sunday.master_sections, 0);
        assert!(c.sunday.start_time.is_none());
    }

    #[test]
    fn test_parse_command() {
        let config = CompetitionConfig::from_toml_str(
            r#"
            type = "command"
            time_blocks = 5
            time_block_duration = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.competition_type(), CompetitionType::Command);
        // 5 blocks × 1 section × 24 min
        assert_eq!(config.available_capacity(), 120);
    }

    #[test]
    fn test_parse_error() {
        let err = CompetitionConfig::from_toml_str("type = \"weekly\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CompetitionConfig::load("/nonexistent/festival.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_available_capacity() {
        let c = RegularConfig::new(60)
            .with_saturday(DayConfig::new(2, 2))
            .with_sunday(DayConfig::new(1, 3));
        // budget 48; (4 + 3) sections
        assert_eq!(c.section_budget(), 48);
        assert_eq!(c.available_capacity(), 7 * 48);
    }

    #[test]
    fn test_explicit_grouping_overrides_flag() {
        let c = RegularConfig::new(60)
            .with_group_by_level(true)
            .with_level_grouping(LevelGrouping::Unrestricted);
        assert_eq!(c.level_grouping(), LevelGrouping::Unrestricted);
        assert_eq!(c.section_rules().level_grouping, LevelGrouping::Unrestricted);
    }

    #[test]
    fn test_block_start_times() {
        let day = DayConfig::new(3, 2).with_start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(day.block_start(0, 45), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(day.block_start(2, 45), NaiveTime::from_hms_opt(10, 30, 0));
        assert_eq!(DayConfig::new(1, 1).block_start(0, 45), None);
    }

    #[test]
    fn test_block_start_out_of_range() {
        let day = DayConfig::new(1, 1).with_start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(day.block_start(usize::MAX, 45), None);
        assert_eq!(day.block_start(1 << 62, u32::MAX), None);
    }

    #[test]
    fn test_reservable_master_slots() {
        assert_eq!(DayConfig::new(4, 4).reservable_master_slots(), 4);
        // blocks 3..5, section 2
        assert_eq!(DayConfig::new(5, 3).reservable_master_slots(), 2);
        assert_eq!(DayConfig::new(3, 4).reservable_master_slots(), 2);
        assert_eq!(DayConfig::new(1, 1).reservable_master_slots(), 1);
        assert_eq!(DayConfig::new(0, 4).reservable_master_slots(), 0);
    }
}
