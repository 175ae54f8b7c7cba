//! Section acceptance rules.
//!
//! Ordinary sections enforce two local rules on top of the time budget:
//! a song-repetition threshold and a level-grouping policy. Master-class
//! sections enforce neither.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Level-grouping policy for ordinary sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelGrouping {
    /// One skill level per section.
    Strict,
    /// Adjacent levels tolerated: levels in a section differ by at most one.
    Relaxed,
    /// No level restriction. Only selected explicitly.
    #[default]
    Unrestricted,
}

impl LevelGrouping {
    /// Maps the chairman's yes/no "group by level" answer.
    pub fn from_group_by_level(group_by_level: bool) -> Self {
        if group_by_level {
            Self::Strict
        } else {
            Self::Relaxed
        }
    }

    /// Whether `level` may join a section whose accepted levels span `range`.
    ///
    /// `range` is `(min, max)` over accepted students, `None` when empty.
    pub fn permits(&self, range: Option<(u8, u8)>, level: u8) -> bool {
        let Some((min, max)) = range else {
            return true;
        };
        match self {
            LevelGrouping::Strict => min == level && max == level,
            LevelGrouping::Relaxed => {
                let lo = min.min(level);
                let hi = max.max(level);
                hi - lo <= 1
            }
            LevelGrouping::Unrestricted => true,
        }
    }
}

/// Rules shared by every ordinary section of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionRules {
    /// Max occurrences of one song per section. 0 = unlimited.
    pub song_threshold: u32,
    /// Level-grouping policy.
    pub level_grouping: LevelGrouping,
}

impl SectionRules {
    /// Creates rules with no threshold and no level restriction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the song-repetition threshold.
    pub fn with_song_threshold(mut self, threshold: u32) -> Self {
        self.song_threshold = threshold;
        self
    }

    /// Sets the level-grouping policy.
    pub fn with_level_grouping(mut self, grouping: LevelGrouping) -> Self {
        self.level_grouping = grouping;
        self
    }

    /// Returns the first song that would pass the threshold, if any.
    ///
    /// A song listed twice by the same student counts twice.
    pub fn blocked_song<'a>(
        &self,
        counts: &HashMap<String, u32>,
        songs: &'a [String],
    ) -> Option<&'a str> {
        if self.song_threshold == 0 {
            return None;
        }
        songs
            .iter()
            .find(|song| {
                let existing = counts.get(song.as_str()).copied().unwrap_or(0);
                let own = songs.iter().filter(|s| s == song).count() as u32;
                existing + own > self.song_threshold
            })
            .map(String::as_str)
    }
}

/// Why a section turned a student away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Master-class section offered an ordinary student.
    MasterClassOnly,
    /// Ordinary section offered a master-class student.
    OrdinaryOnly,
    /// Not enough performance time left.
    InsufficientTime { remaining: u32, required: u32 },
    /// Level outside what the grouping policy allows.
    LevelMismatch { level: u8, range: (u8, u8) },
    /// A song would pass the repetition threshold.
    SongThreshold { song: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_grouping() {
        let g = LevelGrouping::Strict;
        assert!(g.permits(None, 4));
        assert!(g.permits(Some((4, 4)), 4));
        assert!(!g.permits(Some((4, 4)), 5));
    }

    #[test]
    fn test_relaxed_grouping() {
        let g = LevelGrouping::Relaxed;
        assert!(g.permits(Some((4, 4)), 5));
        assert!(g.permits(Some((4, 5)), 4));
        assert!(!g.permits(Some((4, 5)), 6));
        assert!(!g.permits(Some((4, 4)), 2));
    }

    #[test]
    fn test_unrestricted_grouping() {
        assert!(LevelGrouping::Unrestricted.permits(Some((1, 1)), 11));
        assert!(!LevelGrouping::Relaxed.permits(Some((1, 1)), 11));
    }

    #[test]
    fn test_group_by_level_mapping() {
        assert_eq!(LevelGrouping::from_group_by_level(true), LevelGrouping::Strict);
        assert_eq!(LevelGrouping::from_group_by_level(false), LevelGrouping::Relaxed);
    }

    #[test]
    fn test_song_threshold() {
        let rules = SectionRules::new().with_song_threshold(2);
        let mut counts = HashMap::new();
        counts.insert("minuet".to_string(), 2);
        counts.insert("gavotte".to_string(), 1);

        let songs = vec!["gavotte".to_string(), "minuet".to_string()];
        assert_eq!(rules.blocked_song(&counts, &songs), Some("minuet"));

        let songs = vec!["gavotte".to_string()];
        assert_eq!(rules.blocked_song(&counts, &songs), None);

        // same song twice from one student
        let songs = vec!["gavotte".to_string(), "gavotte".to_string()];
        assert_eq!(rules.blocked_song(&counts, &songs), Some("gavotte"));
    }

    #[test]
    fn test_zero_threshold_is_unlimited() {
        let rules = SectionRules::new();
        let mut counts = HashMap::new();
        counts.insert("minuet".to_string(), 50);
        let songs = vec!["minuet".to_string()];
        assert_eq!(rules.blocked_song(&counts, &songs), None);
    }
}
