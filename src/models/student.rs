//! Student (competitor) model.
//!
//! A student is one registered performer after day resolution. It is built
//! once by the orchestration layer and then moved into the section that
//! accepts it; sections hand out shared references only.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest skill level a registrant may hold.
pub const LOW_LEVEL: u8 = 1;
/// Highest skill level a registrant may hold.
pub const HIGH_LEVEL: u8 = 11;
/// Maximum number of songs a student performs.
pub const MAX_SONGS: usize = 2;

/// Stable student identifier, generated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Performance format a student registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Classification {
    /// One-on-one master-class instruction.
    Master,
    /// Ordinary judged performance.
    #[default]
    Other,
}

impl Classification {
    /// Maps the registration form's competition format text.
    ///
    /// Only the exact text `"Master Class"` selects [`Classification::Master`].
    pub fn from_format(format: &str) -> Self {
        if format == "Master Class" {
            Self::Master
        } else {
            Self::Other
        }
    }
}

/// A concrete competition day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
    /// The single day of a command performance.
    CommandPerformance,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::CommandPerformance => "Command Performance",
        };
        f.write_str(label)
    }
}

/// Day preference as registered, before load balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayPreference {
    Saturday,
    Sunday,
    /// No preference; resolved by load balancing.
    #[default]
    Either,
}

impl DayPreference {
    /// Maps the registration form's available-days text.
    ///
    /// Anything other than `"Saturday"` or `"Sunday"` means either day.
    pub fn from_available_days(days: &str) -> Self {
        match days {
            "Saturday" => Self::Saturday,
            "Sunday" => Self::Sunday,
            _ => Self::Either,
        }
    }
}

/// A student ready for placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Stable identifier.
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Performance format.
    pub classification: Classification,
    /// Resolved competition day.
    pub day: Day,
    /// Skill level in `[LOW_LEVEL, HIGH_LEVEL]`.
    pub skill_level: u8,
    /// Total play time across all songs (minutes).
    pub play_time: u32,
    /// Song identifiers, at most [`MAX_SONGS`].
    pub songs: Vec<String>,
    /// Email of the registering teacher, if known.
    pub teacher_email: Option<String>,
}

impl Student {
    /// Creates an ordinary student with no songs and zero play time.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, day: Day) -> Self {
        Self {
            id: StudentId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            classification: Classification::Other,
            day,
            skill_level: LOW_LEVEL,
            play_time: 0,
            songs: Vec::new(),
            teacher_email: None,
        }
    }

    /// Replaces the generated identifier.
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = id;
        self
    }

    /// Sets the classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Sets the skill level.
    pub fn with_level(mut self, skill_level: u8) -> Self {
        self.skill_level = skill_level;
        self
    }

    /// Sets the total play time (minutes).
    pub fn with_play_time(mut self, play_time: u32) -> Self {
        self.play_time = play_time;
        self
    }

    /// Appends a song.
    ///
    /// Blank selections are skipped, as is anything past [`MAX_SONGS`].
    pub fn with_song(mut self, song: impl Into<String>) -> Self {
        let song = song.into();
        let song = song.trim();
        if !song.is_empty() && self.songs.len() < MAX_SONGS {
            self.songs.push(song.to_string());
        }
        self
    }

    /// Sets the teacher email.
    pub fn with_teacher_email(mut self, email: impl Into<String>) -> Self {
        self.teacher_email = Some(email.into());
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this student registered for master class.
    pub fn is_master(&self) -> bool {
        self.classification == Classification::Master
    }

    /// Composite lookup key for payloads that carry no id.
    pub fn key(&self) -> StudentKey {
        StudentKey {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            skill_level: self.skill_level,
            songs: self.songs.clone(),
        }
    }

    /// Whether this student matches a composite key.
    pub fn matches_key(&self, key: &StudentKey) -> bool {
        self.first_name == key.first_name
            && self.last_name == key.last_name
            && self.skill_level == key.skill_level
            && self.songs == key.songs
    }
}

/// Name + level + songs. Not guaranteed unique; first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentKey {
    pub first_name: String,
    pub last_name: String,
    pub skill_level: u8,
    pub songs: Vec<String>,
}

/// How to locate a scheduled student.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentLookup {
    /// Exact match on the stable id.
    Id(StudentId),
    /// Compatibility match on name, level and songs.
    Key(StudentKey),
}

impl StudentLookup {
    /// Whether the student satisfies this lookup.
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StudentLookup::Id(id) => student.id == *id,
            StudentLookup::Key(key) => student.matches_key(key),
        }
    }
}
