//! Registrant record.
//!
//! One entry from the registration store, as handed to the scheduling run.
//! Form text (competition format, available days) is mapped to typed values
//! on the way in.

use serde::{Deserialize, Serialize};

use crate::models::{Classification, Day, DayPreference, Student, StudentId};

/// A registered student before day resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    /// Identifier carried over from the store, if it has one.
    #[serde(default)]
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub classification: Classification,
    /// Total play time for both songs (minutes).
    pub total_play_time: u32,
    #[serde(default)]
    pub day_preference: DayPreference,
    pub skill_level: u8,
    #[serde(default)]
    pub song_1: String,
    #[serde(default)]
    pub song_2: String,
    #[serde(default)]
    pub teacher_email: Option<String>,
}

impl Registrant {
    /// Creates an ordinary registrant with no day preference.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            classification: Classification::Other,
            total_play_time: 0,
            day_preference: DayPreference::Either,
            skill_level: 0,
            song_1: String::new(),
            song_2: String::new(),
            teacher_email: None,
        }
    }

    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Sets the classification from the form's competition format text.
    pub fn with_competition_format(self, format: &str) -> Self {
        self.with_classification(Classification::from_format(format))
    }

    /// Sets total play time (minutes).
    pub fn with_play_time(mut self, minutes: u32) -> Self {
        self.total_play_time = minutes;
        self
    }

    pub fn with_day_preference(mut self, preference: DayPreference) -> Self {
        self.day_preference = preference;
        self
    }

    /// Sets the day preference from the form's available-days text.
    pub fn with_available_days(self, days: &str) -> Self {
        self.with_day_preference(DayPreference::from_available_days(days))
    }

    pub fn with_level(mut self, skill_level: u8) -> Self {
        self.skill_level = skill_level;
        self
    }

    /// Sets both song selections.
    pub fn with_songs(mut self, song_1: impl Into<String>, song_2: impl Into<String>) -> Self {
        self.song_1 = song_1.into();
        self.song_2 = song_2.into();
        self
    }

    pub fn with_teacher_email(mut self, email: impl Into<String>) -> Self {
        self.teacher_email = Some(email.into());
        self
    }

    /// Builds the student for a resolved day.
    pub fn to_student(&self, day: Day) -> Student {
        let mut student = Student::new(self.first_name.clone(), self.last_name.clone(), day)
            .with_classification(self.classification)
            .with_level(self.skill_level)
            .with_play_time(self.total_play_time)
            .with_song(self.song_1.clone())
            .with_song(self.song_2.clone());
        if let Some(id) = self.id {
            student = student.with_id(id);
        }
        if let Some(email) = &self.teacher_email {
            student = student.with_teacher_email(email.clone());
        }
        student
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mapping() {
        let r = Registrant::new("Fanny", "Mendelssohn")
            .with_competition_format("Master Class")
            .with_available_days("Sunday");
        assert_eq!(r.classification, Classification::Master);
        assert_eq!(r.day_preference, DayPreference::Sunday);

        let r = Registrant::new("A", "B")
            .with_competition_format("Traditional")
            .with_available_days("Either Saturday or Sunday");
        assert_eq!(r.classification, Classification::Other);
        assert_eq!(r.day_preference, DayPreference::Either);
    }

    #[test]
    fn test_to_student() {
        let id = StudentId::new();
        let r = Registrant::new("Fanny", "Mendelssohn")
            .with_id(id)
            .with_level(8)
            .with_play_time(11)
            .with_songs("Das Jahr", "")
            .with_teacher_email("t@x.org");
        let s = r.to_student(Day::Saturday);
        assert_eq!(s.id, id);
        assert_eq!(s.day, Day::Saturday);
        assert_eq!(s.skill_level, 8);
        assert_eq!(s.play_time, 11);
        assert_eq!(s.songs, vec!["Das Jahr".to_string()]);
        assert_eq!(s.teacher_email.as_deref(), Some("t@x.org"));
    }

    #[test]
    fn test_to_student_generates_id() {
        let r = Registrant::new("A", "B");
        assert_ne!(r.to_student(Day::Sunday).id, r.to_student(Day::Sunday).id);
    }

    #[test]
    fn test_deserialize_defaults() {
        let r: Registrant = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","total_play_time":7,"skill_level":3}"#,
        )
        .unwrap();
        assert_eq!(r.day_preference, DayPreference::Either);
        assert_eq!(r.classification, Classification::Other);
        assert!(r.id.is_none());
    }
}
