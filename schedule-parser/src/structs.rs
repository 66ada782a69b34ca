use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `VEVENT` as handed over by the calendar reader.
///
/// `start` and `end` hold the raw `YYYYMMDDTHHMMSS` tokens, or an empty string
/// when the property was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawEvent {
    pub title: String,
    pub start: String,
    pub end: String,
}

impl RawEvent {
    pub fn new<T, S, E>(title: T, start: S, end: E) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            title: title.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassType {
    Lecture,
    Lab,
    RemoteExercise,
}

impl ClassType {
    pub const ALL: [ClassType; 3] = [Self::Lecture, Self::Lab, Self::RemoteExercise];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Lecture => 0,
            Self::Lab => 1,
            Self::RemoteExercise => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Lab => "Lab / on-campus exercise",
            Self::RemoteExercise => "Remote exercise",
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocationCategory {
    RemotePlatformTeams,
    RemotePlatformMoodle,
    OnCampus,
    Other,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 4] = [
        Self::RemotePlatformTeams,
        Self::RemotePlatformMoodle,
        Self::OnCampus,
        Self::Other,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::RemotePlatformTeams => 0,
            Self::RemotePlatformMoodle => 1,
            Self::OnCampus => 2,
            Self::Other => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RemotePlatformTeams => "Teams platform",
            Self::RemotePlatformMoodle => "Moodle platform",
            Self::OnCampus => "On campus",
            Self::Other => "Other locations",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedEvent {
    pub subject: String,
    pub class_type: ClassType,
    pub instructor: Option<String>,
    pub room: Option<String>,
}

/// Running counters for a single subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubjectRecord {
    pub lecture_count: usize,
    pub lab_count: usize,
    pub remote_exercise_count: usize,
    pub instructors: BTreeSet<String>,
    pub rooms: BTreeSet<String>,
}

impl SubjectRecord {
    #[must_use]
    pub fn count(&self, class_type: ClassType) -> usize {
        match class_type {
            ClassType::Lecture => self.lecture_count,
            ClassType::Lab => self.lab_count,
            ClassType::RemoteExercise => self.remote_exercise_count,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lecture_count + self.lab_count + self.remote_exercise_count
    }

    pub(crate) fn record(&mut self, event: &ParsedEvent) {
        match event.class_type {
            ClassType::Lecture => self.lecture_count += 1,
            ClassType::Lab => self.lab_count += 1,
            ClassType::RemoteExercise => self.remote_exercise_count += 1,
        }

        if let Some(instructor) = &event.instructor {
            self.instructors.insert(instructor.clone());
        }

        if let Some(room) = &event.room {
            self.rooms.insert(room.clone());
        }
    }
}

/// A single class held on campus, kept in input order until queried.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItineraryEntry {
    pub subject: String,
    pub class_type: ClassType,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub instructor: Option<String>,
    pub room: String,
    pub start: String,
    pub end: String,
}

/// Number of events and minutes spent in one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tally {
    pub count: usize,
    pub minutes: u32,
}

impl Tally {
    pub(crate) fn add(&mut self, minutes: u32) {
        self.count += 1;
        self.minutes += minutes;
    }
}
