#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ClassType, Itinerary, LocationCategory, Statistics, Tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub semester_weeks: u32,
    pub travel_hours_one_way: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            semester_weeks: 15,
            travel_hours_one_way: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRow {
    pub class_type: ClassType,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationRow {
    pub category: LocationCategory,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubjectRow {
    pub name: String,
    pub lectures: usize,
    pub labs: usize,
    pub remote_exercises: usize,
    pub total: usize,
    pub instructors: Vec<String>,
    pub rooms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeeklyAverage {
    pub total_minutes: f64,
    pub on_campus_minutes: f64,
    pub remote_minutes: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Travel {
    pub campus_days: usize,
    pub days_per_month: f64,
    pub hours: u32,
}

/// Read-only snapshot of a finished analysis, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub config: Config,
    pub total_events: usize,
    pub parsed_events: usize,
    pub unparsed_events: usize,
    pub total_minutes: u32,
    pub on_campus_minutes: u32,
    pub remote_minutes: u32,
    pub average_minutes: f64,
    pub weekly: WeeklyAverage,
    /// `None` when no time was recorded at all.
    pub on_campus_percent: Option<f64>,
    pub remote_percent: Option<f64>,
    pub travel: Travel,
    pub types: Vec<TypeRow>,
    pub locations: Vec<LocationRow>,
    pub subjects: Vec<SubjectRow>,
    pub itinerary: Itinerary,
    pub unparsed_titles: Vec<String>,
}

fn percent(part: u32, whole: u32) -> Option<f64> {
    (whole > 0).then(|| f64::from(part) / f64::from(whole) * 100.0)
}

fn per_week(minutes: u32, weeks: u32) -> f64 {
    if weeks == 0 {
        return 0.0;
    }
    f64::from(minutes) / f64::from(weeks)
}

impl Summary {
    #[must_use]
    pub fn new(statistics: &Statistics, config: Config) -> Self {
        let total_minutes = statistics.total_minutes();
        let on_campus_minutes = statistics.by_location(LocationCategory::OnCampus).minutes;
        let remote_minutes = statistics.remote_minutes();

        let average_minutes = match statistics.total_events() {
            0 => 0.0,
            events => f64::from(total_minutes) / events as f64,
        };

        let itinerary = statistics.itinerary();
        let campus_days = itinerary.day_count();

        let subjects = statistics
            .subjects()
            .map(|(name, record)| SubjectRow {
                name: name.to_string(),
                lectures: record.lecture_count,
                labs: record.lab_count,
                remote_exercises: record.remote_exercise_count,
                total: record.total(),
                instructors: record.instructors.iter().cloned().collect(),
                rooms: record.rooms.iter().cloned().collect(),
            })
            .collect();

        Self {
            config,
            total_events: statistics.total_events(),
            parsed_events: statistics.parsed_count(),
            unparsed_events: statistics.unparsed_count(),
            total_minutes,
            on_campus_minutes,
            remote_minutes,
            average_minutes,
            weekly: WeeklyAverage {
                total_minutes: per_week(total_minutes, config.semester_weeks),
                on_campus_minutes: per_week(on_campus_minutes, config.semester_weeks),
                remote_minutes: per_week(remote_minutes, config.semester_weeks),
            },
            on_campus_percent: percent(on_campus_minutes, total_minutes),
            remote_percent: percent(remote_minutes, total_minutes),
            travel: Travel {
                campus_days,
                days_per_month: campus_days as f64 / 4.0,
                hours: u32::try_from(campus_days)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(2)
                    .saturating_mul(config.travel_hours_one_way),
            },
            types: ClassType::ALL
                .into_iter()
                .map(|class_type| TypeRow {
                    class_type,
                    tally: statistics.by_type(class_type),
                })
                .collect(),
            locations: LocationCategory::ALL
                .into_iter()
                .map(|category| LocationRow {
                    category,
                    tally: statistics.by_location(category),
                })
                .collect(),
            subjects,
            itinerary,
            unparsed_titles: statistics.unparsed_titles().to_vec(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}
