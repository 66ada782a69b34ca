use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::duration::{duration_minutes, parse_timestamp};
use crate::location::classify_location;
use crate::title::parse_title;
use crate::{ClassType, ItineraryEntry, LocationCategory, RawEvent, SubjectRecord, Tally};

/// Accumulates every event of one calendar.
///
/// A fresh instance is needed per analysis run. Updates are applied in call
/// order and are never rolled back.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    total_events: usize,
    total_minutes: u32,
    unparsed: Vec<String>,
    by_type: [Tally; 3],
    by_location: [Tally; 4],
    subjects: BTreeMap<String, SubjectRecord>,
    on_campus: Vec<ItineraryEntry>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events<I: IntoIterator<Item = RawEvent>>(events: I) -> Self {
        let mut statistics = Self::new();
        for event in events {
            statistics.update(&event);
        }
        statistics
    }

    pub fn update(&mut self, raw: &RawEvent) {
        self.total_events += 1;

        let minutes = duration_minutes(&raw.start, &raw.end);
        self.total_minutes += minutes;

        let Some(event) = parse_title(&raw.title) else {
            log::warn!("Could not parse event title: {:?}", raw.title);
            self.unparsed.push(raw.title.clone());
            return;
        };

        self.by_type[event.class_type.index()].add(minutes);

        self.subjects
            .entry(event.subject.clone())
            .or_default()
            .record(&event);

        let category = classify_location(event.room.as_deref());
        self.by_location[category.index()].add(minutes);

        if category != LocationCategory::OnCampus || raw.start.is_empty() {
            return;
        }

        let Some(room) = event.room else {
            return;
        };

        self.on_campus.push(ItineraryEntry {
            subject: event.subject,
            class_type: event.class_type,
            instructor: event.instructor,
            room,
            start: raw.start.clone(),
            end: raw.end.clone(),
        });
    }

    #[must_use]
    pub fn total_events(&self) -> usize {
        self.total_events
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    #[must_use]
    pub fn parsed_count(&self) -> usize {
        self.total_events - self.unparsed.len()
    }

    #[must_use]
    pub fn unparsed_count(&self) -> usize {
        self.unparsed.len()
    }

    /// Titles that matched neither title shape, in input order.
    #[must_use]
    pub fn unparsed_titles(&self) -> &[String] {
        &self.unparsed
    }

    #[must_use]
    pub fn by_type(&self, class_type: ClassType) -> Tally {
        self.by_type[class_type.index()]
    }

    #[must_use]
    pub fn by_location(&self, category: LocationCategory) -> Tally {
        self.by_location[category.index()]
    }

    #[must_use]
    pub fn remote_minutes(&self) -> u32 {
        LocationCategory::ALL
            .into_iter()
            .filter(|category| *category != LocationCategory::OnCampus)
            .map(|category| self.by_location(category).minutes)
            .sum()
    }

    #[must_use]
    pub fn subject(&self, name: &str) -> Option<&SubjectRecord> {
        self.subjects.get(name)
    }

    /// Subjects ordered by name.
    pub fn subjects(&self) -> impl Iterator<Item = (&str, &SubjectRecord)> {
        self.subjects
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// On-campus classes in the order they were fed in.
    #[must_use]
    pub fn on_campus_entries(&self) -> &[ItineraryEntry] {
        &self.on_campus
    }

    #[must_use]
    pub fn itinerary(&self) -> Itinerary {
        Itinerary::from_entries(&self.on_campus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryDay {
    pub date: NaiveDate,
    pub entries: Vec<ItineraryEntry>,
}

/// On-campus classes grouped by calendar day, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Entries whose start token cannot be read as a date are left out.
    #[must_use]
    pub fn from_entries(entries: &[ItineraryEntry]) -> Self {
        let mut dated = entries
            .iter()
            .filter_map(|entry| Some((parse_timestamp(&entry.start)?, entry)))
            .collect::<Vec<_>>();

        if dated.len() < entries.len() {
            log::debug!(
                "Skipping {} on-campus entries without a readable start",
                entries.len() - dated.len()
            );
        }

        dated.sort_by_key(|(timestamp, _)| *timestamp);

        let mut days: Vec<ItineraryDay> = Vec::new();

        for (timestamp, entry) in dated {
            let date = timestamp.date();
            match days.last_mut() {
                Some(day) if day.date == date => day.entries.push(entry.clone()),
                _ => days.push(ItineraryDay {
                    date,
                    entries: vec![entry.clone()],
                }),
            }
        }

        Self { days }
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
