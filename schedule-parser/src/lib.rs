mod calendar;
mod duration;
mod location;
mod stats;
mod structs;
mod summary;
mod title;

#[cfg(feature = "ics")]
mod ics;

pub use calendar::{decode, parse_calendar};
pub use duration::{duration_minutes, parse_timestamp};
pub use location::classify_location;
pub use stats::{Itinerary, ItineraryDay, Statistics};
pub use structs::{
    ClassType, ItineraryEntry, LocationCategory, ParsedEvent, RawEvent, SubjectRecord, Tally,
};
pub use summary::{Config, LocationRow, Summary, SubjectRow, Travel, TypeRow, WeeklyAverage};
pub use title::{class_type_for_tag, parse_title, TAGS};
