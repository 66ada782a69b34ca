use ics::{
    properties::{Categories, DtEnd, DtStart, Location, Organizer, RRule, Summary, TzName},
    Daylight, Standard, TimeZone,
};

use crate::{Itinerary, ItineraryEntry};

impl Itinerary {
    /// Renders the on-campus visits as a calendar of their own.
    #[must_use]
    pub fn to_ics<'a>(&'a self, name: &'a str) -> ics::ICalendar<'a> {
        let mut cet_standard = Standard::new("19701025T030000", "+0200", "+0100");
        cet_standard.push(TzName::new("CET"));
        cet_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU"));

        let mut cest_daylight = Daylight::new("19700329T020000", "+0100", "+0200");
        cest_daylight.push(TzName::new("CEST"));
        cest_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU"));

        let mut timezone = TimeZone::daylight("Europe/Warsaw", cest_daylight);
        timezone.add_standard(cet_standard);

        let mut icalendar = ics::ICalendar::new("2.0", name);
        icalendar.add_timezone(timezone);

        for entry in self.days.iter().flat_map(|day| &day.entries) {
            icalendar.add_event(entry.to_ics());
        }

        icalendar
    }
}

impl ItineraryEntry {
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let id = format!("{}_{}", self.start, self.subject.replace(' ', "-"));

        let mut ics_event = ics::Event::new(id, self.start.as_str());

        ics_event.push(DtStart::new(self.start.as_str()));
        if !self.end.is_empty() {
            ics_event.push(DtEnd::new(self.end.as_str()));
        }
        ics_event.push(Summary::new(format!(
            "{} ({})",
            self.subject, self.class_type
        )));
        ics_event.push(Location::new(self.room.as_str()));
        ics_event.push(Categories::new(self.class_type.label()));

        if let Some(instructor) = &self.instructor {
            ics_event.push(Organizer::new(instructor.as_str()));
        }

        ics_event
    }
}
