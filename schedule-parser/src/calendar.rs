use ical::parser::ical::component::IcalEvent;
use ical::parser::ParserError;
use ical::IcalParser;

use crate::RawEvent;

/// Decodes calendar bytes as UTF-8, falling back to ISO-8859-1.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(err) => {
            log::warn!("Calendar is not valid UTF-8 ({err}), reading it as ISO-8859-1");
            bytes.iter().map(|&byte| char::from(byte)).collect()
        }
    }
}

// The parser hands out TEXT values with their escapes still in place.
fn unescape(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('n' | 'N') => unescaped.push('\n'),
            Some(escaped) => unescaped.push(escaped),
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

fn raw_event(event: &IcalEvent) -> Option<RawEvent> {
    if event.properties.is_empty() {
        log::debug!("Skipping empty VEVENT");
        return None;
    }

    let mut raw = RawEvent::default();

    for property in &event.properties {
        let value = property.value.as_deref().unwrap_or_default();

        match property.name.to_ascii_uppercase().as_str() {
            "SUMMARY" => raw.title = unescape(value),
            "DTSTART" => raw.start = value.trim().to_string(),
            "DTEND" => raw.end = value.trim().to_string(),
            _ => {}
        }
    }

    Some(raw)
}

/// Collects the `SUMMARY`, `DTSTART` and `DTEND` of every `VEVENT`.
///
/// Property parameters such as `;TZID=Europe/Warsaw` are ignored. Missing
/// properties are left empty so the event still counts towards the totals.
pub fn parse_calendar<S: AsRef<str>>(s: S) -> Result<Vec<RawEvent>, ParserError> {
    let mut events = Vec::new();

    for calendar in IcalParser::new(s.as_ref().as_bytes()) {
        let calendar = calendar?;
        events.extend(calendar.events.iter().filter_map(raw_event));
    }

    Ok(events)
}
