use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{ClassType, ParsedEvent};

macro_rules! regex {
    ($pattern:expr) => {{
        static REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(&$pattern).unwrap());
        &REGEX
    }};
}

/// Bracketed tags and the class type each one counts towards.
///
/// An `E-` prefix marks remote delivery. Remote lectures have no statistic of
/// their own and count as lectures, on-campus exercises count as labs.
pub const TAGS: &[(&str, ClassType)] = &[
    ("W", ClassType::Lecture),
    ("E-W", ClassType::Lecture),
    ("L", ClassType::Lab),
    ("ĆW", ClassType::Lab),
    ("E-CW", ClassType::RemoteExercise),
    ("E-ĆW", ClassType::RemoteExercise),
];

#[must_use]
pub fn class_type_for_tag(tag: &str) -> Option<ClassType> {
    TAGS.iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, class_type)| *class_type)
}

fn tag_alternation() -> String {
    TAGS.iter()
        .map(|(tag, _)| regex::escape(tag))
        .collect::<Vec<_>>()
        .join("|")
}

/// Parses an event title of the shape
/// `Subject (TAG) - Prowadzący: Names, Sala: Room`, or the bare `Subject (TAG)`.
///
/// Returns `None` when neither shape matches or the tag is unknown.
#[must_use]
pub fn parse_title(title: &str) -> Option<ParsedEvent> {
    let full = regex!(format!(
        r"^(?P<subject>.+?)\s*\((?P<tag>{})\)\s*-\s*Prowadzący:\s*(?P<instructor>.+?),\s*Sala:\s*(?P<room>.+)$",
        tag_alternation()
    ));
    let short = regex!(format!(
        r"^(?P<subject>.+?)\s*\((?P<tag>{})\)",
        tag_alternation()
    ));

    let title = title.trim();

    if let Some(captures) = full.captures(title) {
        return from_captures(&captures, true);
    }

    let captures = short.captures(title)?;
    from_captures(&captures, false)
}

fn from_captures(captures: &Captures, with_details: bool) -> Option<ParsedEvent> {
    let field = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let subject = field("subject")?;
    let class_type = class_type_for_tag(captures.name("tag")?.as_str())?;

    let (instructor, room) = if with_details {
        (field("instructor"), field("room"))
    } else {
        (None, None)
    };

    Some(ParsedEvent {
        subject,
        class_type,
        instructor,
        room,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form() {
        let event = parse_title("Bazy Danych (W) - Prowadzący: Jan Kowalski, Sala: A101").unwrap();

        assert_eq!(event.subject, "Bazy Danych");
        assert_eq!(event.class_type, ClassType::Lecture);
        assert_eq!(event.instructor.as_deref(), Some("Jan Kowalski"));
        assert_eq!(event.room.as_deref(), Some("A101"));
    }

    #[test]
    fn whitespace_is_insignificant() {
        let event = parse_title("  Fizyka  (L)-Prowadzący:Anna Nowak ,Sala:   B12  ").unwrap();

        assert_eq!(event.subject, "Fizyka");
        assert_eq!(event.class_type, ClassType::Lab);
        assert_eq!(event.instructor.as_deref(), Some("Anna Nowak"));
        assert_eq!(event.room.as_deref(), Some("B12"));
    }

    #[test]
    fn short_form_has_no_details() {
        let event = parse_title("Anatomia (E-ĆW)").unwrap();

        assert_eq!(event.subject, "Anatomia");
        assert_eq!(event.class_type, ClassType::RemoteExercise);
        assert_eq!(event.instructor, None);
        assert_eq!(event.room, None);
    }

    #[test]
    fn short_form_ignores_trailing_text() {
        let event = parse_title("Anatomia (W) odwołane").unwrap();

        assert_eq!(event.subject, "Anatomia");
        assert_eq!(event.class_type, ClassType::Lecture);
        assert_eq!(event.room, None);
    }

    #[test]
    fn tag_normalization() {
        let cases = [
            ("W", ClassType::Lecture),
            ("E-W", ClassType::Lecture),
            ("L", ClassType::Lab),
            ("ĆW", ClassType::Lab),
            ("E-CW", ClassType::RemoteExercise),
            ("E-ĆW", ClassType::RemoteExercise),
        ];

        for (tag, expected) in cases {
            let title = format!("Przedmiot ({tag}) - Prowadzący: X, Sala: Y");
            assert_eq!(parse_title(&title).unwrap().class_type, expected, "tag {tag}");
            assert_eq!(class_type_for_tag(tag), Some(expected));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        for tag in ["S", "CW", "E-L", "w", "Ć", ""] {
            let title = format!("Przedmiot ({tag}) - Prowadzący: X, Sala: Y");
            assert_eq!(parse_title(&title), None, "tag {tag:?}");
        }
    }

    #[test]
    fn free_text_is_rejected() {
        assert_eq!(parse_title("Losowy tekst bez formatu"), None);
        assert_eq!(parse_title(""), None);
        assert_eq!(parse_title("(W)"), None);
    }

    #[test]
    fn multiple_instructors_stay_joined() {
        let event =
            parse_title("Chemia (L) - Prowadzący: Jan Kowalski, Anna Nowak, Sala: Laboratorium 3")
                .unwrap();

        assert_eq!(
            event.instructor.as_deref(),
            Some("Jan Kowalski, Anna Nowak")
        );
        assert_eq!(event.room.as_deref(), Some("Laboratorium 3"));
    }

    #[test]
    fn parenthesised_subject() {
        let event = parse_title("Język obcy (ang.) (ĆW) - Prowadzący: X, Sala: C2").unwrap();

        assert_eq!(event.subject, "Język obcy (ang.)");
        assert_eq!(event.class_type, ClassType::Lab);
    }
}
