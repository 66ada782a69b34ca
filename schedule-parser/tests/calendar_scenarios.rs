// Whole calendars pushed through the reader and the aggregator.
use chrono::NaiveDate;
use schedule_parser::{
    classify_location, duration_minutes, parse_calendar, parse_title, ClassType, Config,
    LocationCategory, RawEvent, Statistics, Summary,
};

const PLAN: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Plan zajec//PL\r
BEGIN:VEVENT\r
DTSTART;TZID=Europe/Warsaw:20251116T080000\r
DTEND;TZID=Europe/Warsaw:20251116T091500\r
SUMMARY:Bazy Danych (W) - Prowadzący: Jan Kowalski\\, Sala: A101\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;TZID=Europe/Warsaw:20251116T100000\r
DTEND;TZID=Europe/Warsaw:20251116T113000\r
SUMMARY:Algorytmy (E-CW) - Prowadzący: Anna Nowak\\, Sala: Platforma Teams\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;TZID=Europe/Warsaw:20251123T120000\r
DTEND;TZID=Europe/Warsaw:20251123T140000\r
SUMMARY:Losowy tekst bez formatu\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;TZID=Europe/Warsaw:20251122T080000\r
DTEND;TZID=Europe/Warsaw:20251122T093000\r
SUMMARY:Pierwsza pomoc (ĆW) - Prowadzący: Ewa Wiśniewska\\, Sala: Budynek B sa\r
 la 12\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;TZID=Europe/Warsaw:20251116T120000\r
DTEND;TZID=Europe/Warsaw:20251116T130000\r
SUMMARY:Anatomia (E-W) - Prowadzący: Adam Nowicki\\, Sala: Platforma Moodle\r
END:VEVENT\r
END:VCALENDAR\r
";

#[test]
fn on_campus_lecture() {
    let title = "Bazy Danych (W) - Prowadzący: Jan Kowalski, Sala: A101";
    let event = parse_title(title).unwrap();

    assert_eq!(event.subject, "Bazy Danych");
    assert_eq!(event.class_type, ClassType::Lecture);
    assert_eq!(event.instructor.as_deref(), Some("Jan Kowalski"));
    assert_eq!(event.room.as_deref(), Some("A101"));
    assert_eq!(
        classify_location(event.room.as_deref()),
        LocationCategory::OnCampus
    );
    assert_eq!(duration_minutes("20251116T080000", "20251116T091500"), 75);

    let statistics = Statistics::from_events([RawEvent::new(
        title,
        "20251116T080000",
        "20251116T091500",
    )]);
    let itinerary = statistics.itinerary();

    assert_eq!(itinerary.day_count(), 1);
    assert_eq!(
        itinerary.days[0].date,
        NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
    );
    assert_eq!(itinerary.days[0].entries[0].subject, "Bazy Danych");
}

#[test]
fn remote_exercise_on_teams() {
    let title = "Algorytmy (E-CW) - Prowadzący: Anna Nowak, Sala: Platforma Teams";
    let event = parse_title(title).unwrap();

    assert_eq!(event.class_type, ClassType::RemoteExercise);
    assert_eq!(
        classify_location(event.room.as_deref()),
        LocationCategory::RemotePlatformTeams
    );

    let statistics = Statistics::from_events([RawEvent::new(
        title,
        "20251116T100000",
        "20251116T113000",
    )]);
    assert!(statistics.itinerary().is_empty());
}

#[test]
fn unparsable_title() {
    let mut statistics = Statistics::new();
    statistics.update(&RawEvent::new(
        "Losowy tekst bez formatu",
        "20251116T080000",
        "20251116T091500",
    ));

    assert_eq!(statistics.total_events(), 1);
    assert_eq!(statistics.unparsed_count(), 1);
    assert_eq!(statistics.subjects().count(), 0);
    assert_eq!(statistics.total_minutes(), 75);
}

#[test]
fn whole_calendar() {
    let events = parse_calendar(PLAN).unwrap();
    assert_eq!(events.len(), 5);

    let statistics = Statistics::from_events(events);

    assert_eq!(statistics.total_events(), 5);
    assert_eq!(statistics.unparsed_count(), 1);
    assert_eq!(
        statistics.total_events(),
        statistics.parsed_count() + statistics.unparsed_count()
    );

    assert_eq!(statistics.by_type(ClassType::Lecture).count, 2);
    assert_eq!(statistics.by_type(ClassType::Lab).count, 1);
    assert_eq!(statistics.by_type(ClassType::RemoteExercise).count, 1);

    assert_eq!(
        statistics.by_location(LocationCategory::RemotePlatformMoodle).count,
        1
    );
    assert_eq!(statistics.by_location(LocationCategory::OnCampus).count, 2);

    let first_aid = statistics.subject("Pierwsza pomoc").unwrap();
    assert_eq!(first_aid.lab_count, 1);
    assert!(first_aid.rooms.contains("Budynek B sala 12"));

    let summary = Summary::new(&statistics, Config::default());

    // 75 + 90 + 120 (unparsed) + 90 + 60
    assert_eq!(summary.total_minutes, 435);
    assert_eq!(summary.on_campus_minutes, 165);
    assert_eq!(summary.remote_minutes, 150);
    assert_eq!(summary.average_minutes, 87.0);
    assert_eq!(summary.travel.campus_days, 2);
    assert_eq!(summary.unparsed_titles, ["Losowy tekst bez formatu"]);

    let days = summary
        .itinerary
        .days
        .iter()
        .map(|day| day.date.to_string())
        .collect::<Vec<_>>();
    assert_eq!(days, ["2025-11-16", "2025-11-22"]);
}

#[test]
fn repeated_runs_agree() {
    let first = Summary::new(
        &Statistics::from_events(parse_calendar(PLAN).unwrap()),
        Config::default(),
    );
    let second = Summary::new(
        &Statistics::from_events(parse_calendar(PLAN).unwrap()),
        Config::default(),
    );

    assert_eq!(first, second);
}

#[test]
fn empty_calendar() {
    let events = parse_calendar("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n").unwrap();
    let statistics = Statistics::from_events(events);
    let summary = Summary::new(&statistics, Config::default());

    assert!(summary.is_empty());
    assert_eq!(summary.total_minutes, 0);
    assert_eq!(summary.remote_percent, None);
}
