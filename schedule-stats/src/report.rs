use std::fmt::{self, Write};

use schedule_parser::{parse_timestamp, Summary};

const RULE: &str = "============================================================";
const SUBRULE: &str = "------------------------------------------------------------";

/// Lists are cut after this many names per subject.
const LIST_LIMIT: usize = 3;

fn hours(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (hours, 0) => format!("{hours}h"),
        (hours, rest) => format!("{hours}h {rest}min"),
    }
}

fn fractional_hours(minutes: f64) -> String {
    hours(minutes.round() as u32)
}

fn clock(token: &str) -> String {
    parse_timestamp(token).map_or_else(|| "?".to_string(), |t| t.format("%H:%M").to_string())
}

fn shortened(items: &[String]) -> String {
    let mut joined = items
        .iter()
        .take(LIST_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > LIST_LIMIT {
        joined.push_str(", ...");
    }

    joined
}

pub fn render(summary: &Summary) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{RULE}")?;
    writeln!(out, "SCHEDULE ANALYSIS")?;
    writeln!(out, "{RULE}")?;

    if summary.is_empty() {
        writeln!(out, "\nNo events found in the calendar.")?;
        return Ok(out);
    }

    writeln!(out, "\nOVERVIEW")?;
    writeln!(out, "Total events: {}", summary.total_events)?;
    for row in &summary.types {
        writeln!(out, "{}: {}", row.class_type, row.tally.count)?;
    }
    writeln!(out, "Unrecognized: {}", summary.unparsed_events)?;

    writeln!(out, "\nLOCATIONS")?;
    for row in &summary.locations {
        writeln!(out, "{}: {} classes", row.category, row.tally.count)?;
    }

    writeln!(out, "\nSUBJECTS")?;
    for subject in &summary.subjects {
        writeln!(out, "\n{}:", subject.name)?;
        writeln!(out, "  Lectures: {}", subject.lectures)?;
        writeln!(out, "  Labs: {}", subject.labs)?;
        writeln!(out, "  Remote exercises: {}", subject.remote_exercises)?;
        writeln!(out, "  Total: {}", subject.total)?;
        if !subject.instructors.is_empty() {
            writeln!(out, "  Instructors: {}", shortened(&subject.instructors))?;
        }
        if !subject.rooms.is_empty() {
            writeln!(out, "  Rooms: {}", shortened(&subject.rooms))?;
        }
    }

    render_itinerary(&mut out, summary)?;
    render_time(&mut out, summary)?;

    if !summary.unparsed_titles.is_empty() {
        writeln!(out, "\nUNRECOGNIZED TITLES")?;
        for title in &summary.unparsed_titles {
            writeln!(out, "  {title:?}")?;
        }
    }

    Ok(out)
}

fn render_itinerary(out: &mut String, summary: &Summary) -> fmt::Result {
    let itinerary = &summary.itinerary;
    if itinerary.is_empty() {
        return Ok(());
    }

    writeln!(out, "\nON-CAMPUS ITINERARY")?;
    writeln!(out, "{RULE}")?;

    for (number, day) in itinerary.days.iter().enumerate() {
        writeln!(out, "\nDAY {}: {}", number + 1, day.date.format("%A, %-d %B %Y"))?;
        writeln!(out, "{SUBRULE}")?;

        for (index, entry) in day.entries.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} - {}",
                index + 1,
                clock(&entry.start),
                clock(&entry.end)
            )?;
            writeln!(out, "     {} ({})", entry.subject, entry.class_type)?;
            writeln!(out, "     Room: {}", entry.room)?;
            if let Some(instructor) = &entry.instructor {
                writeln!(out, "     Instructor: {instructor}")?;
            }
        }
    }

    writeln!(
        out,
        "\n{} days on campus ({} classes in total)",
        itinerary.day_count(),
        itinerary.class_count()
    )
}

fn render_time(out: &mut String, summary: &Summary) -> fmt::Result {
    writeln!(out, "\nTIME")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total: {}", hours(summary.total_minutes))?;

    for row in &summary.types {
        writeln!(
            out,
            "  {}: {} ({} classes)",
            row.class_type,
            hours(row.tally.minutes),
            row.tally.count
        )?;
    }

    writeln!(out, "  On campus: {}", hours(summary.on_campus_minutes))?;
    writeln!(out, "  Remote: {}", hours(summary.remote_minutes))?;
    writeln!(
        out,
        "Average per class: {}",
        fractional_hours(summary.average_minutes)
    )?;

    writeln!(
        out,
        "\nWeekly load ({} weeks):",
        summary.config.semester_weeks
    )?;
    writeln!(out, "  Total: {}", fractional_hours(summary.weekly.total_minutes))?;
    writeln!(
        out,
        "  On campus: {}",
        fractional_hours(summary.weekly.on_campus_minutes)
    )?;
    writeln!(
        out,
        "  Remote: {}",
        fractional_hours(summary.weekly.remote_minutes)
    )?;

    if let (Some(on_campus), Some(remote)) = (summary.on_campus_percent, summary.remote_percent) {
        writeln!(out, "\nShare of time: {on_campus:.1}% on campus, {remote:.1}% remote")?;
    }

    writeln!(out, "\nTRAVEL")?;
    writeln!(out, "Days on campus: {}", summary.travel.campus_days)?;
    writeln!(out, "Trips per month: {:.1}", summary.travel.days_per_month)?;
    writeln!(
        out,
        "Travel time ({}h each way): {}h",
        summary.config.travel_hours_one_way, summary.travel.hours
    )
}
