use crate::LocationCategory;

const CAMPUS_KEYWORDS: [&str; 4] = ["sala", "budynek", "aula", "laboratorium"];

/// First letters of the campus building codes, as in `A101` or `f2.14`.
const BUILDING_CODES: &str = "abcdef";

#[must_use]
pub fn classify_location(room: Option<&str>) -> LocationCategory {
    let Some(room) = room else {
        return LocationCategory::Other;
    };

    let room = room.trim().to_lowercase();

    if room.contains("teams") {
        return LocationCategory::RemotePlatformTeams;
    }

    if room.contains("moodle") {
        return LocationCategory::RemotePlatformMoodle;
    }

    if CAMPUS_KEYWORDS.iter().any(|keyword| room.contains(keyword)) {
        return LocationCategory::OnCampus;
    }

    let building_code = room
        .chars()
        .next()
        .is_some_and(|first| BUILDING_CODES.contains(first));

    if building_code && room.chars().any(|c| c.is_ascii_digit()) {
        return LocationCategory::OnCampus;
    }

    LocationCategory::Other
}
