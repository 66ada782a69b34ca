use chrono::NaiveDateTime;

fn two_digits(token: &str, at: usize) -> Option<u32> {
    let digits = token.get(at..at + 2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn minute_of_day(token: &str) -> Option<u32> {
    let hour = two_digits(token, 9).filter(|hour| *hour < 24)?;
    let minute = two_digits(token, 11).filter(|minute| *minute < 60)?;
    Some(hour * 60 + minute)
}

/// Minutes between two `YYYYMMDDTHHMMSS` tokens, reading only the time of day.
///
/// Missing or malformed tokens yield zero, as does an end before the start.
#[must_use]
pub fn duration_minutes(start: &str, end: &str) -> u32 {
    let (Some(start_minutes), Some(end_minutes)) = (minute_of_day(start), minute_of_day(end))
    else {
        return 0;
    };

    if end_minutes < start_minutes {
        log::debug!("End {end:?} precedes start {start:?}, counting zero minutes");
        return 0;
    }

    end_minutes - start_minutes
}

/// Full date and time of a `YYYYMMDDTHHMMSS` token. A trailing `Z` is ignored.
#[must_use]
pub fn parse_timestamp(token: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token.get(..15)?, "%Y%m%dT%H%M%S").ok()
}
