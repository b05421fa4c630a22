use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::{StatsRecord, StatsView};

/// Shown when the backend did not report a creation time.
pub const UNKNOWN_CREATED_AT: &str = "Unknown";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the stats panel contents, falling back to `session_code` for a missing code.
pub fn stats_view(record: &StatsRecord, session_code: &str) -> StatsView {
    let short_code = record
        .short_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .unwrap_or(session_code)
        .to_string();

    StatsView {
        short_code,
        click_count: record.click_count.unwrap_or(0),
        created: format_created_at(record.created_at.as_deref()),
        long_url: record.long_url.clone().filter(|url| !url.is_empty()),
    }
}

/// Renders a backend timestamp in local time.
///
/// Unparsable input is returned verbatim; missing or empty input yields
/// [`UNKNOWN_CREATED_AT`].
pub fn format_created_at(raw: Option<&str>) -> String {
    format_created_at_in(raw, &Local)
}

fn format_created_at_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return UNKNOWN_CREATED_AT.to_string();
    };

    match parse_timestamp(raw) {
        Some(parsed) => parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<chrono::FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    // SQLite style, with and without an explicit offset.
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}
