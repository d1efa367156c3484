// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timestamp parsing and formatting for the event table.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::error::Error;

const FORMAT_DATEONLY: &str = "%Y-%m-%d";
const FORMAT_TIMEONLY: &str = "%H:%M:%S";
const FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Which part of a timestamp to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    /// `YYYY-MM-DD`
    DateOnly,

    /// `HH:MM:SS`
    TimeOnly,
}

impl TimeStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::DateOnly => FORMAT_DATEONLY,
            Self::TimeOnly => FORMAT_TIMEONLY,
        }
    }
}

/// Parses a backend timestamp into the display time zone.
///
/// Timestamps carrying an offset (RFC 3339) keep their instant; civil timestamps without one
/// (`YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`) are taken to be in `tz`.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `raw` is neither form.
pub fn parse_time(raw: &str, tz: &TimeZone) -> Result<Zoned, Error> {
    let trimmed = raw.trim();
    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        return Ok(ts.to_zoned(tz.clone()));
    }

    trimmed
        .parse::<DateTime>()
        .or_else(|_| DateTime::strptime(FORMAT_DATETIME, trimmed))
        .and_then(|dt| dt.to_zoned(tz.clone()))
        .map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

/// Parses a backend timestamp and renders the requested part of it in `tz`.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `raw` cannot be parsed.
pub fn format_time(raw: &str, style: TimeStyle, tz: &TimeZone) -> Result<String, Error> {
    let zdt = parse_time(raw, tz)?;
    Ok(zdt.strftime(style.pattern()).to_string())
}

/// Combines a rendered date (`YYYY-MM-DD`) and time (`HH:MM:SS`) back into an instant in `tz`.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if either part cannot be parsed.
pub fn combine_date_time(date: &str, time: &str, tz: &TimeZone) -> Result<Zoned, Error> {
    let invalid = || Error::InvalidTimestamp(format!("{date}T{time}"));
    let date: Date = date.parse().map_err(|_| invalid())?;
    let time: Time = time.parse().map_err(|_| invalid())?;
    date.to_datetime(time)
        .to_zoned(tz.clone())
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use jiff::tz::offset;

    use super::*;

    #[test]
    fn parses_rfc3339_into_display_zone() {
        let tz = TimeZone::fixed(offset(8));
        let zdt = parse_time("2023-01-01T00:30:00Z", &tz).unwrap();
        assert_eq!(zdt.strftime("%Y-%m-%d %H:%M:%S").to_string(), "2023-01-01 08:30:00");
        assert_eq!(zdt.timestamp(), "2023-01-01T00:30:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn parses_civil_timestamp_in_display_zone() {
        let tz = TimeZone::fixed(offset(8));
        let a = parse_time("2023-01-01T08:30:00", &tz).unwrap();
        let b = parse_time("2023-01-01 08:30:00", &tz).unwrap();
        assert_eq!(a.timestamp(), b.timestamp());
        assert_eq!(a.timestamp(), "2023-01-01T00:30:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_time("yesterday", &TimeZone::UTC).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(s) if s == "yesterday"));
    }

    #[test]
    fn formats_date_and_time_parts() {
        let tz = TimeZone::UTC;
        let raw = "2023-01-01T00:30:05Z";
        assert_eq!(format_time(raw, TimeStyle::DateOnly, &tz).unwrap(), "2023-01-01");
        assert_eq!(format_time(raw, TimeStyle::TimeOnly, &tz).unwrap(), "00:30:05");
    }

    #[test]
    fn date_follows_display_zone() {
        let tz = TimeZone::fixed(offset(-5));
        let raw = "2023-01-01T02:00:00Z";
        assert_eq!(format_time(raw, TimeStyle::DateOnly, &tz).unwrap(), "2022-12-31");
        assert_eq!(format_time(raw, TimeStyle::TimeOnly, &tz).unwrap(), "21:00:00");
    }

    #[test]
    fn combines_rendered_parts() {
        let zdt = combine_date_time("2023-01-01", "00:30:00", &TimeZone::UTC).unwrap();
        assert_eq!(zdt.timestamp(), "2023-01-01T00:30:00Z".parse::<Timestamp>().unwrap());

        assert!(combine_date_time("?", "00:30:00", &TimeZone::UTC).is_err());
        assert!(combine_date_time("2023-01-01", "?", &TimeZone::UTC).is_err());
    }
}
