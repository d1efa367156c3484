// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use jiff::Zoned;
use jiff::tz::TimeZone;
use serde::Serialize;
use vidmark_client::{EventKey, EventRecord};

use crate::datetime::{TimeStyle, combine_date_time, format_time};
use crate::error::Error;
use crate::language::Language;
use crate::taxonomy::{Taxonomy, resolve_option_labels};
use crate::window::PlaybackWindow;

/// Cell text shown for a value that could not be resolved.
pub const PLACEHOLDER: &str = "?";

/// A display-ready row of the event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Record key (`ID`).
    pub key: EventKey,
    /// Video the event belongs to.
    #[serde(rename = "videoID")]
    pub video_id: String,
    /// Date of the start, `YYYY-MM-DD`.
    pub date: String,
    /// Time of the start, `HH:MM:SS`.
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Time of the stop, `HH:MM:SS`.
    #[serde(rename = "stopTime")]
    pub stop_time: String,
    /// Label of the event kind.
    #[serde(rename = "eventID")]
    pub event_id: String,
    /// Labels of the selected options, joined by `", "`.
    #[serde(rename = "optionCode")]
    pub option_code: String,
    /// Note.
    pub desc: String,
}

impl DisplayRow {
    /// The cell shown under the column with the given `dataIndex`.
    #[must_use]
    pub fn cell(&self, data_index: &str) -> Option<Cow<'_, str>> {
        let cell = match data_index {
            "key" => Cow::Owned(self.key.to_string()),
            "videoID" => Cow::Borrowed(self.video_id.as_str()),
            "date" => Cow::Borrowed(self.date.as_str()),
            "startTime" => Cow::Borrowed(self.start_time.as_str()),
            "stopTime" => Cow::Borrowed(self.stop_time.as_str()),
            "eventID" => Cow::Borrowed(self.event_id.as_str()),
            "optionCode" => Cow::Borrowed(self.option_code.as_str()),
            "desc" => Cow::Borrowed(self.desc.as_str()),
            _ => return None,
        };
        Some(cell)
    }

    /// The start instant, rebuilt from the rendered `date` and `start_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered cells are not a valid date and time.
    pub fn start_instant(&self, tz: &TimeZone) -> Result<Zoned, Error> {
        combine_date_time(&self.date, &self.start_time, tz)
    }

    /// The stop instant, rebuilt from the rendered `date` and `stop_time`.
    ///
    /// The date is the one of the start, so an event running past midnight yields a stop
    /// instant on the start day.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered cells are not a valid date and time.
    pub fn stop_instant(&self, tz: &TimeZone) -> Result<Zoned, Error> {
        combine_date_time(&self.date, &self.stop_time, tz)
    }

    /// Whether both the start and the stop instant fall inside `window`.
    ///
    /// Rows whose instants cannot be rebuilt are inside a live window only.
    #[must_use]
    pub fn is_within(&self, window: &PlaybackWindow, tz: &TimeZone) -> bool {
        if !window.is_frozen() {
            return true;
        }

        match (self.start_instant(tz), self.stop_instant(tz)) {
            (Ok(start), Ok(stop)) => window.contains(&start) && window.contains(&stop),
            _ => false,
        }
    }
}

/// Turns a raw record into a display row, labelling it through `taxonomy`.
///
/// # Errors
///
/// Fails on the first cell that cannot be resolved: an unknown event kind or option, a
/// malformed option code or an unparsable timestamp.
pub fn parse_event(
    record: &EventRecord,
    taxonomy: &Taxonomy,
    language: Language,
    tz: &TimeZone,
) -> Result<DisplayRow, Error> {
    let definition = taxonomy.require(record.event_id)?;
    Ok(DisplayRow {
        key: record.id,
        video_id: record.video_id.clone(),
        date: format_time(&record.start_time, TimeStyle::DateOnly, tz)?,
        start_time: format_time(&record.start_time, TimeStyle::TimeOnly, tz)?,
        stop_time: format_time(&record.stop_time, TimeStyle::TimeOnly, tz)?,
        event_id: language.pick(&definition.desc).to_string(),
        option_code: resolve_option_labels(definition, &record.option_code, language)?,
        desc: language.pick(&record.desc).to_string(),
    })
}

/// Like [`parse_event`], but every cell that cannot be resolved shows [`PLACEHOLDER`] instead
/// of failing the whole row.
fn parse_event_degraded(
    record: &EventRecord,
    taxonomy: &Taxonomy,
    language: Language,
    tz: &TimeZone,
) -> DisplayRow {
    let cell = |result: Result<String, Error>| {
        result.unwrap_or_else(|e| {
            tracing::warn!(id = record.id, error = %e, "unresolvable event cell");
            PLACEHOLDER.to_string()
        })
    };

    let definition = taxonomy.require(record.event_id);
    let event_id = cell(
        definition
            .as_ref()
            .map(|d| language.pick(&d.desc).to_string())
            .map_err(|_| Error::UnknownEvent(record.event_id)),
    );
    let option_code = match definition {
        Ok(d) => cell(resolve_option_labels(d, &record.option_code, language)),
        Err(_) => PLACEHOLDER.to_string(),
    };

    DisplayRow {
        key: record.id,
        video_id: record.video_id.clone(),
        date: cell(format_time(&record.start_time, TimeStyle::DateOnly, tz)),
        start_time: cell(format_time(&record.start_time, TimeStyle::TimeOnly, tz)),
        stop_time: cell(format_time(&record.stop_time, TimeStyle::TimeOnly, tz)),
        event_id,
        option_code,
        desc: language.pick(&record.desc).to_string(),
    }
}

/// Derives the event table from the raw records.
///
/// Returns `None` while the records are not loaded. Rows keep the order of `records`; a
/// frozen `window` keeps only the rows inside it. A record that cannot be fully resolved is
/// degraded to placeholder cells rather than dropped.
#[must_use]
pub fn derive_event_data(
    records: Option<&[EventRecord]>,
    taxonomy: &Taxonomy,
    language: Language,
    window: &PlaybackWindow,
    tz: &TimeZone,
) -> Option<Vec<DisplayRow>> {
    let records = records?;
    let rows = records
        .iter()
        .map(|record| {
            parse_event(record, taxonomy, language, tz)
                .unwrap_or_else(|_| parse_event_degraded(record, taxonomy, language, tz))
        })
        .filter(|row| row.is_within(window, tz))
        .collect();
    Some(rows)
}
