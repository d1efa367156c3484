// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Query parameters for event requests.

use jiff::Zoned;

/// Wire format of the `from`/`to` bounds: ISO 8601 with a `±HH:MM` offset.
const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Time range filter for event queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Lower bound.
    pub from: Zoned,
    /// Upper bound.
    pub to: Zoned,
}

impl TimeRange {
    /// Creates a new time range.
    #[must_use]
    pub const fn new(from: Zoned, to: Zoned) -> Self {
        Self { from, to }
    }

    /// Query parameters understood by the events resource.
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("from", format_query_time(&self.from)),
            ("to", format_query_time(&self.to)),
        ]
    }
}

/// Formats an instant the way the backend expects it in query strings,
/// keeping the offset of its time zone.
#[must_use]
pub fn format_query_time(zdt: &Zoned) -> String {
    zdt.strftime(QUERY_TIME_FORMAT).to_string()
}
