// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::language::Language;

/// Number of columns of the event table.
pub const COLUMN_COUNT: usize = 8;

/// A column descriptor of the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Localized header.
    pub title: &'static str,
    /// Field of [`crate::DisplayRow`] shown in this column.
    #[serde(rename = "dataIndex")]
    pub data_index: &'static str,
    /// Stable column key.
    pub key: &'static str,
}

/// (key, English title, local title)
const COLUMNS: [(&str, &str, &str); COLUMN_COUNT] = [
    ("key", "ID", "ID"),
    ("videoID", "Video ID", "视频编号"),
    ("date", "Date", "日期"),
    ("startTime", "Event Start Time", "开始时间"),
    ("stopTime", "Event Stop Time", "结束时间"),
    ("eventID", "Event ID", "事件编号"),
    ("optionCode", "Event Details", "事件细节"),
    ("desc", "Note", "备注"),
];

/// The columns of the event table, titled in the given language.
#[must_use]
pub fn columns(language: Language) -> [ColumnDef; COLUMN_COUNT] {
    COLUMNS.map(|(key, english, local)| ColumnDef {
        title: if language.is_english() { english } else { local },
        data_index: key,
        key,
    })
}
