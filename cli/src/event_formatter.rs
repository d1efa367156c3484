// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use vidmark_core::{ColumnDef, DisplayRow, PLACEHOLDER};

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        Self {
            columns: columns.into_iter().map(EventColumn).collect(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [DisplayRow]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [DisplayRow],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.rows).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.rows))
            }
        }
    }
}

/// A column of the event table, titled and keyed by the store.
#[derive(Debug, Clone)]
pub struct EventColumn(ColumnDef);

impl TableColumn<DisplayRow> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        self.0.title.into()
    }

    fn format<'a>(&self, row: &'a DisplayRow) -> Cow<'a, str> {
        row.cell(self.0.data_index).unwrap_or_default()
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.0.key {
            "key" | "videoID" => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &DisplayRow) -> Option<Color> {
        match row.cell(self.0.data_index) {
            Some(cell) if cell == PLACEHOLDER => Some(Color::Yellow),
            _ if self.0.key == "key" => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
