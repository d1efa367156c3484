// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use vidmark_core::{EventDefinition, Language, flatten_options};

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct DefinitionFormatter {
    columns: Vec<DefinitionColumn>,
    format: OutputFormat,
}

impl DefinitionFormatter {
    pub fn new(language: Language) -> Self {
        Self {
            columns: vec![
                DefinitionColumn::EventId,
                DefinitionColumn::Name(language),
                DefinitionColumn::Options(language),
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, definitions: &'a [EventDefinition]) -> Display<'a> {
        Display {
            definitions,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    definitions: &'a [EventDefinition],
    formatter: &'a DefinitionFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self.definitions).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.definitions)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum DefinitionColumn {
    EventId,
    Name(Language),
    Options(Language),
}

impl TableColumn<EventDefinition> for DefinitionColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::EventId => "ID",
            Self::Name(language) if language.is_english() => "Event",
            Self::Name(_) => "事件",
            Self::Options(language) if language.is_english() => "Options",
            Self::Options(_) => "选项",
        }
        .into()
    }

    fn format<'a>(&self, definition: &'a EventDefinition) -> Cow<'a, str> {
        match self {
            Self::EventId => definition.event_id.to_string().into(),
            Self::Name(language) => language.pick(&definition.desc).into(),
            Self::Options(language) => flatten_options(definition)
                .iter()
                .map(|option| format!("{}={}", option.option_id, language.pick(&option.desc)))
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::EventId => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
