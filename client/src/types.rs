// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};

/// Primary key of an event record (`ID` on the wire).
pub type EventKey = i64;

/// Identifier of an event kind in the definition taxonomy.
pub type EventId = i64;

/// Identifier of an option inside an event definition.
pub type OptionId = i64;

/// A text available in the local language (slot 0) and in English (slot 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized([String; 2]);

impl Localized {
    /// Creates a localized text from both translations.
    #[must_use]
    pub fn new(local: impl Into<String>, english: impl Into<String>) -> Self {
        Self([local.into(), english.into()])
    }

    /// Returns the local-language text.
    #[must_use]
    pub fn local(&self) -> &str {
        let [local, _] = &self.0;
        local
    }

    /// Returns the English text.
    #[must_use]
    pub fn english(&self) -> &str {
        let [_, english] = &self.0;
        english
    }

    /// Returns the English text if `english` is set, the local one otherwise.
    #[must_use]
    pub fn pick(&self, english: bool) -> &str {
        match english {
            true => self.english(),
            false => self.local(),
        }
    }
}

/// An event record as returned by the events resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Primary key.
    #[serde(rename = "ID")]
    pub id: EventKey,
    /// Event kind, resolved through the definition taxonomy.
    pub event_id: EventId,
    /// Comma-separated option codes, e.g. `"3,7"`.
    pub option_code: String,
    /// Start timestamp.
    pub start_time: String,
    /// Stop timestamp.
    pub stop_time: String,
    /// Free-form note.
    #[serde(default)]
    pub desc: Localized,
    /// Video the event was recorded on.
    #[serde(deserialize_with = "string_or_number")]
    pub video_id: String,
}

/// An event kind of the taxonomy served by the definition resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    /// Event kind identifier.
    pub event_id: EventId,
    /// Label of the event kind.
    pub desc: Localized,
    /// Option groups of this event kind.
    #[serde(default)]
    pub option_groups: Vec<OptionGroup>,
}

/// A group of options of an event definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Options in this group.
    #[serde(default)]
    pub options: Vec<EventOption>,
}

/// A selectable option of an event definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    /// Option identifier, referenced by [`EventRecord::option_code`].
    pub option_id: OptionId,
    /// Label of the option.
    pub desc: Localized,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
