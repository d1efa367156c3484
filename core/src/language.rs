// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use vidmark_client::Localized;

/// Display language of the event table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// The local language, slot 0 of every localized text.
    #[default]
    Local,

    /// English, slot 1 of every localized text.
    English,
}

impl Language {
    /// Maps the `display_english` flag to a language.
    #[must_use]
    pub const fn from_display_english(display_english: bool) -> Self {
        if display_english {
            Self::English
        } else {
            Self::Local
        }
    }

    /// Whether this is English.
    #[must_use]
    pub const fn is_english(self) -> bool {
        matches!(self, Self::English)
    }

    /// Picks the translation of `text` for this language.
    #[must_use]
    pub fn pick(self, text: &Localized) -> &str {
        text.pick(self.is_english())
    }
}
