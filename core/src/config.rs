// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::tz::TimeZone;
use vidmark_client::ClientConfig;

use crate::error::Error;
use crate::language::Language;

/// The name of the vidmark application.
pub const APP_NAME: &str = "vidmark";

/// Configuration of the event table view-model.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Annotation backend to talk to.
    pub server: ClientConfig,

    /// Show English labels instead of the local language.
    #[serde(default)]
    pub display_english: bool,

    /// IANA name of the zone dates and times are displayed in. Defaults to the system zone.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl Config {
    /// Creates a configuration for the given backend with default display settings.
    #[must_use]
    pub fn new(server: ClientConfig) -> Self {
        Self {
            server,
            display_english: false,
            time_zone: None,
        }
    }

    /// The display language selected by `display_english`.
    #[must_use]
    pub const fn language(&self) -> Language {
        Language::from_display_english(self.display_english)
    }

    /// Resolves the display time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured zone is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, Error> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| Error::Config(format!("unknown time zone {name:?}: {e}"))),
            None => Ok(TimeZone::system()),
        }
    }
}
