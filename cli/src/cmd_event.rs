// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use vidmark_core::{EventDataViewStore, EventKey, Language, PlaybackWindow, parse_time};

use crate::arg::{CommonArgs, EventArgs, OutputFormat};
use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub language: Option<Language>,
    pub window: Option<(String, String)>,
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the annotation events")
            .arg(CommonArgs::english())
            .arg(CommonArgs::local())
            .arg(EventArgs::from())
            .arg(EventArgs::to())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            language: CommonArgs::get_language(matches),
            window: EventArgs::get_window(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, store: &EventDataViewStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        if let Some(language) = self.language {
            store.set_language(language);
        }
        if let Some(window) = self.playback_window(store)? {
            store.set_window(window);
        }

        store.fetch_all_data().await?;

        let rows = store.event_data().unwrap_or_default();
        if rows.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(store.columns()).with_output_format(self.output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }

    fn playback_window(
        &self,
        store: &EventDataViewStore,
    ) -> Result<Option<PlaybackWindow>, Box<dyn Error>> {
        let Some((from, to)) = &self.window else {
            return Ok(None);
        };

        let begin = parse_time(from, store.time_zone())?;
        let end = parse_time(to, store.time_zone())?;
        if begin >= end {
            return Err(format!("--from ({from}) must be earlier than --to ({to})").into());
        }
        Ok(Some(PlaybackWindow::frozen(begin, end)))
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub ids: Vec<EventKey>,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete annotation events by ID")
            .arg(EventArgs::ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: EventArgs::get_ids(matches),
        }
    }

    pub async fn run(self, store: &EventDataViewStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting events...");
        for id in self.ids {
            store.delete_event_by_id(id).await?;
            println!("{} event {}", "Deleted".green(), format!("#{id}").bold());
        }
        Ok(())
    }
}
