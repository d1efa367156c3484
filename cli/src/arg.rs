// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use vidmark_core::{EventKey, Language};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn english() -> Arg {
        arg!(-e --english "Show English labels, overriding the configured language")
    }

    pub fn get_english(matches: &ArgMatches) -> bool {
        matches.get_flag("english")
    }

    pub fn local() -> Arg {
        arg!(-l --local "Show local-language labels, overriding the configured language")
            .conflicts_with("english")
    }

    pub fn get_local(matches: &ArgMatches) -> bool {
        matches.get_flag("local")
    }

    /// The language asked for on the command line, if any.
    pub fn get_language(matches: &ArgMatches) -> Option<Language> {
        if Self::get_english(matches) {
            Some(Language::English)
        } else if Self::get_local(matches) {
            Some(Language::Local)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn ids() -> Arg {
        arg!(id: <ID> "The ID of the event record")
            .value_parser(value_parser!(EventKey))
            .num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<EventKey> {
        matches
            .get_many::<EventKey>("id")
            .into_iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn from() -> Arg {
        arg!(--from <TIME> "Start of the playback window, e.g. 2023-01-01T08:00:00")
            .requires("to")
    }

    pub fn to() -> Arg {
        arg!(--to <TIME> "End of the playback window, e.g. 2023-01-01T09:00:00").requires("from")
    }

    pub fn get_window(matches: &ArgMatches) -> Option<(String, String)> {
        let from = matches.get_one::<String>("from")?;
        let to = matches.get_one::<String>("to")?;
        Some((from.clone(), to.clone()))
    }
}
