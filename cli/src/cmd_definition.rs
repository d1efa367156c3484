// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use vidmark_core::{EventDataViewStore, Language};

use crate::arg::{CommonArgs, OutputFormat};
use crate::definition_formatter::DefinitionFormatter;

#[derive(Debug, Clone)]
pub struct CmdDefinitionList {
    pub language: Option<Language>,
    pub output_format: OutputFormat,
}

impl CmdDefinitionList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the event definitions and their options")
            .arg(CommonArgs::english())
            .arg(CommonArgs::local())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            language: CommonArgs::get_language(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, store: &EventDataViewStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing event definitions...");
        let taxonomy = store.definitions().ensure_loaded().await?;
        let language = self.language.unwrap_or(store.snapshot().language);

        let formatter = DefinitionFormatter::new(language).with_output_format(self.output_format);
        print!("{}", formatter.format(taxonomy.definitions()));
        Ok(())
    }
}
