// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use vidmark_core::EventDataViewStore;

#[derive(Debug, Clone, Copy)]
pub struct CmdPing;

impl CmdPing {
    pub const NAME: &str = "ping";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Check that the annotation backend is reachable")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, store: &EventDataViewStore) -> Result<(), Box<dyn Error>> {
        let client = store.client();
        tracing::debug!(base_url = %client.config().base_url, "pinging backend...");
        let body = client.ping().await?;
        println!(
            "{} {} {}",
            "OK".green().bold(),
            client.config().base_url,
            body.trim()
        );
        Ok(())
    }
}
