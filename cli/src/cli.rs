// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;
use vidmark_core::{APP_NAME, EventDataViewStore};

use crate::cmd_definition::CmdDefinitionList;
use crate::cmd_event::{CmdEventDelete, CmdEventList};
use crate::cmd_ping::CmdPing;
use crate::config::parse_config;

/// Run the vidmark command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse and prune video annotation events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $VIDMARK_CONFIG, then \
$XDG_CONFIG_HOME/vidmark/config.toml on Linux and MacOS, %APPDATA%/vidmark/config.toml on \
Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Browse and delete annotation events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventDelete::command()),
            )
            .subcommand(
                Command::new("definition")
                    .alias("d")
                    .about("Browse the event definitions")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdDefinitionList::command()),
            )
            .subcommand(CmdPing::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{DefinitionList, EventDelete, EventList, Ping};
        let command = match matches.subcommand() {
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventDelete::NAME, matches)) => EventDelete(CmdEventDelete::from(matches)),
                _ => return Err("Unknown event command".into()),
            },
            Some(("definition", matches)) => match matches.subcommand() {
                Some((CmdDefinitionList::NAME, matches)) => {
                    DefinitionList(CmdDefinitionList::from(matches))
                }
                _ => return Err("Unknown definition command".into()),
            },
            Some((CmdPing::NAME, matches)) => Ping(CmdPing::from(matches)),
            _ => return Err("Unknown command".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List events
    EventList(CmdEventList),

    /// Delete events
    EventDelete(CmdEventDelete),

    /// List event definitions
    DefinitionList(CmdDefinitionList),

    /// Check the backend
    Ping(CmdPing),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::{DefinitionList, EventDelete, EventList, Ping};
        match self {
            EventList(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventDelete(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            DefinitionList(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Ping(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a EventDataViewStore) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let store = EventDataViewStore::from_config(&config)?;
        f(&store).await
    }
}
