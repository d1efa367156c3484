// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of vidmark: browse and prune video annotation events.

mod arg;
mod cli;
mod cmd_definition;
mod cmd_event;
mod cmd_ping;
mod config;
mod definition_formatter;
mod event_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
