// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the video annotation backend: event records, event definitions and health.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod client;
mod config;
mod error;
mod http;
mod request;
mod types;

pub use crate::client::EventClient;
pub use crate::config::{AuthMethod, ClientConfig};
pub use crate::error::ClientError;
pub use crate::request::{TimeRange, format_query_time};
pub use crate::types::{
    EventDefinition, EventId, EventKey, EventOption, EventRecord, Localized, OptionGroup, OptionId,
};
