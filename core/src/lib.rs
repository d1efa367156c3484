// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! View-model of the annotation event table: fetches event records, labels them through the
//! event definition taxonomy, narrows them to a frozen playback window and deletes them.

mod columns;
mod config;
mod datetime;
mod definition;
mod error;
mod language;
mod row;
mod store;
mod taxonomy;
mod window;

pub use crate::columns::{COLUMN_COUNT, ColumnDef, columns};
pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{TimeStyle, combine_date_time, format_time, parse_time};
pub use crate::definition::EventDefinitionStore;
pub use crate::error::Error;
pub use crate::language::Language;
pub use crate::row::{DisplayRow, PLACEHOLDER, derive_event_data, parse_event};
pub use crate::store::{EventDataViewStore, FetchOutcome, StoreState};
pub use crate::taxonomy::{Taxonomy, flatten_options};
pub use crate::window::PlaybackWindow;

pub use vidmark_client::{
    AuthMethod, ClientConfig, ClientError, EventClient, EventDefinition, EventId, EventKey,
    EventOption, EventRecord, Localized, OptionGroup, OptionId, TimeRange,
};
