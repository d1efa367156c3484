// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use jiff::tz::TimeZone;
use tokio::sync::watch;
use vidmark_client::{EventClient, EventDefinition, EventId, EventKey, EventRecord};

use crate::columns::{COLUMN_COUNT, ColumnDef, columns};
use crate::config::Config;
use crate::definition::EventDefinitionStore;
use crate::error::Error;
use crate::language::Language;
use crate::row::{DisplayRow, derive_event_data};
use crate::window::PlaybackWindow;

/// Observable state of an [`EventDataViewStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    /// Records of the last applied fetch, `None` until one succeeds.
    pub events: Option<Vec<EventRecord>>,

    /// Language of the derived views.
    pub language: Language,

    /// Playback window of the video.
    pub window: PlaybackWindow,

    /// Message of the last failed action, cleared by the next successful one.
    pub last_error: Option<String>,

    /// Generation of the last issued fetch.
    issued: u64,

    /// Generation of the last applied fetch.
    applied: u64,

    /// Deleted keys, with the last generation issued when their deletion was confirmed.
    tombstones: Vec<(EventKey, u64)>,
}

impl StoreState {
    /// Whether a fetch has been applied.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.events.is_some()
    }

    /// Table columns titled in the current language.
    #[must_use]
    pub fn columns(&self) -> [ColumnDef; COLUMN_COUNT] {
        columns(self.language)
    }
}

/// What became of a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the records.
    Applied,

    /// A newer fetch was applied first, so the response was discarded.
    Superseded,
}

/// View-model of the event table.
///
/// Holds the raw records fetched from the backend and derives the display rows from them
/// together with the event definition taxonomy, the display language and the playback
/// window. Every mutation is a single transition of a [`watch`] channel, so subscribers never
/// observe a partially applied action.
#[derive(Debug)]
pub struct EventDataViewStore {
    client: EventClient,
    definitions: Arc<EventDefinitionStore>,
    time_zone: TimeZone,
    state: watch::Sender<StoreState>,
}

impl EventDataViewStore {
    /// Creates an unloaded store.
    #[must_use]
    pub fn new(
        client: EventClient,
        definitions: Arc<EventDefinitionStore>,
        time_zone: TimeZone,
    ) -> Self {
        Self {
            client,
            definitions,
            time_zone,
            state: watch::Sender::new(StoreState::default()),
        }
    }

    /// Creates an unloaded store from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or the time zone is unknown.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let client = EventClient::new(config.server.clone())?;
        let definitions = Arc::new(EventDefinitionStore::new(client.clone()));
        let store = Self::new(client, definitions, config.time_zone()?);
        store.set_language(config.language());
        Ok(store)
    }

    /// The backend client.
    #[must_use]
    pub const fn client(&self) -> &EventClient {
        &self.client
    }

    /// The event definition store this view depends on.
    #[must_use]
    pub fn definitions(&self) -> &Arc<EventDefinitionStore> {
        &self.definitions
    }

    /// Zone dates and times are displayed in.
    #[must_use]
    pub const fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// The raw records of the last applied fetch.
    #[must_use]
    pub fn event_query_result(&self) -> Option<Vec<EventRecord>> {
        self.state.borrow().events.clone()
    }

    /// Table columns titled in the current language.
    #[must_use]
    pub fn columns(&self) -> [ColumnDef; COLUMN_COUNT] {
        self.state.borrow().columns()
    }

    /// Display rows derived from the current state, `None` until events are loaded.
    #[must_use]
    pub fn event_data(&self) -> Option<Vec<DisplayRow>> {
        let taxonomy = self.definitions.get().unwrap_or_default();
        let state = self.state.borrow();
        derive_event_data(
            state.events.as_deref(),
            &taxonomy,
            state.language,
            &state.window,
            &self.time_zone,
        )
    }

    /// The loaded definition of an event kind.
    #[must_use]
    pub fn find_event_definition_by_event_id(&self, event_id: EventId) -> Option<EventDefinition> {
        self.definitions
            .get()?
            .find_event_definition_by_event_id(event_id)
            .cloned()
    }

    /// Switches the display language. Derived views change, nothing is fetched.
    pub fn set_language(&self, language: Language) {
        self.state.send_if_modified(|s| {
            let changed = s.language != language;
            s.language = language;
            changed
        });
    }

    /// Replaces the playback window. Affects filtering now and request bounds of later fetches.
    pub fn set_window(&self, window: PlaybackWindow) {
        self.state.send_if_modified(|s| {
            let changed = s.window != window;
            s.window = window;
            changed
        });
    }

    /// Fetches the event records, bounded by the window when it is frozen.
    ///
    /// The response replaces the records unless a fetch issued later has already been applied.
    /// Records deleted while the request was in flight are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the records are left unchanged and the failure
    /// is recorded in [`StoreState::last_error`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch_event_data(&self) -> Result<FetchOutcome, Error> {
        let mut generation = 0;
        let mut range = None;
        self.state.send_if_modified(|s| {
            s.issued += 1;
            generation = s.issued;
            range = s.window.time_range();
            false
        });

        let records = match self.client.list_events(range.as_ref()).await {
            Ok(records) => records,
            Err(e) => {
                self.record_failure(generation, &e);
                return Err(e.into());
            }
        };

        let mut outcome = FetchOutcome::Superseded;
        self.state.send_if_modified(|s| {
            if generation <= s.applied {
                return false;
            }

            let mut records = records;
            records.retain(|r| {
                !s.tombstones
                    .iter()
                    .any(|&(id, at)| id == r.id && generation <= at)
            });

            s.applied = generation;
            s.tombstones.retain(|&(_, at)| at > generation);
            s.events = Some(records);
            s.last_error = None;
            outcome = FetchOutcome::Applied;
            true
        });

        match outcome {
            FetchOutcome::Applied => tracing::debug!(generation, "event records replaced"),
            FetchOutcome::Superseded => {
                tracing::debug!(generation, "discarding superseded event records");
            }
        }
        Ok(outcome)
    }

    /// Loads the event definition taxonomy if needed, then fetches the event records.
    ///
    /// The records are never requested before the taxonomy is available.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_all_data(&self) -> Result<FetchOutcome, Error> {
        if !self.definitions.is_loaded() {
            tracing::debug!("loading event definitions first");
        }

        if let Err(e) = self.definitions.ensure_loaded().await {
            self.record_error(&e);
            return Err(e);
        }

        self.fetch_event_data().await
    }

    /// Deletes an event on the backend, then drops it from the records without re-fetching.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the records are left unchanged and the failure
    /// is recorded in [`StoreState::last_error`].
    #[tracing::instrument(skip(self))]
    pub async fn delete_event_by_id(&self, id: EventKey) -> Result<(), Error> {
        if let Err(e) = self.client.delete_event(id).await {
            self.record_error(&e);
            return Err(e.into());
        }

        self.state.send_modify(|s| {
            if let Some(events) = &mut s.events {
                events.retain(|r| r.id != id);
            }
            if s.issued > s.applied {
                s.tombstones.push((id, s.issued));
            }
            s.last_error = None;
        });
        tracing::debug!(id, "event deleted");
        Ok(())
    }

    /// Records a fetch failure unless a newer fetch has already been applied.
    fn record_failure(&self, generation: u64, error: &dyn fmt::Display) {
        if generation > self.state.borrow().applied {
            self.record_error(error);
        } else {
            tracing::debug!(generation, error = %error, "ignoring failure of superseded fetch");
        }
    }

    fn record_error(&self, error: &dyn fmt::Display) {
        tracing::warn!(error = %error, "event table action failed");
        let message = error.to_string();
        self.state.send_modify(|s| s.last_error = Some(message));
    }
}
