// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use tokio::sync::OnceCell;
use vidmark_client::EventClient;

use crate::error::Error;
use crate::taxonomy::Taxonomy;

/// Holds the event definition taxonomy, loading it from the backend at most once.
#[derive(Debug)]
pub struct EventDefinitionStore {
    client: EventClient,
    taxonomy: OnceCell<Arc<Taxonomy>>,
}

impl EventDefinitionStore {
    /// Creates a store whose taxonomy is loaded on first use.
    #[must_use]
    pub fn new(client: EventClient) -> Self {
        Self {
            client,
            taxonomy: OnceCell::new(),
        }
    }

    /// Creates a store with an already loaded taxonomy.
    #[must_use]
    pub fn with_taxonomy(client: EventClient, taxonomy: Taxonomy) -> Self {
        Self {
            client,
            taxonomy: OnceCell::new_with(Some(Arc::new(taxonomy))),
        }
    }

    /// Whether the taxonomy has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.taxonomy.initialized()
    }

    /// The taxonomy, if loaded.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Taxonomy>> {
        self.taxonomy.get().cloned()
    }

    /// Returns the taxonomy, loading it first if needed.
    ///
    /// Concurrent callers share a single request. A failed load leaves the store unloaded so the
    /// next call retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the definitions cannot be fetched.
    pub async fn ensure_loaded(&self) -> Result<Arc<Taxonomy>, Error> {
        let taxonomy = self
            .taxonomy
            .get_or_try_init(|| async {
                let definitions = self.client.list_event_definitions().await?;
                tracing::info!(count = definitions.len(), "event definitions loaded");
                Ok::<_, Error>(Arc::new(Taxonomy::new(definitions)))
            })
            .await?;
        Ok(Arc::clone(taxonomy))
    }
}
