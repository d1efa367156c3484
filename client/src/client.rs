// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the annotation backend's REST resources.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::request::TimeRange;
use crate::types::{EventDefinition, EventKey, EventRecord};

/// Client for reading and pruning annotation events.
///
/// # Example
///
/// ```ignore
/// use vidmark_client::{ClientConfig, EventClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig {
///     base_url: "http://127.0.0.1:1323".to_string(),
///     ..Default::default()
/// };
///
/// let client = EventClient::new(config)?;
/// let definitions = client.list_event_definitions().await?;
/// let events = client.list_events(None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventClient {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

impl EventClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client initialization fails.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Checks that the backend is reachable, returning the body of the health route.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn ping(&self) -> Result<String, ClientError> {
        let url = self.full_url(&self.config.ping_api);
        tracing::debug!(url = %url, "pinging backend");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        Ok(resp.text().await?)
    }

    /// Lists event records, optionally bounded by a time range.
    ///
    /// Records are returned in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of records.
    pub async fn list_events(
        &self,
        range: Option<&TimeRange>,
    ) -> Result<Vec<EventRecord>, ClientError> {
        let url = self.full_url(&self.config.event_api);
        let mut req = self.http.build_request(Method::GET, &url);
        if let Some(range) = range {
            req = req.query(&range.query_params());
        }

        tracing::debug!(url = %url, ?range, "listing events");
        let records: Vec<EventRecord> = self.get_json(req).await?;
        tracing::debug!(count = records.len(), "events received");
        Ok(records)
    }

    /// Deletes the event record with the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_event(&self, id: EventKey) -> Result<(), ClientError> {
        let url = self.full_url(&self.config.event_api);
        tracing::debug!(url = %url, id, "deleting event");
        let _ = self
            .http
            .execute(
                self.http
                    .build_request(Method::DELETE, &url)
                    .query(&[("id", id)]),
            )
            .await?;
        Ok(())
    }

    /// Lists the event definition taxonomy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of definitions.
    pub async fn list_event_definitions(&self) -> Result<Vec<EventDefinition>, ClientError> {
        let url = self.full_url(&self.config.event_definition_api);
        tracing::debug!(url = %url, "listing event definitions");
        let req = self.http.build_request(Method::GET, &url);
        self.get_json(req).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = self.http.execute(req).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Builds full URL from a resource path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
