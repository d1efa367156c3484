// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! Provides backend fixtures served by wiremock and a store wired to them.

use std::sync::Arc;
use std::time::Duration;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;
use serde_json::{Value, json};
use vidmark_core::{
    ClientConfig, EventClient, EventDataViewStore, EventDefinition, EventDefinitionStore, Taxonomy,
};
use wiremock::MockServer;

/// The taxonomy served by the fake backend: event 2 with options 3 (甲/A) and 7 (乙/B).
pub fn definitions_json() -> Value {
    json!([
        {
            "event_id": 2,
            "desc": ["跌倒", "Fall"],
            "option_groups": [
                {"options": [{"option_id": 3, "desc": ["甲", "A"]}]},
                {"options": [{"option_id": 7, "desc": ["乙", "B"]}]}
            ]
        }
    ])
}

/// A raw event record of kind 2 selecting options 3 and 7.
pub fn record_json(id: i64, start: &str, stop: &str) -> Value {
    json!({
        "ID": id,
        "event_id": 2,
        "option_code": "3,7",
        "start_time": start,
        "stop_time": stop,
        "desc": ["备注", "note"],
        "video_id": 12
    })
}

/// Three records inside 2023-01-01T00:00Z..01:00Z, keyed 4, 5 and 6.
pub fn events_json() -> Value {
    json!([
        record_json(4, "2023-01-01T00:10:00Z", "2023-01-01T00:20:00Z"),
        record_json(5, "2023-01-01T00:30:00Z", "2023-01-01T00:45:00Z"),
        record_json(6, "2023-01-01T00:50:00Z", "2023-01-01T00:55:00Z"),
    ])
}

pub fn utc(s: &str) -> Zoned {
    s.parse::<Timestamp>().unwrap().to_zoned(TimeZone::UTC)
}

fn test_client(server: &MockServer) -> EventClient {
    EventClient::new(ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

/// A store talking to `server`, displaying in UTC, with the taxonomy not yet loaded.
pub fn test_store(server: &MockServer) -> EventDataViewStore {
    let client = test_client(server);
    let definitions = Arc::new(EventDefinitionStore::new(client.clone()));
    EventDataViewStore::new(client, definitions, TimeZone::UTC)
}

/// Like [`test_store`], but the taxonomy of [`definitions_json`] is already in place.
pub fn preloaded_store(server: &MockServer) -> EventDataViewStore {
    let client = test_client(server);
    let definitions: Vec<EventDefinition> = serde_json::from_value(definitions_json()).unwrap();
    let definitions = Arc::new(EventDefinitionStore::with_taxonomy(
        client.clone(),
        Taxonomy::new(definitions),
    ));
    EventDataViewStore::new(client, definitions, TimeZone::UTC)
}

/// Waits until `server` has received at least `n` requests.
pub async fn wait_for_requests(server: &MockServer, n: usize) {
    for _ in 0..400 {
        let received = server.received_requests().await.map_or(0, |r| r.len());
        if received >= n {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("server did not receive {n} requests");
}

/// Paths of the requests received by `server`, in arrival order.
pub async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}
