// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;
use vidmark_cli::Cli;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &TempDir, server: &MockServer) -> PathBuf {
    let path = dir.path().join("config.toml");
    let content = format!(
        r#"
[core]
time_zone = "UTC"

[core.server]
base_url = "{}"
"#,
        server.uri()
    );
    std::fs::write(&path, content).unwrap();
    path
}

async fn run(config: &Path, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = vec!["vidmark", "-c", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)?.run().await
}

async fn mount_backend(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/event_definition"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "event_id": 2,
                "desc": ["跌倒", "Fall"],
                "option_groups": [{"options": [{"option_id": 3, "desc": ["甲", "A"]}]}]
            }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/event"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "ID": 5,
                "event_id": 2,
                "option_code": "3",
                "start_time": "2023-01-01T08:30:00Z",
                "stop_time": "2023-01-01T08:45:00Z",
                "desc": ["", ""],
                "video_id": "12"
            }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn event_list_loads_definitions_and_events() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    run(&config, &["event", "list", "--english"]).await.unwrap();

    let paths: Vec<_> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/api/event_definition", "/api/event"]);
}

#[tokio::test]
async fn event_list_sends_window_bounds() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    run(
        &config,
        &[
            "event",
            "list",
            "--from",
            "2023-01-01T08:00:00",
            "--to",
            "2023-01-01T09:00:00",
            "--output-format",
            "json",
        ],
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests.last().unwrap().url.query().unwrap_or_default().to_string();
    assert!(query.contains("from=2023-01-01T08%3A00%3A00%2B00%3A00"), "{query}");
    assert!(query.contains("to=2023-01-01T09%3A00%3A00%2B00%3A00"), "{query}");
}

#[tokio::test]
async fn event_list_rejects_inverted_window() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    let args = [
        "event",
        "list",
        "--from",
        "2023-01-01T09:00:00",
        "--to",
        "2023-01-01T08:00:00",
    ];
    let err = run(&config, &args).await.unwrap_err();

    assert!(err.to_string().contains("earlier"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn event_delete_sends_each_id() {
    let server = MockServer::start().await;
    for id in ["5", "7"] {
        Mock::given(method("DELETE"))
            .and(path("/api/event"))
            .and(query_param("id", id))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    run(&config, &["event", "delete", "5", "7"]).await.unwrap();
}

#[tokio::test]
async fn event_delete_reports_backend_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/event"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    let err = run(&config, &["event", "delete", "5"]).await.unwrap_err();

    assert!(err.to_string().contains("db down"));
}

#[tokio::test]
async fn definition_list_and_ping() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server);

    run(&config, &["definition", "list"]).await.unwrap();
    run(&config, &["ping"]).await.unwrap();
}
