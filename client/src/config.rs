// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend authentication method.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Basic authentication (username/password).
    #[serde(rename = "basic")]
    Basic {
        /// Username for authentication.
        username: String,
        /// Password for authentication.
        password: String,
    },
    /// Bearer token authentication.
    #[serde(rename = "bearer")]
    Bearer {
        /// Bearer token.
        token: String,
    },
}

/// Annotation backend configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:1323`.
    pub base_url: String,
    /// Path of the events resource.
    #[serde(default = "default_event_api")]
    pub event_api: String,
    /// Path of the event definition taxonomy.
    #[serde(default = "default_event_definition_api")]
    pub event_definition_api: String,
    /// Path of the health check route.
    #[serde(default = "default_ping_api")]
    pub ping_api: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_event_api() -> String {
    "/api/event".to_string()
}

fn default_event_definition_api() -> String {
    "/api/event_definition".to_string()
}

fn default_ping_api() -> String {
    "/api/ping".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("vidmark-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            event_api: default_event_api(),
            event_definition_api: default_event_definition_api(),
            ping_api: default_ping_api(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
