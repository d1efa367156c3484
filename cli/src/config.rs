// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;
use vidmark_core::{APP_NAME, Config as CoreConfig};

const VIDMARK_CONFIG_ENV: &str = "VIDMARK_CONFIG";

/// Locates and reads the configuration.
///
/// The file is the one given on the command line, else the one named by `VIDMARK_CONFIG`, else
/// `vidmark/config.toml` in the user configuration directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(VIDMARK_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(APP_NAME).join("config.toml");
        if !config.exists() {
            return Err(format!(
                "No config found at: {} (use --config or {VIDMARK_CONFIG_ENV})",
                config.display()
            )
            .into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e))?;
    Ok(raw.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::OnceLock;

    use tempfile::TempDir;
    use tokio::sync::Mutex;
    use vidmark_core::{AuthMethod, Language};

    use super::*;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(path: &Path, base_url: &str) {
        let content = format!(
            r#"
[core]
display_english = true
time_zone = "UTC"

[core.server]
base_url = "{base_url}"
"#
        );
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn reads_core_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[core]
time_zone = "Asia/Shanghai"

[core.server]
base_url = "http://127.0.0.1:1323"
event_api = "/v2/event"
timeout_secs = 5

[core.server.auth]
type = "bearer"
token = "secret"
"#,
        )
        .unwrap();

        let config = parse_config(Some(path)).await.unwrap();

        assert_eq!(config.server.base_url, "http://127.0.0.1:1323");
        assert_eq!(config.server.event_api, "/v2/event");
        assert_eq!(config.server.event_definition_api, "/api/event_definition");
        assert_eq!(config.server.timeout_secs, 5);
        assert!(matches!(config.server.auth, AuthMethod::Bearer { .. }));
        assert_eq!(config.language(), Language::Local);
        assert_eq!(config.time_zone.as_deref(), Some("Asia/Shanghai"));
    }

    #[tokio::test]
    async fn rejects_config_without_core_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server]\nbase_url = \"http://localhost\"\n").unwrap();

        let err = parse_config(Some(path)).await.unwrap_err();

        assert!(err.to_string().contains("Invalid config file"));
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = temp_dir.path().join("cli.toml");
        write_config(&cli_path, "http://cli");
        let env_path = temp_dir.path().join("env.toml");
        write_config(&env_path, "http://env");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(VIDMARK_CONFIG_ENV, &env_path);
        }

        let config = parse_config(Some(cli_path)).await.unwrap();

        unsafe {
            std::env::remove_var(VIDMARK_CONFIG_ENV);
        }
        assert_eq!(config.server.base_url, "http://cli");
        assert_eq!(config.language(), Language::English);
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let default_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_dir).unwrap();
        write_config(&default_dir.join("config.toml"), "http://default");
        let env_path = temp_dir.path().join("env.toml");
        write_config(&env_path, "http://env");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            std::env::set_var(VIDMARK_CONFIG_ENV, &env_path);
        }

        let config = parse_config(None).await.unwrap();

        unsafe {
            std::env::remove_var(VIDMARK_CONFIG_ENV);
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert_eq!(config.server.base_url, "http://env");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_dir).unwrap();
        write_config(&default_dir.join("config.toml"), "http://default");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(VIDMARK_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert_eq!(config.server.base_url, "http://default");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn returns_error_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(VIDMARK_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let result = parse_config(None).await;

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        let err = result.unwrap_err().to_string();
        assert!(err.contains("No config found"));
        assert!(err.contains(VIDMARK_CONFIG_ENV));
    }
}
