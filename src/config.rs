use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{ClientOptions, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timer_interval_ms")]
    pub timer_interval_ms: u64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_username() -> String {
    "barkhaaroraa".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    "ghinfo-client".to_string()
}

fn default_timer_interval_ms() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            timer_interval_ms: default_timer_interval_ms(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms.max(1))
    }

    /// Client settings derived from this config plus an optional token.
    pub fn client_options(&self, token: Option<String>) -> ClientOptions {
        ClientOptions {
            base_url: self.api_base_url.clone(),
            user_agent: self.user_agent.clone(),
            token,
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/ghinfo"))
}

pub fn load_config() -> AppConfig {
    let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
        return AppConfig::default();
    };

    let Ok(contents) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };

    parse_config(&contents)
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("ignoring malformed config: {e}");
        AppConfig::default()
    })
}

/// Return candidate .env paths in priority order.
fn env_file_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = config_dir() {
        paths.push(dir.join(".env"));
    }
    paths.push(PathBuf::from(".env"));
    paths
}

/// Load `GITHUB_TOKEN`, trying .env files first.
///
/// Priority: process env > ~/.config/ghinfo/.env > cwd .env. Unauthenticated
/// requests still work, just with a lower rate limit.
pub fn load_token() -> Option<String> {
    // dotenvy does NOT overwrite existing env vars, so earlier files win.
    for path in env_file_paths() {
        if path.exists()
            && let Err(e) = dotenvy::from_path(&path)
        {
            tracing::warn!(path = %path.display(), "failed to load .env: {e}");
        }
    }

    std::env::var("GITHUB_TOKEN").ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("");
        assert_eq!(config.username, "barkhaaroraa");
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.user_agent, "ghinfo-client");
        assert_eq!(config.timer_interval(), Duration::from_secs(1));
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = parse_config(
            r#"
            username = "octocat"
            request_timeout_secs = 5
            "#,
        );
        assert_eq!(config.username, "octocat");
        assert_eq!(config.user_agent, "ghinfo-client");
        let options = config.client_options(Some("tok".into()));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.token.as_deref(), Some("tok"));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let config = parse_config("username = [not toml");
        assert_eq!(config.username, "barkhaaroraa");
    }
}
