// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a mistyped key is
//! reported at startup instead of being silently ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Hireloop configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HireloopConfig {
    /// Backend REST API location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Bearer-token authentication.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Offline mock-data mode.
    #[serde(default)]
    pub mock: MockConfig,

    /// Entity store behaviour.
    #[serde(default)]
    pub store: StoreConfig,

    /// Presentation settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend REST API settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version segment.
    #[serde(default = "default_version")]
    pub version: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ApiConfig {
    /// Prefix every resource path is joined onto: `{base_url}/api/{version}`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            self.version.trim_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Authentication settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Attach the stored bearer token to every request.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Token file location. Defaults to `<data_dir>/hireloop/auth_token`.
    #[serde(default)]
    pub token_file: Option<PathBuf>,

    /// Where the user is sent after a 401.
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

impl AuthConfig {
    /// Resolved token file path.
    pub fn token_path(&self) -> PathBuf {
        self.token_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hireloop")
                .join("auth_token")
        })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token_file: None,
            login_route: default_login_route(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_login_route() -> String {
    "/login".to_string()
}

/// Mock-data mode settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MockConfig {
    /// Serve every resource from seeded in-memory data.
    #[serde(default)]
    pub enabled: bool,

    /// Simulated network delay per call, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    500
}

/// Entity store settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Initial page size for every store.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// After a successful write, refetch the list from the server.
    #[serde(default = "default_true")]
    pub refresh_after_write: bool,

    /// Lifetime of non-persistent notifications, in milliseconds.
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            refresh_after_write: true,
            notification_timeout_ms: default_notification_timeout_ms(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_notification_timeout_ms() -> u64 {
    5_000
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_version() {
        let api = ApiConfig {
            base_url: "https://ats.example.com/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(api.endpoint(), "https://ats.example.com/api/v1");
        assert_eq!(ApiConfig::default().endpoint(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn explicit_token_file_wins() {
        let auth = AuthConfig {
            token_file: Some(PathBuf::from("/tmp/token")),
            ..AuthConfig::default()
        };
        assert_eq!(auth.token_path(), PathBuf::from("/tmp/token"));
        assert!(AuthConfig::default().token_path().ends_with("hireloop/auth_token"));
    }
}
