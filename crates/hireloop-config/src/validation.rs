// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::HireloopConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first.
pub fn validate_config(config: &HireloopConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.api.version.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.version must not be empty".to_string(),
        });
    }

    if config.api.timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_ms must be greater than 0".to_string(),
        });
    }

    if config.store.page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "store.page_size must be at least 1".to_string(),
        });
    }

    if !config.auth.login_route.starts_with('/') {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.login_route `{}` must be an absolute route",
                config.auth.login_route
            ),
        });
    }

    let level = config.ui.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "ui.log_level `{}` is not one of {}",
                config.ui.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
