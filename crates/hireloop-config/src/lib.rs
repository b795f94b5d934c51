// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for Hireloop.
//!
//! TOML files in the usual places, `HIRELOOP_*` environment overrides, strict
//! unknown-key rejection, and miette diagnostics with typo suggestions.
//!
//! ```no_run
//! let config = hireloop_config::load_and_validate().expect("config errors");
//! println!("backend: {}", config.api.endpoint());
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ApiConfig, AuthConfig, HireloopConfig, MockConfig, StoreConfig, UiConfig};

/// Loads the layered configuration and validates it.
pub fn load_and_validate() -> Result<HireloopConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Loads and validates a single TOML document on top of the defaults.
pub fn load_and_validate_str(toml_content: &str) -> Result<HireloopConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Loads and validates an explicit file, with env overrides.
pub fn load_and_validate_path(
    path: &std::path::Path,
) -> Result<HireloopConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

#[allow(clippy::result_large_err)]
fn finish(
    loaded: Result<HireloopConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<HireloopConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                endpoint = %config.api.endpoint(),
                mock = config.mock.enabled,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Contents of every config file that exists, for source spans.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut candidates = vec![std::path::PathBuf::from(loader::SYSTEM_CONFIG)];
    candidates.extend(loader::user_config_path());
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(loader::LOCAL_CONFIG));
    }

    candidates
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
