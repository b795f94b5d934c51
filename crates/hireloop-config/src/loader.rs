// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./hireloop.toml` > `~/.config/hireloop/hireloop.toml` >
//! `/etc/hireloop/hireloop.toml`, with `HIRELOOP_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::HireloopConfig;

/// Config sections, used to map `HIRELOOP_<SECTION>_<KEY>` onto `section.key`.
const SECTIONS: [&str; 5] = ["api", "auth", "mock", "store", "ui"];

pub const SYSTEM_CONFIG: &str = "/etc/hireloop/hireloop.toml";
pub const LOCAL_CONFIG: &str = "hireloop.toml";

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hireloop/hireloop.toml`
/// 3. `~/.config/hireloop/hireloop.toml`
/// 4. `./hireloop.toml`
/// 5. `HIRELOOP_*` environment variables
pub fn load_config() -> Result<HireloopConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<HireloopConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HireloopConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HireloopConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HireloopConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HireloopConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// `~/.config/hireloop/hireloop.toml`, when a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("hireloop").join("hireloop.toml"))
}

/// Maps `HIRELOOP_STORE_PAGE_SIZE` to `store.page_size`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// keys that contain underscores survive intact.
fn env_provider() -> Env {
    Env::prefixed("HIRELOOP_").map(|key| {
        let key_str = key.as_str();
        for section in SECTIONS {
            if let Some(rest) = key_str
                .strip_prefix(section)
                .and_then(|r| r.strip_prefix('_'))
            {
                return format!("{section}.{rest}").into();
            }
        }
        key_str.to_string().into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_map_into_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("HIRELOOP_STORE_PAGE_SIZE", "25");
            jail.set_env("HIRELOOP_API_BASE_URL", "https://ats.example.com");
            jail.set_env("HIRELOOP_MOCK_ENABLED", "true");

            let config: HireloopConfig = Figment::new()
                .merge(Serialized::defaults(HireloopConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.store.page_size, 25);
            assert_eq!(config.api.base_url, "https://ats.example.com");
            assert!(config.mock.enabled);
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG, "[ui]\ndark_mode = true\n")?;
            let config = load_config_from_path(Path::new(LOCAL_CONFIG))?;
            assert!(config.ui.dark_mode);
            assert_eq!(config.api.version, "v1");
            Ok(())
        });
    }
}
