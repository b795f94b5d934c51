// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted bearer token.
//!
//! The token lives in a single file (by default under the platform data dir)
//! and is mirrored in memory as a [`SecretString`] so it never shows up in
//! `Debug` output or logs.

use std::path::{Path, PathBuf};

use hireloop_core::HireloopError;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use tracing::debug;

/// Bearer token storage shared by the HTTP client and the session state.
#[derive(Debug)]
pub struct TokenStore {
    path: Option<PathBuf>,
    token: RwLock<Option<SecretString>>,
}

impl TokenStore {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            token: RwLock::new(None),
        }
    }

    /// Opens the token file at `path`, reading the token if one was saved.
    ///
    /// A missing file is not an error; it just means nobody is signed in.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, HireloopError> {
        let path = path.into();
        let token = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if !raw.trim().is_empty() => Some(SecretString::from(raw.trim().to_string())),
            Ok(_) => None,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(HireloopError::Storage { source: Box::new(e) }),
        };
        debug!(path = %path.display(), present = token.is_some(), "token store loaded");
        Ok(Self {
            path: Some(path),
            token: RwLock::new(token),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn is_present(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// `Bearer <token>` for the `Authorization` header, if a token is stored.
    pub async fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }

    /// Stores a new token, replacing any previous one.
    pub async fn save(&self, token: SecretString) -> Result<(), HireloopError> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| HireloopError::Storage { source: Box::new(e) })?;
            }
            tokio::fs::write(path, token.expose_secret())
                .await
                .map_err(|e| HireloopError::Storage { source: Box::new(e) })?;
        }
        *self.token.write().await = Some(token);
        Ok(())
    }

    /// Forgets the token in memory and on disk.
    pub async fn clear(&self) -> Result<(), HireloopError> {
        *self.token.write().await = None;
        if let Some(path) = &self.path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(HireloopError::Storage { source: Box::new(e) }),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("auth_token");

        let store = TokenStore::load(&path).await.unwrap();
        assert!(!store.is_present().await);

        store.save(SecretString::from("abc123".to_string())).await.unwrap();
        assert_eq!(store.bearer().await.as_deref(), Some("Bearer abc123"));

        let reopened = TokenStore::load(&path).await.unwrap();
        assert_eq!(reopened.bearer().await.as_deref(), Some("Bearer abc123"));

        reopened.clear().await.unwrap();
        assert!(!path.exists());
        assert!(reopened.bearer().await.is_none());
        // Clearing twice is fine.
        reopened.clear().await.unwrap();
    }

    #[tokio::test]
    async fn debug_output_hides_the_token() {
        let store = TokenStore::in_memory();
        store.save(SecretString::from("very-secret".to_string())).await.unwrap();
        assert!(!format!("{store:?}").contains("very-secret"));
    }
}
