// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global session state: loading and error flags, theme, toast
//! notifications, and the signed-in user.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use hireloop_api::TokenStore;
use hireloop_core::RecordId;
use rand::Rng;
use rand::distributions::Alphanumeric;
use secrecy::SecretString;
use serde::Serialize;
use strum::{Display, EnumString};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// `<unix millis>-<random suffix>`.
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Persistent notifications survive [`Session::expire`].
    pub persistent: bool,
    pub timeout_ms: u64,
}

impl Notification {
    /// True once a non-persistent notification has outlived its timeout.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.persistent
            && now - self.created_at >= Duration::milliseconds(self.timeout_ms as i64)
    }
}

/// What a caller supplies to [`Session::notify`].
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub persistent: bool,
    /// Falls back to the session default.
    pub timeout_ms: Option<u64>,
}

impl NewNotification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            persistent: false,
            timeout_ms: None,
        }
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub loading: bool,
    pub error: Option<String>,
    pub dark_mode: bool,
    pub notifications: Vec<Notification>,
    pub user: Option<User>,
}

/// Cross-cutting state shared by every view.
pub struct Session {
    state: RwLock<SessionState>,
    tokens: Arc<TokenStore>,
    notification_timeout_ms: u64,
}

fn notification_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect();
    format!("{}-{}", now.timestamp_millis(), suffix.to_lowercase())
}

impl Session {
    pub fn new(tokens: Arc<TokenStore>, dark_mode: bool, notification_timeout_ms: u64) -> Self {
        Self {
            state: RwLock::new(SessionState {
                dark_mode,
                ..SessionState::default()
            }),
            tokens,
            notification_timeout_ms,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn set_loading(&self, loading: bool) {
        self.state.write().await.loading = loading;
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn set_error(&self, error: impl Into<String>) {
        self.state.write().await.error = Some(error.into());
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn dark_mode(&self) -> bool {
        self.state.read().await.dark_mode
    }

    /// Flips the theme and returns the new value.
    pub async fn toggle_dark_mode(&self) -> bool {
        let mut state = self.state.write().await;
        state.dark_mode = !state.dark_mode;
        state.dark_mode
    }

    // --- notifications ---

    /// Queues a notification and returns its id.
    pub async fn notify(&self, new: NewNotification) -> String {
        let now = Utc::now();
        let notification = Notification {
            id: notification_id(now),
            kind: new.kind,
            title: new.title,
            message: new.message,
            created_at: now,
            persistent: new.persistent,
            timeout_ms: new.timeout_ms.unwrap_or(self.notification_timeout_ms),
        };
        let id = notification.id.clone();
        self.state.write().await.notifications.push(notification);
        id
    }

    /// Error toast for a failed store action.
    pub async fn notify_error(&self, message: impl Into<String>) -> String {
        let message = message.into();
        warn!(%message, "action failed");
        self.notify(NewNotification::new(NotificationKind::Error, "Error", message))
            .await
    }

    pub async fn notify_success(&self, message: impl Into<String>) -> String {
        self.notify(NewNotification::new(
            NotificationKind::Success,
            "Success",
            message,
        ))
        .await
    }

    /// Drops the notification with `id`. Returns whether it existed.
    pub async fn remove_notification(&self, id: &str) -> bool {
        let mut state = self.state.write().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| n.id != id);
        state.notifications.len() != before
    }

    pub async fn clear_notifications(&self) {
        self.state.write().await.notifications.clear();
    }

    /// Drops expired notifications and returns how many went.
    pub async fn expire(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.state.write().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| !n.is_expired(now));
        before - state.notifications.len()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    // --- user ---

    /// Records the user and persists their token.
    pub async fn sign_in(&self, user: User, token: SecretString) -> bool {
        if let Err(e) = self.tokens.save(token).await {
            warn!(error = %e, "could not persist token");
            self.set_error(e.to_string()).await;
            return false;
        }
        info!(username = %user.username, "signed in");
        let mut state = self.state.write().await;
        state.user = Some(user);
        state.error = None;
        true
    }

    /// Forgets the user and the stored token.
    pub async fn sign_out(&self) -> bool {
        self.state.write().await.user = None;
        match self.tokens.clear().await {
            Ok(()) => {
                info!("signed out");
                true
            }
            Err(e) => {
                warn!(error = %e, "could not remove stored token");
                self.set_error(e.to_string()).await;
                false
            }
        }
    }

    /// A user is recorded, or a token from an earlier sign-in is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some() || self.tokens.is_present().await
    }

    pub async fn is_admin(&self) -> bool {
        self.state
            .read()
            .await
            .user
            .as_ref()
            .is_some_and(User::is_admin)
    }

    pub async fn username(&self) -> Option<String> {
        self.state.read().await.user.as_ref().map(|u| u.username.clone())
    }

    pub async fn user_id(&self) -> Option<RecordId> {
        self.state.read().await.user.as_ref().map(|u| u.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(TokenStore::in_memory()), false, 5000)
    }

    #[tokio::test]
    async fn notifications_expire_unless_persistent() {
        let session = session();
        let short = session
            .notify(NewNotification::new(NotificationKind::Info, "Saved", "Job saved"))
            .await;
        let pinned = session
            .notify(
                NewNotification::new(NotificationKind::Warning, "Heads up", "Offline")
                    .persistent(),
            )
            .await;
        assert_ne!(short, pinned);

        let now = Utc::now();
        assert_eq!(session.expire(now).await, 0);
        assert_eq!(session.expire(now + Duration::seconds(6)).await, 1);
        let left = session.notifications().await;
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, pinned);
        assert!(session.remove_notification(&pinned).await);
        assert!(!session.remove_notification(&pinned).await);
    }

    #[tokio::test]
    async fn notification_ids_carry_timestamp_and_suffix() {
        let session = session();
        let id = session.notify_error("Failed to fetch jobs").await;
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 7);
        let n = &session.notifications().await[0];
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.timeout_ms, 5000);
    }

    #[tokio::test]
    async fn sign_in_and_out() {
        let session = session();
        assert!(!session.is_authenticated().await);
        let user = User {
            id: RecordId::from(1_i64),
            username: "alice".into(),
            role: "Admin".into(),
        };
        assert!(session.sign_in(user, SecretString::from("tok-123".to_string())).await);
        assert!(session.is_authenticated().await);
        assert!(session.is_admin().await);
        assert_eq!(session.username().await.as_deref(), Some("alice"));

        assert!(session.sign_out().await);
        assert!(!session.is_authenticated().await);
        assert!(session.user_id().await.is_none());
    }

    #[tokio::test]
    async fn dark_mode_toggles() {
        let session = Session::new(Arc::new(TokenStore::in_memory()), true, 5000);
        assert!(!session.toggle_dark_mode().await);
        assert!(session.toggle_dark_mode().await);
    }
}
