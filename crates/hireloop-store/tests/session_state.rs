// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session state against a file-backed token store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use hireloop_api::TokenStore;
use hireloop_core::{ListQuery, RecordId};
use hireloop_store::{NotificationKind, Session, Stores, User};
use hireloop_test_utils::TestHarness;
use secrecy::SecretString;

#[tokio::test]
async fn sign_in_persists_token_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hireloop").join("auth_token");

    let tokens = Arc::new(TokenStore::load(&path).await.unwrap());
    let session = Session::new(tokens, false, 5000);
    let user = User {
        id: RecordId::from(3_i64),
        username: "recruiter".into(),
        role: "recruiter".into(),
    };
    assert!(session.sign_in(user, SecretString::from("abc.def".to_string())).await);
    assert!(!session.is_admin().await);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc.def");

    let reopened = Arc::new(TokenStore::load(&path).await.unwrap());
    let later = Session::new(reopened, false, 5000);
    assert!(later.is_authenticated().await);
    assert!(later.username().await.is_none());

    assert!(later.sign_out().await);
    assert!(!path.exists());
}

#[tokio::test]
async fn store_failure_becomes_an_error_toast() {
    let harness = TestHarness::seeded();
    let stores = Stores::new(&harness.services, &harness.config);
    harness.flaky.fail("jobs.list").await;

    if !stores.jobs.fetch_all(ListQuery::default()).await
        && let Some(message) = stores.jobs.error().await
    {
        stores.session.notify_error(message).await;
    }

    let toasts = stores.session.notifications().await;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].message, "Injected failure in jobs.list");
    assert_eq!(
        toasts[0].timeout_ms,
        harness.config.store.notification_timeout_ms
    );

    let later = Utc::now() + Duration::milliseconds(toasts[0].timeout_ms as i64 + 1);
    assert_eq!(stores.session.expire(later).await, 1);
    assert!(stores.session.notifications().await.is_empty());
}
