// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard fan-out with per-section failure isolation.

use hireloop_core::TimeRange;
use hireloop_core::model::CandidateStatus;
use hireloop_store::Stores;
use hireloop_test_utils::TestHarness;

fn stores(harness: &TestHarness) -> Stores {
    Stores::new(&harness.services, &harness.config)
}

#[tokio::test]
async fn full_refresh_fills_every_section() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);

    assert!(stores.dashboard.refresh().await);

    let state = stores.dashboard.state().await;
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert_eq!(state.stats.active_jobs, 4);
    assert!(!state.recent_activity.is_empty());
    assert!(!state.jobs_by_department.is_empty());
    let stages: Vec<&str> = state.hiring_funnel.iter().map(|s| s.stage.as_str()).collect();
    let expected: Vec<&str> = CandidateStatus::FUNNEL.iter().map(|s| s.stage_label()).collect();
    assert_eq!(stages, expected);
    assert!(!state.application_trend.is_empty());
    assert!(!state.upcoming_interviews.is_empty());
    assert!(!state.recent_applications.is_empty());
}

#[tokio::test]
async fn one_failing_branch_keeps_the_other_sections() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    assert!(stores.dashboard.refresh().await);
    let previous = stores.dashboard.state().await.jobs_by_department;

    harness.flaky.fail("dashboard.jobs_by_department").await;
    assert!(!stores.dashboard.set_time_range(TimeRange::Week).await);

    let state = stores.dashboard.state().await;
    assert_eq!(state.time_range, TimeRange::Week);
    assert_eq!(
        state.error.as_deref(),
        Some("Injected failure in dashboard.jobs_by_department")
    );
    assert_eq!(state.jobs_by_department, previous);
    assert_eq!(state.stats.active_jobs, 4);
    assert_eq!(state.application_trend.len(), 8);
    assert!(!state.loading);
}

#[tokio::test]
async fn failing_branch_on_first_load_leaves_section_empty() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    harness.flaky.fail("dashboard.jobs_by_department").await;

    assert!(!stores.dashboard.refresh().await);

    let state = stores.dashboard.state().await;
    assert!(state.jobs_by_department.is_empty());
    assert!(state.stats.active_jobs > 0);
    assert!(!state.recent_activity.is_empty());
    assert!(!state.hiring_funnel.is_empty());
    assert!(!state.application_trend.is_empty());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn several_failures_are_counted_in_one_message() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    harness.flaky.fail("dashboard.stats").await;
    harness.flaky.fail("dashboard.upcoming_interviews").await;

    assert!(!stores.dashboard.refresh().await);
    assert_eq!(
        stores.dashboard.error().await.as_deref(),
        Some("Injected failure in dashboard.stats (and 1 more section failed)")
    );
    assert!(!stores.dashboard.state().await.hiring_funnel.is_empty());
}

#[tokio::test]
async fn recent_applications_follow_the_page_cursor() {
    let harness = TestHarness::builder().with_page_size(3).build();
    let stores = stores(&harness);

    assert!(stores.dashboard.fetch_recent_applications().await);
    let first = stores.dashboard.state().await;
    assert_eq!(first.applications_total, 6);
    assert_eq!(first.recent_applications.len(), 3);

    assert!(stores.dashboard.set_page(2).await);
    let second = stores.dashboard.state().await;
    assert_eq!(second.pagination.page, 2);
    assert_eq!(second.recent_applications.len(), 3);
    assert_ne!(second.recent_applications[0].id, first.recent_applications[0].id);

    assert!(stores.dashboard.set_page_size(10).await);
    let resized = stores.dashboard.state().await;
    assert_eq!(resized.pagination.page, 1);
    assert_eq!(resized.recent_applications.len(), 6);
}

#[tokio::test]
async fn single_section_fetch_reports_its_own_error() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    harness.flaky.fail("dashboard.hiring_funnel").await;

    assert!(!stores.dashboard.fetch_hiring_funnel().await);
    assert!(stores.dashboard.error().await.is_some());

    assert!(stores.dashboard.fetch_stats().await);
    assert!(stores.dashboard.error().await.is_none());
    assert!(stores.dashboard.fetch_upcoming_interviews(1, 5).await);
    assert_eq!(stores.dashboard.state().await.upcoming_interviews.len(), 1);
}
