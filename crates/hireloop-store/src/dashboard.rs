// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard aggregator.
//!
//! [`DashboardStore::refresh`] fans out to the five section endpoints at once.
//! Each section is committed on its own: a failing branch keeps its previous
//! value and contributes to the error message, and never blocks the others.

use std::future::Future;
use std::sync::Arc;

use hireloop_core::model::{
    ActivityEvent, DashboardStats, DepartmentCount, FunnelStage, RecentApplication, TrendPoint,
    UpcomingInterview,
};
use hireloop_core::traits::dashboard::{
    DEFAULT_ACTIVITY_LIMIT, DEFAULT_UPCOMING_DAYS, DEFAULT_UPCOMING_LIMIT,
};
use hireloop_core::{DashboardService, HireloopError, TimeRange};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::query::Pagination;

/// Everything the dashboard view shows.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub time_range: TimeRange,
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEvent>,
    pub jobs_by_department: Vec<DepartmentCount>,
    pub hiring_funnel: Vec<FunnelStage>,
    pub application_trend: Vec<TrendPoint>,
    pub upcoming_interviews: Vec<UpcomingInterview>,
    pub recent_applications: Vec<RecentApplication>,
    pub applications_total: u32,
    pub pagination: Pagination,
    pub loading: bool,
    pub error: Option<String>,
}

/// Failed sections of one refresh, in the order they were checked.
#[derive(Default)]
struct Failures(Vec<(&'static str, HireloopError)>);

impl Failures {
    /// Commits `result` with `apply`, or remembers the failure.
    fn collect<T>(
        &mut self,
        section: &'static str,
        result: Result<T, HireloopError>,
        apply: impl FnOnce(T),
    ) {
        match result {
            Ok(value) => apply(value),
            Err(e) => {
                warn!(section, error = %e, "dashboard section failed");
                self.0.push((section, e));
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First failure's message, noting how many other sections failed.
    fn message(&self) -> Option<String> {
        let ((_, first), rest) = self.0.split_first()?;
        Some(match rest.len() {
            0 => first.to_string(),
            1 => format!("{first} (and 1 more section failed)"),
            n => format!("{first} (and {n} more sections failed)"),
        })
    }
}

pub struct DashboardStore {
    service: Arc<dyn DashboardService>,
    state: RwLock<DashboardState>,
}

impl DashboardStore {
    pub fn new(service: Arc<dyn DashboardService>, page_size: u32) -> Self {
        Self {
            service,
            state: RwLock::new(DashboardState {
                pagination: Pagination::new(page_size),
                ..DashboardState::default()
            }),
        }
    }

    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn time_range(&self) -> TimeRange {
        self.state.read().await.time_range
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Reloads every section for the current time range.
    ///
    /// Returns `true` when all sections loaded.
    pub async fn refresh(&self) -> bool {
        let range = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.time_range
        };
        info!(range = %range, "refreshing dashboard");

        let svc = &self.service;
        let (stats, activity, departments, funnel, trend) = futures::join!(
            svc.stats(range),
            svc.recent_activity(range, DEFAULT_ACTIVITY_LIMIT),
            svc.jobs_by_department(range),
            svc.hiring_funnel(range),
            svc.application_trend(range)
        );

        let mut failures = Failures::default();
        {
            let mut state = self.state.write().await;
            failures.collect("stats", stats, |v| state.stats = v);
            failures.collect("recent_activity", activity, |v| state.recent_activity = v);
            failures.collect("jobs_by_department", departments, |v| {
                state.jobs_by_department = v
            });
            failures.collect("hiring_funnel", funnel, |v| state.hiring_funnel = v);
            failures.collect("application_trend", trend, |v| state.application_trend = v);
        }

        let page = self.state.read().await.pagination;
        let (applications, upcoming) = futures::join!(
            svc.recent_applications(range, page.page, page.size),
            svc.upcoming_interviews(DEFAULT_UPCOMING_DAYS, DEFAULT_UPCOMING_LIMIT)
        );

        let mut state = self.state.write().await;
        failures.collect("recent_applications", applications, |v| {
            state.applications_total = v.total;
            state.recent_applications = v.applications;
        });
        failures.collect("upcoming_interviews", upcoming, |v| {
            state.upcoming_interviews = v
        });
        state.loading = false;
        state.error = failures.message();
        debug!(failed = failures.0.len(), "dashboard refresh finished");
        failures.is_empty()
    }

    /// Switches the time range and reloads.
    pub async fn set_time_range(&self, range: TimeRange) -> bool {
        {
            let mut state = self.state.write().await;
            state.time_range = range;
            state.pagination.page = 1;
        }
        self.refresh().await
    }

    pub async fn set_page(&self, page: u32) -> bool {
        self.state.write().await.pagination.page = page.max(1);
        self.fetch_recent_applications().await
    }

    pub async fn set_page_size(&self, size: u32) -> bool {
        {
            let mut state = self.state.write().await;
            state.pagination.size = size.max(1);
            state.pagination.page = 1;
        }
        self.fetch_recent_applications().await
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    /// Loads one section, committing it with `apply` on success.
    async fn section<T, Fut>(
        &self,
        name: &'static str,
        call: Fut,
        apply: impl FnOnce(&mut DashboardState, T),
    ) -> bool
    where
        Fut: Future<Output = Result<T, HireloopError>>,
    {
        self.state.write().await.loading = true;
        let result = call.await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(value) => {
                apply(&mut state, value);
                state.error = None;
                true
            }
            Err(e) => {
                warn!(section = name, error = %e, "dashboard section failed");
                state.error = Some(e.to_string());
                false
            }
        }
    }

    pub async fn fetch_stats(&self) -> bool {
        let range = self.time_range().await;
        self.section("stats", self.service.stats(range), |s, v| s.stats = v)
            .await
    }

    pub async fn fetch_recent_activity(&self, limit: u32) -> bool {
        let range = self.time_range().await;
        self.section(
            "recent_activity",
            self.service.recent_activity(range, limit),
            |s, v| s.recent_activity = v,
        )
        .await
    }

    pub async fn fetch_jobs_by_department(&self) -> bool {
        let range = self.time_range().await;
        self.section(
            "jobs_by_department",
            self.service.jobs_by_department(range),
            |s, v| s.jobs_by_department = v,
        )
        .await
    }

    pub async fn fetch_hiring_funnel(&self) -> bool {
        let range = self.time_range().await;
        self.section(
            "hiring_funnel",
            self.service.hiring_funnel(range),
            |s, v| s.hiring_funnel = v,
        )
        .await
    }

    pub async fn fetch_application_trend(&self) -> bool {
        let range = self.time_range().await;
        self.section(
            "application_trend",
            self.service.application_trend(range),
            |s, v| s.application_trend = v,
        )
        .await
    }

    pub async fn fetch_upcoming_interviews(&self, days: u32, limit: u32) -> bool {
        self.section(
            "upcoming_interviews",
            self.service.upcoming_interviews(days, limit),
            |s, v| s.upcoming_interviews = v,
        )
        .await
    }

    pub async fn fetch_recent_applications(&self) -> bool {
        let (range, page) = {
            let state = self.state.read().await;
            (state.time_range, state.pagination)
        };
        self.section(
            "recent_applications",
            self.service.recent_applications(range, page.page, page.size),
            |s, v| {
                s.applications_total = v.total;
                s.recent_applications = v.applications;
            },
        )
        .await
    }
}
