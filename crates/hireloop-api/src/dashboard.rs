// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard projections over HTTP.

use async_trait::async_trait;
use hireloop_core::model::{
    ActivityEvent, DashboardStats, DepartmentCount, FunnelStage, RecentApplicationsPage,
    TrendPoint, UpcomingInterview,
};
use hireloop_core::{DashboardService, HireloopError, TimeRange};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::ApiClient;

/// [`DashboardService`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpDashboardService {
    client: ApiClient,
}

impl HttpDashboardService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn section<T: DeserializeOwned>(
        &self,
        section: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["dashboard", section])?
            .query(query);
        self.client.execute(req, fallback).await
    }
}

#[async_trait]
impl DashboardService for HttpDashboardService {
    async fn stats(&self, range: TimeRange) -> Result<DashboardStats, HireloopError> {
        self.section(
            "stats",
            &[("time_range", range.to_string())],
            "Failed to fetch dashboard stats",
        )
        .await
    }

    async fn recent_activity(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, HireloopError> {
        self.section(
            "recent-activity",
            &[("time_range", range.to_string()), ("limit", limit.to_string())],
            "Failed to fetch recent activity",
        )
        .await
    }

    async fn jobs_by_department(
        &self,
        range: TimeRange,
    ) -> Result<Vec<DepartmentCount>, HireloopError> {
        self.section(
            "jobs-by-department",
            &[("time_range", range.to_string())],
            "Failed to fetch jobs by department",
        )
        .await
    }

    async fn hiring_funnel(&self, range: TimeRange) -> Result<Vec<FunnelStage>, HireloopError> {
        self.section(
            "hiring-funnel",
            &[("time_range", range.to_string())],
            "Failed to fetch hiring funnel",
        )
        .await
    }

    async fn application_trend(
        &self,
        range: TimeRange,
    ) -> Result<Vec<TrendPoint>, HireloopError> {
        self.section(
            "application-trend",
            &[("time_range", range.to_string())],
            "Failed to fetch application trend",
        )
        .await
    }

    async fn upcoming_interviews(
        &self,
        days: u32,
        limit: u32,
    ) -> Result<Vec<UpcomingInterview>, HireloopError> {
        self.section(
            "upcoming-interviews",
            &[("days", days.to_string()), ("limit", limit.to_string())],
            "Failed to fetch upcoming interviews",
        )
        .await
    }

    async fn recent_applications(
        &self,
        range: TimeRange,
        page: u32,
        size: u32,
    ) -> Result<RecentApplicationsPage, HireloopError> {
        self.section(
            "recent-applications",
            &[
                ("time_range", range.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
            "Failed to fetch recent applications",
        )
        .await
    }
}
