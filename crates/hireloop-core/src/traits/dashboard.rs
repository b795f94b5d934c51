// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard projections service.

use async_trait::async_trait;

use crate::error::HireloopError;
use crate::model::{
    ActivityEvent, DashboardStats, DepartmentCount, FunnelStage, RecentApplicationsPage,
    TrendPoint, UpcomingInterview,
};
use crate::types::TimeRange;

/// Default number of activity feed entries.
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;
/// Default look-ahead window for upcoming interviews, in days.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
/// Default number of upcoming interviews.
pub const DEFAULT_UPCOMING_LIMIT: u32 = 5;

/// Read-only dashboard endpoints.
#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn stats(&self, range: TimeRange) -> Result<DashboardStats, HireloopError>;

    async fn recent_activity(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, HireloopError>;

    async fn jobs_by_department(
        &self,
        range: TimeRange,
    ) -> Result<Vec<DepartmentCount>, HireloopError>;

    /// Stages in funnel order, Applied first.
    async fn hiring_funnel(&self, range: TimeRange) -> Result<Vec<FunnelStage>, HireloopError>;

    async fn application_trend(&self, range: TimeRange)
    -> Result<Vec<TrendPoint>, HireloopError>;

    async fn upcoming_interviews(
        &self,
        days: u32,
        limit: u32,
    ) -> Result<Vec<UpcomingInterview>, HireloopError>;

    async fn recent_applications(
        &self,
        range: TimeRange,
        page: u32,
        size: u32,
    ) -> Result<RecentApplicationsPage, HireloopError>;
}
