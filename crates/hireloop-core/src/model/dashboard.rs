// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only dashboard projections.
//!
//! These are not persisted entities; the backend computes them on every call.
//! Field names follow the camelCase wire shape of the dashboard endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{RecordId, timestamp};

/// Headline counters plus their percentage change against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub active_jobs: u32,
    pub active_jobs_change: i32,
    pub new_applications: u32,
    pub applications_change: i32,
    pub scheduled_interviews: u32,
    pub interviews_change: i32,
    pub positions_filled: u32,
    pub filled_change: i32,
}

/// Percentage change between two period counts, rounded.
///
/// Growth from zero counts as 100%.
pub fn percent_change(current: u32, previous: u32) -> i32 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    let change = (f64::from(current) - f64::from(previous)) / f64::from(previous) * 100.0;
    change.round() as i32
}

/// Kind of an activity feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Application,
    Interview,
    Hire,
    Offer,
    JobPosting,
    #[serde(other)]
    Other,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Who did it, e.g. the candidate name.
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub action: String,
    /// What it was done to, e.g. the job title.
    #[serde(default)]
    pub target: String,
    #[serde(deserialize_with = "timestamp::required")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActivityEvent {
    /// One-line summary, `actor action target`.
    pub fn summary(&self) -> String {
        if let Some(description) = &self.description {
            return description.clone();
        }
        [self.actor.as_str(), self.action.as_str(), self.target.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One bar of the jobs-by-department histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u32,
}

/// One stage of the hiring funnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u32,
}

/// One time bucket of the application trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    #[serde(default)]
    pub applications: u32,
    #[serde(default)]
    pub interviews: u32,
    #[serde(default)]
    pub offers: u32,
}

/// Interview summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingInterview {
    pub id: RecordId,
    #[serde(default, alias = "candidate")]
    pub candidate_name: String,
    #[serde(default, alias = "position")]
    pub job_title: String,
    #[serde(deserialize_with = "timestamp::required")]
    pub scheduled_at: DateTime<Utc>,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Application summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplication {
    pub id: RecordId,
    #[serde(default)]
    pub candidate: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub applied_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

/// A page of recent applications.
///
/// Some backends answer with a bare list, others with
/// `{applications, total}`; both deserialize here.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecentApplicationsPage {
    pub applications: Vec<RecentApplication>,
    pub total: u32,
}

impl<'de> Deserialize<'de> for RecentApplicationsPage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Paged {
                applications: Vec<RecentApplication>,
                #[serde(default)]
                total: Option<u32>,
            },
            Bare(Vec<RecentApplication>),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Paged {
                applications,
                total,
            } => {
                let total = total.unwrap_or(applications.len() as u32);
                Self {
                    applications,
                    total,
                }
            }
            Shape::Bare(applications) => Self {
                total: applications.len() as u32,
                applications,
            },
        })
    }
}
