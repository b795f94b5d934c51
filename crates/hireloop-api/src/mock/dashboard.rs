// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard projections computed from the mock records.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use hireloop_core::model::{
    ActivityEvent, ActivityKind, CandidateStatus, DashboardStats, DepartmentCount, FunnelStage,
    InterviewStatus, JobStatus, RecentApplication, RecentApplicationsPage, TrendPoint,
    UpcomingInterview, percent_change,
};
use hireloop_core::{DashboardService, HireloopError, RecordId, TimeRange};

use super::{MockBackend, MockData, now};

/// `[start, end)` of the current window and of the one before it.
type Window = (DateTime<Utc>, DateTime<Utc>);

fn windows(range: TimeRange, at: DateTime<Utc>) -> (Window, Window) {
    let span = Duration::days(range.days());
    let start = at - span;
    ((start, at), (start - span, start))
}

fn count_in<T>(
    items: &[T],
    (from, to): Window,
    when: impl Fn(&T) -> Option<DateTime<Utc>>,
    keep: impl Fn(&T) -> bool,
) -> u32 {
    items
        .iter()
        .filter(|item| keep(*item))
        .filter_map(|item| when(item))
        .filter(|t| *t >= from && *t < to)
        .count() as u32
}

fn stats(data: &MockData, range: TimeRange, at: DateTime<Utc>) -> DashboardStats {
    let (current, previous) = windows(range, at);

    let active_jobs = data
        .jobs
        .iter()
        .filter(|j| j.status == JobStatus::Active)
        .count() as u32;
    let posted = |w| {
        count_in(&data.jobs, w, |j| j.posted_date, |j| j.status == JobStatus::Active)
    };

    let applications = |w| count_in(&data.candidates, w, |c| c.applied_date, |_| true);

    let booked = |i: &hireloop_core::model::Interview| {
        matches!(i.status, InterviewStatus::Scheduled | InterviewStatus::Pending)
    };
    let interviews = |w| count_in(&data.interviews, w, |i| Some(i.scheduled_at), booked);
    let scheduled_interviews = data.interviews.iter().filter(|i| booked(*i)).count() as u32;

    let filled = |w| {
        count_in(
            &data.candidates,
            w,
            |c| c.applied_date,
            |c| c.status == CandidateStatus::Hired,
        )
    };

    DashboardStats {
        active_jobs,
        active_jobs_change: percent_change(posted(current), posted(previous)),
        new_applications: applications(current),
        applications_change: percent_change(applications(current), applications(previous)),
        scheduled_interviews,
        interviews_change: percent_change(interviews(current), interviews(previous)),
        positions_filled: filled(current),
        filled_change: percent_change(filled(current), filled(previous)),
    }
}

fn activity(data: &MockData, limit: u32) -> Vec<ActivityEvent> {
    let applications = data.candidates.iter().filter_map(|c| {
        Some(ActivityEvent {
            id: RecordId::new(format!("candidate_{}", c.id)),
            kind: match c.status {
                CandidateStatus::Hired => ActivityKind::Hire,
                CandidateStatus::Offer => ActivityKind::Offer,
                _ => ActivityKind::Application,
            },
            actor: c.name.clone(),
            action: match c.status {
                CandidateStatus::Hired => "was hired as",
                CandidateStatus::Offer => "received an offer for",
                _ => "applied for",
            }
            .to_string(),
            target: c.position.clone(),
            timestamp: c.applied_date?,
            description: None,
        })
    });
    let interviews = data.interviews.iter().map(|i| ActivityEvent {
        id: RecordId::new(format!("interview_{}", i.id)),
        kind: ActivityKind::Interview,
        actor: i.candidate_name.as_str().to_string(),
        action: "scheduled for".to_string(),
        target: i.job_title.as_str().to_string(),
        timestamp: i.created_at.unwrap_or(i.scheduled_at),
        description: None,
    });
    let postings = data.jobs.iter().filter_map(|j| {
        Some(ActivityEvent {
            id: RecordId::new(format!("job_{}", j.id)),
            kind: ActivityKind::JobPosting,
            actor: j.title.clone(),
            action: "was posted".to_string(),
            target: j.department.clone(),
            timestamp: j.posted_date.or(j.created_at)?,
            description: None,
        })
    });

    let mut events: Vec<ActivityEvent> = applications.chain(interviews).chain(postings).collect();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events.truncate(limit as usize);
    events
}

fn departments(data: &MockData) -> Vec<DepartmentCount> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for job in &data.jobs {
        *counts.entry(job.department.as_str()).or_default() += 1;
    }
    let mut out: Vec<DepartmentCount> = counts
        .into_iter()
        .map(|(department, count)| DepartmentCount {
            department: department.to_string(),
            count,
        })
        .collect();
    // Largest first; the BTreeMap already broke ties alphabetically.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

fn funnel(data: &MockData) -> Vec<FunnelStage> {
    CandidateStatus::FUNNEL
        .iter()
        .map(|stage| FunnelStage {
            stage: stage.stage_label().to_string(),
            count: data.candidates.iter().filter(|c| c.status == *stage).count() as u32,
        })
        .collect()
}

fn trend(data: &MockData, range: TimeRange, at: DateTime<Utc>) -> Vec<TrendPoint> {
    // Daily buckets for short windows, monthly otherwise.
    let format = match range {
        TimeRange::Week | TimeRange::Month => "%Y-%m-%d",
        TimeRange::Quarter | TimeRange::Year => "%Y-%m",
    };
    let start = at - Duration::days(range.days());
    let mut buckets: BTreeMap<String, TrendPoint> = BTreeMap::new();
    let mut day = start;
    while day <= at {
        let key = day.format(format).to_string();
        buckets.entry(key.clone()).or_insert(TrendPoint {
            date: key,
            applications: 0,
            interviews: 0,
            offers: 0,
        });
        day += Duration::days(1);
    }

    let slot = |when: DateTime<Utc>| {
        (when >= start && when <= at).then(|| when.format(format).to_string())
    };
    for candidate in &data.candidates {
        let Some(key) = candidate.applied_date.and_then(slot) else {
            continue;
        };
        if let Some(point) = buckets.get_mut(&key) {
            point.applications += 1;
            if candidate.status == CandidateStatus::Offer {
                point.offers += 1;
            }
        }
    }
    for interview in &data.interviews {
        if let Some(point) = slot(interview.scheduled_at).and_then(|key| buckets.get_mut(&key)) {
            point.interviews += 1;
        }
    }

    buckets.into_values().collect()
}

fn upcoming(data: &MockData, days: u32, limit: u32, at: DateTime<Utc>) -> Vec<UpcomingInterview> {
    let until = at + Duration::days(i64::from(days));
    let mut soon: Vec<_> = data
        .interviews
        .iter()
        .filter(|i| {
            i.scheduled_at >= at
                && i.scheduled_at <= until
                && !matches!(i.status, InterviewStatus::Cancelled | InterviewStatus::Completed)
        })
        .collect();
    soon.sort_by_key(|i| i.scheduled_at);
    soon.into_iter()
        .take(limit as usize)
        .map(|i| UpcomingInterview {
            id: i.id.clone(),
            candidate_name: i.candidate_name.as_str().to_string(),
            job_title: i.job_title.as_str().to_string(),
            scheduled_at: i.scheduled_at,
            kind: i.interview_type.label().to_string(),
        })
        .collect()
}

fn recent_applications(
    data: &MockData,
    range: TimeRange,
    page: u32,
    size: u32,
    at: DateTime<Utc>,
) -> RecentApplicationsPage {
    let ((from, _), _) = windows(range, at);
    let mut recent: Vec<_> = data
        .candidates
        .iter()
        .filter(|c| c.applied_date.is_some_and(|d| d >= from))
        .collect();
    recent.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
    let total = recent.len() as u32;
    let size = size.max(1) as usize;
    let start = (page.max(1) as usize - 1) * size;
    RecentApplicationsPage {
        applications: recent
            .into_iter()
            .skip(start)
            .take(size)
            .map(|c| RecentApplication {
                id: c.id.clone(),
                candidate: c.name.clone(),
                position: c.position.clone(),
                applied_date: c.applied_date,
                status: c.status.stage_label().to_string(),
            })
            .collect(),
        total,
    }
}

#[async_trait]
impl DashboardService for MockBackend {
    async fn stats(&self, range: TimeRange) -> Result<DashboardStats, HireloopError> {
        let data = self.begin().await;
        Ok(stats(&data, range, now()))
    }

    async fn recent_activity(
        &self,
        _range: TimeRange,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, HireloopError> {
        let data = self.begin().await;
        Ok(activity(&data, limit))
    }

    async fn jobs_by_department(
        &self,
        _range: TimeRange,
    ) -> Result<Vec<DepartmentCount>, HireloopError> {
        let data = self.begin().await;
        Ok(departments(&data))
    }

    async fn hiring_funnel(&self, _range: TimeRange) -> Result<Vec<FunnelStage>, HireloopError> {
        let data = self.begin().await;
        Ok(funnel(&data))
    }

    async fn application_trend(
        &self,
        range: TimeRange,
    ) -> Result<Vec<TrendPoint>, HireloopError> {
        let data = self.begin().await;
        Ok(trend(&data, range, now()))
    }

    async fn upcoming_interviews(
        &self,
        days: u32,
        limit: u32,
    ) -> Result<Vec<UpcomingInterview>, HireloopError> {
        let data = self.begin().await;
        Ok(upcoming(&data, days, limit, now()))
    }

    async fn recent_applications(
        &self,
        range: TimeRange,
        page: u32,
        size: u32,
    ) -> Result<RecentApplicationsPage, HireloopError> {
        let data = self.begin().await;
        Ok(recent_applications(&data, range, page, size, now()))
    }
}
