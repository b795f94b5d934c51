// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure-injecting service wrapper.
//!
//! `FlakyBackend` implements all four resource service traits by delegating to
//! inner services. Operations are named `<resource>.<method>`, e.g.
//! `"dashboard.jobs_by_department"`; any of them can be made to fail or to
//! stall before answering.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use hireloop_api::{ServiceSet, TokenStore};
use hireloop_core::model::{
    ActivityEvent, Candidate, CandidatePatch, CandidateStatus, DashboardStats, DepartmentCount,
    FunnelStage, Interview, InterviewPatch, InterviewResult, InterviewStatus, Job, JobPatch,
    JobStatus, NewCandidate, NewInterview, NewJob, RecentApplicationsPage, Reschedule,
    TrendPoint, UpcomingInterview,
};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{
    CandidateService, DashboardService, HireloopError, InterviewService, JobService, ListQuery,
    Note, RecordId, TimeRange,
};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

/// Status reported by injected failures.
pub const INJECTED_STATUS: u16 = 503;

/// Services that fail or stall on demand.
pub struct FlakyBackend {
    jobs: Arc<dyn JobService>,
    candidates: Arc<dyn CandidateService>,
    interviews: Arc<dyn InterviewService>,
    dashboard: Arc<dyn DashboardService>,
    failing: Mutex<HashMap<String, String>>,
    delays: Mutex<HashMap<String, VecDeque<Duration>>>,
    calls: Mutex<Vec<String>>,
}

impl FlakyBackend {
    /// Wraps the services of `inner`.
    pub fn new(inner: &ServiceSet) -> Self {
        Self {
            jobs: inner.jobs.clone(),
            candidates: inner.candidates.clone(),
            interviews: inner.interviews.clone(),
            dashboard: inner.dashboard.clone(),
            failing: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A service set whose every service is `self`.
    pub fn services(self: &Arc<Self>, tokens: Arc<TokenStore>) -> ServiceSet {
        ServiceSet {
            jobs: self.clone(),
            candidates: self.clone(),
            interviews: self.clone(),
            dashboard: self.clone(),
            tokens,
        }
    }

    /// Makes `op` fail with a generic message until [`FlakyBackend::recover`].
    pub async fn fail(&self, op: &str) {
        self.fail_with(op, format!("Injected failure in {op}")).await;
    }

    pub async fn fail_with(&self, op: &str, message: impl Into<String>) {
        self.failing
            .lock()
            .await
            .insert(op.to_string(), message.into());
    }

    pub async fn recover(&self, op: &str) {
        self.failing.lock().await.remove(op);
    }

    /// Stalls the next call of `op` for `delay`. Queued delays are used in
    /// order, one per call.
    pub async fn delay_next(&self, op: &str, delay: Duration) {
        self.delays
            .lock()
            .await
            .entry(op.to_string())
            .or_default()
            .push_back(delay);
    }

    /// Every operation called so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self, op: &str) -> usize {
        self.calls.lock().await.iter().filter(|c| *c == op).count()
    }

    async fn guard(&self, op: &str) -> Result<(), HireloopError> {
        self.calls.lock().await.push(op.to_string());
        let delay = self
            .delays
            .lock()
            .await
            .get_mut(op)
            .and_then(VecDeque::pop_front);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.failing.lock().await.get(op).cloned() {
            debug!(op, "injecting failure");
            return Err(HireloopError::Server {
                status: INJECTED_STATUS,
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl JobService for FlakyBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, HireloopError> {
        self.guard("jobs.list").await?;
        self.jobs.list(query).await
    }

    async fn get(&self, id: &RecordId) -> Result<Job, HireloopError> {
        self.guard("jobs.get").await?;
        self.jobs.get(id).await
    }

    async fn create(&self, job: &NewJob) -> Result<Job, HireloopError> {
        self.guard("jobs.create").await?;
        self.jobs.create(job).await
    }

    async fn update(&self, id: &RecordId, patch: &JobPatch) -> Result<Job, HireloopError> {
        self.guard("jobs.update").await?;
        self.jobs.update(id, patch).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        self.guard("jobs.delete").await?;
        self.jobs.delete(id).await
    }

    async fn update_status(&self, id: &RecordId, status: JobStatus) -> Result<Job, HireloopError> {
        self.guard("jobs.update_status").await?;
        self.jobs.update_status(id, status).await
    }

    async fn applicants(&self, id: &RecordId) -> Result<Vec<Candidate>, HireloopError> {
        self.guard("jobs.applicants").await?;
        self.jobs.applicants(id).await
    }

    async fn applications(&self, id: &RecordId) -> Result<Vec<Value>, HireloopError> {
        self.guard("jobs.applications").await?;
        self.jobs.applications(id).await
    }

    async fn by_department(&self, department: &str) -> Result<Vec<Job>, HireloopError> {
        self.guard("jobs.by_department").await?;
        self.jobs.by_department(department).await
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        self.guard("jobs.statistics").await?;
        self.jobs.statistics().await
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        self.guard("jobs.notes").await?;
        self.jobs.notes(id).await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        self.guard("jobs.add_note").await?;
        self.jobs.add_note(id, note).await
    }
}

#[async_trait]
impl CandidateService for FlakyBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Candidate>, HireloopError> {
        self.guard("candidates.list").await?;
        self.candidates.list(query).await
    }

    async fn get(&self, id: &RecordId) -> Result<Candidate, HireloopError> {
        self.guard("candidates.get").await?;
        self.candidates.get(id).await
    }

    async fn create(&self, candidate: &NewCandidate) -> Result<Candidate, HireloopError> {
        self.guard("candidates.create").await?;
        self.candidates.create(candidate).await
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &CandidatePatch,
    ) -> Result<Candidate, HireloopError> {
        self.guard("candidates.update").await?;
        self.candidates.update(id, patch).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        self.guard("candidates.delete").await?;
        self.candidates.delete(id).await
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: CandidateStatus,
    ) -> Result<Candidate, HireloopError> {
        self.guard("candidates.update_status").await?;
        self.candidates.update_status(id, status).await
    }

    async fn interviews(&self, id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        self.guard("candidates.interviews").await?;
        self.candidates.interviews(id).await
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        self.guard("candidates.notes").await?;
        self.candidates.notes(id).await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        self.guard("candidates.add_note").await?;
        self.candidates.add_note(id, note).await
    }

    async fn upload_resume(
        &self,
        id: &RecordId,
        file: ResumeFile,
    ) -> Result<Candidate, HireloopError> {
        self.guard("candidates.upload_resume").await?;
        self.candidates.upload_resume(id, file).await
    }
}

#[async_trait]
impl InterviewService for FlakyBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.list").await?;
        self.interviews.list(query).await
    }

    async fn get(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        self.guard("interviews.get").await?;
        self.interviews.get(id).await
    }

    async fn create(&self, interview: &NewInterview) -> Result<Interview, HireloopError> {
        self.guard("interviews.create").await?;
        self.interviews.create(interview).await
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &InterviewPatch,
    ) -> Result<Interview, HireloopError> {
        self.guard("interviews.update").await?;
        self.interviews.update(id, patch).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        self.guard("interviews.delete").await?;
        self.interviews.delete(id).await
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: InterviewStatus,
    ) -> Result<Interview, HireloopError> {
        self.guard("interviews.update_status").await?;
        self.interviews.update_status(id, status).await
    }

    async fn add_result(
        &self,
        id: &RecordId,
        result: &InterviewResult,
    ) -> Result<Interview, HireloopError> {
        self.guard("interviews.add_result").await?;
        self.interviews.add_result(id, result).await
    }

    async fn reschedule(
        &self,
        id: &RecordId,
        slot: &Reschedule,
    ) -> Result<Interview, HireloopError> {
        self.guard("interviews.reschedule").await?;
        self.interviews.reschedule(id, slot).await
    }

    async fn cancel(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        self.guard("interviews.cancel").await?;
        self.interviews.cancel(id).await
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        self.guard("interviews.notes").await?;
        self.interviews.notes(id).await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        self.guard("interviews.add_note").await?;
        self.interviews.add_note(id, note).await
    }

    async fn upcoming(&self) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.upcoming").await?;
        self.interviews.upcoming().await
    }

    async fn today(&self) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.today").await?;
        self.interviews.today().await
    }

    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.range").await?;
        self.interviews.range(start, end).await
    }

    async fn by_candidate(
        &self,
        candidate_id: &RecordId,
    ) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.by_candidate").await?;
        self.interviews.by_candidate(candidate_id).await
    }

    async fn by_job(&self, job_id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        self.guard("interviews.by_job").await?;
        self.interviews.by_job(job_id).await
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        self.guard("interviews.statistics").await?;
        self.interviews.statistics().await
    }
}

#[async_trait]
impl DashboardService for FlakyBackend {
    async fn stats(&self, range: TimeRange) -> Result<DashboardStats, HireloopError> {
        self.guard("dashboard.stats").await?;
        self.dashboard.stats(range).await
    }

    async fn recent_activity(
        &self,
        range: TimeRange,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, HireloopError> {
        self.guard("dashboard.recent_activity").await?;
        self.dashboard.recent_activity(range, limit).await
    }

    async fn jobs_by_department(
        &self,
        range: TimeRange,
    ) -> Result<Vec<DepartmentCount>, HireloopError> {
        self.guard("dashboard.jobs_by_department").await?;
        self.dashboard.jobs_by_department(range).await
    }

    async fn hiring_funnel(&self, range: TimeRange) -> Result<Vec<FunnelStage>, HireloopError> {
        self.guard("dashboard.hiring_funnel").await?;
        self.dashboard.hiring_funnel(range).await
    }

    async fn application_trend(
        &self,
        range: TimeRange,
    ) -> Result<Vec<TrendPoint>, HireloopError> {
        self.guard("dashboard.application_trend").await?;
        self.dashboard.application_trend(range).await
    }

    async fn upcoming_interviews(
        &self,
        days: u32,
        limit: u32,
    ) -> Result<Vec<UpcomingInterview>, HireloopError> {
        self.guard("dashboard.upcoming_interviews").await?;
        self.dashboard.upcoming_interviews(days, limit).await
    }

    async fn recent_applications(
        &self,
        range: TimeRange,
        page: u32,
        size: u32,
    ) -> Result<RecentApplicationsPage, HireloopError> {
        self.guard("dashboard.recent_applications").await?;
        self.dashboard.recent_applications(range, page, size).await
    }
}
