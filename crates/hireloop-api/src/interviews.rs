// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interviews over HTTP, translated to and from the view model.

use async_trait::async_trait;
use chrono::NaiveDate;
use hireloop_core::model::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, NewInterview, Reschedule,
};
use hireloop_core::{HireloopError, InterviewService, ListQuery, Note, RecordId};
use reqwest::{Method, RequestBuilder};
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;
use crate::wire::{CreateInterviewBody, InterviewRecord, PatchInterviewBody, RescheduleBody};

/// [`InterviewService`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpInterviewService {
    client: ApiClient,
}

impl HttpInterviewService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn one(&self, req: RequestBuilder, fallback: &str) -> Result<Interview, HireloopError> {
        let record: InterviewRecord = self.client.execute(req, fallback).await?;
        Ok(record.into())
    }

    async fn many(
        &self,
        req: RequestBuilder,
        fallback: &str,
    ) -> Result<Vec<Interview>, HireloopError> {
        let records: Vec<InterviewRecord> = self.client.execute(req, fallback).await?;
        Ok(records.into_iter().map(Interview::from).collect())
    }
}

#[async_trait]
impl InterviewService for HttpInterviewService {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Interview>, HireloopError> {
        debug!(?query, "fetching interviews");
        let req = self.client.request(Method::GET, &["interviews"])?.query(query);
        self.many(req, "Failed to fetch interviews").await
    }

    async fn get(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", id.as_str()])?;
        self.one(req, "Failed to fetch interview").await
    }

    async fn create(&self, interview: &NewInterview) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["interviews"])?
            .json(&CreateInterviewBody::from(interview));
        self.one(req, "Failed to create interview").await
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &InterviewPatch,
    ) -> Result<Interview, HireloopError> {
        if id.is_empty() {
            return Err(HireloopError::Application(
                "Interview ID is required for update".to_string(),
            ));
        }
        let req = self
            .client
            .request(Method::PUT, &["interviews", id.as_str()])?
            .json(&PatchInterviewBody::from(patch));
        self.one(req, "Failed to update interview").await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let req = self
            .client
            .request(Method::DELETE, &["interviews", id.as_str()])?;
        self.client
            .execute_empty(req, "Failed to delete interview")
            .await
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: InterviewStatus,
    ) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::PATCH, &["interviews", id.as_str(), "status"])?
            .json(&json!({ "status": status }));
        self.one(req, "Failed to update interview status").await
    }

    async fn add_result(
        &self,
        id: &RecordId,
        result: &InterviewResult,
    ) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["interviews", id.as_str(), "result"])?
            .json(result);
        self.one(req, "Failed to add interview result").await
    }

    async fn reschedule(
        &self,
        id: &RecordId,
        slot: &Reschedule,
    ) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["interviews", id.as_str(), "reschedule"])?
            .json(&RescheduleBody::from(slot));
        self.one(req, "Failed to reschedule interview").await
    }

    async fn cancel(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["interviews", id.as_str(), "cancel"])?;
        self.one(req, "Failed to cancel interview").await
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", id.as_str(), "notes"])?;
        self.client
            .execute(req, "Failed to fetch interview notes")
            .await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["interviews", id.as_str(), "notes"])?
            .json(note);
        self.client.execute(req, "Failed to add interview note").await
    }

    async fn upcoming(&self) -> Result<Vec<Interview>, HireloopError> {
        let req = self.client.request(Method::GET, &["interviews", "upcoming"])?;
        self.many(req, "Failed to fetch upcoming interviews").await
    }

    async fn today(&self) -> Result<Vec<Interview>, HireloopError> {
        let req = self.client.request(Method::GET, &["interviews", "today"])?;
        self.many(req, "Failed to fetch today's interviews").await
    }

    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Interview>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", "range"])?
            .query(&[
                ("startDate", start.format("%Y-%m-%d").to_string()),
                ("endDate", end.format("%Y-%m-%d").to_string()),
            ]);
        self.many(req, "Failed to fetch interviews in range").await
    }

    async fn by_candidate(
        &self,
        candidate_id: &RecordId,
    ) -> Result<Vec<Interview>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", "candidate", candidate_id.as_str()])?;
        self.many(req, "Failed to fetch candidate interviews").await
    }

    async fn by_job(&self, job_id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", "job", job_id.as_str()])?;
        self.many(req, "Failed to fetch job interviews").await
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["interviews", "statistics"])?;
        self.client
            .execute(req, "Failed to fetch interview statistics")
            .await
    }
}
