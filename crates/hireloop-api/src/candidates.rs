// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidates over HTTP.

use async_trait::async_trait;
use hireloop_core::model::{Candidate, CandidatePatch, CandidateStatus, Interview, NewCandidate};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{CandidateService, HireloopError, ListQuery, Note, RecordId};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::client::ApiClient;
use crate::wire::InterviewRecord;

/// [`CandidateService`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpCandidateService {
    client: ApiClient,
}

impl HttpCandidateService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CandidateService for HttpCandidateService {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Candidate>, HireloopError> {
        debug!(?query, "fetching candidates");
        let req = self.client.request(Method::GET, &["candidates"])?.query(query);
        self.client.execute(req, "Failed to fetch candidates").await
    }

    async fn get(&self, id: &RecordId) -> Result<Candidate, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["candidates", id.as_str()])?;
        self.client.execute(req, "Failed to fetch candidate").await
    }

    async fn create(&self, candidate: &NewCandidate) -> Result<Candidate, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["candidates"])?
            .json(candidate);
        self.client.execute(req, "Failed to create candidate").await
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &CandidatePatch,
    ) -> Result<Candidate, HireloopError> {
        if id.is_empty() {
            return Err(HireloopError::Application(
                "Candidate ID is required for update".to_string(),
            ));
        }
        let req = self
            .client
            .request(Method::PUT, &["candidates", id.as_str()])?
            .json(patch);
        self.client.execute(req, "Failed to update candidate").await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let req = self
            .client
            .request(Method::DELETE, &["candidates", id.as_str()])?;
        self.client
            .execute_empty(req, "Failed to delete candidate")
            .await
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: CandidateStatus,
    ) -> Result<Candidate, HireloopError> {
        // This endpoint takes the status as a query parameter, not a body.
        let req = self
            .client
            .request(Method::PATCH, &["candidates", id.as_str(), "status"])?
            .query(&[("status", status.to_string())]);
        self.client
            .execute(req, "Failed to update candidate status")
            .await
    }

    async fn interviews(&self, id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["candidates", id.as_str(), "interviews"])?;
        let records: Vec<InterviewRecord> = self
            .client
            .execute(req, "Failed to fetch candidate interviews")
            .await?;
        Ok(records.into_iter().map(Interview::from).collect())
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["candidates", id.as_str(), "notes"])?;
        self.client
            .execute(req, "Failed to fetch candidate notes")
            .await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["candidates", id.as_str(), "notes"])?
            .json(note);
        self.client.execute(req, "Failed to add candidate note").await
    }

    async fn upload_resume(
        &self,
        id: &RecordId,
        file: ResumeFile,
    ) -> Result<Candidate, HireloopError> {
        let size = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| {
                HireloopError::Application(format!("invalid resume content type: {e}"))
            })?;
        debug!(candidate = %id, size, "uploading resume");
        let req = self
            .client
            .request(Method::POST, &["candidates", id.as_str(), "resume"])?
            .multipart(Form::new().part("resume", part));
        self.client.execute(req, "Failed to upload resume").await
    }
}
