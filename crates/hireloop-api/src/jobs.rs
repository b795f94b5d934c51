// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job postings over HTTP. Payloads pass through unchanged.

use async_trait::async_trait;
use hireloop_core::model::{Candidate, Job, JobPatch, JobStatus, NewJob};
use hireloop_core::{HireloopError, JobService, ListQuery, Note, RecordId};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;

/// [`JobService`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpJobService {
    client: ApiClient,
}

impl HttpJobService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobService for HttpJobService {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, HireloopError> {
        debug!(?query, "fetching jobs");
        let req = self.client.request(Method::GET, &["jobs"])?.query(query);
        self.client.execute(req, "Failed to fetch jobs").await
    }

    async fn get(&self, id: &RecordId) -> Result<Job, HireloopError> {
        let req = self.client.request(Method::GET, &["jobs", id.as_str()])?;
        self.client.execute(req, "Failed to fetch job").await
    }

    async fn create(&self, job: &NewJob) -> Result<Job, HireloopError> {
        let req = self.client.request(Method::POST, &["jobs"])?.json(job);
        self.client.execute(req, "Failed to create job").await
    }

    async fn update(&self, id: &RecordId, patch: &JobPatch) -> Result<Job, HireloopError> {
        if id.is_empty() {
            return Err(HireloopError::Application(
                "Job ID is required for update".to_string(),
            ));
        }
        // The id travels in the path only; the body never carries it.
        let req = self
            .client
            .request(Method::PUT, &["jobs", id.as_str()])?
            .json(patch);
        self.client.execute(req, "Failed to update job").await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let req = self.client.request(Method::DELETE, &["jobs", id.as_str()])?;
        self.client.execute_empty(req, "Failed to delete job").await
    }

    async fn update_status(&self, id: &RecordId, status: JobStatus) -> Result<Job, HireloopError> {
        let req = self
            .client
            .request(Method::PATCH, &["jobs", id.as_str(), "status"])?
            .json(&json!({ "status": status }));
        self.client.execute(req, "Failed to update job status").await
    }

    async fn applicants(&self, id: &RecordId) -> Result<Vec<Candidate>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["jobs", id.as_str(), "applicants"])?;
        self.client.execute(req, "Failed to fetch applicants").await
    }

    async fn applications(&self, id: &RecordId) -> Result<Vec<Value>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["jobs", id.as_str(), "applications"])?;
        self.client.execute(req, "Failed to fetch applications").await
    }

    async fn by_department(&self, department: &str) -> Result<Vec<Job>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["jobs", "department", department])?;
        self.client
            .execute(req, "Failed to fetch jobs by department")
            .await
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        let req = self.client.request(Method::GET, &["jobs", "statistics"])?;
        self.client
            .execute(req, "Failed to fetch job statistics")
            .await
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let req = self
            .client
            .request(Method::GET, &["jobs", id.as_str(), "notes"])?;
        self.client.execute(req, "Failed to fetch job notes").await
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let req = self
            .client
            .request(Method::POST, &["jobs", id.as_str(), "notes"])?
            .json(note);
        self.client.execute(req, "Failed to add job note").await
    }
}
