// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job posting service.

use async_trait::async_trait;

use crate::error::HireloopError;
use crate::model::{Candidate, Job, JobPatch, JobStatus, NewJob};
use crate::types::{ListQuery, Note, RecordId};

/// Backend operations on job postings.
#[async_trait]
pub trait JobService: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, HireloopError>;

    async fn get(&self, id: &RecordId) -> Result<Job, HireloopError>;

    async fn create(&self, job: &NewJob) -> Result<Job, HireloopError>;

    /// Replaces the posting's fields. An empty `id` fails with
    /// [`HireloopError::Application`] before any request is made.
    async fn update(&self, id: &RecordId, patch: &JobPatch) -> Result<Job, HireloopError>;

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError>;

    async fn update_status(&self, id: &RecordId, status: JobStatus)
    -> Result<Job, HireloopError>;

    /// Candidates who applied to the posting.
    async fn applicants(&self, id: &RecordId) -> Result<Vec<Candidate>, HireloopError>;

    /// Raw application records for the posting.
    async fn applications(&self, id: &RecordId) -> Result<Vec<serde_json::Value>, HireloopError>;

    async fn by_department(&self, department: &str) -> Result<Vec<Job>, HireloopError>;

    /// Backend-defined aggregate counters.
    async fn statistics(&self) -> Result<serde_json::Value, HireloopError>;

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError>;

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError>;
}
