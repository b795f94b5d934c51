// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate service.

use async_trait::async_trait;

use crate::error::HireloopError;
use crate::model::{Candidate, CandidatePatch, CandidateStatus, Interview, NewCandidate};
use crate::types::{ListQuery, Note, RecordId};

/// A resume file to attach to a candidate.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Backend operations on candidates.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Lists candidates. Status, department and search are applied server-side.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Candidate>, HireloopError>;

    async fn get(&self, id: &RecordId) -> Result<Candidate, HireloopError>;

    async fn create(&self, candidate: &NewCandidate) -> Result<Candidate, HireloopError>;

    async fn update(
        &self,
        id: &RecordId,
        patch: &CandidatePatch,
    ) -> Result<Candidate, HireloopError>;

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError>;

    async fn update_status(
        &self,
        id: &RecordId,
        status: CandidateStatus,
    ) -> Result<Candidate, HireloopError>;

    async fn interviews(&self, id: &RecordId) -> Result<Vec<Interview>, HireloopError>;

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError>;

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError>;

    /// Uploads a resume and returns the updated candidate.
    async fn upload_resume(
        &self,
        id: &RecordId,
        file: ResumeFile,
    ) -> Result<Candidate, HireloopError>;
}
