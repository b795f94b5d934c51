// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interview service.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::HireloopError;
use crate::model::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, NewInterview, Reschedule,
};
use crate::types::{ListQuery, Note, RecordId};

/// Backend operations on interviews, in view-model shape.
#[async_trait]
pub trait InterviewService: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Interview>, HireloopError>;

    async fn get(&self, id: &RecordId) -> Result<Interview, HireloopError>;

    /// Schedules an interview, filling create defaults for absent fields.
    async fn create(&self, interview: &NewInterview) -> Result<Interview, HireloopError>;

    /// Partial update; absent fields are not sent.
    async fn update(
        &self,
        id: &RecordId,
        patch: &InterviewPatch,
    ) -> Result<Interview, HireloopError>;

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError>;

    async fn update_status(
        &self,
        id: &RecordId,
        status: InterviewStatus,
    ) -> Result<Interview, HireloopError>;

    async fn add_result(
        &self,
        id: &RecordId,
        result: &InterviewResult,
    ) -> Result<Interview, HireloopError>;

    async fn reschedule(
        &self,
        id: &RecordId,
        slot: &Reschedule,
    ) -> Result<Interview, HireloopError>;

    async fn cancel(&self, id: &RecordId) -> Result<Interview, HireloopError>;

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError>;

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError>;

    async fn upcoming(&self) -> Result<Vec<Interview>, HireloopError>;

    async fn today(&self) -> Result<Vec<Interview>, HireloopError>;

    /// Interviews scheduled between two dates, both inclusive.
    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Interview>, HireloopError>;

    async fn by_candidate(&self, candidate_id: &RecordId)
    -> Result<Vec<Interview>, HireloopError>;

    async fn by_job(&self, job_id: &RecordId) -> Result<Vec<Interview>, HireloopError>;

    async fn statistics(&self) -> Result<serde_json::Value, HireloopError>;
}
