// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use async_trait::async_trait;
use hireloop_core::model::{Candidate, CandidatePatch, CandidateStatus, Interview, NewCandidate};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{CandidateService, HireloopError, ListQuery, Note, RecordId};

use super::{
    MockBackend, contains_ci, find, find_mut, notes_key, now, page, remove, stamp_note,
};

const CANDIDATE: &str = "Candidate";

fn matches(candidate: &Candidate, query: &ListQuery) -> bool {
    if let Some(status) = &query.status {
        match CandidateStatus::from_str(status) {
            Ok(status) if candidate.status == status => {}
            _ => return false,
        }
    }
    if let Some(department) = &query.department
        && candidate.department != *department
    {
        return false;
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !(contains_ci(&candidate.name, &needle)
            || contains_ci(&candidate.email, &needle)
            || contains_ci(&candidate.position, &needle))
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl CandidateService for MockBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Candidate>, HireloopError> {
        let data = self.begin().await;
        let candidates = data
            .candidates
            .iter()
            .filter(|c| matches(c, query))
            .cloned()
            .collect();
        Ok(page(candidates, query))
    }

    async fn get(&self, id: &RecordId) -> Result<Candidate, HireloopError> {
        let data = self.begin().await;
        find(&data.candidates, id, CANDIDATE).cloned()
    }

    async fn create(&self, new: &NewCandidate) -> Result<Candidate, HireloopError> {
        let mut data = self.begin().await;
        let candidate = Candidate {
            id: data.allocate_id(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            position: new.position.clone(),
            department: new.department.clone(),
            status: new.status,
            applied_date: Some(now()),
            resume_url: new.resume_url.clone(),
            photo_url: new.photo_url.clone(),
            notes: new.notes.clone(),
            skills: new.skills.clone(),
        };
        if let Some(job) = data.jobs.iter_mut().find(|j| j.title == candidate.position) {
            job.applicants += 1;
        }
        data.candidates.insert(0, candidate.clone());
        Ok(candidate)
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
        let mut data = self.begin().await;
        let candidate = find_mut(&mut data.candidates, id, CANDIDATE)?;
        patch.apply_to(candidate);
        Ok(candidate.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let mut data = self.begin().await;
        remove(&mut data.candidates, id, CANDIDATE)
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: CandidateStatus,
    ) -> Result<Candidate, HireloopError> {
        let mut data = self.begin().await;
        let candidate = find_mut(&mut data.candidates, id, CANDIDATE)?;
        candidate.status = status;
        Ok(candidate.clone())
    }

    async fn interviews(&self, id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        Ok(data
            .interviews
            .iter()
            .filter(|i| i.candidate_id == *id)
            .cloned()
            .collect())
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let data = self.begin().await;
        find(&data.candidates, id, CANDIDATE)?;
        Ok(data
            .notes
            .get(&notes_key("candidates", id))
            .cloned()
            .unwrap_or_default())
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let mut data = self.begin().await;
        find(&data.candidates, id, CANDIDATE)?;
        Ok(stamp_note(&mut data, "candidates", id, note))
    }

    async fn upload_resume(
        &self,
        id: &RecordId,
        file: ResumeFile,
    ) -> Result<Candidate, HireloopError> {
        let mut data = self.begin().await;
        let candidate = find_mut(&mut data.candidates, id, CANDIDATE)?;
        candidate.resume_url = Some(format!(
            "https://files.example.com/resumes/{id}/{}",
            file.file_name
        ));
        Ok(candidate.clone())
    }
}
