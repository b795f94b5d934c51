// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use hireloop_core::model::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, NewInterview, Reschedule,
};
use hireloop_core::{HireloopError, InterviewService, ListQuery, Note, RecordId, Snapshot};
use serde_json::{Value, json};

use super::{
    MockBackend, contains_ci, find, find_mut, notes_key, now, page, remove, stamp_note,
};
use crate::wire::{UNNAMED_CANDIDATE, UNNAMED_INTERVIEWER, UNNAMED_POSITION};

const INTERVIEW: &str = "Interview";

fn matches(interview: &Interview, query: &ListQuery) -> bool {
    if let Some(status) = &query.status {
        match InterviewStatus::from_str(status) {
            Ok(status) if interview.status == status => {}
            _ => return false,
        }
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !(contains_ci(interview.candidate_name.as_str(), &needle)
            || contains_ci(interview.job_title.as_str(), &needle)
            || contains_ci(&interview.description, &needle))
        {
            return false;
        }
    }
    true
}

fn filtered(
    interviews: &[Interview],
    keep: impl Fn(&Interview) -> bool,
) -> Vec<Interview> {
    let mut out: Vec<Interview> = interviews.iter().filter(|i| keep(*i)).cloned().collect();
    out.sort_by_key(|i| i.scheduled_at);
    out
}

#[async_trait]
impl InterviewService for MockBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        let interviews = data
            .interviews
            .iter()
            .filter(|i| matches(i, query))
            .cloned()
            .collect();
        Ok(page(interviews, query))
    }

    async fn get(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        let data = self.begin().await;
        find(&data.interviews, id, INTERVIEW).cloned()
    }

    async fn create(&self, new: &NewInterview) -> Result<Interview, HireloopError> {
        let mut data = self.begin().await;

        // Names are copied now and never refreshed afterwards.
        let candidate_name = Some(new.candidate_name.clone())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                data.candidates
                    .iter()
                    .find(|c| c.id == new.candidate_id)
                    .map(|c| c.name.clone())
            })
            .unwrap_or_else(|| UNNAMED_CANDIDATE.to_string());
        let job_title = Some(new.job_title.clone())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                data.jobs
                    .iter()
                    .find(|j| j.id == new.job_id)
                    .map(|j| j.title.clone())
            })
            .unwrap_or_else(|| UNNAMED_POSITION.to_string());

        let interview = Interview {
            id: data.allocate_id(),
            candidate_id: new.candidate_id.clone(),
            candidate_name: Snapshot::captured(candidate_name),
            job_id: new.job_id.clone(),
            job_title: Snapshot::captured(job_title),
            interview_type: new.interview_type.clone(),
            interviewer_id: new.interviewer_id.clone(),
            interviewer: if new.interviewer.is_empty() {
                UNNAMED_INTERVIEWER.to_string()
            } else {
                new.interviewer.clone()
            },
            status: new.status.unwrap_or_default(),
            scheduled_at: new.scheduled_at,
            duration: new.duration.unwrap_or(NewInterview::DEFAULT_DURATION),
            location: new.location.clone(),
            meeting_link: new.meeting_link.clone(),
            description: new.description.clone().unwrap_or_default(),
            result: None,
            created_at: Some(now()),
            updated_at: None,
        };
        if let Some(job) = data.jobs.iter_mut().find(|j| j.id == new.job_id) {
            job.interviews += 1;
        }
        data.interviews.insert(0, interview.clone());
        Ok(interview)
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
        let mut data = self.begin().await;
        let interview = find_mut(&mut data.interviews, id, INTERVIEW)?;
        patch.apply_to(interview);
        interview.updated_at = Some(now());
        Ok(interview.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let mut data = self.begin().await;
        remove(&mut data.interviews, id, INTERVIEW)
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: InterviewStatus,
    ) -> Result<Interview, HireloopError> {
        let mut data = self.begin().await;
        let interview = find_mut(&mut data.interviews, id, INTERVIEW)?;
        interview.status = status;
        interview.updated_at = Some(now());
        Ok(interview.clone())
    }

    async fn add_result(
        &self,
        id: &RecordId,
        result: &InterviewResult,
    ) -> Result<Interview, HireloopError> {
        if !(1..=5).contains(&result.rating) {
            return Err(HireloopError::validation(vec![hireloop_core::FieldError {
                path: "body.rating".to_string(),
                message: "ensure this value is between 1 and 5".to_string(),
            }]));
        }
        let mut data = self.begin().await;
        let interview = find_mut(&mut data.interviews, id, INTERVIEW)?;
        interview.result = Some(result.clone());
        interview.status = InterviewStatus::Completed;
        interview.updated_at = Some(now());
        Ok(interview.clone())
    }

    async fn reschedule(
        &self,
        id: &RecordId,
        slot: &Reschedule,
    ) -> Result<Interview, HireloopError> {
        let mut data = self.begin().await;
        let interview = find_mut(&mut data.interviews, id, INTERVIEW)?;
        interview.scheduled_at = slot.scheduled_at;
        if let Some(duration) = slot.duration {
            interview.duration = duration;
        }
        interview.status = InterviewStatus::Scheduled;
        interview.updated_at = Some(now());
        Ok(interview.clone())
    }

    async fn cancel(&self, id: &RecordId) -> Result<Interview, HireloopError> {
        let mut data = self.begin().await;
        let interview = find_mut(&mut data.interviews, id, INTERVIEW)?;
        interview.status = InterviewStatus::Cancelled;
        interview.updated_at = Some(now());
        Ok(interview.clone())
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let data = self.begin().await;
        find(&data.interviews, id, INTERVIEW)?;
        Ok(data
            .notes
            .get(&notes_key("interviews", id))
            .cloned()
            .unwrap_or_default())
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let mut data = self.begin().await;
        find(&data.interviews, id, INTERVIEW)?;
        Ok(stamp_note(&mut data, "interviews", id, note))
    }

    async fn upcoming(&self) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        let now = now();
        Ok(filtered(&data.interviews, |i| {
            i.scheduled_at > now && i.status != InterviewStatus::Cancelled
        }))
    }

    async fn today(&self) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        let today = now().date_naive();
        Ok(filtered(&data.interviews, |i| {
            i.scheduled_at.date_naive() == today
        }))
    }

    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        Ok(filtered(&data.interviews, |i| {
            let day = i.scheduled_at.date_naive();
            day >= start && day <= end
        }))
    }

    async fn by_candidate(
        &self,
        candidate_id: &RecordId,
    ) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        Ok(filtered(&data.interviews, |i| i.candidate_id == *candidate_id))
    }

    async fn by_job(&self, job_id: &RecordId) -> Result<Vec<Interview>, HireloopError> {
        let data = self.begin().await;
        Ok(filtered(&data.interviews, |i| i.job_id == *job_id))
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        let data = self.begin().await;
        let count = |status: InterviewStatus| {
            data.interviews
                .iter()
                .filter(|i| i.status == status)
                .count()
        };
        let rated: Vec<u8> = data
            .interviews
            .iter()
            .filter_map(|i| i.result.as_ref().map(|r| r.rating))
            .collect();
        let average_rating = if rated.is_empty() {
            Value::Null
        } else {
            json!(rated.iter().map(|r| f64::from(*r)).sum::<f64>() / rated.len() as f64)
        };
        Ok(json!({
            "total": data.interviews.len(),
            "scheduled": count(InterviewStatus::Scheduled),
            "completed": count(InterviewStatus::Completed),
            "cancelled": count(InterviewStatus::Cancelled),
            "pending": count(InterviewStatus::Pending),
            "average_rating": average_rating,
        }))
    }
}
