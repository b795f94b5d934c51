// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use hireloop_core::model::{Candidate, Job, JobPatch, JobStatus, NewJob};
use hireloop_core::{HireloopError, JobService, ListQuery, Note, RecordId};
use serde_json::{Value, json};
use std::str::FromStr;

use super::{
    MockBackend, contains_ci, find, find_mut, notes_key, now, page, remove, stamp_note,
};

const JOB: &str = "Job";

fn matches(job: &Job, query: &ListQuery) -> bool {
    if let Some(status) = &query.status {
        match JobStatus::from_str(status) {
            Ok(status) if job.status == status => {}
            _ => return false,
        }
    }
    if let Some(department) = &query.department
        && job.department != *department
    {
        return false;
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !(contains_ci(&job.title, &needle)
            || contains_ci(&job.description, &needle)
            || contains_ci(&job.department, &needle))
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl JobService for MockBackend {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, HireloopError> {
        let data = self.begin().await;
        let jobs = data
            .jobs
            .iter()
            .filter(|job| matches(job, query))
            .cloned()
            .collect();
        Ok(page(jobs, query))
    }

    async fn get(&self, id: &RecordId) -> Result<Job, HireloopError> {
        let data = self.begin().await;
        find(&data.jobs, id, JOB).cloned()
    }

    async fn create(&self, new: &NewJob) -> Result<Job, HireloopError> {
        let mut data = self.begin().await;
        let stamp = now();
        let job = Job {
            id: data.allocate_id(),
            title: new.title.clone(),
            department: new.department.clone(),
            location: new.location.clone(),
            employment_type: new.employment_type.clone(),
            status: new.status,
            description: new.description.clone(),
            requirements: new.requirements.clone(),
            posted_date: Some(new.posted_date.unwrap_or(stamp)),
            applicants: 0,
            interviews: 0,
            min_salary: new.min_salary,
            max_salary: new.max_salary,
            created_at: Some(stamp),
            updated_at: None,
        };
        data.jobs.insert(0, job.clone());
        Ok(job)
    }

    async fn update(&self, id: &RecordId, patch: &JobPatch) -> Result<Job, HireloopError> {
        if id.is_empty() {
            return Err(HireloopError::Application(
                "Job ID is required for update".to_string(),
            ));
        }
        let mut data = self.begin().await;
        let job = find_mut(&mut data.jobs, id, JOB)?;
        patch.apply_to(job);
        job.updated_at = Some(now());
        Ok(job.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), HireloopError> {
        let mut data = self.begin().await;
        remove(&mut data.jobs, id, JOB)
    }

    async fn update_status(&self, id: &RecordId, status: JobStatus) -> Result<Job, HireloopError> {
        let mut data = self.begin().await;
        let job = find_mut(&mut data.jobs, id, JOB)?;
        job.status = status;
        job.updated_at = Some(now());
        Ok(job.clone())
    }

    async fn applicants(&self, id: &RecordId) -> Result<Vec<Candidate>, HireloopError> {
        let data = self.begin().await;
        let title = find(&data.jobs, id, JOB)?.title.clone();
        Ok(data
            .candidates
            .iter()
            .filter(|c| c.position == title)
            .cloned()
            .collect())
    }

    async fn applications(&self, id: &RecordId) -> Result<Vec<Value>, HireloopError> {
        let data = self.begin().await;
        let title = find(&data.jobs, id, JOB)?.title.clone();
        Ok(data
            .candidates
            .iter()
            .filter(|c| c.position == title)
            .map(|c| {
                json!({
                    "candidate_id": c.id,
                    "candidate_name": c.name,
                    "status": c.status,
                    "applied_date": c.applied_date,
                })
            })
            .collect())
    }

    async fn by_department(&self, department: &str) -> Result<Vec<Job>, HireloopError> {
        let data = self.begin().await;
        Ok(data
            .jobs
            .iter()
            .filter(|j| j.department == department)
            .cloned()
            .collect())
    }

    async fn statistics(&self) -> Result<Value, HireloopError> {
        let data = self.begin().await;
        let count = |status: JobStatus| data.jobs.iter().filter(|j| j.status == status).count();
        Ok(json!({
            "total": data.jobs.len(),
            "active": count(JobStatus::Active),
            "filled": count(JobStatus::Filled),
            "closed": count(JobStatus::Closed),
            "draft": count(JobStatus::Draft),
            "applicants": data.jobs.iter().map(|j| j.applicants).sum::<u32>(),
        }))
    }

    async fn notes(&self, id: &RecordId) -> Result<Vec<Note>, HireloopError> {
        let data = self.begin().await;
        find(&data.jobs, id, JOB)?;
        Ok(data
            .notes
            .get(&notes_key("jobs", id))
            .cloned()
            .unwrap_or_default())
    }

    async fn add_note(&self, id: &RecordId, note: &Note) -> Result<Note, HireloopError> {
        let mut data = self.begin().await;
        find(&data.jobs, id, JOB)?;
        Ok(stamp_note(&mut data, "jobs", id, note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn backend() -> MockBackend {
        MockBackend::seeded(Duration::ZERO)
    }

    #[tokio::test]
    async fn create_stamps_posted_date_and_lists_first() {
        let backend = backend();
        let created = JobService::create(
            &backend,
            &NewJob::new("Engineer", "R&D", JobStatus::Active),
        )
        .await
        .unwrap();
        assert!(created.posted_date.is_some());
        assert_eq!(created.applicants, 0);

        let jobs = JobService::list(&backend, &ListQuery::default()).await.unwrap();
        assert_eq!(jobs[0].id, created.id);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let backend = backend();
        let err = JobService::get(&backend, &RecordId::from(999_i64))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Job with ID 999 not found");
        assert!(JobService::delete(&backend, &RecordId::from(999_i64)).await.is_err());
    }

    #[tokio::test]
    async fn list_filters_are_anded() {
        let backend = backend();
        let query = ListQuery {
            status: Some("active".into()),
            department: Some("Engineering".into()),
            search: Some("dev".into()),
            ..ListQuery::default()
        };
        let jobs = JobService::list(&backend, &query).await.unwrap();
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.status == JobStatus::Active
            && j.department == "Engineering"
            && (j.title.to_lowercase().contains("dev")
                || j.description.to_lowercase().contains("dev"))));
    }

    #[tokio::test]
    async fn empty_id_update_fails_locally() {
        let backend = backend();
        let err = JobService::update(&backend, &RecordId::new(""), &JobPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::Application(_)));
    }

    #[tokio::test]
    async fn notes_require_an_existing_job() {
        let backend = backend();
        let note = JobService::add_note(
            &backend,
            &RecordId::from(1_i64),
            &Note::new("Great pipeline"),
        )
        .await
        .unwrap();
        assert!(note.id.is_some());
        let notes = JobService::notes(&backend, &RecordId::from(1_i64)).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert!(
            JobService::add_note(&backend, &RecordId::from(999_i64), &Note::new("x"))
                .await
                .is_err()
        );
    }
}
