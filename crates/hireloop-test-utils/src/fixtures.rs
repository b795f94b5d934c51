// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record builders with sensible defaults.

use chrono::{DateTime, Utc};
use hireloop_api::mock::MockData;
use hireloop_core::model::{
    Candidate, CandidateStatus, Interview, InterviewStatus, InterviewType, Job, JobStatus,
};
use hireloop_core::{RecordId, Snapshot};

pub fn job(id: i64, title: &str, department: &str, status: JobStatus) -> Job {
    Job {
        id: RecordId::from(id),
        title: title.to_string(),
        department: department.to_string(),
        location: "Remote".to_string(),
        employment_type: "full-time".to_string(),
        status,
        description: format!("{title} in {department}"),
        requirements: Vec::new(),
        posted_date: Some(Utc::now()),
        applicants: 0,
        interviews: 0,
        min_salary: None,
        max_salary: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn candidate(id: i64, name: &str, position: &str, status: CandidateStatus) -> Candidate {
    let slug = name.to_lowercase().replace(' ', ".");
    Candidate {
        id: RecordId::from(id),
        name: name.to_string(),
        email: format!("{slug}@example.com"),
        phone: "+1 555 010 0000".to_string(),
        position: position.to_string(),
        department: String::new(),
        status,
        applied_date: Some(Utc::now()),
        resume_url: None,
        photo_url: None,
        notes: String::new(),
        skills: Vec::new(),
    }
}

/// A scheduled video interview of `candidate` for `job`.
pub fn interview(id: i64, candidate: &Candidate, job: &Job, at: DateTime<Utc>) -> Interview {
    Interview {
        id: RecordId::from(id),
        candidate_id: candidate.id.clone(),
        candidate_name: Snapshot::captured(candidate.name.clone()),
        job_id: job.id.clone(),
        job_title: Snapshot::captured(job.title.clone()),
        interview_type: InterviewType::Video,
        interviewer_id: None,
        interviewer: "Interviewer".to_string(),
        status: InterviewStatus::Scheduled,
        scheduled_at: at,
        duration: 60,
        location: None,
        meeting_link: Some(format!("https://meet.example.com/{id}")),
        description: String::new(),
        result: None,
        created_at: None,
        updated_at: None,
    }
}

/// `count` active jobs titled `Job 1..=count`, newest first.
pub fn jobs(count: i64, department: &str) -> Vec<Job> {
    (1..=count)
        .rev()
        .map(|i| job(i, &format!("Job {i}"), department, JobStatus::Active))
        .collect()
}

/// A mock dataset holding only `jobs`.
pub fn data_with_jobs(jobs: Vec<Job>) -> MockData {
    MockData::new(jobs, Vec::new(), Vec::new())
}
