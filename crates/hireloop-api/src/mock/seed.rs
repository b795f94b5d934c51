// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed records for mock-data mode.
//!
//! Dates are relative to the `now` passed in so that "upcoming" and "today"
//! views always have something to show.

use chrono::{DateTime, Duration, Utc};
use hireloop_core::model::{
    Candidate, CandidateStatus, Interview, InterviewResult, InterviewStatus, InterviewType, Job,
    JobStatus,
};
use hireloop_core::{RecordId, Snapshot};

use super::MockData;

struct JobSeed {
    id: i64,
    title: &'static str,
    department: &'static str,
    location: &'static str,
    status: JobStatus,
    age_days: i64,
    salary: (f64, f64),
}

#[rustfmt::skip]
const JOBS: &[JobSeed] = &[
    JobSeed { id: 1, title: "Frontend Developer", department: "Engineering", location: "San Francisco, CA", status: JobStatus::Active, age_days: 3, salary: (110_000.0, 140_000.0) },
    JobSeed { id: 2, title: "Backend Engineer", department: "Engineering", location: "Remote", status: JobStatus::Active, age_days: 12, salary: (120_000.0, 150_000.0) },
    JobSeed { id: 3, title: "Product Manager", department: "Product", location: "New York, NY", status: JobStatus::Active, age_days: 20, salary: (115_000.0, 145_000.0) },
    JobSeed { id: 4, title: "UX Designer", department: "Design", location: "Seattle, WA", status: JobStatus::Filled, age_days: 45, salary: (95_000.0, 120_000.0) },
    JobSeed { id: 5, title: "Recruiter", department: "HR", location: "Austin, TX", status: JobStatus::Draft, age_days: 1, salary: (70_000.0, 85_000.0) },
    JobSeed { id: 6, title: "Financial Analyst", department: "Finance", location: "Chicago, IL", status: JobStatus::Closed, age_days: 90, salary: (80_000.0, 100_000.0) },
    JobSeed { id: 7, title: "DevOps Engineer", department: "Engineering", location: "Boston, MA", status: JobStatus::Active, age_days: 6, salary: (125_000.0, 155_000.0) },
];

struct CandidateSeed {
    id: i64,
    name: &'static str,
    phone: &'static str,
    job: i64,
    status: CandidateStatus,
    age_days: i64,
    skills: &'static [&'static str],
}

#[rustfmt::skip]
const CANDIDATES: &[CandidateSeed] = &[
    CandidateSeed { id: 101, name: "Ada Lovelace", phone: "+1 415 555 0101", job: 2, status: CandidateStatus::Interview, age_days: 2, skills: &["Rust", "PostgreSQL"] },
    CandidateSeed { id: 102, name: "Grace Hopper", phone: "+1 212 555 0102", job: 1, status: CandidateStatus::Screening, age_days: 4, skills: &["TypeScript", "Vue"] },
    CandidateSeed { id: 103, name: "Alan Turing", phone: "+1 617 555 0103", job: 7, status: CandidateStatus::Offer, age_days: 9, skills: &["Kubernetes", "Terraform"] },
    CandidateSeed { id: 104, name: "Katherine Johnson", phone: "+1 512 555 0104", job: 3, status: CandidateStatus::Applied, age_days: 1, skills: &["Roadmapping"] },
    CandidateSeed { id: 105, name: "Margaret Hamilton", phone: "+1 206 555 0105", job: 4, status: CandidateStatus::Hired, age_days: 40, skills: &["Figma", "Research"] },
    CandidateSeed { id: 106, name: "Edsger Dijkstra", phone: "+1 312 555 0106", job: 2, status: CandidateStatus::Rejected, age_days: 15, skills: &["Go"] },
    CandidateSeed { id: 107, name: "Barbara Liskov", phone: "+1 415 555 0107", job: 1, status: CandidateStatus::Applied, age_days: 0, skills: &["React", "CSS"] },
    CandidateSeed { id: 108, name: "Donald Knuth", phone: "+1 650 555 0108", job: 6, status: CandidateStatus::Screening, age_days: 70, skills: &["Excel", "Modelling"] },
];

struct InterviewSeed {
    id: i64,
    candidate: i64,
    kind: InterviewType,
    interviewer: &'static str,
    status: InterviewStatus,
    /// Hours from now; negative is in the past.
    offset_hours: i64,
}

#[rustfmt::skip]
fn interview_seeds() -> Vec<InterviewSeed> {
    vec![
        InterviewSeed { id: 201, candidate: 101, kind: InterviewType::Technical, interviewer: "Linus Torvalds", status: InterviewStatus::Scheduled, offset_hours: 26 },
        InterviewSeed { id: 202, candidate: 102, kind: InterviewType::Phone, interviewer: "Sophie Wilson", status: InterviewStatus::Scheduled, offset_hours: 2 },
        InterviewSeed { id: 203, candidate: 103, kind: InterviewType::Onsite, interviewer: "Ken Thompson", status: InterviewStatus::Completed, offset_hours: -72 },
        InterviewSeed { id: 204, candidate: 101, kind: InterviewType::Hr, interviewer: "Frances Allen", status: InterviewStatus::Pending, offset_hours: 74 },
        InterviewSeed { id: 205, candidate: 106, kind: InterviewType::Video, interviewer: "Dennis Ritchie", status: InterviewStatus::Cancelled, offset_hours: 30 },
    ]
}

/// The default mock dataset.
pub fn dataset(now: DateTime<Utc>) -> MockData {
    let jobs: Vec<Job> = JOBS
        .iter()
        .map(|seed| {
            let posted = now - Duration::days(seed.age_days);
            let applicants = CANDIDATES.iter().filter(|c| c.job == seed.id).count() as u32;
            Job {
                id: RecordId::from(seed.id),
                title: seed.title.to_string(),
                department: seed.department.to_string(),
                location: seed.location.to_string(),
                employment_type: "full-time".to_string(),
                status: seed.status,
                description: format!("Join the {} team as a {}.", seed.department, seed.title),
                requirements: vec![
                    "3+ years of relevant experience".to_string(),
                    "Strong written communication".to_string(),
                ],
                posted_date: Some(posted),
                applicants,
                interviews: 0,
                min_salary: Some(seed.salary.0),
                max_salary: Some(seed.salary.1),
                created_at: Some(posted),
                updated_at: None,
            }
        })
        .collect();

    let candidates: Vec<Candidate> = CANDIDATES
        .iter()
        .map(|seed| {
            let job = JOBS.iter().find(|j| j.id == seed.job);
            let slug = seed.name.to_lowercase().replace(' ', ".");
            Candidate {
                id: RecordId::from(seed.id),
                name: seed.name.to_string(),
                email: format!("{slug}@example.com"),
                phone: seed.phone.to_string(),
                position: job.map(|j| j.title.to_string()).unwrap_or_default(),
                department: job.map(|j| j.department.to_string()).unwrap_or_default(),
                status: seed.status,
                applied_date: Some(now - Duration::days(seed.age_days)),
                resume_url: Some(format!("https://files.example.com/resumes/{slug}.pdf")),
                photo_url: None,
                notes: String::new(),
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();

    let interviews: Vec<Interview> = interview_seeds()
        .into_iter()
        .filter_map(|seed| {
            let candidate = candidates.iter().find(|c| c.id == RecordId::from(seed.candidate))?;
            let job = jobs.iter().find(|j| j.title == candidate.position)?;
            let scheduled_at = now + Duration::hours(seed.offset_hours);
            let result = (seed.status == InterviewStatus::Completed).then(|| InterviewResult {
                rating: 4,
                feedback: "Clear communicator with solid fundamentals.".to_string(),
                strengths: vec!["System design".to_string()],
                weaknesses: vec!["Limited on-call experience".to_string()],
                recommended_next_steps: "Extend offer".to_string(),
                hiring_recommendation: "hire".to_string(),
            });
            let remote = matches!(seed.kind, InterviewType::Phone | InterviewType::Video);
            Some(Interview {
                id: RecordId::from(seed.id),
                candidate_id: candidate.id.clone(),
                candidate_name: Snapshot::captured(candidate.name.clone()),
                job_id: job.id.clone(),
                job_title: Snapshot::captured(job.title.clone()),
                interview_type: seed.kind,
                interviewer_id: None,
                interviewer: seed.interviewer.to_string(),
                status: seed.status,
                scheduled_at,
                duration: 60,
                location: (!remote).then(|| job.location.clone()),
                meeting_link: remote.then(|| format!("https://meet.example.com/{}", seed.id)),
                description: String::new(),
                result,
                created_at: Some(scheduled_at - Duration::days(3)),
                updated_at: None,
            })
        })
        .collect();

    let mut data = MockData::new(jobs, candidates, interviews);
    for interview in &data.interviews {
        if let Some(job) = data.jobs.iter_mut().find(|j| j.id == interview.job_id) {
            job.interviews += 1;
        }
    }
    // Newest first, the order the backend lists them in.
    data.jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    data.candidates
        .sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_is_consistent() {
        let data = dataset(Utc::now());
        assert_eq!(data.jobs.len(), JOBS.len());
        assert_eq!(data.candidates.len(), CANDIDATES.len());
        assert_eq!(data.interviews.len(), 5);
        for interview in &data.interviews {
            assert!(data.candidates.iter().any(|c| c.id == interview.candidate_id));
            assert!(data.jobs.iter().any(|j| j.id == interview.job_id));
        }
        assert!(
            data.jobs
                .windows(2)
                .all(|w| w[0].posted_date >= w[1].posted_date)
        );
    }
}
