// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP resource services against a wiremock backend.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use hireloop_api::{ApiClient, ServiceSet, TokenStore};
use hireloop_config::HireloopConfig;
use hireloop_core::model::{
    CandidateStatus, InterviewPatch, InterviewType, JobPatch, JobStatus, NewInterview, NewJob,
    Reschedule,
};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{HireloopError, ListQuery, RecordId, TimeRange};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn services(server: &MockServer) -> ServiceSet {
    let client = ApiClient::new(&HireloopConfig::default(), Arc::new(TokenStore::in_memory()))
        .unwrap()
        .with_base_url(format!("{}/api/v1", server.uri()));
    ServiceSet::http(client)
}

fn job_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "department": "Engineering",
        "location": "Remote",
        "employment_type": "full-time",
        "status": "open",
        "description": "",
        "requirements": [],
        "posted_date": "2025-03-01T00:00:00",
        "applicants": 2
    })
}

fn interview_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "candidate_id": 7,
        "candidate_name": "Ada Lovelace",
        "job_id": 3,
        "job_title": "Backend Engineer",
        "type": "technical",
        "interviewer_name": "Linus",
        "status": "scheduled",
        "scheduled_date": "2025-04-02T15:00:00",
        "duration_minutes": 60
    })
}

#[tokio::test]
async fn job_list_sends_filters_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("status", "active"))
        .and(query_param("department", "Engineering"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_json(1, "Dev")])))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let query = ListQuery {
        status: Some("active".into()),
        department: Some("Engineering".into()),
        ..ListQuery::default()
    };
    let jobs = svc.jobs.list(&query).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, JobStatus::Active);
}

#[tokio::test]
async fn job_update_puts_body_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/jobs/5"))
        .and(body_json(json!({"title": "Staff Engineer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json(5, "Staff Engineer")))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let patch = JobPatch {
        title: Some("Staff Engineer".into()),
        ..JobPatch::default()
    };
    let job = svc.jobs.update(&RecordId::from(5_i64), &patch).await.unwrap();
    assert_eq!(job.title, "Staff Engineer");
}

#[tokio::test]
async fn job_update_without_id_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let err = svc
        .jobs
        .update(&RecordId::new(""), &JobPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Job ID is required for update");
}

#[tokio::test]
async fn job_status_is_patched_in_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/jobs/5/status"))
        .and(body_json(json!({"status": "filled"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json(5, "Dev")))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    svc.jobs
        .update_status(&RecordId::from(5_i64), JobStatus::Filled)
        .await
        .unwrap();
}

#[tokio::test]
async fn job_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(job_json(9, "Engineer")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let created = svc
        .jobs
        .create(&NewJob::new("Engineer", "R&D", JobStatus::Active))
        .await
        .unwrap();
    svc.jobs.delete(&created.id).await.unwrap();
}

#[tokio::test]
async fn candidate_status_goes_in_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/candidates/7/status"))
        .and(query_param("status", "hired"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Ada", "email": "ada@example.com", "status": "hired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let candidate = svc
        .candidates
        .update_status(&RecordId::from(7_i64), CandidateStatus::Hired)
        .await
        .unwrap();
    assert_eq!(candidate.status, CandidateStatus::Hired);
}

#[tokio::test]
async fn candidate_validation_errors_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/candidates"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address"}
        ]})))
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let err = svc
        .candidates
        .create(&hireloop_core::model::NewCandidate::new("Ada", "nope"))
        .await
        .unwrap_err();
    match &err {
        HireloopError::Validation { fields, .. } => assert_eq!(fields[0].path, "body.email"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "body.email - value is not a valid email address");
}

#[tokio::test]
async fn resume_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/candidates/7/resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Ada", "status": "screening",
            "resume_url": "https://files.example.com/7/cv.pdf"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let updated = svc
        .candidates
        .upload_resume(
            &RecordId::from(7_i64),
            ResumeFile {
                file_name: "cv.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: b"%PDF-1.4".to_vec(),
            },
        )
        .await
        .unwrap();
    assert!(updated.resume_url.is_some());

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"resume\""));
}

#[tokio::test]
async fn interview_create_sends_backend_names_and_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/interviews"))
        .respond_with(ResponseTemplate::new(201).set_body_json(interview_json(11)))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let at = Utc.with_ymd_and_hms(2025, 4, 2, 15, 0, 0).unwrap();
    let created = svc
        .interviews
        .create(&NewInterview::new(7_i64, 3_i64, InterviewType::Technical, at))
        .await
        .unwrap();
    assert_eq!(created.interview_type.label(), "Technical");
    assert_eq!(created.interviewer, "Linus");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["type"], "technical");
    assert_eq!(sent["duration_minutes"], 60);
    assert_eq!(sent["status"], "scheduled");
    assert_eq!(sent["description"], "");
    assert!(sent.get("scheduledAt").is_none());
}

#[tokio::test]
async fn interview_update_sends_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/interviews/11"))
        .and(body_json(json!({"type": "hr"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(interview_json(11)))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let patch = InterviewPatch {
        interview_type: Some(InterviewType::from_label("HR")),
        ..InterviewPatch::default()
    };
    svc.interviews
        .update(&RecordId::from(11_i64), &patch)
        .await
        .unwrap();
}

#[tokio::test]
async fn interview_range_and_reschedule() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/interviews/range"))
        .and(query_param("startDate", "2025-04-01"))
        .and(query_param("endDate", "2025-04-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([interview_json(11)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/interviews/11/reschedule"))
        .and(body_json(json!({"scheduled_date": "2025-04-03T10:00:00Z"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(interview_json(11)))
        .expect(1)
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let found = svc
        .interviews
        .range(
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found[0].candidate_name.as_str(), "Ada Lovelace");

    let slot = Reschedule {
        scheduled_at: Utc.with_ymd_and_hms(2025, 4, 3, 10, 0, 0).unwrap(),
        duration: None,
    };
    svc.interviews
        .reschedule(&RecordId::from(11_i64), &slot)
        .await
        .unwrap();
}

#[tokio::test]
async fn dashboard_sections_carry_time_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/stats"))
        .and(query_param("time_range", "quarter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activeJobs": 4, "activeJobsChange": 10,
            "newApplications": 9, "applicationsChange": -5,
            "scheduledInterviews": 2, "interviewsChange": 0,
            "positionsFilled": 1, "filledChange": 100
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/upcoming-interviews"))
        .and(query_param("days", "7"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 11, "candidateName": "Ada", "jobTitle": "Backend Engineer",
            "scheduledAt": "2025-04-02T15:00:00.000Z", "type": "Technical"
        }])))
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let stats = svc.dashboard.stats(TimeRange::Quarter).await.unwrap();
    assert_eq!(stats.active_jobs, 4);
    assert_eq!(stats.applications_change, -5);

    let upcoming = svc.dashboard.upcoming_interviews(7, 5).await.unwrap();
    assert_eq!(upcoming[0].candidate_name, "Ada");
}

#[tokio::test]
async fn failure_message_prefers_detail_then_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Job not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/hiring-funnel"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let svc = services(&server).await;
    let err = svc.jobs.get(&RecordId::from(404_i64)).await.unwrap_err();
    assert_eq!(err.to_string(), "Job not found");
    assert_eq!(err.status(), Some(404));

    let err = svc.dashboard.hiring_funnel(TimeRange::Month).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch hiring funnel");
}
