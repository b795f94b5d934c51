// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend field naming for interviews.
//!
//! The backend stores `type` codes, `scheduled_date`, `duration_minutes` and
//! `interviewer_name`; the view model uses labels, `scheduled_at`, `duration`
//! and `interviewer`. Everything that crosses that boundary goes through here.

use chrono::{DateTime, Utc};
use hireloop_core::model::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, InterviewType, NewInterview,
    Reschedule,
};
use hireloop_core::types::timestamp;
use hireloop_core::{RecordId, Snapshot};
use serde::{Deserialize, Serialize};

pub const UNNAMED_CANDIDATE: &str = "Unnamed Candidate";
pub const UNNAMED_POSITION: &str = "Unnamed Position";
pub const UNNAMED_INTERVIEWER: &str = "Unnamed Interviewer";

/// An interview as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewRecord {
    pub id: RecordId,
    pub candidate_id: RecordId,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub job_id: RecordId,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub interviewer_id: Option<RecordId>,
    #[serde(default)]
    pub interviewer_name: Option<String>,
    #[serde(default)]
    pub status: InterviewStatus,
    #[serde(deserialize_with = "timestamp::required")]
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<InterviewResult>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn non_empty(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl From<InterviewRecord> for Interview {
    fn from(record: InterviewRecord) -> Self {
        Self {
            id: record.id,
            candidate_id: record.candidate_id,
            candidate_name: Snapshot::captured(non_empty(record.candidate_name, UNNAMED_CANDIDATE)),
            job_id: record.job_id,
            job_title: Snapshot::captured(non_empty(record.job_title, UNNAMED_POSITION)),
            interview_type: record
                .kind
                .as_deref()
                .map(InterviewType::from_code)
                .unwrap_or_default(),
            interviewer_id: record.interviewer_id,
            interviewer: non_empty(record.interviewer_name, UNNAMED_INTERVIEWER),
            status: record.status,
            scheduled_at: record.scheduled_date,
            duration: record
                .duration_minutes
                .unwrap_or(NewInterview::DEFAULT_DURATION),
            location: record.location,
            meeting_link: record.meeting_link,
            description: record.description.unwrap_or_default(),
            result: record.result,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create body. Every field is sent; absent optionals take their defaults and
/// absent location/link go out as `null`.
#[derive(Debug, Serialize)]
pub struct CreateInterviewBody {
    pub candidate_id: RecordId,
    pub candidate_name: String,
    pub job_id: RecordId,
    pub job_title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub interviewer_id: Option<RecordId>,
    pub interviewer_name: String,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: InterviewStatus,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub description: String,
}

impl From<&NewInterview> for CreateInterviewBody {
    fn from(new: &NewInterview) -> Self {
        Self {
            candidate_id: new.candidate_id.clone(),
            candidate_name: new.candidate_name.clone(),
            job_id: new.job_id.clone(),
            job_title: new.job_title.clone(),
            kind: new.interview_type.code(),
            interviewer_id: new.interviewer_id.clone(),
            interviewer_name: new.interviewer.clone(),
            scheduled_date: new.scheduled_at,
            duration_minutes: new.duration.unwrap_or(NewInterview::DEFAULT_DURATION),
            status: new.status.unwrap_or_default(),
            location: new.location.clone(),
            meeting_link: new.meeting_link.clone(),
            description: new.description.clone().unwrap_or_default(),
        }
    }
}

/// Update body. Fields the caller did not set are left out entirely.
#[derive(Debug, Default, Serialize)]
pub struct PatchInterviewBody {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&InterviewPatch> for PatchInterviewBody {
    fn from(patch: &InterviewPatch) -> Self {
        Self {
            kind: patch.interview_type.as_ref().map(InterviewType::code),
            interviewer_id: patch.interviewer_id.clone(),
            interviewer_name: patch.interviewer.clone(),
            status: patch.status,
            scheduled_date: patch.scheduled_at,
            duration_minutes: patch.duration,
            location: patch.location.clone(),
            meeting_link: patch.meeting_link.clone(),
            description: patch.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RescheduleBody {
    pub scheduled_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl From<&Reschedule> for RescheduleBody {
    fn from(slot: &Reschedule) -> Self {
        Self {
            scheduled_date: slot.scheduled_at,
            duration_minutes: slot.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_translates_names_and_defaults() {
        let record: InterviewRecord = serde_json::from_value(json!({
            "id": 11,
            "candidate_id": 7,
            "job_id": 3,
            "type": "phone",
            "status": "scheduled",
            "scheduled_date": "2025-04-02T15:00:00",
            "duration_minutes": 45,
            "meeting_link": "https://meet.example.com/x"
        }))
        .unwrap();
        let interview = Interview::from(record);
        assert_eq!(interview.interview_type.label(), "Phone Screen");
        assert_eq!(interview.candidate_name.as_str(), UNNAMED_CANDIDATE);
        assert_eq!(interview.job_title.as_str(), UNNAMED_POSITION);
        assert_eq!(interview.interviewer, UNNAMED_INTERVIEWER);
        assert_eq!(interview.duration, 45);
        assert_eq!(interview.description, "");
        assert!(interview.location.is_none());
    }

    #[test]
    fn create_body_fills_defaults_and_sends_nulls() {
        let at = timestamp::parse("2025-04-02T15:00:00Z").unwrap();
        let new = NewInterview::new(7_i64, 3_i64, InterviewType::Hr, at);
        let body = serde_json::to_value(CreateInterviewBody::from(&new)).unwrap();
        assert_eq!(body["type"], "hr");
        assert_eq!(body["duration_minutes"], 60);
        assert_eq!(body["status"], "scheduled");
        assert_eq!(body["description"], "");
        assert!(body["location"].is_null());
        assert!(body.get("meeting_link").is_some());
        assert_eq!(body["candidate_id"], "7");
    }

    #[test]
    fn patch_body_omits_absent_fields() {
        let patch = InterviewPatch {
            interview_type: Some(InterviewType::from_label("Technical")),
            duration: Some(90),
            ..InterviewPatch::default()
        };
        let body = serde_json::to_value(PatchInterviewBody::from(&patch)).unwrap();
        assert_eq!(body, json!({"type": "technical", "duration_minutes": 90}));
    }
}
