// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interviews in view-model shape.
//!
//! The backend uses its own field names (`scheduled_date`, `duration_minutes`,
//! `type`, `interviewer_name`); translation lives in the HTTP service. Types
//! here are what stores and the CLI see.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};

use crate::types::{Identified, RecordId, Snapshot, timestamp};

/// Interview format.
///
/// The backend speaks in codes (`phone`, `video`, ...), views in labels
/// (`Phone Screen`, `Video`, ...). Codes outside the known set are carried
/// through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InterviewType {
    Phone,
    #[default]
    Video,
    Onsite,
    Technical,
    Hr,
    Other(String),
}

impl InterviewType {
    pub const KNOWN: [InterviewType; 5] = [
        InterviewType::Phone,
        InterviewType::Video,
        InterviewType::Onsite,
        InterviewType::Technical,
        InterviewType::Hr,
    ];

    /// Maps a backend code. Unknown codes pass through unchanged.
    pub fn from_code(code: &str) -> Self {
        match code {
            "phone" => Self::Phone,
            "video" => Self::Video,
            "onsite" => Self::Onsite,
            "technical" => Self::Technical,
            "hr" => Self::Hr,
            other => Self::Other(other.to_string()),
        }
    }

    /// Maps a display label. Unknown labels are lower-cased into a code.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Phone Screen" => Self::Phone,
            "Video" => Self::Video,
            "Onsite" => Self::Onsite,
            "Technical" => Self::Technical,
            "HR" => Self::Hr,
            other => Self::Other(other.to_lowercase()),
        }
    }

    pub fn code(&self) -> String {
        match self {
            Self::Phone => "phone".into(),
            Self::Video => "video".into(),
            Self::Onsite => "onsite".into(),
            Self::Technical => "technical".into(),
            Self::Hr => "hr".into(),
            Self::Other(code) => code.to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Phone => "Phone Screen",
            Self::Video => "Video",
            Self::Onsite => "Onsite",
            Self::Technical => "Technical",
            Self::Hr => "HR",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for InterviewType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for InterviewType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // Accept either spelling; a known code wins over a label lookup.
        Ok(match InterviewType::from_code(&raw) {
            InterviewType::Other(_) => InterviewType::from_label(&raw),
            known => known,
        })
    }
}

/// Lifecycle state of an interview.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterviewStatus {
    /// Booked. A `rescheduled` interview is booked again, so it reads as this.
    #[default]
    #[serde(alias = "rescheduled")]
    #[strum(to_string = "scheduled", serialize = "rescheduled")]
    Scheduled,
    Completed,
    Cancelled,
    Pending,
}

/// Outcome recorded after an interview took place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterviewResult {
    /// 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, alias = "recommendedNextSteps")]
    pub recommended_next_steps: String,
    #[serde(default, alias = "hiringRecommendation")]
    pub hiring_recommendation: String,
}

/// An interview as the stores and views see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: RecordId,
    pub candidate_id: RecordId,
    /// Candidate name at scheduling time. Not refreshed on rename.
    pub candidate_name: Snapshot<String>,
    pub job_id: RecordId,
    /// Job title at scheduling time. Not refreshed on rename.
    pub job_title: Snapshot<String>,
    pub interview_type: InterviewType,
    #[serde(default)]
    pub interviewer_id: Option<RecordId>,
    pub interviewer: String,
    pub status: InterviewStatus,
    #[serde(deserialize_with = "timestamp::required")]
    pub scheduled_at: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub result: Option<InterviewResult>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Interview {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Payload for scheduling an interview. Absent optionals take the create
/// defaults: 60 minutes, `scheduled`, empty description.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInterview {
    pub candidate_id: RecordId,
    pub candidate_name: String,
    pub job_id: RecordId,
    pub job_title: String,
    pub interview_type: InterviewType,
    pub interviewer_id: Option<RecordId>,
    pub interviewer: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration: Option<u32>,
    pub status: Option<InterviewStatus>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub description: Option<String>,
}

impl NewInterview {
    pub const DEFAULT_DURATION: u32 = 60;

    pub fn new(
        candidate_id: impl Into<RecordId>,
        job_id: impl Into<RecordId>,
        interview_type: InterviewType,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            candidate_name: String::new(),
            job_id: job_id.into(),
            job_title: String::new(),
            interview_type,
            interviewer_id: None,
            interviewer: String::new(),
            scheduled_at,
            duration: None,
            status: None,
            location: None,
            meeting_link: None,
            description: None,
        }
    }
}

/// Partial update for an interview. Only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewPatch {
    pub interview_type: Option<InterviewType>,
    pub interviewer_id: Option<RecordId>,
    pub interviewer: Option<String>,
    pub status: Option<InterviewStatus>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub description: Option<String>,
}

impl InterviewPatch {
    pub fn apply_to(&self, interview: &mut Interview) {
        if let Some(v) = &self.interview_type {
            interview.interview_type = v.clone();
        }
        if self.interviewer_id.is_some() {
            interview.interviewer_id = self.interviewer_id.clone();
        }
        if let Some(v) = &self.interviewer {
            interview.interviewer = v.clone();
        }
        if let Some(v) = self.status {
            interview.status = v;
        }
        if let Some(v) = self.scheduled_at {
            interview.scheduled_at = v;
        }
        if let Some(v) = self.duration {
            interview.duration = v;
        }
        if self.location.is_some() {
            interview.location = self.location.clone();
        }
        if self.meeting_link.is_some() {
            interview.meeting_link = self.meeting_link.clone();
        }
        if let Some(v) = &self.description {
            interview.description = v.clone();
        }
    }
}

/// New slot for an existing interview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reschedule {
    pub scheduled_at: DateTime<Utc>,
    pub duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip_through_labels() {
        for ty in InterviewType::KNOWN {
            let code = ty.code();
            let label = InterviewType::from_code(&code).label().to_string();
            assert_eq!(InterviewType::from_label(&label).code(), code);
        }
        assert_eq!(InterviewType::Phone.label(), "Phone Screen");
        assert_eq!(InterviewType::Hr.label(), "HR");
    }

    #[test]
    fn unknown_types_pass_through_lower_cased() {
        let ty = InterviewType::from_code("panel");
        assert_eq!(ty, InterviewType::Other("panel".into()));
        assert_eq!(ty.label(), "panel");
        assert_eq!(InterviewType::from_label("Panel").code(), "panel");
    }

    #[test]
    fn type_deserializes_from_code_or_label() {
        let types: Vec<InterviewType> =
            serde_json::from_str(r#"["phone", "Phone Screen", "HR", "Panel"]"#).unwrap();
        assert_eq!(
            types,
            vec![
                InterviewType::Phone,
                InterviewType::Phone,
                InterviewType::Hr,
                InterviewType::Other("panel".into()),
            ]
        );
    }

    #[test]
    fn rescheduled_reads_as_scheduled() {
        let status: InterviewStatus = serde_json::from_str(r#""rescheduled""#).unwrap();
        assert_eq!(status, InterviewStatus::Scheduled);
    }
}
