// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidates and their application workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{Identified, RecordId, timestamp};

/// Position of a candidate in the hiring workflow.
///
/// The workflow is forward-biased but transitions are not enforced: any status
/// may be set from any other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CandidateStatus {
    /// Freshly applied. The backend calls this `new`.
    #[serde(alias = "new")]
    #[strum(to_string = "applied", serialize = "new")]
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl CandidateStatus {
    /// Funnel order, first stage first.
    pub const FUNNEL: [CandidateStatus; 5] = [
        CandidateStatus::Applied,
        CandidateStatus::Screening,
        CandidateStatus::Interview,
        CandidateStatus::Offer,
        CandidateStatus::Hired,
    ];

    /// Title-case stage label used by the hiring funnel.
    pub fn stage_label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

/// A candidate as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Title of the job applied for. A back-reference by title, not a join.
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    pub status: CandidateStatus,
    #[serde(
        default,
        alias = "appliedDate",
        deserialize_with = "timestamp::optional"
    )]
    pub applied_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "resumeUrl")]
    pub resume_url: Option<String>,
    #[serde(default, alias = "photoUrl")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Identified for Candidate {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Payload for creating a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub status: CandidateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub notes: String,
    pub skills: Vec<String>,
}

impl NewCandidate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            position: String::new(),
            department: String::new(),
            status: CandidateStatus::Applied,
            resume_url: None,
            photo_url: None,
            notes: String::new(),
            skills: Vec::new(),
        }
    }
}

/// Partial update for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl CandidatePatch {
    pub fn apply_to(&self, candidate: &mut Candidate) {
        if let Some(v) = &self.name {
            candidate.name = v.clone();
        }
        if let Some(v) = &self.email {
            candidate.email = v.clone();
        }
        if let Some(v) = &self.phone {
            candidate.phone = v.clone();
        }
        if let Some(v) = &self.position {
            candidate.position = v.clone();
        }
        if let Some(v) = &self.department {
            candidate.department = v.clone();
        }
        if let Some(v) = self.status {
            candidate.status = v;
        }
        if let Some(v) = &self.notes {
            candidate.notes = v.clone();
        }
        if let Some(v) = &self.skills {
            candidate.skills = v.clone();
        }
    }
}
