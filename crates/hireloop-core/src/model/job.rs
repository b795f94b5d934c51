// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{Identified, RecordId, timestamp};

/// Lifecycle state of a job posting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
    /// Open for applications. Older backends call this `open`.
    #[serde(alias = "open")]
    #[strum(to_string = "active", serialize = "open")]
    Active,
    Filled,
    Closed,
    Draft,
}

/// A job posting as returned by the backend.
///
/// The wire shape is passed through unchanged; aliases cover the camelCase
/// spellings some backend revisions use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "employmentType")]
    pub employment_type: String,
    pub status: JobStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(
        default,
        alias = "postedDate",
        deserialize_with = "timestamp::optional"
    )]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "applications")]
    pub applicants: u32,
    #[serde(default)]
    pub interviews: u32,
    #[serde(default, alias = "minSalary")]
    pub min_salary: Option<f64>,
    #[serde(default, alias = "maxSalary")]
    pub max_salary: Option<f64>,
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt", deserialize_with = "timestamp::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Job {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Job {
    /// Formats the salary range for display, e.g. `$90k - $120k`.
    pub fn salary_range(&self) -> Option<String> {
        match (self.min_salary, self.max_salary) {
            (Some(min), Some(max)) => Some(format!(
                "${:.0}k - ${:.0}k",
                min / 1000.0,
                max / 1000.0
            )),
            (Some(min), None) => Some(format!("${:.0}k+", min / 1000.0)),
            (None, Some(max)) => Some(format!("up to ${:.0}k", max / 1000.0)),
            (None, None) => None,
        }
    }
}

/// Payload for creating a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub status: JobStatus,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
}

impl NewJob {
    /// A posting with only the fields every form requires.
    pub fn new(title: impl Into<String>, department: impl Into<String>, status: JobStatus) -> Self {
        Self {
            title: title.into(),
            department: department.into(),
            location: String::new(),
            employment_type: "full-time".to_string(),
            status,
            description: String::new(),
            requirements: Vec::new(),
            posted_date: None,
            min_salary: None,
            max_salary: None,
        }
    }
}

/// Partial update for a job. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
}

impl JobPatch {
    /// Applies the patch to a cached record (used by the mock backend).
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(v) = &self.title {
            job.title = v.clone();
        }
        if let Some(v) = &self.department {
            job.department = v.clone();
        }
        if let Some(v) = &self.location {
            job.location = v.clone();
        }
        if let Some(v) = &self.employment_type {
            job.employment_type = v.clone();
        }
        if let Some(v) = self.status {
            job.status = v;
        }
        if let Some(v) = &self.description {
            job.description = v.clone();
        }
        if let Some(v) = &self.requirements {
            job.requirements = v.clone();
        }
        if self.min_salary.is_some() {
            job.min_salary = self.min_salary;
        }
        if self.max_salary.is_some() {
            job.max_salary = self.max_salary;
        }
    }
}
