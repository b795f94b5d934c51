// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain records and their create/patch payloads.

pub mod candidate;
pub mod dashboard;
pub mod interview;
pub mod job;

pub use candidate::{Candidate, CandidatePatch, CandidateStatus, NewCandidate};
pub use dashboard::{
    ActivityEvent, ActivityKind, DashboardStats, DepartmentCount, FunnelStage,
    RecentApplication, RecentApplicationsPage, TrendPoint, UpcomingInterview, percent_change,
};
pub use interview::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, InterviewType, NewInterview,
    Reschedule,
};
pub use job::{Job, JobPatch, JobStatus, NewJob};
