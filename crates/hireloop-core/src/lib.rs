// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Hireloop.
//!
//! Domain records (jobs, candidates, interviews, dashboard projections), the
//! shared error type, and the resource service traits that the HTTP client and
//! the mock backend both implement.

pub mod error;
pub mod model;
pub mod traits;
pub mod types;

pub use error::{FieldError, HireloopError};
pub use traits::{CandidateService, DashboardService, InterviewService, JobService};
pub use types::{Identified, ListQuery, Note, RecordId, Snapshot, TimeRange};
