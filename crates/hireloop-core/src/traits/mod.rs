// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource service traits.
//!
//! One trait per backend resource. Implementations translate calls into
//! network requests (or the in-memory mock backend) and do no caching and no
//! retrying. All traits use `#[async_trait]` so stores can hold them as
//! `Arc<dyn ...>`.

pub mod candidates;
pub mod dashboard;
pub mod interviews;
pub mod jobs;

pub use candidates::CandidateService;
pub use dashboard::DashboardService;
pub use interviews::InterviewService;
pub use jobs::JobService;
