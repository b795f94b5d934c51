// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side state for Hireloop.
//!
//! One store per entity mirrors backend responses into view-bindable state:
//! a cached collection, the selected record, loading and error flags, filters
//! and a page cursor. Store actions never return errors; a failed action
//! records its message in the store's `error` and returns `None` or `false`.
//!
//! [`Stores`] wires every store to one [`ServiceSet`].

pub mod cache;
pub mod candidates;
pub mod dashboard;
pub mod interviews;
pub mod jobs;
pub mod query;
pub mod sequence;
pub mod session;
pub mod validate;

use hireloop_api::ServiceSet;
use hireloop_config::HireloopConfig;

pub use cache::{EntityState, WritePolicy};
pub use candidates::{CandidateFilters, CandidateStore};
pub use dashboard::{DashboardState, DashboardStore};
pub use interviews::{InterviewFilters, InterviewStore};
pub use jobs::{JobFilters, JobStore};
pub use query::Pagination;
pub use session::{NewNotification, Notification, NotificationKind, Session, User};

/// Every store, sharing one set of services.
pub struct Stores {
    pub jobs: JobStore,
    pub candidates: CandidateStore,
    pub interviews: InterviewStore,
    pub dashboard: DashboardStore,
    pub session: Session,
}

impl Stores {
    pub fn new(services: &ServiceSet, config: &HireloopConfig) -> Self {
        let page_size = config.store.page_size;
        let policy = WritePolicy {
            refresh_after_write: config.store.refresh_after_write,
        };
        Self {
            jobs: JobStore::new(services.jobs.clone(), page_size, policy),
            candidates: CandidateStore::new(services.candidates.clone(), page_size, policy),
            interviews: InterviewStore::new(services.interviews.clone(), page_size, policy),
            dashboard: DashboardStore::new(services.dashboard.clone(), page_size),
            session: Session::new(
                services.tokens.clone(),
                config.ui.dark_mode,
                config.store.notification_timeout_ms,
            ),
        }
    }
}
