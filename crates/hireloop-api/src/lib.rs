// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource services for Hireloop.
//!
//! Two implementations of the core service traits: HTTP services over
//! `reqwest` talking to the REST backend, and [`mock::MockBackend`] serving
//! seeded in-memory data. [`ServiceSet`] bundles one of each trait so the
//! stores never know which backend they are using.

pub mod candidates;
pub mod client;
pub mod dashboard;
pub mod interviews;
pub mod jobs;
pub mod mock;
pub mod token;
pub mod wire;

use std::sync::Arc;

use hireloop_config::HireloopConfig;
use hireloop_core::{
    CandidateService, DashboardService, HireloopError, InterviewService, JobService,
};
use tracing::info;

pub use candidates::HttpCandidateService;
pub use client::ApiClient;
pub use dashboard::HttpDashboardService;
pub use interviews::HttpInterviewService;
pub use jobs::HttpJobService;
pub use mock::MockBackend;
pub use token::TokenStore;

/// One implementation of every resource service, plus the token store.
#[derive(Clone)]
pub struct ServiceSet {
    pub jobs: Arc<dyn JobService>,
    pub candidates: Arc<dyn CandidateService>,
    pub interviews: Arc<dyn InterviewService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub tokens: Arc<TokenStore>,
}

impl ServiceSet {
    /// HTTP services sharing one client.
    pub fn http(client: ApiClient) -> Self {
        Self {
            tokens: Arc::clone(client.tokens()),
            jobs: Arc::new(HttpJobService::new(client.clone())),
            candidates: Arc::new(HttpCandidateService::new(client.clone())),
            interviews: Arc::new(HttpInterviewService::new(client.clone())),
            dashboard: Arc::new(HttpDashboardService::new(client)),
        }
    }

    /// Every service answered by the same mock backend.
    pub fn mock(backend: Arc<MockBackend>, tokens: Arc<TokenStore>) -> Self {
        Self {
            jobs: backend.clone(),
            candidates: backend.clone(),
            interviews: backend.clone(),
            dashboard: backend,
            tokens,
        }
    }

    /// Builds the services `config` asks for.
    pub async fn from_config(config: &HireloopConfig) -> Result<Self, HireloopError> {
        let tokens = Arc::new(TokenStore::load(config.auth.token_path()).await?);
        if config.mock.enabled {
            info!(delay_ms = config.mock.delay_ms, "using mock data backend");
            let backend = Arc::new(MockBackend::from_config(&config.mock));
            Ok(Self::mock(backend, tokens))
        } else {
            info!(endpoint = %config.api.endpoint(), "using REST backend");
            Ok(Self::http(ApiClient::new(config, tokens)?))
        }
    }
}
