// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness.
//!
//! `TestHarness` stacks a [`FlakyBackend`] over a zero-delay [`MockBackend`]
//! and carries the config the stores are built from.

use std::sync::Arc;
use std::time::Duration;

use hireloop_api::mock::MockData;
use hireloop_api::{MockBackend, ServiceSet, TokenStore};
use hireloop_config::HireloopConfig;

use crate::flaky::FlakyBackend;

/// Builder for [`TestHarness`].
pub struct TestHarnessBuilder {
    data: Option<MockData>,
    delay: Duration,
    page_size: u32,
    refresh_after_write: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            data: None,
            delay: Duration::ZERO,
            page_size: 10,
            refresh_after_write: true,
        }
    }

    /// Serve `data` instead of the seeded dataset.
    pub fn with_data(mut self, data: MockData) -> Self {
        self.data = Some(data);
        self
    }

    /// Simulated latency of the mock backend.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Turns the refetch after writes on or off.
    pub fn with_refresh_after_write(mut self, refresh: bool) -> Self {
        self.refresh_after_write = refresh;
        self
    }

    pub fn build(self) -> TestHarness {
        let backend = Arc::new(match self.data {
            Some(data) => MockBackend::new(data, self.delay),
            None => MockBackend::seeded(self.delay),
        });
        let tokens = Arc::new(TokenStore::in_memory());
        let inner = ServiceSet::mock(backend.clone(), tokens.clone());
        let flaky = Arc::new(FlakyBackend::new(&inner));
        let services = flaky.services(tokens);

        let mut config = HireloopConfig::default();
        config.mock.enabled = true;
        config.mock.delay_ms = self.delay.as_millis() as u64;
        config.store.page_size = self.page_size;
        config.store.refresh_after_write = self.refresh_after_write;

        TestHarness {
            backend,
            flaky,
            services,
            config,
        }
    }
}

/// Services and config for store-level tests.
pub struct TestHarness {
    /// The data behind every service.
    pub backend: Arc<MockBackend>,
    /// Failure injection in front of `backend`.
    pub flaky: Arc<FlakyBackend>,
    /// Services routed through `flaky`.
    pub services: ServiceSet,
    pub config: HireloopConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Seeded data, no delay, refresh after write on.
    pub fn seeded() -> Self {
        Self::builder().build()
    }
}
