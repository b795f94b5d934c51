// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Hireloop integration tests.
//!
//! # Components
//!
//! - [`FlakyBackend`] - wraps real services and fails or delays chosen operations
//! - [`fixtures`] - record builders
//! - [`TestHarness`] - mock backend, flaky wrapper and config in one place

pub mod fixtures;
pub mod flaky;
pub mod harness;

pub use flaky::FlakyBackend;
pub use harness::TestHarness;
