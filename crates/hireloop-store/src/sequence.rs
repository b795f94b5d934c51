// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request supersession.
//!
//! Every list fetch takes a [`Ticket`] before it goes out. When the response
//! comes back, only the holder of the most recently issued ticket may commit
//! it; anything older has been superseded and is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic per-store request counter.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

/// Proof of when a request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
