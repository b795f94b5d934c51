// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The cache shared by every entity store.
//!
//! [`EntityState`] is the view-bindable state of one collection. [`Collection`]
//! wraps it with the bookkeeping every store action needs: the flags behind
//! `loading`, error capture, and list supersession.

use std::future::Future;

use hireloop_core::{HireloopError, Identified, ListQuery, RecordId};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::query::{Merge, Pagination};
use crate::sequence::RequestSequence;

/// What a store does after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePolicy {
    /// Refetch the list (with the last list query) after patching locally.
    pub refresh_after_write: bool,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self {
            refresh_after_write: true,
        }
    }
}

/// State of one entity collection.
#[derive(Debug, Clone)]
pub struct EntityState<T, F> {
    /// Cached records, at most one per id.
    pub items: Vec<T>,
    pub total: usize,
    /// The selected record.
    pub current: Option<T>,
    /// Latest failure message. Cleared by the next successful action.
    pub error: Option<String>,
    pub filters: F,
    pub pagination: Pagination,
    /// Query used by the last list fetch; reused by refresh-after-write.
    pub last_query: ListQuery,
    /// Set while the latest list request is outstanding.
    listing: bool,
    /// Non-list actions still waiting on the backend.
    in_flight: usize,
}

impl<T, F: Default> EntityState<T, F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            current: None,
            error: None,
            filters: F::default(),
            pagination: Pagination::new(page_size),
            last_query: ListQuery::default(),
            listing: false,
            in_flight: 0,
        }
    }
}

impl<T: Identified + Clone, F> EntityState<T, F> {
    /// True while the latest list request or any other action of this store
    /// is waiting on the backend. Superseded list requests do not count.
    pub fn loading(&self) -> bool {
        self.listing || self.in_flight > 0
    }

    /// Replaces the whole cache.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.total = items.len();
        self.items = items;
    }

    /// Inserts a new record at the front.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.total += 1;
    }

    /// Swaps the cached record (and the selection) sharing `item`'s id.
    pub fn replace(&mut self, item: &T) {
        let id = item.record_id();
        if let Some(slot) = self.items.iter_mut().find(|x| x.record_id() == id) {
            *slot = item.clone();
        }
        if let Some(current) = &mut self.current
            && current.record_id() == id
        {
            *current = item.clone();
        }
    }

    /// Drops the record with `id` and deselects it.
    pub fn remove(&mut self, id: &RecordId) {
        self.items.retain(|x| x.record_id() != id);
        self.total = self.items.len();
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.record_id() == id)
        {
            self.current = None;
        }
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|x| x.record_id() == id)
    }
}

/// An [`EntityState`] behind a lock, plus request bookkeeping.
#[derive(Debug)]
pub struct Collection<T, F> {
    resource: &'static str,
    state: RwLock<EntityState<T, F>>,
    sequence: RequestSequence,
    policy: WritePolicy,
}

impl<T, F> Collection<T, F>
where
    T: Identified + Clone + Send + Sync,
    F: Merge + Default + Clone + Send + Sync,
{
    pub fn new(resource: &'static str, page_size: u32, policy: WritePolicy) -> Self {
        Self {
            resource,
            state: RwLock::new(EntityState::new(page_size)),
            sequence: RequestSequence::new(),
            policy,
        }
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Runs `f` against a consistent view of the state.
    pub async fn read<R>(&self, f: impl FnOnce(&EntityState<T, F>) -> R) -> R {
        f(&*self.state.read().await)
    }

    pub async fn modify<R>(&self, f: impl FnOnce(&mut EntityState<T, F>) -> R) -> R {
        f(&mut *self.state.write().await)
    }

    pub async fn snapshot(&self) -> EntityState<T, F> {
        self.state.read().await.clone()
    }

    /// Runs a list fetch and commits it unless a newer fetch was issued
    /// meanwhile.
    ///
    /// With `record_errors` off a failure is only logged; refresh-after-write
    /// uses that so a failed refresh leaves the patched cache and error alone.
    pub async fn list<Fut>(&self, query: ListQuery, fetch: Fut, record_errors: bool) -> bool
    where
        Fut: Future<Output = Result<Vec<T>, HireloopError>>,
    {
        let ticket = self.sequence.issue();
        self.modify(|s| {
            s.listing = true;
            s.last_query = query;
        })
        .await;

        let result = fetch.await;

        let mut state = self.state.write().await;
        let current = self.sequence.is_current(ticket);
        if current {
            state.listing = false;
        }
        match result {
            Ok(items) if current => {
                debug!(resource = self.resource, count = items.len(), "list committed");
                state.replace_all(items);
                state.error = None;
                true
            }
            Ok(_) => {
                debug!(resource = self.resource, "superseded list response discarded");
                true
            }
            Err(e) => {
                warn!(resource = self.resource, error = %e, "list fetch failed");
                if current && record_errors {
                    state.error = Some(e.to_string());
                }
                false
            }
        }
    }

    /// Runs one backend action with loading and error bookkeeping.
    ///
    /// Returns `None` on failure after recording the message; never
    /// propagates the error.
    pub async fn track<R, Fut>(&self, action: &str, call: Fut) -> Option<R>
    where
        Fut: Future<Output = Result<R, HireloopError>>,
    {
        self.modify(|s| s.in_flight += 1).await;
        let result = call.await;
        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        match result {
            Ok(value) => {
                debug!(resource = self.resource, action, "action succeeded");
                state.error = None;
                Some(value)
            }
            Err(e) => {
                warn!(resource = self.resource, action, error = %e, "action failed");
                state.error = Some(e.to_string());
                None
            }
        }
    }

    /// [`Collection::track`], then `commit` the result into the cache.
    pub async fn write<R, Fut>(
        &self,
        action: &str,
        call: Fut,
        commit: impl FnOnce(&mut EntityState<T, F>, &R),
    ) -> Option<R>
    where
        Fut: Future<Output = Result<R, HireloopError>>,
    {
        let value = self.track(action, call).await?;
        self.modify(|s| commit(s, &value)).await;
        Some(value)
    }

    /// Query of the last list fetch, when a refresh is due.
    pub async fn refresh_query(&self) -> Option<ListQuery> {
        if self.policy.refresh_after_write {
            Some(self.read(|s| s.last_query.clone()).await)
        } else {
            None
        }
    }

    pub async fn set_filters(&self, update: F) {
        self.modify(|s| {
            s.filters.merge(update);
            s.pagination.page = 1;
        })
        .await;
    }

    pub async fn clear_filters(&self) {
        self.modify(|s| {
            s.filters = F::default();
            s.pagination.page = 1;
        })
        .await;
    }

    pub async fn set_page(&self, page: u32) {
        self.modify(|s| s.pagination.page = page.max(1)).await;
    }

    pub async fn set_page_size(&self, size: u32) {
        self.modify(|s| {
            s.pagination.size = size.max(1);
            s.pagination.page = 1;
        })
        .await;
    }

    pub async fn clear_error(&self) {
        self.modify(|s| s.error = None).await;
    }

    /// Back to the initial state, keeping the configured page size.
    pub async fn reset(&self) {
        self.modify(|s| *s = EntityState::new(s.pagination.size)).await;
    }
}
