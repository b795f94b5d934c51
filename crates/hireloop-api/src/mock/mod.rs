// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory backend for mock-data mode.
//!
//! [`MockBackend`] implements all four resource service traits over seeded
//! records. Every call sleeps for the configured delay first, standing in for
//! the network round trip. Ids are handed out locally from a counter.

mod candidates;
mod dashboard;
mod interviews;
mod jobs;
pub mod seed;

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use hireloop_config::MockConfig;
use hireloop_core::model::{Candidate, Interview, Job};
use hireloop_core::{HireloopError, Identified, ListQuery, Note, RecordId};
use tokio::sync::{Mutex, MutexGuard};

/// Records held by the mock backend. Newest records come first.
#[derive(Debug, Clone, Default)]
pub struct MockData {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub interviews: Vec<Interview>,
    /// Keyed by `"<resource>/<id>"`.
    pub notes: HashMap<String, Vec<Note>>,
    next_id: i64,
}

impl MockData {
    pub fn new(jobs: Vec<Job>, candidates: Vec<Candidate>, interviews: Vec<Interview>) -> Self {
        let highest = jobs
            .iter()
            .map(|j| &j.id)
            .chain(candidates.iter().map(|c| &c.id))
            .chain(interviews.iter().map(|i| &i.id))
            .filter_map(|id| id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            jobs,
            candidates,
            interviews,
            notes: HashMap::new(),
            next_id: highest.max(10_000),
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(self.next_id)
    }
}

/// Service implementation backed by [`MockData`].
#[derive(Debug)]
pub struct MockBackend {
    data: Mutex<MockData>,
    delay: Duration,
}

impl MockBackend {
    pub fn new(data: MockData, delay: Duration) -> Self {
        Self {
            data: Mutex::new(data),
            delay,
        }
    }

    /// The default dataset, dated relative to now.
    pub fn seeded(delay: Duration) -> Self {
        Self::new(seed::dataset(Utc::now()), delay)
    }

    pub fn from_config(config: &MockConfig) -> Self {
        Self::seeded(Duration::from_millis(config.delay_ms))
    }

    /// Snapshot of everything currently stored.
    pub async fn snapshot(&self) -> MockData {
        self.data.lock().await.clone()
    }

    /// Waits out the simulated latency, then locks the data.
    async fn begin(&self) -> MutexGuard<'_, MockData> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.data.lock().await
    }
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn find_mut<'a, T: Identified>(
    items: &'a mut [T],
    id: &RecordId,
    resource: &str,
) -> Result<&'a mut T, HireloopError> {
    items
        .iter_mut()
        .find(|item| item.record_id() == id)
        .ok_or_else(|| HireloopError::not_found(resource, id))
}

fn find<'a, T: Identified>(
    items: &'a [T],
    id: &RecordId,
    resource: &str,
) -> Result<&'a T, HireloopError> {
    items
        .iter()
        .find(|item| item.record_id() == id)
        .ok_or_else(|| HireloopError::not_found(resource, id))
}

fn remove<T: Identified>(
    items: &mut Vec<T>,
    id: &RecordId,
    resource: &str,
) -> Result<(), HireloopError> {
    let before = items.len();
    items.retain(|item| item.record_id() != id);
    if items.len() == before {
        return Err(HireloopError::not_found(resource, id));
    }
    Ok(())
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Applies `page`/`size` when both are present.
fn page<T>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    match (query.page, query.size) {
        (Some(page), Some(size)) if size > 0 => {
            let start = (page.max(1) as usize - 1) * size as usize;
            items.into_iter().skip(start).take(size as usize).collect()
        }
        _ => items,
    }
}

fn notes_key(resource: &str, id: &RecordId) -> String {
    format!("{resource}/{id}")
}

fn stamp_note(data: &mut MockData, resource: &str, id: &RecordId, note: &Note) -> Note {
    let mut stored = note.clone();
    stored.id = Some(data.allocate_id());
    stored.created_at.get_or_insert_with(now);
    data.notes
        .entry(notes_key(resource, id))
        .or_default()
        .push(stored.clone());
    stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireloop_core::JobService;

    #[test]
    fn ids_continue_after_seeded_records() {
        let mut data = seed::dataset(Utc::now());
        let first = data.allocate_id();
        let second = data.allocate_id();
        assert_ne!(first, second);
        assert!(data.jobs.iter().all(|j| j.id != first));
    }

    #[tokio::test]
    async fn delay_is_applied_before_answering() {
        let backend = MockBackend::seeded(Duration::from_millis(30));
        let started = std::time::Instant::now();
        JobService::list(&backend, &ListQuery::default()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn paging_only_applies_with_both_bounds() {
        let items: Vec<u32> = (0..25).collect();
        let q = ListQuery {
            page: Some(3),
            size: Some(10),
            ..ListQuery::default()
        };
        assert_eq!(page(items.clone(), &q), (20..25).collect::<Vec<_>>());
        let q = ListQuery {
            page: Some(3),
            ..ListQuery::default()
        };
        assert_eq!(page(items, &q).len(), 25);
    }
}
