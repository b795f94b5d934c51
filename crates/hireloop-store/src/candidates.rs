// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidates store, with a side cache of the selected candidate's interviews.

use std::sync::Arc;

use hireloop_core::model::{Candidate, CandidatePatch, CandidateStatus, Interview, NewCandidate};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{CandidateService, ListQuery, Note, RecordId};
use tokio::sync::RwLock;

use crate::cache::{Collection, EntityState, WritePolicy};
use crate::query::{Merge, Pagination, matches_search, merge_field, non_blank, paginate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilters {
    pub status: Option<CandidateStatus>,
    pub department: Option<String>,
    /// Matched against name, email and position.
    pub search: Option<String>,
}

impl Merge for CandidateFilters {
    fn merge(&mut self, update: Self) {
        merge_field(&mut self.status, update.status);
        merge_field(&mut self.department, update.department);
        merge_field(&mut self.search, update.search);
    }
}

/// Applies `filters` in order: status, department, search.
pub fn filter_candidates(candidates: &[Candidate], filters: &CandidateFilters) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| filters.status.is_none_or(|status| c.status == status))
        .filter(|c| non_blank(&filters.department).is_none_or(|d| c.department == d))
        .filter(|c| {
            non_blank(&filters.search)
                .is_none_or(|needle| matches_search(needle, &[&c.name, &c.email, &c.position]))
        })
        .cloned()
        .collect()
}

pub type CandidateState = EntityState<Candidate, CandidateFilters>;

pub struct CandidateStore {
    service: Arc<dyn CandidateService>,
    cache: Collection<Candidate, CandidateFilters>,
    /// Interviews of the candidate last passed to `fetch_interviews`.
    interviews: RwLock<Vec<Interview>>,
}

impl CandidateStore {
    pub fn new(service: Arc<dyn CandidateService>, page_size: u32, policy: WritePolicy) -> Self {
        Self {
            service,
            cache: Collection::new("candidates", page_size, policy),
            interviews: RwLock::new(Vec::new()),
        }
    }

    pub async fn fetch_all(&self, query: ListQuery) -> bool {
        self.load(query, true).await
    }

    async fn load(&self, query: ListQuery, record_errors: bool) -> bool {
        let fetch = self.service.list(&query);
        self.cache.list(query.clone(), fetch, record_errors).await
    }

    async fn refresh_after_write(&self) {
        if let Some(query) = self.cache.refresh_query().await {
            self.load(query, false).await;
        }
    }

    pub async fn fetch_one(&self, id: &RecordId) -> Option<Candidate> {
        let cached = self.cache.read(|s| s.find(id).cloned()).await;
        let candidate = match cached {
            Some(candidate) => candidate,
            None => self.cache.track("get", self.service.get(id)).await?,
        };
        self.cache
            .modify(|s| s.current = Some(candidate.clone()))
            .await;
        Some(candidate)
    }

    pub async fn create(&self, new: &NewCandidate) -> Option<Candidate> {
        let candidate = self
            .cache
            .write("create", self.service.create(new), |s, c| s.prepend(c.clone()))
            .await?;
        self.refresh_after_write().await;
        Some(candidate)
    }

    pub async fn update(&self, id: &RecordId, patch: &CandidatePatch) -> Option<Candidate> {
        let candidate = self
            .cache
            .write("update", self.service.update(id, patch), |s, c| s.replace(c))
            .await?;
        self.refresh_after_write().await;
        Some(candidate)
    }

    pub async fn update_status(&self, id: &RecordId, status: CandidateStatus) -> Option<Candidate> {
        let candidate = self
            .cache
            .write(
                "update_status",
                self.service.update_status(id, status),
                |s, c| s.replace(c),
            )
            .await?;
        self.refresh_after_write().await;
        Some(candidate)
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let deleted = self
            .cache
            .write("delete", self.service.delete(id), |s, _| s.remove(id))
            .await
            .is_some();
        if deleted {
            self.refresh_after_write().await;
        }
        deleted
    }

    pub async fn upload_resume(&self, id: &RecordId, file: ResumeFile) -> Option<Candidate> {
        let candidate = self
            .cache
            .write("upload_resume", self.service.upload_resume(id, file), |s, c| {
                s.replace(c)
            })
            .await?;
        self.refresh_after_write().await;
        Some(candidate)
    }

    /// Loads the interviews of candidate `id` into the side cache.
    pub async fn fetch_interviews(&self, id: &RecordId) -> bool {
        match self.cache.track("interviews", self.service.interviews(id)).await {
            Some(interviews) => {
                *self.interviews.write().await = interviews;
                true
            }
            None => false,
        }
    }

    pub async fn notes(&self, id: &RecordId) -> Option<Vec<Note>> {
        self.cache.track("notes", self.service.notes(id)).await
    }

    pub async fn add_note(&self, id: &RecordId, note: &Note) -> Option<Note> {
        self.cache.track("add_note", self.service.add_note(id, note)).await
    }

    pub async fn set_filters(&self, update: CandidateFilters) {
        self.cache.set_filters(update).await;
    }

    pub async fn clear_filters(&self) {
        self.cache.clear_filters().await;
    }

    pub async fn set_page(&self, page: u32) {
        self.cache.set_page(page).await;
    }

    pub async fn set_page_size(&self, size: u32) {
        self.cache.set_page_size(size).await;
    }

    pub async fn clear_error(&self) {
        self.cache.clear_error().await;
    }

    pub async fn reset(&self) {
        self.cache.reset().await;
        self.interviews.write().await.clear();
    }

    pub async fn state(&self) -> CandidateState {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<Candidate> {
        self.cache.read(|s| s.items.clone()).await
    }

    pub async fn current(&self) -> Option<Candidate> {
        self.cache.read(|s| s.current.clone()).await
    }

    pub async fn total(&self) -> usize {
        self.cache.read(|s| s.total).await
    }

    pub async fn loading(&self) -> bool {
        self.cache.read(EntityState::loading).await
    }

    pub async fn error(&self) -> Option<String> {
        self.cache.read(|s| s.error.clone()).await
    }

    pub async fn pagination(&self) -> Pagination {
        self.cache.read(|s| s.pagination).await
    }

    pub async fn candidate_interviews(&self) -> Vec<Interview> {
        self.interviews.read().await.clone()
    }

    pub async fn by_id(&self, id: &RecordId) -> Option<Candidate> {
        self.cache.read(|s| s.find(id).cloned()).await
    }

    pub async fn by_status(&self, status: CandidateStatus) -> Vec<Candidate> {
        self.cache
            .read(|s| s.items.iter().filter(|c| c.status == status).cloned().collect())
            .await
    }

    pub async fn filtered(&self) -> Vec<Candidate> {
        self.cache
            .read(|s| filter_candidates(&s.items, &s.filters))
            .await
    }

    pub async fn paginated(&self) -> Vec<Candidate> {
        self.cache
            .read(|s| paginate(&filter_candidates(&s.items, &s.filters), s.pagination))
            .await
    }

    pub async fn total_pages(&self) -> u32 {
        self.cache
            .read(|s| {
                s.pagination
                    .total_pages(filter_candidates(&s.items, &s.filters).len())
            })
            .await
    }
}
