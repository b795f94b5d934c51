// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interviews store.
//!
//! Unlike the other stores, interview filters include dates. Day boundaries
//! are UTC.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use hireloop_core::model::{
    Interview, InterviewPatch, InterviewResult, InterviewStatus, NewInterview, Reschedule,
};
use hireloop_core::{InterviewService, ListQuery, Note, RecordId};

use crate::cache::{Collection, EntityState, WritePolicy};
use crate::query::{Merge, Pagination, matches_search, merge_field, non_blank, paginate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewFilters {
    pub status: Option<InterviewStatus>,
    pub candidate_id: Option<RecordId>,
    pub job_id: Option<RecordId>,
    /// Single day; ignored when both `start_date` and `end_date` are set.
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Matched against candidate name, job title and description.
    pub search: Option<String>,
}

impl Merge for InterviewFilters {
    fn merge(&mut self, update: Self) {
        merge_field(&mut self.status, update.status);
        merge_field(&mut self.candidate_id, update.candidate_id);
        merge_field(&mut self.job_id, update.job_id);
        merge_field(&mut self.date, update.date);
        merge_field(&mut self.start_date, update.start_date);
        merge_field(&mut self.end_date, update.end_date);
        merge_field(&mut self.search, update.search);
    }
}

impl InterviewFilters {
    fn matches_day(&self, interview: &Interview) -> bool {
        let day = interview.scheduled_at.date_naive();
        match (self.start_date, self.end_date, self.date) {
            (Some(start), Some(end), _) => start <= day && day <= end,
            (_, _, Some(date)) => day == date,
            _ => true,
        }
    }
}

/// Applies `filters` in order: status, candidate, job, date, search.
pub fn filter_interviews(interviews: &[Interview], filters: &InterviewFilters) -> Vec<Interview> {
    interviews
        .iter()
        .filter(|i| filters.status.is_none_or(|status| i.status == status))
        .filter(|i| {
            filters
                .candidate_id
                .as_ref()
                .is_none_or(|id| &i.candidate_id == id)
        })
        .filter(|i| filters.job_id.as_ref().is_none_or(|id| &i.job_id == id))
        .filter(|i| filters.matches_day(i))
        .filter(|i| {
            non_blank(&filters.search).is_none_or(|needle| {
                matches_search(
                    needle,
                    &[i.candidate_name.as_str(), i.job_title.as_str(), &i.description],
                )
            })
        })
        .cloned()
        .collect()
}

pub type InterviewState = EntityState<Interview, InterviewFilters>;

pub struct InterviewStore {
    service: Arc<dyn InterviewService>,
    cache: Collection<Interview, InterviewFilters>,
}

impl InterviewStore {
    pub fn new(service: Arc<dyn InterviewService>, page_size: u32, policy: WritePolicy) -> Self {
        Self {
            service,
            cache: Collection::new("interviews", page_size, policy),
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

    pub async fn fetch_one(&self, id: &RecordId) -> Option<Interview> {
        let cached = self.cache.read(|s| s.find(id).cloned()).await;
        let interview = match cached {
            Some(interview) => interview,
            None => self.cache.track("get", self.service.get(id)).await?,
        };
        self.cache
            .modify(|s| s.current = Some(interview.clone()))
            .await;
        Some(interview)
    }

    pub async fn create(&self, new: &NewInterview) -> Option<Interview> {
        let interview = self
            .cache
            .write("create", self.service.create(new), |s, i| s.prepend(i.clone()))
            .await?;
        self.refresh_after_write().await;
        Some(interview)
    }

    pub async fn update(&self, id: &RecordId, patch: &InterviewPatch) -> Option<Interview> {
        self.rewrite("update", self.service.update(id, patch)).await
    }

    pub async fn update_status(&self, id: &RecordId, status: InterviewStatus) -> Option<Interview> {
        self.rewrite("update_status", self.service.update_status(id, status))
            .await
    }

    pub async fn add_result(&self, id: &RecordId, result: &InterviewResult) -> Option<Interview> {
        self.rewrite("add_result", self.service.add_result(id, result))
            .await
    }

    pub async fn reschedule(&self, id: &RecordId, slot: &Reschedule) -> Option<Interview> {
        self.rewrite("reschedule", self.service.reschedule(id, slot))
            .await
    }

    pub async fn cancel(&self, id: &RecordId) -> Option<Interview> {
        self.rewrite("cancel", self.service.cancel(id)).await
    }

    /// Any write answering with the changed interview: patch, then refresh.
    async fn rewrite<Fut>(&self, action: &str, call: Fut) -> Option<Interview>
    where
        Fut: Future<Output = Result<Interview, hireloop_core::HireloopError>>,
    {
        let interview = self
            .cache
            .write(action, call, |s, i| s.replace(i))
            .await?;
        self.refresh_after_write().await;
        Some(interview)
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

    pub async fn notes(&self, id: &RecordId) -> Option<Vec<Note>> {
        self.cache.track("notes", self.service.notes(id)).await
    }

    pub async fn add_note(&self, id: &RecordId, note: &Note) -> Option<Note> {
        self.cache.track("add_note", self.service.add_note(id, note)).await
    }

    // Backend-computed views. These leave the cached list alone.

    pub async fn fetch_upcoming(&self) -> Option<Vec<Interview>> {
        self.cache.track("upcoming", self.service.upcoming()).await
    }

    pub async fn fetch_today(&self) -> Option<Vec<Interview>> {
        self.cache.track("today", self.service.today()).await
    }

    pub async fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> Option<Vec<Interview>> {
        self.cache.track("range", self.service.range(start, end)).await
    }

    pub async fn fetch_by_candidate(&self, candidate_id: &RecordId) -> Option<Vec<Interview>> {
        self.cache
            .track("by_candidate", self.service.by_candidate(candidate_id))
            .await
    }

    pub async fn fetch_by_job(&self, job_id: &RecordId) -> Option<Vec<Interview>> {
        self.cache.track("by_job", self.service.by_job(job_id)).await
    }

    pub async fn set_filters(&self, update: InterviewFilters) {
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
    }

    pub async fn state(&self) -> InterviewState {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<Interview> {
        self.cache.read(|s| s.items.clone()).await
    }

    pub async fn current(&self) -> Option<Interview> {
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

    pub async fn by_id(&self, id: &RecordId) -> Option<Interview> {
        self.cache.read(|s| s.find(id).cloned()).await
    }

    pub async fn by_status(&self, status: InterviewStatus) -> Vec<Interview> {
        self.cache
            .read(|s| s.items.iter().filter(|i| i.status == status).cloned().collect())
            .await
    }

    /// Cached interviews after `now` that are not cancelled, soonest first.
    pub async fn upcoming(&self, now: DateTime<Utc>) -> Vec<Interview> {
        self.cache
            .read(|s| {
                let mut upcoming: Vec<Interview> = s
                    .items
                    .iter()
                    .filter(|i| i.scheduled_at > now && i.status != InterviewStatus::Cancelled)
                    .cloned()
                    .collect();
                upcoming.sort_by_key(|i| i.scheduled_at);
                upcoming
            })
            .await
    }

    /// Cached interviews on the UTC day `today`.
    pub async fn todays(&self, today: NaiveDate) -> Vec<Interview> {
        self.cache
            .read(|s| {
                s.items
                    .iter()
                    .filter(|i| i.scheduled_at.date_naive() == today)
                    .cloned()
                    .collect()
            })
            .await
    }

    pub async fn filtered(&self) -> Vec<Interview> {
        self.cache
            .read(|s| filter_interviews(&s.items, &s.filters))
            .await
    }

    pub async fn paginated(&self) -> Vec<Interview> {
        self.cache
            .read(|s| paginate(&filter_interviews(&s.items, &s.filters), s.pagination))
            .await
    }

    pub async fn total_pages(&self) -> u32 {
        self.cache
            .read(|s| {
                s.pagination
                    .total_pages(filter_interviews(&s.items, &s.filters).len())
            })
            .await
    }
}
