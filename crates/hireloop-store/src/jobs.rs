// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job postings store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hireloop_core::model::{Candidate, Job, JobPatch, JobStatus, NewJob};
use hireloop_core::{JobService, ListQuery, Note, RecordId};

use crate::cache::{Collection, EntityState, WritePolicy};
use crate::query::{Merge, Pagination, matches_search, merge_field, non_blank, paginate};

/// Local filters over the cached jobs. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub status: Option<JobStatus>,
    pub department: Option<String>,
    /// Matched against title, description and department.
    pub search: Option<String>,
}

impl Merge for JobFilters {
    fn merge(&mut self, update: Self) {
        merge_field(&mut self.status, update.status);
        merge_field(&mut self.department, update.department);
        merge_field(&mut self.search, update.search);
    }
}

/// Applies `filters` in order: status, department, search.
pub fn filter_jobs(jobs: &[Job], filters: &JobFilters) -> Vec<Job> {
    jobs.iter()
        .filter(|job| filters.status.is_none_or(|status| job.status == status))
        .filter(|job| non_blank(&filters.department).is_none_or(|d| job.department == d))
        .filter(|job| {
            non_blank(&filters.search).is_none_or(|needle| {
                matches_search(needle, &[&job.title, &job.description, &job.department])
            })
        })
        .cloned()
        .collect()
}

/// Fills in what older backends leave out.
fn normalize(mut jobs: Vec<Job>, fetched_at: DateTime<Utc>) -> Vec<Job> {
    for job in &mut jobs {
        if job.posted_date.is_none() {
            job.posted_date = Some(job.created_at.unwrap_or(fetched_at));
        }
    }
    jobs
}

pub type JobState = EntityState<Job, JobFilters>;

/// Client-side cache of job postings.
pub struct JobStore {
    service: Arc<dyn JobService>,
    cache: Collection<Job, JobFilters>,
}

impl JobStore {
    pub fn new(service: Arc<dyn JobService>, page_size: u32, policy: WritePolicy) -> Self {
        Self {
            service,
            cache: Collection::new("jobs", page_size, policy),
        }
    }

    // --- actions ---

    /// Replaces the cache with the jobs matching `query`.
    pub async fn fetch_all(&self, query: ListQuery) -> bool {
        self.load(query, true).await
    }

    async fn load(&self, query: ListQuery, record_errors: bool) -> bool {
        let fetched_at = Utc::now();
        let fetch = async {
            self.service
                .list(&query)
                .await
                .map(|jobs| normalize(jobs, fetched_at))
        };
        self.cache.list(query.clone(), fetch, record_errors).await
    }

    async fn refresh_after_write(&self) {
        if let Some(query) = self.cache.refresh_query().await {
            self.load(query, false).await;
        }
    }

    /// Selects the job with `id`, from the cache when it is there.
    ///
    /// A job fetched from the backend becomes the selection but is not added
    /// to the list.
    pub async fn fetch_one(&self, id: &RecordId) -> Option<Job> {
        let cached = self.cache.read(|s| s.find(id).cloned()).await;
        let job = match cached {
            Some(job) => job,
            None => self.cache.track("get", self.service.get(id)).await?,
        };
        self.cache
            .modify(|s| s.current = Some(job.clone()))
            .await;
        Some(job)
    }

    pub async fn create(&self, new: &NewJob) -> Option<Job> {
        let mut new = new.clone();
        new.posted_date.get_or_insert_with(Utc::now);
        let job = self
            .cache
            .write("create", self.service.create(&new), |s, job| {
                s.prepend(job.clone())
            })
            .await?;
        self.refresh_after_write().await;
        Some(job)
    }

    pub async fn update(&self, id: &RecordId, patch: &JobPatch) -> Option<Job> {
        let job = self
            .cache
            .write("update", self.service.update(id, patch), |s, job| {
                s.replace(job)
            })
            .await?;
        self.refresh_after_write().await;
        Some(job)
    }

    pub async fn update_status(&self, id: &RecordId, status: JobStatus) -> Option<Job> {
        let job = self
            .cache
            .write("update_status", self.service.update_status(id, status), |s, job| {
                s.replace(job)
            })
            .await?;
        self.refresh_after_write().await;
        Some(job)
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

    pub async fn applicants(&self, id: &RecordId) -> Option<Vec<Candidate>> {
        self.cache.track("applicants", self.service.applicants(id)).await
    }

    pub async fn notes(&self, id: &RecordId) -> Option<Vec<Note>> {
        self.cache.track("notes", self.service.notes(id)).await
    }

    pub async fn add_note(&self, id: &RecordId, note: &Note) -> Option<Note> {
        self.cache.track("add_note", self.service.add_note(id, note)).await
    }

    pub async fn set_filters(&self, update: JobFilters) {
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

    // --- getters ---

    pub async fn state(&self) -> JobState {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<Job> {
        self.cache.read(|s| s.items.clone()).await
    }

    pub async fn current(&self) -> Option<Job> {
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

    pub async fn filters(&self) -> JobFilters {
        self.cache.read(|s| s.filters.clone()).await
    }

    pub async fn pagination(&self) -> Pagination {
        self.cache.read(|s| s.pagination).await
    }

    pub async fn by_id(&self, id: &RecordId) -> Option<Job> {
        self.cache.read(|s| s.find(id).cloned()).await
    }

    pub async fn filtered(&self) -> Vec<Job> {
        self.cache.read(|s| filter_jobs(&s.items, &s.filters)).await
    }

    pub async fn paginated(&self) -> Vec<Job> {
        self.cache
            .read(|s| paginate(&filter_jobs(&s.items, &s.filters), s.pagination))
            .await
    }

    pub async fn total_pages(&self) -> u32 {
        self.cache
            .read(|s| s.pagination.total_pages(filter_jobs(&s.items, &s.filters).len()))
            .await
    }

    pub async fn by_status(&self, status: JobStatus) -> Vec<Job> {
        self.cache
            .read(|s| s.items.iter().filter(|j| j.status == status).cloned().collect())
            .await
    }

    pub async fn by_department(&self, department: &str) -> Vec<Job> {
        self.cache
            .read(|s| {
                s.items
                    .iter()
                    .filter(|j| j.department == department)
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Distinct non-empty departments, sorted.
    pub async fn departments(&self) -> Vec<String> {
        self.cache
            .read(|s| {
                let mut departments: Vec<String> = s
                    .items
                    .iter()
                    .map(|j| j.department.clone())
                    .filter(|d| !d.is_empty())
                    .collect();
                departments.sort();
                departments.dedup();
                departments
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use hireloop_api::MockBackend;

    fn store(policy: WritePolicy) -> JobStore {
        let backend = Arc::new(MockBackend::seeded(std::time::Duration::ZERO));
        JobStore::new(backend, 10, policy)
    }

    fn job(id: i64, title: &str, department: &str, status: JobStatus) -> Job {
        let mut new = NewJob::new(title, department, status);
        new.description = format!("{title} role");
        Job {
            id: RecordId::from(id),
            title: new.title,
            department: new.department,
            location: String::new(),
            employment_type: String::new(),
            status,
            description: new.description,
            requirements: Vec::new(),
            posted_date: None,
            applicants: 0,
            interviews: 0,
            min_salary: None,
            max_salary: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn filters_are_anded() {
        let jobs = vec![
            job(1, "Frontend Developer", "Engineering", JobStatus::Active),
            job(2, "Backend Developer", "Engineering", JobStatus::Closed),
            job(3, "DevRel", "Marketing", JobStatus::Active),
            job(4, "Designer", "Engineering", JobStatus::Active),
        ];
        let all = JobFilters {
            status: Some(JobStatus::Active),
            department: Some("Engineering".into()),
            search: Some("dev".into()),
        };
        let combined: Vec<RecordId> = filter_jobs(&jobs, &all).into_iter().map(|j| j.id).collect();

        let single = |filters: JobFilters| -> Vec<RecordId> {
            filter_jobs(&jobs, &filters).into_iter().map(|j| j.id).collect()
        };
        let by_status = single(JobFilters {
            status: all.status,
            ..JobFilters::default()
        });
        let by_dept = single(JobFilters {
            department: all.department.clone(),
            ..JobFilters::default()
        });
        let by_search = single(JobFilters {
            search: all.search.clone(),
            ..JobFilters::default()
        });
        let intersection: Vec<RecordId> = by_status
            .into_iter()
            .filter(|id| by_dept.contains(id) && by_search.contains(id))
            .collect();

        assert_eq!(combined, intersection);
        assert_eq!(combined, vec![RecordId::from(1_i64)]);
    }

    #[test]
    fn missing_posted_date_falls_back_to_created_then_fetch_time() {
        let now = Utc::now();
        let created = now - Duration::days(3);
        let mut with_created = job(1, "A", "X", JobStatus::Active);
        with_created.created_at = Some(created);
        let bare = job(2, "B", "X", JobStatus::Active);
        let jobs = normalize(vec![with_created, bare], now);
        assert_eq!(jobs[0].posted_date, Some(created));
        assert_eq!(jobs[1].posted_date, Some(now));
    }

    #[tokio::test]
    async fn departments_are_sorted_and_unique() {
        let store = store(WritePolicy::default());
        assert!(store.fetch_all(ListQuery::default()).await);
        let departments = store.departments().await;
        assert_eq!(departments.first().map(String::as_str), Some("Design"));
        let mut sorted = departments.clone();
        sorted.dedup();
        assert_eq!(sorted, departments);
        assert_eq!(store.by_department("Engineering").await.len(), 3);
    }

    #[tokio::test]
    async fn fetch_one_prefers_cache_and_selects() {
        let store = store(WritePolicy::default());
        store.fetch_all(ListQuery::default()).await;
        let job = store.fetch_one(&RecordId::new("2")).await.unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(store.current().await.map(|j| j.id), Some(RecordId::from(2_i64)));
    }

    #[tokio::test]
    async fn missing_job_sets_error_and_returns_none() {
        let store = store(WritePolicy::default());
        assert!(store.fetch_one(&RecordId::from(999_i64)).await.is_none());
        assert_eq!(
            store.error().await.as_deref(),
            Some("Job with ID 999 not found")
        );
        assert!(!store.loading().await);
        store.clear_error().await;
        assert!(store.error().await.is_none());
    }

    #[tokio::test]
    async fn page_resets_when_filters_change() {
        let store = store(WritePolicy::default());
        store.set_page(3).await;
        store
            .set_filters(JobFilters {
                department: Some("Engineering".into()),
                ..JobFilters::default()
            })
            .await;
        assert_eq!(store.pagination().await.page, 1);
        store.set_page(2).await;
        store.set_page_size(5).await;
        assert_eq!(store.pagination().await, Pagination { page: 1, size: 5 });
    }
}
