// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity store behaviour over the mock backend.

use std::collections::HashSet;
use std::time::Duration;

use hireloop_api::mock::MockData;
use hireloop_core::model::{CandidateStatus, JobPatch, JobStatus, NewCandidate, NewJob};
use hireloop_core::traits::candidates::ResumeFile;
use hireloop_core::{ListQuery, RecordId};
use hireloop_store::{CandidateFilters, JobFilters, Pagination, Stores};
use hireloop_test_utils::{TestHarness, fixtures};

fn stores(harness: &TestHarness) -> Stores {
    Stores::new(&harness.services, &harness.config)
}

fn unique(ids: impl IntoIterator<Item = RecordId>) -> bool {
    let mut seen = HashSet::new();
    ids.into_iter().all(|id| seen.insert(id.to_string()))
}

#[tokio::test]
async fn list_sets_total_to_cache_length_with_unique_ids() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);

    assert!(stores.jobs.fetch_all(ListQuery::default()).await);
    assert!(stores.candidates.fetch_all(ListQuery::default()).await);
    assert!(stores.interviews.fetch_all(ListQuery::default()).await);

    let jobs = stores.jobs.state().await;
    assert_eq!(jobs.total, jobs.items.len());
    assert!(unique(jobs.items.iter().map(|j| j.id.clone())));

    let candidates = stores.candidates.state().await;
    assert_eq!(candidates.total, candidates.items.len());
    assert!(unique(candidates.items.iter().map(|c| c.id.clone())));

    let interviews = stores.interviews.state().await;
    assert_eq!(interviews.total, interviews.items.len());
    assert!(unique(interviews.items.iter().map(|i| i.id.clone())));
    assert!(!interviews.loading());
}

#[tokio::test]
async fn create_puts_record_first_and_bumps_total() {
    for refresh in [false, true] {
        let harness = TestHarness::builder()
            .with_refresh_after_write(refresh)
            .build();
        let stores = stores(&harness);
        stores.candidates.fetch_all(ListQuery::default()).await;
        let before = stores.candidates.total().await;

        let created = stores
            .candidates
            .create(&NewCandidate::new("Radia Perlman", "radia@example.com"))
            .await
            .unwrap();

        let items = stores.candidates.items().await;
        assert_eq!(items[0].id, created.id, "refresh_after_write = {refresh}");
        assert_eq!(stores.candidates.total().await, before + 1);
    }
}

#[tokio::test]
async fn created_job_is_listed_with_posted_date() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);

    let created = stores
        .jobs
        .create(&NewJob::new("Engineer", "R&D", JobStatus::Active))
        .await
        .unwrap();
    assert!(stores.jobs.fetch_all(ListQuery::default()).await);

    let listed = stores.jobs.by_id(&created.id).await.unwrap();
    assert_eq!(listed.title, "Engineer");
    assert_eq!(listed.department, "R&D");
    assert!(listed.posted_date.is_some());
    assert!(stores.jobs.departments().await.contains(&"R&D".to_string()));
}

#[tokio::test]
async fn delete_removes_record_and_selection() {
    let harness = TestHarness::builder().with_refresh_after_write(false).build();
    let stores = stores(&harness);
    stores.jobs.fetch_all(ListQuery::default()).await;
    let id = RecordId::from(3_i64);
    stores.jobs.fetch_one(&id).await.unwrap();
    let before = stores.jobs.total().await;

    assert!(stores.jobs.delete(&id).await);

    let state = stores.jobs.state().await;
    assert!(state.items.iter().all(|j| j.id != id));
    assert!(state.current.is_none());
    assert_eq!(state.total, before - 1);
}

#[tokio::test]
async fn status_update_patches_cache_and_selection_only_in_status() {
    let data = MockData::new(
        Vec::new(),
        vec![
            fixtures::candidate(7, "Grace Hopper", "Engineer", CandidateStatus::Screening),
            fixtures::candidate(8, "Alan Kay", "Designer", CandidateStatus::Applied),
        ],
        Vec::new(),
    );
    let harness = TestHarness::builder().with_data(data).build();
    let stores = stores(&harness);
    stores.candidates.fetch_all(ListQuery::default()).await;
    let id = RecordId::from(7_i64);
    let before = stores.candidates.fetch_one(&id).await.unwrap();

    let updated = stores
        .candidates
        .update_status(&id, CandidateStatus::Hired)
        .await
        .unwrap();
    assert_eq!(updated.status, CandidateStatus::Hired);

    let mut expected = before.clone();
    expected.status = CandidateStatus::Hired;
    assert_eq!(stores.candidates.by_id(&id).await.unwrap(), expected);
    assert_eq!(stores.candidates.current().await.unwrap(), expected);
    let other = stores.candidates.by_id(&RecordId::from(8_i64)).await.unwrap();
    assert_eq!(other.status, CandidateStatus::Applied);
}

#[tokio::test]
async fn filters_compose_as_intersection() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    stores.jobs.fetch_all(ListQuery::default()).await;

    let all = JobFilters {
        status: Some(JobStatus::Active),
        department: Some("Engineering".into()),
        search: Some("dev".into()),
    };
    let mut singles = Vec::new();
    for single in [
        JobFilters { status: all.status, ..JobFilters::default() },
        JobFilters { department: all.department.clone(), ..JobFilters::default() },
        JobFilters { search: all.search.clone(), ..JobFilters::default() },
    ] {
        stores.jobs.clear_filters().await;
        stores.jobs.set_filters(single).await;
        let ids: HashSet<String> = stores
            .jobs
            .filtered()
            .await
            .into_iter()
            .map(|j| j.id.to_string())
            .collect();
        singles.push(ids);
    }
    let intersection: HashSet<String> = singles[0]
        .iter()
        .filter(|id| singles[1].contains(*id) && singles[2].contains(*id))
        .cloned()
        .collect();

    stores.jobs.clear_filters().await;
    stores.jobs.set_filters(all).await;
    let combined: HashSet<String> = stores
        .jobs
        .filtered()
        .await
        .into_iter()
        .map(|j| j.id.to_string())
        .collect();
    assert_eq!(combined, intersection);
    assert_eq!(combined.len(), 2);
}

#[tokio::test]
async fn pagination_slices_the_filtered_list() {
    let harness = TestHarness::builder()
        .with_data(fixtures::data_with_jobs(fixtures::jobs(25, "Ops")))
        .build();
    let stores = stores(&harness);
    stores.jobs.fetch_all(ListQuery::default()).await;

    stores.jobs.set_page(2).await;
    let filtered = stores.jobs.filtered().await;
    let page = stores.jobs.paginated().await;
    assert_eq!(page, filtered[10..20].to_vec());
    assert_eq!(stores.jobs.total_pages().await, 3);

    stores.jobs.set_page(4).await;
    assert!(stores.jobs.paginated().await.is_empty());

    stores.jobs.set_page_size(20).await;
    assert_eq!(stores.jobs.pagination().await, Pagination { page: 1, size: 20 });
}

#[tokio::test]
async fn failed_write_records_error_and_keeps_cache() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    stores.candidates.fetch_all(ListQuery::default()).await;
    let before = stores.candidates.items().await;

    harness.flaky.fail("candidates.update_status").await;
    let out = stores
        .candidates
        .update_status(&RecordId::from(101_i64), CandidateStatus::Rejected)
        .await;

    assert!(out.is_none());
    assert_eq!(stores.candidates.items().await, before);
    assert_eq!(
        stores.candidates.error().await.as_deref(),
        Some("Injected failure in candidates.update_status")
    );
    assert!(!stores.candidates.loading().await);

    harness.flaky.recover("candidates.update_status").await;
    assert!(
        stores
            .candidates
            .update_status(&RecordId::from(101_i64), CandidateStatus::Rejected)
            .await
            .is_some()
    );
    assert!(stores.candidates.error().await.is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_local_patch_and_error_clear() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    stores.jobs.fetch_all(ListQuery::default()).await;
    harness.flaky.fail("jobs.list").await;

    let patch = JobPatch {
        title: Some("Principal Engineer".into()),
        ..JobPatch::default()
    };
    let id = RecordId::from(2_i64);
    assert!(stores.jobs.update(&id, &patch).await.is_some());

    assert_eq!(stores.jobs.by_id(&id).await.unwrap().title, "Principal Engineer");
    assert!(stores.jobs.error().await.is_none());
    assert_eq!(harness.flaky.call_count("jobs.list").await, 2);
}

#[tokio::test]
async fn refresh_after_write_refetches_with_last_query() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    let query = ListQuery {
        department: Some("Engineering".into()),
        ..ListQuery::default()
    };
    stores.jobs.fetch_all(query).await;
    assert_eq!(stores.jobs.total().await, 3);

    stores
        .jobs
        .update_status(&RecordId::from(1_i64), JobStatus::Filled)
        .await
        .unwrap();
    assert_eq!(harness.flaky.call_count("jobs.list").await, 2);
    assert_eq!(stores.jobs.total().await, 3);
    assert_eq!(stores.jobs.by_status(JobStatus::Filled).await.len(), 1);
}

#[tokio::test]
async fn superseded_fetch_does_not_overwrite_newer_one() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    harness
        .flaky
        .delay_next("jobs.list", Duration::from_millis(150))
        .await;

    let slow = stores.jobs.fetch_all(ListQuery {
        status: Some("closed".into()),
        ..ListQuery::default()
    });
    let fast = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        stores.jobs.fetch_all(ListQuery::default()).await
    };
    let (_, fast_ok) = tokio::join!(slow, fast);
    assert!(fast_ok);

    let state = stores.jobs.state().await;
    assert_eq!(state.items.len(), 7);
    assert!(!state.loading());
}

#[tokio::test]
async fn candidate_filters_match_server_side_results() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    stores.candidates.fetch_all(ListQuery::default()).await;
    stores
        .candidates
        .set_filters(CandidateFilters {
            status: Some(CandidateStatus::Applied),
            ..CandidateFilters::default()
        })
        .await;
    let local = stores.candidates.filtered().await;

    stores
        .candidates
        .fetch_all(ListQuery {
            status: Some("new".into()),
            ..ListQuery::default()
        })
        .await;
    let remote = stores.candidates.items().await;
    assert_eq!(local, remote);
    assert_eq!(local.len(), 2);
}

#[tokio::test]
async fn fetching_an_uncached_job_selects_it_without_listing_it() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    let closed = ListQuery {
        status: Some("closed".into()),
        ..ListQuery::default()
    };
    assert!(stores.jobs.fetch_all(closed).await);
    let before = stores.jobs.items().await;
    assert!(!before.is_empty());
    let outside = RecordId::from(1_i64);
    assert!(before.iter().all(|j| j.id != outside));

    let job = stores.jobs.fetch_one(&outside).await.unwrap();
    assert_eq!(job.title, "Frontend Developer");
    assert_eq!(stores.jobs.current().await.map(|j| j.id), Some(outside.clone()));
    assert_eq!(stores.jobs.items().await, before);
    assert_eq!(stores.jobs.total().await, before.len());
    assert!(stores.jobs.by_id(&outside).await.is_none());
}

#[tokio::test]
async fn resume_upload_patches_then_refetches() {
    let harness = TestHarness::seeded();
    let stores = stores(&harness);
    stores.candidates.fetch_all(ListQuery::default()).await;
    let id = RecordId::from(104_i64);
    stores.candidates.fetch_one(&id).await.unwrap();

    let file = ResumeFile {
        file_name: "katherine.pdf".into(),
        content_type: "application/pdf".into(),
        bytes: b"%PDF-1.4".to_vec(),
    };
    let updated = stores.candidates.upload_resume(&id, file).await.unwrap();
    let url = updated.resume_url.clone().unwrap();
    assert!(url.ends_with("katherine.pdf"));

    assert_eq!(harness.flaky.call_count("candidates.list").await, 2);
    let cached = stores.candidates.by_id(&id).await.unwrap();
    assert_eq!(cached.resume_url.as_deref(), Some(url.as_str()));
    assert_eq!(
        stores.candidates.current().await.and_then(|c| c.resume_url),
        Some(url)
    );
}
