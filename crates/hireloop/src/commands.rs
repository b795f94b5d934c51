// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand handlers.
//!
//! Each handler drives the stores the way a view would: set filters and the
//! page cursor, call an action, then read the selectors. A failed action
//! leaves its message in the store; handlers lift it into an error toast and
//! a non-zero exit.

use chrono::Utc;
use hireloop_config::HireloopConfig;
use hireloop_core::model::{NewCandidate, NewInterview, NewJob};
use hireloop_core::{HireloopError, ListQuery, RecordId};
use hireloop_store::query::{Pagination, paginate};
use hireloop_store::validate::{is_valid_email, is_valid_phone};
use hireloop_store::{CandidateFilters, InterviewFilters, JobFilters, Stores, User};
use secrecy::SecretString;
use tracing::debug;

use crate::render::{self, Output, Page};
use crate::{CandidateCommand, Commands, InterviewCommand, JobCommand, PageArgs};

/// Turns a store failure into an error toast and a command error.
async fn failed(stores: &Stores, error: Option<String>, fallback: &str) -> HireloopError {
    let message = error.unwrap_or_else(|| fallback.to_string());
    stores.session.notify_error(message.clone()).await;
    HireloopError::Application(message)
}

fn page_size(paging: PageArgs, config: &HireloopConfig) -> u32 {
    paging.page_size.unwrap_or(config.store.page_size)
}

pub async fn run(
    command: Commands,
    stores: &Stores,
    config: &HireloopConfig,
    output: Output,
) -> Result<(), HireloopError> {
    match command {
        Commands::Jobs { action } => jobs(action, stores, config, output).await,
        Commands::Candidates { action } => candidates(action, stores, config, output).await,
        Commands::Interviews { action } => interviews(action, stores, config, output).await,
        Commands::Dashboard { range, page } => {
            let dashboard = &stores.dashboard;
            // Page 1 is already loaded by the range change.
            let mut ok = dashboard.set_time_range(range).await;
            if page > 1 {
                ok &= dashboard.set_page(page).await;
            }
            let state = dashboard.state().await;
            render::dashboard(&state, output);
            if ok {
                Ok(())
            } else {
                Err(failed(stores, state.error, "Failed to load dashboard").await)
            }
        }
        Commands::Login {
            token,
            username,
            role,
        } => {
            let user = User {
                id: RecordId::new(username.clone()),
                username,
                role,
            };
            if !stores.session.sign_in(user, SecretString::from(token)).await {
                let error = stores.session.error().await;
                return Err(failed(stores, error, "Could not store token").await);
            }
            render::done("token stored", output);
            Ok(())
        }
        Commands::Logout => {
            if !stores.session.sign_out().await {
                let error = stores.session.error().await;
                return Err(failed(stores, error, "Could not remove token").await);
            }
            render::done("signed out", output);
            Ok(())
        }
        Commands::Config => render::config(config, output)
            .map_err(|e| HireloopError::Config(e.to_string())),
    }
}

async fn jobs(
    action: JobCommand,
    stores: &Stores,
    config: &HireloopConfig,
    output: Output,
) -> Result<(), HireloopError> {
    let store = &stores.jobs;
    match action {
        JobCommand::List {
            status,
            department,
            search,
            paging,
        } => {
            store.set_page_size(page_size(paging, config)).await;
            if !store.fetch_all(ListQuery::default()).await {
                return Err(failed(stores, store.error().await, "Failed to fetch jobs").await);
            }
            store
                .set_filters(JobFilters {
                    status,
                    department,
                    search,
                })
                .await;
            store.set_page(paging.page).await;
            let items = store.paginated().await;
            render::jobs(
                &Page {
                    items: &items,
                    page: paging.page,
                    total_pages: store.total_pages().await,
                    total: store.filtered().await.len(),
                },
                output,
            );
            Ok(())
        }
        JobCommand::Show { id } => {
            let id = RecordId::new(id);
            let Some(job) = store.fetch_one(&id).await else {
                return Err(failed(stores, store.error().await, "Failed to fetch job").await);
            };
            let applicants = store.applicants(&id).await.unwrap_or_default();
            render::job(&job, &applicants, output);
            Ok(())
        }
        JobCommand::Create {
            title,
            department,
            status,
            location,
            description,
        } => {
            let mut new = NewJob::new(title, department, status);
            new.location = location.unwrap_or_default();
            new.description = description.unwrap_or_default();
            let Some(job) = store.create(&new).await else {
                return Err(failed(stores, store.error().await, "Failed to create job").await);
            };
            stores.session.notify_success(format!("Job \"{}\" created", job.title)).await;
            render::job(&job, &[], output);
            Ok(())
        }
        JobCommand::Status { id, status } => {
            let id = RecordId::new(id);
            if store.update_status(&id, status).await.is_none() {
                return Err(failed(stores, store.error().await, "Failed to update job").await);
            }
            render::done(&format!("job {id} is now {status}"), output);
            Ok(())
        }
        JobCommand::Delete { id } => {
            let id = RecordId::new(id);
            if !store.delete(&id).await {
                return Err(failed(stores, store.error().await, "Failed to delete job").await);
            }
            render::done(&format!("job {id} deleted"), output);
            Ok(())
        }
    }
}

async fn candidates(
    action: CandidateCommand,
    stores: &Stores,
    config: &HireloopConfig,
    output: Output,
) -> Result<(), HireloopError> {
    let store = &stores.candidates;
    match action {
        CandidateCommand::List {
            status,
            department,
            search,
            paging,
        } => {
            store.set_page_size(page_size(paging, config)).await;
            if !store.fetch_all(ListQuery::default()).await {
                return Err(
                    failed(stores, store.error().await, "Failed to fetch candidates").await,
                );
            }
            store
                .set_filters(CandidateFilters {
                    status,
                    department,
                    search,
                })
                .await;
            store.set_page(paging.page).await;
            let items = store.paginated().await;
            render::candidates(
                &Page {
                    items: &items,
                    page: paging.page,
                    total_pages: store.total_pages().await,
                    total: store.filtered().await.len(),
                },
                output,
            );
            Ok(())
        }
        CandidateCommand::Show { id } => {
            let id = RecordId::new(id);
            let Some(candidate) = store.fetch_one(&id).await else {
                return Err(
                    failed(stores, store.error().await, "Failed to fetch candidate").await,
                );
            };
            if !store.fetch_interviews(&id).await {
                debug!(candidate = %id, "interviews unavailable, showing candidate only");
            }
            let interviews = store.candidate_interviews().await;
            render::candidate(&candidate, &interviews, output);
            Ok(())
        }
        CandidateCommand::Create {
            name,
            email,
            phone,
            position,
            department,
        } => {
            if !is_valid_email(&email) {
                return Err(failed(stores, None, &format!("Invalid email address: {email}")).await);
            }
            if let Some(phone) = &phone
                && !is_valid_phone(phone)
            {
                return Err(failed(stores, None, &format!("Invalid phone number: {phone}")).await);
            }
            let mut new = NewCandidate::new(name, email);
            new.phone = phone.unwrap_or_default();
            new.position = position.unwrap_or_default();
            new.department = department.unwrap_or_default();
            let Some(candidate) = store.create(&new).await else {
                return Err(
                    failed(stores, store.error().await, "Failed to create candidate").await,
                );
            };
            stores
                .session
                .notify_success(format!("Candidate {} added", candidate.name))
                .await;
            render::candidate(&candidate, &[], output);
            Ok(())
        }
        CandidateCommand::Status { id, status } => {
            let id = RecordId::new(id);
            if store.update_status(&id, status).await.is_none() {
                return Err(
                    failed(stores, store.error().await, "Failed to update candidate").await,
                );
            }
            render::done(&format!("candidate {id} is now {status}"), output);
            Ok(())
        }
        CandidateCommand::Delete { id } => {
            let id = RecordId::new(id);
            if !store.delete(&id).await {
                return Err(
                    failed(stores, store.error().await, "Failed to delete candidate").await,
                );
            }
            render::done(&format!("candidate {id} deleted"), output);
            Ok(())
        }
    }
}

async fn interviews(
    action: InterviewCommand,
    stores: &Stores,
    config: &HireloopConfig,
    output: Output,
) -> Result<(), HireloopError> {
    let store = &stores.interviews;
    match action {
        InterviewCommand::List {
            status,
            candidate,
            job,
            date,
            search,
            upcoming,
            paging,
        } => {
            let size = page_size(paging, config);
            store.set_page_size(size).await;
            if !store.fetch_all(ListQuery::default()).await {
                return Err(
                    failed(stores, store.error().await, "Failed to fetch interviews").await,
                );
            }
            if upcoming {
                let soonest = store.upcoming(Utc::now()).await;
                let pagination = Pagination {
                    page: paging.page,
                    ..Pagination::new(size)
                };
                let items = paginate(&soonest, pagination);
                render::interviews(
                    &Page {
                        items: &items,
                        page: paging.page,
                        total_pages: pagination.total_pages(soonest.len()),
                        total: soonest.len(),
                    },
                    output,
                );
                return Ok(());
            }
            store
                .set_filters(InterviewFilters {
                    status,
                    candidate_id: candidate.map(RecordId::new),
                    job_id: job.map(RecordId::new),
                    date,
                    search,
                    ..InterviewFilters::default()
                })
                .await;
            store.set_page(paging.page).await;
            let items = store.paginated().await;
            render::interviews(
                &Page {
                    items: &items,
                    page: paging.page,
                    total_pages: store.total_pages().await,
                    total: store.filtered().await.len(),
                },
                output,
            );
            Ok(())
        }
        InterviewCommand::Show { id } => {
            let id = RecordId::new(id);
            let Some(interview) = store.fetch_one(&id).await else {
                return Err(
                    failed(stores, store.error().await, "Failed to fetch interview").await,
                );
            };
            render::interview(&interview, output);
            Ok(())
        }
        InterviewCommand::Create {
            candidate,
            job,
            kind,
            at,
            duration,
            interviewer,
        } => {
            let candidate_id = RecordId::new(candidate);
            let job_id = RecordId::new(job);
            // Names are captured once, at scheduling time.
            let Some(candidate) = stores.candidates.fetch_one(&candidate_id).await else {
                let error = stores.candidates.error().await;
                return Err(failed(stores, error, "Failed to fetch candidate").await);
            };
            let Some(job) = stores.jobs.fetch_one(&job_id).await else {
                let error = stores.jobs.error().await;
                return Err(failed(stores, error, "Failed to fetch job").await);
            };
            let mut new = NewInterview::new(candidate_id, job_id, kind, at);
            new.candidate_name = candidate.name;
            new.job_title = job.title;
            new.duration = duration;
            new.interviewer = interviewer.unwrap_or_default();
            let Some(interview) = store.create(&new).await else {
                return Err(
                    failed(stores, store.error().await, "Failed to schedule interview").await,
                );
            };
            stores
                .session
                .notify_success(format!(
                    "Interview with {} scheduled",
                    interview.candidate_name.as_str()
                ))
                .await;
            render::interview(&interview, output);
            Ok(())
        }
        InterviewCommand::Status { id, status } => {
            let id = RecordId::new(id);
            if store.update_status(&id, status).await.is_none() {
                return Err(
                    failed(stores, store.error().await, "Failed to update interview").await,
                );
            }
            render::done(&format!("interview {id} is now {status}"), output);
            Ok(())
        }
        InterviewCommand::Cancel { id } => {
            let id = RecordId::new(id);
            if store.cancel(&id).await.is_none() {
                return Err(
                    failed(stores, store.error().await, "Failed to cancel interview").await,
                );
            }
            render::done(&format!("interview {id} cancelled"), output);
            Ok(())
        }
        InterviewCommand::Delete { id } => {
            let id = RecordId::new(id);
            if !store.delete(&id).await {
                return Err(
                    failed(stores, store.error().await, "Failed to delete interview").await,
                );
            }
            render::done(&format!("interview {id} deleted"), output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use hireloop_api::{MockBackend, ServiceSet, TokenStore};
    use hireloop_core::model::{CandidateStatus, JobStatus};

    use super::*;

    fn plain() -> Output {
        Output {
            json: false,
            color: false,
        }
    }

    fn mock_stores() -> (Stores, HireloopConfig) {
        let mut config = HireloopConfig::default();
        config.mock.enabled = true;
        let backend = Arc::new(MockBackend::seeded(Duration::ZERO));
        let services = ServiceSet::mock(backend, Arc::new(TokenStore::in_memory()));
        (Stores::new(&services, &config), config)
    }

    #[tokio::test]
    async fn create_job_lands_in_the_cache() {
        let (stores, config) = mock_stores();
        let before = stores.jobs.total().await;
        run(
            Commands::Jobs {
                action: JobCommand::Create {
                    title: "Data Engineer".into(),
                    department: "Engineering".into(),
                    status: JobStatus::Active,
                    location: None,
                    description: None,
                },
            },
            &stores,
            &config,
            plain(),
        )
        .await
        .unwrap();
        let items = stores.jobs.items().await;
        assert_eq!(items[0].title, "Data Engineer");
        assert!(items.len() > before);
        assert_eq!(stores.session.notifications().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_request() {
        let (stores, config) = mock_stores();
        let err = run(
            Commands::Candidates {
                action: CandidateCommand::Create {
                    name: "Ada".into(),
                    email: "not-an-email".into(),
                    phone: None,
                    position: None,
                    department: None,
                },
            },
            &stores,
            &config,
            plain(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("not-an-email"));
        assert_eq!(stores.candidates.total().await, 0);
        let toasts = stores.session.notifications().await;
        assert_eq!(toasts.len(), 1);
    }

    #[tokio::test]
    async fn missing_records_fail_with_the_store_message() {
        let (stores, config) = mock_stores();
        let err = run(
            Commands::Candidates {
                action: CandidateCommand::Status {
                    id: "999999".into(),
                    status: CandidateStatus::Hired,
                },
            },
            &stores,
            &config,
            plain(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Candidate with ID 999999 not found");
        assert_eq!(
            stores.candidates.error().await.as_deref(),
            Some("Candidate with ID 999999 not found")
        );
    }

    #[tokio::test]
    async fn scheduling_captures_names() {
        let (stores, config) = mock_stores();
        run(
            Commands::Interviews {
                action: InterviewCommand::Create {
                    candidate: "104".into(),
                    job: "3".into(),
                    kind: hireloop_core::model::InterviewType::Phone,
                    at: Utc::now() + chrono::Duration::days(2),
                    duration: Some(30),
                    interviewer: Some("Sophie Wilson".into()),
                },
            },
            &stores,
            &config,
            plain(),
        )
        .await
        .unwrap();
        let created = stores.interviews.items().await;
        let interview = created
            .iter()
            .find(|i| i.interviewer == "Sophie Wilson" && i.duration == 30)
            .unwrap();
        assert_eq!(interview.candidate_name.as_str(), "Katherine Johnson");
        assert_eq!(interview.job_title.as_str(), "Product Manager");
        assert_eq!(interview.duration, 30);
    }
}
