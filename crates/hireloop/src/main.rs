// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hireloop - applicant tracking from the command line.
//!
//! This is the binary entry point. Every subcommand drives the same stores a
//! graphical front end would bind to.

mod commands;
mod render;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use hireloop_api::ServiceSet;
use hireloop_core::TimeRange;
use hireloop_core::model::{CandidateStatus, InterviewStatus, InterviewType, JobStatus};
use hireloop_store::Stores;

use crate::render::Output;

/// Hireloop - applicant tracking from the command line.
#[derive(Parser, Debug)]
#[command(name = "hireloop", version, about, long_about = None)]
struct Cli {
    /// Serve seeded in-memory data instead of calling the backend.
    #[arg(long, global = true)]
    mock: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors.
    #[arg(long, global = true)]
    plain: bool,

    /// Read configuration from this file instead of the usual locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Job postings.
    Jobs {
        #[command(subcommand)]
        action: JobCommand,
    },
    /// Candidates.
    Candidates {
        #[command(subcommand)]
        action: CandidateCommand,
    },
    /// Interviews.
    Interviews {
        #[command(subcommand)]
        action: InterviewCommand,
    },
    /// Hiring metrics for a time range.
    Dashboard {
        /// week, month, quarter or year.
        #[arg(long, default_value_t = TimeRange::Month)]
        range: TimeRange,
        /// Page of recent applications.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Store a bearer token for the backend.
    Login {
        #[arg(long)]
        token: String,
        #[arg(long, default_value = "me")]
        username: String,
        #[arg(long, default_value = "recruiter")]
        role: String,
    },
    /// Forget the stored token.
    Logout,
    /// Print the effective configuration.
    Config,
}

/// Paging flags shared by every `list` subcommand.
#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Rows per page; defaults to `store.page_size`.
    #[arg(long)]
    page_size: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum JobCommand {
    /// List jobs, filtered locally.
    List {
        #[arg(long)]
        status: Option<JobStatus>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one job and its applicants.
    Show { id: String },
    /// Post a job.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        department: String,
        #[arg(long, default_value_t = JobStatus::Active)]
        status: JobStatus,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change a job's status.
    Status { id: String, status: JobStatus },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum CandidateCommand {
    List {
        #[arg(long)]
        status: Option<CandidateStatus>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one candidate and their interviews.
    Show { id: String },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    Status { id: String, status: CandidateStatus },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum InterviewCommand {
    List {
        #[arg(long)]
        status: Option<InterviewStatus>,
        #[arg(long)]
        candidate: Option<String>,
        #[arg(long)]
        job: Option<String>,
        /// Only this UTC day (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        search: Option<String>,
        /// Only upcoming, non-cancelled interviews, soonest first.
        #[arg(long, conflicts_with = "date")]
        upcoming: bool,
        #[command(flatten)]
        paging: PageArgs,
    },
    Show { id: String },
    /// Schedule an interview.
    Create {
        #[arg(long)]
        candidate: String,
        #[arg(long)]
        job: String,
        /// Code or label, e.g. `phone` or `Phone Screen`.
        #[arg(long = "type", default_value = "video", value_parser = parse_interview_type)]
        kind: InterviewType,
        /// RFC 3339 start time.
        #[arg(long)]
        at: DateTime<Utc>,
        /// Minutes.
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        interviewer: Option<String>,
    },
    Status { id: String, status: InterviewStatus },
    Cancel { id: String },
    Delete { id: String },
}

fn parse_interview_type(raw: &str) -> Result<InterviewType, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("interview type must not be empty".to_string());
    }
    let known = InterviewType::KNOWN
        .into_iter()
        .find(|t| t.code() == raw.to_lowercase() || t.label().eq_ignore_ascii_case(raw));
    Ok(known.unwrap_or_else(|| InterviewType::from_code(&raw.to_lowercase())))
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hireloop={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => hireloop_config::load_and_validate_path(path),
        None => hireloop_config::load_and_validate(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            hireloop_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    if cli.mock {
        config.mock.enabled = true;
    }
    init_tracing(&config.ui.log_level);

    let Some(command) = cli.command else {
        println!("hireloop: use --help for available commands");
        return;
    };
    let output = Output::detect(cli.json, cli.plain);

    let services = match ServiceSet::from_config(&config).await {
        Ok(services) => services,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let stores = Stores::new(&services, &config);

    if let Err(e) = commands::run(command, &stores, &config, output).await {
        render::failure(&e.to_string(), output);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse_into_typed_filters() {
        let cli = Cli::try_parse_from([
            "hireloop", "--mock", "jobs", "list", "--status", "open", "--department",
            "Engineering", "--page", "2",
        ])
        .unwrap();
        assert!(cli.mock);
        match cli.command {
            Some(Commands::Jobs {
                action:
                    JobCommand::List {
                        status, paging, ..
                    },
            }) => {
                assert_eq!(status, Some(JobStatus::Active));
                assert_eq!(paging.page, 2);
                assert_eq!(paging.page_size, None);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn interview_type_accepts_codes_and_labels() {
        assert_eq!(parse_interview_type("phone").unwrap(), InterviewType::Phone);
        assert_eq!(parse_interview_type("Phone Screen").unwrap(), InterviewType::Phone);
        assert_eq!(parse_interview_type("hr").unwrap(), InterviewType::Hr);
        assert_eq!(
            parse_interview_type("Panel").unwrap(),
            InterviewType::Other("panel".into())
        );
        assert!(parse_interview_type(" ").is_err());
    }

    #[test]
    fn dashboard_range_defaults_to_month() {
        let cli = Cli::try_parse_from(["hireloop", "dashboard"]).unwrap();
        match cli.command {
            Some(Commands::Dashboard { range, page }) => {
                assert_eq!(range, TimeRange::Month);
                assert_eq!(page, 1);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
