// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal and JSON rendering for CLI output.

use std::io::IsTerminal;

use chrono::{DateTime, Utc};
use hireloop_config::HireloopConfig;
use hireloop_core::model::{
    ActivityEvent, Candidate, CandidateStatus, DashboardStats, DepartmentCount, FunnelStage,
    Interview, InterviewStatus, Job, JobStatus, RecentApplication, TrendPoint, UpcomingInterview,
};
use hireloop_core::TimeRange;
use hireloop_store::DashboardState;
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    pub fn detect(json: bool, plain: bool) -> Self {
        Self {
            json,
            color: !json && !plain && std::io::stdout().is_terminal(),
        }
    }
}

/// Color hint for a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Good,
    Pending,
    Bad,
    Neutral,
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    use colored::Colorize;
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Pending => text.yellow().to_string(),
        Tone::Bad => text.red().to_string(),
        Tone::Neutral => text.dimmed().to_string(),
    }
}

fn job_tone(status: JobStatus) -> Tone {
    match status {
        JobStatus::Active => Tone::Good,
        JobStatus::Draft => Tone::Pending,
        JobStatus::Filled => Tone::Neutral,
        JobStatus::Closed => Tone::Bad,
    }
}

fn candidate_tone(status: CandidateStatus) -> Tone {
    match status {
        CandidateStatus::Hired | CandidateStatus::Offer => Tone::Good,
        CandidateStatus::Rejected => Tone::Bad,
        _ => Tone::Pending,
    }
}

fn interview_tone(status: InterviewStatus) -> Tone {
    match status {
        InterviewStatus::Completed => Tone::Good,
        InterviewStatus::Cancelled => Tone::Bad,
        InterviewStatus::Scheduled | InterviewStatus::Pending => Tone::Pending,
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn header(title: &str) {
    println!();
    println!("  {title}");
    println!("  {}", "-".repeat(35));
}

/// Cuts `text` to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

fn date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn when(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// One page of a filtered list.
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: u32,
    pub total_pages: u32,
    /// Rows matching the filters, across all pages.
    pub total: usize,
}

impl<T> Page<'_, T> {
    fn footer(&self) {
        println!();
        println!(
            "  page {} of {} ({} matching)",
            self.page,
            self.total_pages.max(1),
            self.total
        );
        println!();
    }
}

// --- jobs ---

fn job_row(job: &Job, color: bool) -> String {
    format!(
        "    {:<8} {:<28} {:<14} {} {:>4} applicants",
        fit(job.id.as_str(), 8),
        fit(&job.title, 28),
        fit(&job.department, 14),
        paint(&format!("{:<8}", job.status.to_string()), job_tone(job.status), color),
        job.applicants
    )
}

pub fn jobs(page: &Page<'_, Job>, output: Output) {
    if output.json {
        print_json(page);
        return;
    }
    header("jobs");
    if page.items.is_empty() {
        println!("    no jobs match");
    }
    for job in page.items {
        println!("{}", job_row(job, output.color));
    }
    page.footer();
}

#[derive(Serialize)]
struct JobDetail<'a> {
    job: &'a Job,
    applicants: &'a [Candidate],
}

pub fn job(job: &Job, applicants: &[Candidate], output: Output) {
    if output.json {
        print_json(&JobDetail { job, applicants });
        return;
    }
    header(&job.title);
    println!("    Id:          {}", job.id);
    println!("    Department:  {}", job.department);
    if !job.location.is_empty() {
        println!("    Location:    {}", job.location);
    }
    println!(
        "    Status:      {}",
        paint(&job.status.to_string(), job_tone(job.status), output.color)
    );
    println!("    Posted:      {}", date(job.posted_date));
    if let Some(range) = job.salary_range() {
        println!("    Salary:      {range}");
    }
    println!("    Interviews:  {}", job.interviews);
    if !job.description.is_empty() {
        println!();
        println!("    {}", job.description);
    }
    if !applicants.is_empty() {
        println!();
        println!("    Applicants ({})", applicants.len());
        for candidate in applicants {
            println!("{}", candidate_row(candidate, output.color));
        }
    }
    println!();
}

// --- candidates ---

fn candidate_row(candidate: &Candidate, color: bool) -> String {
    format!(
        "    {:<8} {:<22} {:<30} {:<24} {}",
        fit(candidate.id.as_str(), 8),
        fit(&candidate.name, 22),
        fit(&candidate.email, 30),
        fit(&candidate.position, 24),
        paint(
            &candidate.status.to_string(),
            candidate_tone(candidate.status),
            color
        )
    )
}

pub fn candidates(page: &Page<'_, Candidate>, output: Output) {
    if output.json {
        print_json(page);
        return;
    }
    header("candidates");
    if page.items.is_empty() {
        println!("    no candidates match");
    }
    for candidate in page.items {
        println!("{}", candidate_row(candidate, output.color));
    }
    page.footer();
}

#[derive(Serialize)]
struct CandidateDetail<'a> {
    candidate: &'a Candidate,
    interviews: &'a [Interview],
}

pub fn candidate(candidate: &Candidate, interviews: &[Interview], output: Output) {
    if output.json {
        print_json(&CandidateDetail {
            candidate,
            interviews,
        });
        return;
    }
    header(&candidate.name);
    println!("    Id:        {}", candidate.id);
    println!("    Email:     {}", candidate.email);
    if !candidate.phone.is_empty() {
        println!("    Phone:     {}", candidate.phone);
    }
    println!("    Position:  {}", candidate.position);
    println!(
        "    Status:    {}",
        paint(
            &candidate.status.to_string(),
            candidate_tone(candidate.status),
            output.color
        )
    );
    println!("    Applied:   {}", date(candidate.applied_date));
    if !candidate.skills.is_empty() {
        println!("    Skills:    {}", candidate.skills.join(", "));
    }
    if let Some(url) = &candidate.resume_url {
        println!("    Resume:    {url}");
    }
    if !interviews.is_empty() {
        println!();
        println!("    Interviews ({})", interviews.len());
        for interview in interviews {
            println!("{}", interview_row(interview, output.color));
        }
    }
    println!();
}

// --- interviews ---

fn interview_row(interview: &Interview, color: bool) -> String {
    format!(
        "    {:<8} {}  {:<20} {:<24} {:<14} {}",
        fit(interview.id.as_str(), 8),
        when(interview.scheduled_at),
        fit(interview.candidate_name.as_str(), 20),
        fit(interview.job_title.as_str(), 24),
        fit(interview.interview_type.label(), 14),
        paint(
            &interview.status.to_string(),
            interview_tone(interview.status),
            color
        )
    )
}

pub fn interviews(page: &Page<'_, Interview>, output: Output) {
    if output.json {
        print_json(page);
        return;
    }
    header("interviews");
    if page.items.is_empty() {
        println!("    no interviews match");
    }
    for interview in page.items {
        println!("{}", interview_row(interview, output.color));
    }
    page.footer();
}

pub fn interview(interview: &Interview, output: Output) {
    if output.json {
        print_json(interview);
        return;
    }
    header(&format!(
        "{} with {}",
        interview.interview_type.label(),
        interview.candidate_name.as_str()
    ));
    println!("    Id:           {}", interview.id);
    println!("    Position:     {}", interview.job_title.as_str());
    println!("    When:         {} UTC", when(interview.scheduled_at));
    println!("    Duration:     {} min", interview.duration);
    println!("    Interviewer:  {}", interview.interviewer);
    println!(
        "    Status:       {}",
        paint(
            &interview.status.to_string(),
            interview_tone(interview.status),
            output.color
        )
    );
    if let Some(location) = &interview.location {
        println!("    Location:     {location}");
    }
    if let Some(link) = &interview.meeting_link {
        println!("    Link:         {link}");
    }
    if let Some(result) = &interview.result {
        println!();
        println!(
            "    Result:       {}/5, {}",
            result.rating, result.hiring_recommendation
        );
        if !result.feedback.is_empty() {
            println!("    {}", result.feedback);
        }
    }
    println!();
}

// --- dashboard ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView<'a> {
    time_range: TimeRange,
    stats: &'a DashboardStats,
    recent_activity: &'a [ActivityEvent],
    jobs_by_department: &'a [DepartmentCount],
    hiring_funnel: &'a [FunnelStage],
    application_trend: &'a [TrendPoint],
    upcoming_interviews: &'a [UpcomingInterview],
    recent_applications: &'a [RecentApplication],
    applications_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn change(delta: i32, color: bool) -> String {
    let text = format!("{delta:+}%");
    let tone = match delta {
        d if d > 0 => Tone::Good,
        d if d < 0 => Tone::Bad,
        _ => Tone::Neutral,
    };
    paint(&text, tone, color)
}

/// A bar of `count` scaled against `max`, at most 30 cells wide.
fn bar(count: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (f64::from(count) / f64::from(max) * 30.0).round() as usize;
    "#".repeat(width.max(usize::from(count > 0)))
}

pub fn dashboard(state: &DashboardState, output: Output) {
    if output.json {
        print_json(&DashboardView {
            time_range: state.time_range,
            stats: &state.stats,
            recent_activity: &state.recent_activity,
            jobs_by_department: &state.jobs_by_department,
            hiring_funnel: &state.hiring_funnel,
            application_trend: &state.application_trend,
            upcoming_interviews: &state.upcoming_interviews,
            recent_applications: &state.recent_applications,
            applications_total: state.applications_total,
            error: state.error.as_deref(),
        });
        return;
    }
    let color = output.color;
    let stats = &state.stats;
    header(&format!("dashboard ({})", state.time_range));
    println!(
        "    Active jobs:          {:>5}  {}",
        stats.active_jobs,
        change(stats.active_jobs_change, color)
    );
    println!(
        "    New applications:     {:>5}  {}",
        stats.new_applications,
        change(stats.applications_change, color)
    );
    println!(
        "    Scheduled interviews: {:>5}  {}",
        stats.scheduled_interviews,
        change(stats.interviews_change, color)
    );
    println!(
        "    Positions filled:     {:>5}  {}",
        stats.positions_filled,
        change(stats.filled_change, color)
    );

    if !state.hiring_funnel.is_empty() {
        println!();
        println!("    Hiring funnel");
        let max = state.hiring_funnel.iter().map(|s| s.count).max().unwrap_or(0);
        for stage in &state.hiring_funnel {
            println!(
                "      {:<12} {:>4} {}",
                stage.stage,
                stage.count,
                bar(stage.count, max)
            );
        }
    }

    if !state.jobs_by_department.is_empty() {
        println!();
        println!("    Jobs by department");
        let max = state.jobs_by_department.iter().map(|d| d.count).max().unwrap_or(0);
        for dept in &state.jobs_by_department {
            println!(
                "      {:<12} {:>4} {}",
                fit(&dept.department, 12),
                dept.count,
                bar(dept.count, max)
            );
        }
    }

    if !state.application_trend.is_empty() {
        println!();
        println!("    Applications / interviews / offers");
        for point in &state.application_trend {
            println!(
                "      {:<12} {:>4} {:>4} {:>4}",
                point.date, point.applications, point.interviews, point.offers
            );
        }
    }

    if !state.upcoming_interviews.is_empty() {
        println!();
        println!("    Upcoming interviews");
        for upcoming in &state.upcoming_interviews {
            println!(
                "      {}  {:<20} {}",
                when(upcoming.scheduled_at),
                fit(&upcoming.candidate_name, 20),
                upcoming.job_title
            );
        }
    }

    if !state.recent_activity.is_empty() {
        println!();
        println!("    Recent activity");
        for event in &state.recent_activity {
            println!("      {}  {}", date(Some(event.timestamp)), event.summary());
        }
    }

    println!();
    println!(
        "    Recent applications (page {} of {})",
        state.pagination.page,
        state
            .pagination
            .total_pages(state.applications_total as usize)
            .max(1)
    );
    for application in &state.recent_applications {
        println!(
            "      {}  {:<22} {:<24} {}",
            date(application.applied_date),
            fit(&application.candidate, 22),
            fit(&application.position, 24),
            application.status
        );
    }

    if let Some(error) = &state.error {
        println!();
        println!("    {}", paint(&format!("! {error}"), Tone::Bad, color));
    }
    println!();
}

// --- outcomes ---

#[derive(Serialize)]
struct Outcome<'a> {
    ok: bool,
    message: &'a str,
}

/// Confirms a write that has nothing further to show.
pub fn done(message: &str, output: Output) {
    if output.json {
        print_json(&Outcome { ok: true, message });
    } else if output.color {
        use colored::Colorize;
        println!("{} {message}", "✓".green());
    } else {
        println!("[OK] {message}");
    }
}

/// Reports a failed command on stderr (stdout for JSON).
pub fn failure(message: &str, output: Output) {
    if output.json {
        print_json(&Outcome { ok: false, message });
    } else if output.color {
        use colored::Colorize;
        eprintln!("{} {}", "✗".red(), message.red());
    } else {
        eprintln!("[FAIL] {message}");
    }
}

/// Prints the effective configuration as TOML, or JSON with `--json`.
pub fn config(config: &HireloopConfig, output: Output) -> Result<(), toml::ser::Error> {
    if output.json {
        print_json(config);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
