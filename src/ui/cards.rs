//! Job card rendering.
//!
//! Each posting renders as a small card block; the collection prints in
//! server order with an explicit empty-state message when there is nothing
//! to show.

use chrono::NaiveDate;
use console::style;

use crate::model::JobPosting;
use crate::ui::icons::{BRIEFCASE, BUILDING, CALENDAR, CLOCK, LINK, MONEY, PIN};

pub const EMPTY_STATE: &str = "No jobs available. Choose \"Add new job\" to create one.";

pub fn format_deadline(deadline: NaiveDate) -> String {
    deadline.format("%d %b %Y").to_string()
}

/// Render one posting as a card block.
pub fn render_job_card(job: &JobPosting) -> String {
    let id = job
        .id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "-".to_string());
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}  {}\n",
        BRIEFCASE,
        style(&job.job_title).bold(),
        style(&id).dim()
    ));
    out.push_str(&format!("{}At {}\n", BUILDING, job.company_name));
    out.push_str(&format!("{}{}\n", PIN, job.address));
    out.push_str(&format!(
        "{}{}    {}{}    {}{}\n",
        CALENDAR,
        format_deadline(job.deadline),
        CLOCK,
        job.job_type,
        MONEY,
        job.salary
    ));
    out.push_str(&format!(
        "{}{}\n",
        LINK,
        style(&job.job_link).underlined()
    ));
    out
}

/// Print the whole collection, or the empty state.
pub fn print_job_list(jobs: &[JobPosting]) {
    println!();
    if jobs.is_empty() {
        println!("{}", style(EMPTY_STATE).dim());
        println!();
        return;
    }
    for job in jobs {
        println!("{}", render_job_card(job));
    }
    println!("{} job(s)", jobs.len());
    println!();
}

/// Menu label used by the edit/delete/open pickers.
pub fn picker_label(job: &JobPosting) -> String {
    format!(
        "{} at {} ({})",
        job.job_title,
        job.company_name,
        job.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
    )
}
