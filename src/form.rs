//! Interactive job form.
//!
//! A fixed prompt sequence assembling a `JobPosting`. Create mode starts
//! from an empty template; edit mode pre-fills every field from the
//! existing record. Validation is input-level only (non-empty text, a date
//! that parses, a URL that parses) — the assembled record is never
//! re-validated against a schema before transmission. The form never calls
//! the API itself; it hands the record back for the confirmation gate.

use anyhow::Result;
use chrono::NaiveDate;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::model::{JobPosting, JobType};

pub fn validate_required(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

pub fn parse_deadline(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| "Enter a date as YYYY-MM-DD".to_string())
}

pub fn validate_job_link(input: &str) -> Result<(), String> {
    let url =
        reqwest::Url::parse(input.trim()).map_err(|_| "Enter a valid URL".to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("Enter an http(s) URL".to_string());
    }
    Ok(())
}

/// Run the prompt sequence. `existing` switches the form into edit mode.
pub fn collect(existing: Option<&JobPosting>) -> Result<JobPosting> {
    let theme = ColorfulTheme::default();
    let heading = if existing.is_some() {
        "Edit Job"
    } else {
        "Create New Job"
    };
    println!();
    println!("{}", style(heading).bold());

    let job_title: String = Input::with_theme(&theme)
        .with_prompt("Job title")
        .with_initial_text(existing.map(|j| j.job_title.clone()).unwrap_or_default())
        .validate_with(|s: &String| validate_required(s))
        .interact_text()?;

    let company_name: String = Input::with_theme(&theme)
        .with_prompt("Company name")
        .with_initial_text(existing.map(|j| j.company_name.clone()).unwrap_or_default())
        .validate_with(|s: &String| validate_required(s))
        .interact_text()?;

    let address: String = Input::with_theme(&theme)
        .with_prompt("Address")
        .with_initial_text(existing.map(|j| j.address.clone()).unwrap_or_default())
        .validate_with(|s: &String| validate_required(s))
        .interact_text()?;

    let type_default = existing
        .map(|j| job_type_index(j.job_type))
        .unwrap_or(0);
    let type_index = Select::with_theme(&theme)
        .with_prompt("Job type")
        .items(&JobType::ALL)
        .default(type_default)
        .interact()?;
    let job_type = JobType::ALL[type_index];

    let salary: String = Input::with_theme(&theme)
        .with_prompt("Salary")
        .with_initial_text(existing.map(|j| j.salary.clone()).unwrap_or_default())
        .validate_with(|s: &String| validate_required(s))
        .interact_text()?;

    let deadline_initial = existing
        .map(|j| j.deadline.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let deadline_text: String = Input::with_theme(&theme)
        .with_prompt("Deadline (YYYY-MM-DD)")
        .with_initial_text(deadline_initial)
        .validate_with(|s: &String| parse_deadline(s).map(|_| ()))
        .interact_text()?;
    let deadline = parse_deadline(&deadline_text).map_err(anyhow::Error::msg)?;

    let job_link: String = Input::with_theme(&theme)
        .with_prompt("Job link")
        .with_initial_text(existing.map(|j| j.job_link.clone()).unwrap_or_default())
        .validate_with(|s: &String| validate_job_link(s))
        .interact_text()?;

    Ok(JobPosting {
        id: existing.and_then(|j| j.id),
        job_title,
        company_name,
        address,
        job_type,
        salary,
        deadline,
        job_link: job_link.trim().to_string(),
    })
}

fn job_type_index(job_type: JobType) -> usize {
    JobType::ALL
        .iter()
        .position(|t| *t == job_type)
        .unwrap_or(0)
}
