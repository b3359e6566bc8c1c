//! Job commands — `jobdeck list`, `create`, `edit`, `delete`.
//!
//! The mutating commands follow the same staged-commit flow as the
//! dashboard: assemble the record, stage it in the confirmation gate,
//! dispatch on confirm, then blindly re-fetch and print the list.

use anyhow::{Context, Result, anyhow};
use console::style;

use jobdeck::api::ApiClient;
use jobdeck::config::Config;
use jobdeck::errors::ApiError;
use jobdeck::form;
use jobdeck::gate::{ConfirmationGate, MutationKind, PendingAction};
use jobdeck::model::JobPosting;
use jobdeck::session::SessionStore;
use jobdeck::ui;

fn require_token(config: &Config) -> Result<String> {
    let store = SessionStore::new(&config.data_dir);
    Ok(store.load()?.ok_or(ApiError::NotAuthenticated)?)
}

/// Fetch the collection, degrading fetch failure to an empty list.
async fn fetch_jobs(api: &ApiClient, token: &str) -> Vec<JobPosting> {
    let bar = ui::spinner("Fetching jobs...");
    let jobs = match api.list_jobs(token).await {
        Ok(jobs) => jobs,
        Err(err) => {
            tracing::warn!(error = %err, "job list fetch failed; rendering empty list");
            Vec::new()
        }
    };
    bar.finish_and_clear();
    jobs
}

async fn find_job(api: &ApiClient, token: &str, id: i64) -> Result<JobPosting> {
    fetch_jobs(api, token)
        .await
        .into_iter()
        .find(|job| job.id == Some(id))
        .ok_or_else(|| anyhow!("No job posting with id {}", id))
}

/// Resolve the staged action and, on confirm, dispatch it and re-fetch.
async fn run_gated(
    config: &Config,
    api: &ApiClient,
    token: &str,
    mut gate: ConfirmationGate,
) -> Result<()> {
    let Some(action) = gate.resolve(config.assume_yes)? else {
        println!("{}", style("Cancelled. No changes made.").dim());
        return Ok(());
    };

    let bar = ui::spinner(&format!("Running {}...", action.kind));
    let result = match action.kind {
        MutationKind::Delete => {
            let id = action.job.id.context("posting has no server id")?;
            api.delete_job(token, id).await
        }
        MutationKind::Create | MutationKind::Update => api.upsert_job(token, &action.job).await,
    };
    bar.finish_and_clear();
    result?;

    ui::print_success(&format!("Job {}d", action.kind));
    let jobs = fetch_jobs(api, token).await;
    ui::cards::print_job_list(&jobs);
    Ok(())
}

pub async fn cmd_list(config: &Config) -> Result<()> {
    let token = require_token(config)?;
    let api = ApiClient::new(config);
    let jobs = fetch_jobs(&api, &token).await;
    ui::cards::print_job_list(&jobs);
    Ok(())
}

pub async fn cmd_create(config: &Config) -> Result<()> {
    let token = require_token(config)?;
    let api = ApiClient::new(config);
    let job = form::collect(None)?;
    let mut gate = ConfirmationGate::new();
    gate.stage(PendingAction::create(job));
    run_gated(config, &api, &token, gate).await
}

pub async fn cmd_edit(config: &Config, id: i64) -> Result<()> {
    let token = require_token(config)?;
    let api = ApiClient::new(config);
    let existing = find_job(&api, &token, id).await?;
    let updated = form::collect(Some(&existing))?;
    let mut gate = ConfirmationGate::new();
    gate.stage(PendingAction::update(updated));
    run_gated(config, &api, &token, gate).await
}

pub async fn cmd_delete(config: &Config, id: i64) -> Result<()> {
    let token = require_token(config)?;
    let api = ApiClient::new(config);
    let job = find_job(&api, &token, id).await?;
    let mut gate = ConfirmationGate::new();
    gate.stage(PendingAction::delete(job));
    run_gated(config, &api, &token, gate).await
}
