//! The App Controller.
//!
//! Owns all mutable state (session, in-memory job collection, confirmation
//! gate, shared error banner) and passes it by reference into the rendering
//! and prompt layers. Views are mutually exclusive: `CheckingAuth` resolves
//! immediately to `Unauthenticated` or `Authenticated` from the presence of
//! a stored token.
//!
//! Network calls are awaited inline on one logical thread of control, so
//! mutate-then-refetch pairs run strictly in order here; the overlapping
//! last-write-wins race of the original dashboard cannot arise.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{ApiError, AppError, SessionError};
use crate::form;
use crate::gate::{ConfirmationGate, MutationKind, PendingAction};
use crate::model::JobPosting;
use crate::session::SessionStore;
use crate::ui::{self, cards, icons::WARN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    CheckingAuth,
    Unauthenticated,
    Authenticated,
}

pub struct App {
    config: Config,
    session: SessionStore,
    api: ApiClient,
    jobs: Vec<JobPosting>,
    gate: ConfirmationGate,
    error: Option<String>,
    view: View,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = SessionStore::new(&config.data_dir);
        let api = ApiClient::new(&config);
        Self {
            config,
            session,
            api,
            jobs: Vec::new(),
            gate: ConfirmationGate::new(),
            error: None,
            view: View::CheckingAuth,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Resolve `CheckingAuth` from the presence of a stored token.
    pub fn resolve_view(&mut self) -> View {
        self.view = if self.session.is_authenticated() {
            View::Authenticated
        } else {
            View::Unauthenticated
        };
        self.view
    }

    /// Exchange credentials for a token, persist it, and trigger exactly one
    /// list fetch. On failure nothing is persisted and the view stays put.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        let token = self.api.login(username, password).await?;
        self.session.save(&token)?;
        self.view = View::Authenticated;
        self.refresh().await;
        Ok(())
    }

    /// Clear the session and leave the authenticated view, dropping the job
    /// collection and any error banner with it.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session.clear()?;
        self.jobs.clear();
        self.error = None;
        self.view = View::Unauthenticated;
        Ok(())
    }

    /// Re-fetch the job collection. Fetch failure silently degrades to an
    /// empty list; it is logged but never shown.
    pub async fn refresh(&mut self) {
        let token = match self.session.load() {
            Ok(Some(token)) => token,
            _ => {
                self.jobs.clear();
                return;
            }
        };
        match self.api.list_jobs(&token).await {
            Ok(jobs) => self.jobs = jobs,
            Err(err) => {
                tracing::warn!(error = %err, "job list fetch failed; rendering empty list");
                self.jobs.clear();
            }
        }
    }

    /// Dispatch a confirmed action. Success clears the error banner and
    /// blindly re-fetches the list; failure overwrites the banner with this
    /// operation's message and skips the refetch.
    pub async fn execute(&mut self, action: PendingAction) {
        let token = match self.session.load() {
            Ok(Some(token)) => token,
            _ => {
                self.error = Some(ApiError::NotAuthenticated.to_string());
                return;
            }
        };
        let result = match action.kind {
            MutationKind::Delete => match action.job.id {
                Some(id) => self.api.delete_job(&token, id).await,
                // A delete can only be staged from a fetched card, which
                // always carries the server id.
                None => {
                    self.error = Some("Failed to delete job".to_string());
                    return;
                }
            },
            MutationKind::Create | MutationKind::Update => {
                self.api.upsert_job(&token, &action.job).await
            }
        };
        match result {
            Ok(()) => {
                self.error = None;
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = %action.kind, "mutation failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// The interactive dashboard loop.
    pub async fn run(&mut self) -> Result<()> {
        self.resolve_view();
        if self.view == View::Authenticated {
            let bar = ui::spinner("Fetching jobs...");
            self.refresh().await;
            bar.finish_and_clear();
        }
        loop {
            match self.view {
                View::CheckingAuth => {
                    self.resolve_view();
                }
                View::Unauthenticated => {
                    if !self.login_prompt().await? {
                        return Ok(());
                    }
                }
                View::Authenticated => {
                    if !self.menu().await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Returns `Ok(false)` when the user chooses to quit instead of
    /// logging in. A rejected login stays on this view with the error
    /// printed inline.
    async fn login_prompt(&mut self) -> Result<bool> {
        println!();
        println!("{}", style("Admin Login").yellow().bold());
        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username (blank to quit)")
            .allow_empty(true)
            .interact_text()?;
        if username.trim().is_empty() {
            return Ok(false);
        }
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?;

        let bar = ui::spinner("Logging in...");
        let result = self.login(username.trim(), &password).await;
        bar.finish_and_clear();

        match result {
            Ok(()) => {
                ui::print_success("Logged in");
                Ok(true)
            }
            Err(AppError::Api(ApiError::Auth { message })) => {
                ui::print_error(&message);
                Ok(true)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Render the banner, the card grid, and the action menu.
    /// Returns `Ok(false)` on quit.
    async fn menu(&mut self) -> Result<bool> {
        if let Some(error) = &self.error {
            println!();
            println!("{}{}", WARN, style(error).red());
        }
        cards::print_job_list(&self.jobs);

        let options = [
            "Refresh",
            "Add new job",
            "Edit a job",
            "Delete a job",
            "Open a posting in the browser",
            "Logout",
            "Quit",
        ];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Action")
            .items(&options)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let bar = ui::spinner("Fetching jobs...");
                self.refresh().await;
                bar.finish_and_clear();
            }
            1 => {
                let job = form::collect(None)?;
                self.gate.stage(PendingAction::create(job));
                self.resolve_gate().await?;
            }
            2 => {
                if let Some(job) = self.pick_job("Edit which job?")? {
                    let updated = form::collect(Some(&job))?;
                    self.gate.stage(PendingAction::update(updated));
                    self.resolve_gate().await?;
                }
            }
            3 => {
                if let Some(job) = self.pick_job("Delete which job?")? {
                    self.gate.stage(PendingAction::delete(job));
                    self.resolve_gate().await?;
                }
            }
            4 => {
                if let Some(job) = self.pick_job("Open which posting?")? {
                    open::that(&job.job_link)?;
                }
            }
            5 => {
                self.logout()?;
                println!("Logged out.");
            }
            6 => return Ok(false),
            _ => unreachable!(),
        }
        Ok(true)
    }

    fn pick_job(&self, prompt: &str) -> Result<Option<JobPosting>> {
        if self.jobs.is_empty() {
            println!("{}", style("Nothing to pick yet.").dim());
            return Ok(None);
        }
        let mut labels: Vec<String> = self.jobs.iter().map(cards::picker_label).collect();
        labels.push("Cancel".to_string());
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;
        if choice == self.jobs.len() {
            return Ok(None);
        }
        Ok(Some(self.jobs[choice].clone()))
    }

    /// Resolve the staged action through the gate and dispatch on confirm.
    async fn resolve_gate(&mut self) -> Result<()> {
        let Some(action) = self.gate.resolve(self.config.assume_yes)? else {
            println!("{}", style("Cancelled. No changes made.").dim());
            return Ok(());
        };
        let bar = ui::spinner(&format!("Running {}...", action.kind));
        self.execute(action).await;
        bar.finish_and_clear();
        if self.error.is_none() {
            ui::print_success("Done");
        }
        Ok(())
    }
}
