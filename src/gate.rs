//! Confirmation gate for mutating actions.
//!
//! Every create, update, and delete passes through here before the matching
//! API call fires. The gate is an explicit two-state machine: `Idle` (nothing
//! staged) and `Pending` (holding one staged action). Confirming hands the
//! action back to the caller for dispatch; cancelling discards it with no
//! side effect.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::model::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    /// Delete is rendered in the danger style; create and update as warnings.
    /// Presentational only.
    pub fn is_danger(&self) -> bool {
        matches!(self, MutationKind::Delete)
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Create => write!(f, "create"),
            MutationKind::Update => write!(f, "update"),
            MutationKind::Delete => write!(f, "delete"),
        }
    }
}

/// A staged mutation. Exists only between the user triggering an action and
/// the user confirming or cancelling it.
#[derive(Debug, Clone)]
pub struct PendingAction {
    pub kind: MutationKind,
    pub job: JobPosting,
    pub title: String,
    pub message: String,
}

impl PendingAction {
    pub fn create(job: JobPosting) -> Self {
        Self {
            kind: MutationKind::Create,
            job,
            title: "Confirm Creation".to_string(),
            message: "Create this new job?".to_string(),
        }
    }

    pub fn update(job: JobPosting) -> Self {
        Self {
            kind: MutationKind::Update,
            job,
            title: "Confirm Update".to_string(),
            message: "Update this job?".to_string(),
        }
    }

    pub fn delete(job: JobPosting) -> Self {
        let message = format!("Delete \"{}\"?", job.job_title);
        Self {
            kind: MutationKind::Delete,
            job,
            title: "Confirm Delete".to_string(),
            message,
        }
    }
}

#[derive(Debug, Default)]
enum GateState {
    #[default]
    Idle,
    Pending(PendingAction),
}

#[derive(Debug, Default)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an action, replacing any previously staged one.
    pub fn stage(&mut self, action: PendingAction) {
        self.state = GateState::Pending(action);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GateState::Pending(_))
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        match &self.state {
            GateState::Pending(action) => Some(action),
            GateState::Idle => None,
        }
    }

    /// Discard the staged action and return to idle. No side effect beyond
    /// handing the discarded action back for inspection.
    pub fn cancel(&mut self) -> Option<PendingAction> {
        match std::mem::take(&mut self.state) {
            GateState::Pending(action) => Some(action),
            GateState::Idle => None,
        }
    }

    /// Take the staged action for dispatch and return to idle. The gate goes
    /// idle regardless of how the dispatch turns out.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        match std::mem::take(&mut self.state) {
            GateState::Pending(action) => Some(action),
            GateState::Idle => None,
        }
    }

    /// Interactively resolve the staged action. Returns the action when the
    /// user confirms (or when `skip_prompt` is set via `--yes`), `None` when
    /// they cancel or nothing is staged.
    pub fn resolve(&mut self, skip_prompt: bool) -> Result<Option<PendingAction>> {
        let Some(action) = self.pending() else {
            return Ok(None);
        };

        let title = if action.kind.is_danger() {
            style(action.title.as_str()).red().bold()
        } else {
            style(action.title.as_str()).yellow().bold()
        };
        println!();
        println!("{}", title);
        println!("{}", style(action.message.as_str()).dim());

        if skip_prompt {
            println!("  {} (--yes flag)", style("Auto-confirmed").dim());
            return Ok(self.confirm());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Confirm?")
            .default(false)
            .interact()?;

        if confirmed {
            Ok(self.confirm())
        } else {
            self.cancel();
            Ok(None)
        }
    }
}
