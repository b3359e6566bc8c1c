//! Typed error hierarchy for the dashboard.
//!
//! Three enums cover the three failure surfaces:
//! - `SessionError` — session file I/O
//! - `ApiError` — the four HTTP operations, one variant per failure site
//! - `AppError` — controller-level composition of the two

use thiserror::Error;

/// Errors from the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file at {path}: {source}")]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file at {path}: {source}")]
    WriteFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove session file at {path}: {source}")]
    ClearFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the API client.
///
/// The user-facing message per operation stays a single generic string,
/// matching the dashboard surface, but each failure site gets its own
/// variant so callers can match on where things went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials or a failed login call. The message carries
    /// server-provided text when available.
    #[error("{message}")]
    Auth { message: String },

    /// Job list retrieval failed. The controller degrades this to an empty
    /// list rather than surfacing it.
    #[error("Failed to fetch jobs")]
    Fetch(#[source] reqwest::Error),

    /// The job list response body was not JSON at all.
    #[error("Failed to fetch jobs")]
    FetchDecode(#[source] reqwest::Error),

    /// A create, update, or delete failed.
    #[error("Failed to {kind} job")]
    Mutation {
        kind: crate::gate::MutationKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("Not logged in. Run 'jobdeck login' first")]
    NotAuthenticated,
}

/// Controller-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
