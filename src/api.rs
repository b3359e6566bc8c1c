//! HTTP client for the identity and job resource endpoints.
//!
//! Four operations: login, list, upsert, delete. Authenticated calls carry
//! `Authorization: Token <token>`. No retries, no backoff, and deliberately
//! no timeout — a hung request keeps the spinner alive until the server
//! answers.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ApiError;
use crate::gate::MutationKind;
use crate::model::JobPosting;

/// Fallback shown when the login endpoint rejects the credentials without
/// providing its own message.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Shown when the login call itself never reached the server.
pub const LOGIN_TRANSPORT_FAILED: &str = "Login failed. Please try again.";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from the identity endpoint. A successful login carries `token`;
/// a rejection usually carries `message`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    login_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self::from_parts(config.api_base.clone(), config.login_url.clone())
    }

    pub fn from_parts(api_base: impl Into<String>, login_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            login_url: login_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.api_base.trim_end_matches('/'))
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}/", self.api_base.trim_end_matches('/'), id)
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Success is a 2xx status **and** a `token` field in the body; anything
    /// else is `ApiError::Auth` carrying the server's `message` or the
    /// generic fallback.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "login request failed in transport");
                ApiError::Auth {
                    message: LOGIN_TRANSPORT_FAILED.to_string(),
                }
            })?;

        let status = resp.status();
        // Non-JSON bodies collapse to the generic rejection below.
        let body = resp.json::<LoginResponse>().await.unwrap_or_default();

        if status.is_success() {
            if let Some(token) = body.token {
                return Ok(token);
            }
        }
        Err(ApiError::Auth {
            message: body
                .message
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
        })
    }

    /// Fetch the full collection, in server order.
    ///
    /// A JSON body that is not an array of postings decodes to an empty
    /// list rather than an error; transport and status failures are `Err`
    /// and left to the controller to degrade.
    pub async fn list_jobs(&self, token: &str) -> Result<Vec<JobPosting>, ApiError> {
        let value: serde_json::Value = self
            .http
            .get(self.collection_url())
            .header("Authorization", token_header(token))
            .send()
            .await
            .map_err(ApiError::Fetch)?
            .error_for_status()
            .map_err(ApiError::Fetch)?
            .json()
            .await
            .map_err(ApiError::FetchDecode)?;
        Ok(parse_job_list(value))
    }

    /// POST a new posting, or PUT over an existing one when `job.id` is set.
    /// The response body is never parsed; callers blindly re-fetch the list.
    pub async fn upsert_job(&self, token: &str, job: &JobPosting) -> Result<(), ApiError> {
        let (kind, request) = match job.id {
            Some(id) => (MutationKind::Update, self.http.put(self.item_url(id))),
            None => (MutationKind::Create, self.http.post(self.collection_url())),
        };
        request
            .header("Authorization", token_header(token))
            .json(job)
            .send()
            .await
            .map_err(|source| ApiError::Mutation { kind, source })?
            .error_for_status()
            .map_err(|source| ApiError::Mutation { kind, source })?;
        Ok(())
    }

    pub async fn delete_job(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let kind = MutationKind::Delete;
        self.http
            .delete(self.item_url(id))
            .header("Authorization", token_header(token))
            .send()
            .await
            .map_err(|source| ApiError::Mutation { kind, source })?
            .error_for_status()
            .map_err(|source| ApiError::Mutation { kind, source })?;
        Ok(())
    }
}

fn token_header(token: &str) -> String {
    format!("Token {token}")
}

/// Decode a list response. Anything that is not an array of well-formed
/// postings — an object, a string, an array with a malformed element —
/// is treated as zero results.
pub(crate) fn parse_job_list(value: serde_json::Value) -> Vec<JobPosting> {
    serde_json::from_value(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_url_always_has_trailing_slash() {
        let client = ApiClient::from_parts("https://x.example.com/api/job-opening", "https://x.example.com/api/login/");
        assert_eq!(
            client.collection_url(),
            "https://x.example.com/api/job-opening/"
        );
        let client = ApiClient::from_parts("https://x.example.com/api/job-opening/", "https://x.example.com/api/login/");
        assert_eq!(
            client.collection_url(),
            "https://x.example.com/api/job-opening/"
        );
    }

    #[test]
    fn test_item_url_embeds_id() {
        let client = ApiClient::from_parts("https://x.example.com/api/job-opening", "https://x.example.com/api/login/");
        assert_eq!(
            client.item_url(7),
            "https://x.example.com/api/job-opening/7/"
        );
    }

    #[test]
    fn test_token_header_format() {
        assert_eq!(token_header("abc123"), "Token abc123");
    }

    #[test]
    fn test_parse_job_list_accepts_array() {
        let value = json!([{
            "id": 1,
            "job_title": "Engineer",
            "company_name": "Acme",
            "address": "12 Main St",
            "job_type": "Full Time",
            "salary": "$1",
            "deadline": "2026-06-01",
            "job_link": "https://example.com"
        }]);
        let jobs = parse_job_list(value);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_title, "Engineer");
    }

    #[test]
    fn test_parse_job_list_object_is_empty() {
        let value = json!({"detail": "Authentication credentials were not provided."});
        assert!(parse_job_list(value).is_empty());
    }

    #[test]
    fn test_parse_job_list_malformed_element_is_empty() {
        let value = json!([{"job_title": "missing everything else"}]);
        assert!(parse_job_list(value).is_empty());
    }

    #[test]
    fn test_login_response_with_token() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"token":"tok-123"}"#).unwrap();
        assert_eq!(body.token.as_deref(), Some("tok-123"));
        assert!(body.message.is_none());
    }

    #[test]
    fn test_login_response_with_message_only() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert!(body.token.is_none());
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_login_request_serializes_both_fields() {
        let req = LoginRequest {
            username: "admin",
            password: "secret",
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"username": "admin", "password": "secret"}));
    }
}
