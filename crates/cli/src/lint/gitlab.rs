// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal GitLab REST client for the project CI lint endpoint.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::LintError;

/// Characters escaped in a project path segment (`/` becomes `%2F`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Header carrying a personal access token.
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

#[derive(Debug, Serialize)]
struct LintRequest<'a> {
    content: &'a str,
    dry_run: bool,
}

/// Response of `POST /projects/:id/ci/lint`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LintReport {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// API client bound to one GitLab host and token.
pub struct Client {
    http: HttpClient,
    host_url: String,
    token: String,
}

impl Client {
    pub fn new(host_url: &str, token: &str) -> Result<Self, LintError> {
        let http = HttpClient::builder()
            .user_agent(concat!("gitlab-ci-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| LintError::Request {
                host: host_url.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            host_url: host_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Lazy project handle; no request is made until it is used.
    pub fn project(&self, path: &str) -> Project<'_> {
        Project {
            client: self,
            path: path.to_string(),
        }
    }
}

/// Handle to a project addressed by its full path.
pub struct Project<'a> {
    client: &'a Client,
    path: String,
}

impl Project<'_> {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URL of the project's CI lint endpoint.
    pub fn lint_url(&self) -> String {
        lint_url(&self.client.host_url, &self.path)
    }

    /// Validate `content` as this project's pipeline (dry run).
    pub fn lint(&self, content: &str) -> Result<LintReport, LintError> {
        let host = || self.client.host_url.clone();
        let url = self.lint_url();
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .http
            .post(&url)
            .header(TOKEN_HEADER, &self.client.token)
            .json(&LintRequest {
                content,
                dry_run: true,
            })
            .send()
            .map_err(|source| LintError::Request {
                host: host(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| LintError::Request {
            host: host(),
            source,
        })?;

        match status {
            s if s.is_success() => {
                serde_json::from_str(&body).map_err(|err| LintError::Api {
                    host: host(),
                    status: s.as_u16(),
                    message: format!("unexpected response: {err}"),
                })
            }
            StatusCode::UNAUTHORIZED => Err(LintError::Authentication {
                host: host(),
                message: error_message(&body),
            }),
            StatusCode::NOT_FOUND => Err(LintError::NotFound {
                host: host(),
                message: error_message(&body),
            }),
            s => Err(LintError::Api {
                host: host(),
                status: s.as_u16(),
                message: error_message(&body),
            }),
        }
    }
}

/// `<host>/api/v4/projects/<url-encoded path>/ci/lint`
pub fn lint_url(host_url: &str, project_path: &str) -> String {
    format!(
        "{}/api/v4/projects/{}/ci/lint",
        host_url.trim_end_matches('/'),
        utf8_percent_encode(project_path, PATH_SEGMENT)
    )
}

/// Server error text from a GitLab error body.
///
/// GitLab answers with `{"message": ..}` or `{"error": ..}`; anything else
/// is returned as-is.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    match value.get("message").or_else(|| value.get("error")) {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "gitlab_tests.rs"]
mod tests;
