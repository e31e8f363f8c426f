// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git remote URL parsing.
//!
//! Recognized forms:
//! - scp-like: `[user@]host:group/project.git`
//! - URL: `ssh://`, `git+ssh://`, `git://`, `http://`, `https://` with
//!   optional user and port
//!
//! The API host is always `https://<host>`. The port is kept for http(s)
//! remotes, where it addresses the web server, and dropped for ssh/git ones.

use std::sync::OnceLock;

use regex::Regex;

/// GitLab host and project path derived from a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProject {
    /// Base URL of the GitLab instance, e.g. `https://gitlab.com`.
    pub host_url: String,
    /// Full project path, e.g. `group/subgroup/project`.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("'{remote}' is not a valid git url")]
    Invalid { remote: String },
}

fn url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^(?P<scheme>ssh|git\+ssh|git|https?)://(?:[^@/\s]+@)?(?P<host>[^:/@\s]+)(?::(?P<port>\d+))?/(?P<path>\S+)$",
            )
            .ok()
        })
        .as_ref()
}

fn scp_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^(?:[^@/\s]+@)?(?P<host>[^:/@\s]+):(?P<path>[^/\s]\S*)$").ok()
        })
        .as_ref()
}

/// Strip slashes and `.git`, and require at least `namespace/project`.
fn project_path(raw: &str) -> Option<String> {
    let path = raw.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let path = path.trim_end_matches('/');

    let mut segments = path.split('/');
    let valid = segments.clone().count() >= 2 && segments.all(|s| !s.is_empty());
    valid.then(|| path.to_string())
}

/// Parse a git remote URL into GitLab host and project path.
pub fn parse_remote(remote: &str) -> Result<RemoteProject, RemoteError> {
    let invalid = || RemoteError::Invalid {
        remote: remote.to_string(),
    };
    let trimmed = remote.trim();

    if let Some(caps) = url_pattern().and_then(|re| re.captures(trimmed)) {
        let host = &caps["host"];
        let web_port = matches!(&caps["scheme"], "http" | "https");
        let host_url = match caps.name("port") {
            Some(port) if web_port => format!("https://{host}:{}", port.as_str()),
            _ => format!("https://{host}"),
        };
        let path = project_path(&caps["path"]).ok_or_else(invalid)?;
        return Ok(RemoteProject { host_url, path });
    }

    if let Some(caps) = scp_pattern().and_then(|re| re.captures(trimmed)) {
        let host_url = format!("https://{}", &caps["host"]);
        let path = project_path(&caps["path"]).ok_or_else(invalid)?;
        return Ok(RemoteProject { host_url, path });
    }

    Err(invalid())
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
