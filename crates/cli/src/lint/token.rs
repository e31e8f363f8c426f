// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Access token resolution.
//!
//! Order: `-t/--token` (or `GCL_PERSONAL_ACCESS_TOKEN`, folded in by clap),
//! then the `pass` secret store under `gitlab-ci-lint/<host slug>`.

use crate::command::{CommandRunner, Invocation, run_checked};

use super::LintError;

/// Secret store program.
pub const SECRET_STORE: &str = "pass";

/// Namespace of secret store entries.
pub const SECRET_NAMESPACE: &str = "gitlab-ci-lint";

/// Lower-case `text`, collapsing each run of non-alphanumerics into `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Secret store key holding the token for `host_url`.
pub fn secret_key(host_url: &str) -> String {
    format!("{SECRET_NAMESPACE}/{}", slugify(host_url))
}

/// Look up the token in the secret store. The first line is the token.
pub fn lookup_secret(runner: &dyn CommandRunner, key: &str) -> Option<String> {
    let inv = Invocation::new(SECRET_STORE).args(["show", key]);
    match run_checked(runner, &inv) {
        Ok(captured) => captured
            .stdout
            .lines()
            .next()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string),
        Err(err) => {
            tracing::debug!("secret store lookup for {} failed: {}", key, err);
            None
        }
    }
}

/// Resolve the access token for `host_url`.
pub fn resolve_token(
    runner: &dyn CommandRunner,
    flag: Option<&str>,
    host_url: &str,
) -> Result<String, LintError> {
    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    let key = secret_key(host_url);
    lookup_secret(runner, &key).ok_or(LintError::MissingToken { key })
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
