// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git remote introspection.
//!
//! Uses git2 (libgit2) to avoid shelling out to `git`.

use std::path::{Path, PathBuf};

use git2::Repository;

/// Name of the remote the lint client reads.
pub const ORIGIN: &str = "origin";

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("'{}' is not a valid git repository", .path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("repository does not have an '{name}' remote")]
    NoRemote { name: String },
}

/// URL of the named remote of the repository containing `root`.
///
/// The repository is discovered by walking up from `root`.
pub fn remote_url(root: &Path, name: &str) -> Result<String, GitError> {
    let repo = Repository::discover(root).map_err(|source| GitError::NotARepository {
        path: root.to_path_buf(),
        source,
    })?;

    let no_remote = || GitError::NoRemote {
        name: name.to_string(),
    };
    let remote = repo.find_remote(name).map_err(|_| no_remote())?;
    let url = remote.url().ok_or_else(no_remote)?.to_string();

    tracing::debug!("remote {} of {}: {}", name, root.display(), url);
    Ok(url)
}

/// URL of the `origin` remote.
pub fn origin_url(root: &Path) -> Result<String, GitError> {
    remote_url(root, ORIGIN)
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
