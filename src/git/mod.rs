//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! operations the docs updater needs, so the resolver and the workflow can be
//! exercised against an in-memory fake.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use update_function_docs::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> update_function_docs::Result<()> {
//! let tags = repo.list_tags()?;
//! println!("{} tags", tags.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Per-file change statistics of a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub insertions: usize,
    pub deletions: usize,
}

/// Commit information shown after the docs commit is created
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
    /// Files touched by the commit
    pub files: Vec<FileChange>,
}

/// Common git operation trait for abstraction
///
/// Every operation is synchronous and either succeeds or returns a
/// [crate::error::DocsError::Vcs] carrying the diagnostic text of the failure.
/// Implementors are only ever used from a single thread.
pub trait Repository {
    /// Root of the working tree, against which catalog paths are resolved
    fn workdir(&self) -> Result<PathBuf>;

    /// Fetch all tags from a remote (`git fetch --tags`)
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Check out a local branch, remote-tracking branch or any revision
    ///
    /// Anything other than a local branch leaves HEAD detached.
    fn checkout(&self, revision: &str) -> Result<()>;

    /// Get all tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Whether tracked files match HEAD in both index and working tree
    ///
    /// Untracked files are ignored, like `git diff-index --quiet HEAD --`.
    fn is_clean(&self) -> Result<bool>;

    /// Stage modifications and deletions of tracked files (`git add -u`)
    fn stage_tracked(&self) -> Result<()>;

    /// Commit the index on top of HEAD, returning the new commit hash
    fn commit(&self, message: &str) -> Result<String>;

    /// Describe the HEAD commit (`git show`)
    fn show_head(&self) -> Result<CommitInfo>;
}
