use crate::error::{DocsError, Result};
use crate::git::{CommitInfo, Repository};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
///
/// Every call is recorded in order so tests can assert on the pipeline the
/// workflow drove. Cleanliness answers are scripted; once the script runs out
/// the tree reports clean.
pub struct MockRepository {
    workdir: PathBuf,
    tags: Vec<String>,
    clean_states: RefCell<VecDeque<bool>>,
    failing: Option<String>,
    calls: RefCell<Vec<String>>,
    commits: RefCell<Vec<CommitInfo>>,
}

impl MockRepository {
    /// Create a new empty mock repository rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            tags: Vec::new(),
            clean_states: RefCell::new(VecDeque::new()),
            failing: None,
            calls: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
        }
    }

    /// Add a tag to the repository
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Answers returned by successive `is_clean` calls
    pub fn script_clean_states(&mut self, states: &[bool]) {
        self.clean_states.borrow_mut().extend(states.iter().copied());
    }

    /// Make the named operation (e.g. "checkout") fail
    pub fn fail_on(&mut self, operation: impl Into<String>) {
        self.failing = Some(operation.into());
    }

    /// Operations performed so far, e.g. `["status", "fetch origin"]`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Commits created so far
    pub fn commits(&self) -> Vec<CommitInfo> {
        self.commits.borrow().clone()
    }

    fn record(&self, operation: &str, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.as_deref() == Some(operation) {
            return Err(DocsError::vcs(operation, "mock failure"));
        }
        Ok(())
    }
}

impl Repository for MockRepository {
    fn workdir(&self) -> Result<PathBuf> {
        Ok(self.workdir.clone())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.record("fetch", format!("fetch {}", remote))
    }

    fn checkout(&self, revision: &str) -> Result<()> {
        self.record("checkout", format!("checkout {}", revision))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        self.record("tag", "tag".to_string())?;
        Ok(self.tags.clone())
    }

    fn is_clean(&self) -> Result<bool> {
        self.record("status", "status".to_string())?;
        Ok(self.clean_states.borrow_mut().pop_front().unwrap_or(true))
    }

    fn stage_tracked(&self) -> Result<()> {
        self.record("add", "add".to_string())
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.record("commit", format!("commit {}", message))?;
        let mut commits = self.commits.borrow_mut();
        let hash = format!("{:040x}", commits.len() + 1);
        commits.push(CommitInfo {
            hash: hash.clone(),
            message: message.to_string(),
            author: "Mock Author".to_string(),
            files: Vec::new(),
        });
        Ok(hash)
    }

    fn show_head(&self) -> Result<CommitInfo> {
        self.record("show", "show".to_string())?;
        self.commits
            .borrow()
            .last()
            .cloned()
            .ok_or_else(|| DocsError::vcs("show", "no commits"))
    }
}
