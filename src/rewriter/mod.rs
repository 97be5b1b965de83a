//! In-place rewriting of a release's documentation files
//!
//! The function README is rewritten first, then each example README in
//! metadata order. A failure aborts the pass; files already written stay
//! modified.

pub mod rules;

pub use rules::RewriteRules;

use crate::boundary::BoundaryWarning;
use crate::config::CatalogConfig;
use crate::domain::FunctionRelease;
use crate::error::{DocsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of rewriting one documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocUpdate {
    pub path: PathBuf,
    pub changed: bool,
}

/// Outcome of a full rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updates: Vec<DocUpdate>,
}

impl UpdateReport {
    pub fn changed_files(&self) -> Vec<&Path> {
        self.updates
            .iter()
            .filter(|u| u.changed)
            .map(|u| u.path.as_path())
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.updates.iter().any(|u| u.changed)
    }

    pub fn warnings(&self) -> Vec<BoundaryWarning> {
        self.updates
            .iter()
            .filter(|u| !u.changed)
            .map(|u| BoundaryWarning::DocUnchanged {
                path: u.path.clone(),
            })
            .collect()
    }
}

/// Applies the rewrite rules of one release to its documentation files
pub struct DocRewriter {
    rules: RewriteRules,
    files: Vec<PathBuf>,
}

impl DocRewriter {
    pub fn new(release: &FunctionRelease, catalog: &CatalogConfig) -> Result<Self> {
        Ok(DocRewriter {
            rules: RewriteRules::new(release, catalog)?,
            files: release.doc_files(),
        })
    }

    /// Rewrite a single file in place; it is only written when its content changes
    pub fn update_doc(&self, path: &Path) -> Result<DocUpdate> {
        let before = fs::read(path).map_err(|e| DocsError::io(path, e))?;
        let after = self.rules.apply(&before);
        let changed = after != before;

        if changed {
            fs::write(path, &after).map_err(|e| DocsError::io(path, e))?;
        }
        tracing::debug!(path = %path.display(), changed, "rewrote doc");

        Ok(DocUpdate {
            path: path.to_path_buf(),
            changed,
        })
    }

    /// Rewrite the function README and every example README
    pub fn update_docs(&self) -> Result<UpdateReport> {
        let updates = self
            .files
            .iter()
            .map(|path| self.update_doc(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(UpdateReport { updates })
    }
}

/// Rewrite every documentation file of `release`
pub fn update_docs(release: &FunctionRelease, catalog: &CatalogConfig) -> Result<UpdateReport> {
    DocRewriter::new(release, catalog)?.update_docs()
}
