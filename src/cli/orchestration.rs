//! Main workflow orchestration logic
//!
//! Drives the fixed pipeline: clean check, fetch tags, checkout, resolve,
//! rewrite, no-op detection, stage, commit, show. Every step either succeeds
//! or aborts the run.

use crate::analyzer::ReleaseResolver;
use crate::config::Config;
use crate::domain::{FunctionRelease, ReleaseBranch};
use crate::error::{DocsError, Result};
use crate::git::{CommitInfo, Repository};
use crate::rewriter::DocRewriter;
use crate::ui;

/// Arguments for the update workflow
///
/// Mirrors the CLI Args so the workflow can be called without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Release branch to check out, e.g. `origin/apply-setters/v1.0`
    pub release_branch: String,
}

/// Result of a successful update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub release: FunctionRelease,
    /// Hash of the docs commit
    pub commit: String,
    /// Number of documentation files rewritten
    pub changed_files: usize,
    /// The commit as shown after creation, if showing is enabled
    pub shown: Option<CommitInfo>,
}

/// Main update workflow
///
/// # Arguments
///
/// * `repo` - Version-control collaborator rooted at the catalog checkout
/// * `args` - Workflow arguments
/// * `config` - Update configuration
///
/// # Returns
///
/// The resolved release and the commit that updated its docs
pub fn run_update_workflow<R: Repository>(
    repo: &R,
    args: &UpdateWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let branch = ReleaseBranch::parse(args.release_branch.as_str())?;
    let resolver = ReleaseResolver::new(&config.catalog.languages)?;

    ui::display_status("Checking working tree is clean");
    if !repo.is_clean()? {
        return Err(DocsError::DirtyWorkingTree);
    }

    if config.behavior.fetch_tags {
        ui::display_command(&format!("git fetch {} --tags", config.remote));
        repo.fetch_tags(&config.remote)?;
    }

    ui::display_command(&format!("git checkout {}", branch.name));
    repo.checkout(&branch.name)?;

    ui::display_command("git tag");
    let resolution = resolver.resolve_branch(repo, &branch)?;
    for warning in &resolution.warnings {
        ui::display_boundary_warning(warning);
    }
    let release = resolution.release;
    ui::display_release(&release);

    let report = DocRewriter::new(&release, &config.catalog)?.update_docs()?;
    for update in &report.updates {
        ui::display_doc_update(update);
    }

    if !report.has_changes() {
        return Err(DocsError::DocsUpToDate(release.qualified_name()));
    }
    ui::display_status("Checking working tree is clean");
    if repo.is_clean()? {
        return Err(DocsError::DocsUpToDate(release.qualified_name()));
    }

    ui::display_command("git add -u");
    repo.stage_tracked()?;

    let message = release.commit_message();
    ui::display_command(&format!("git commit -m {:?}", message));
    let commit = repo.commit(&message)?;

    let shown = if config.behavior.show_commit {
        ui::display_command("git show");
        let info = repo.show_head()?;
        ui::display_commit(&info);
        Some(info)
    } else {
        None
    };

    tracing::info!(release = %release.qualified_name(), commit = %commit, "docs updated");

    Ok(WorkflowResult {
        changed_files: report.changed_files().len(),
        release,
        commit,
        shown,
    })
}
