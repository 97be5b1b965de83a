use crate::error::{DocsError, Result};
use crate::git::{CommitInfo, FileChange};
use git2::build::CheckoutBuilder;
use git2::{Repository as Git2Repo, StatusOptions};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| DocsError::vcs("open", e))?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn fetch_options<'a>() -> git2::FetchOptions<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options
    }
}

impl super::Repository for Git2Repository {
    fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| DocsError::vcs("workdir", "repository is bare"))
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| DocsError::vcs("fetch", format!("cannot find remote '{}': {}", remote, e)))?;

        // Remote-tracking branches too, so `origin/<fn>/vX.Y` is current.
        let heads = format!("+refs/heads/*:refs/remotes/{}/*", remote);
        remote_handle
            .fetch(
                &[heads.as_str(), "+refs/tags/*:refs/tags/*"],
                Some(&mut Self::fetch_options()),
                None,
            )
            .map_err(|e| DocsError::vcs("fetch", e))?;

        Ok(())
    }

    fn checkout(&self, revision: &str) -> Result<()> {
        let (object, reference) = self
            .repo
            .revparse_ext(revision)
            .map_err(|e| DocsError::vcs("checkout", e))?;

        let mut checkout = CheckoutBuilder::new();
        checkout.safe();
        self.repo
            .checkout_tree(&object, Some(&mut checkout))
            .map_err(|e| DocsError::vcs("checkout", e))?;

        let head_result = match reference {
            Some(reference) if reference.is_branch() => {
                let name = reference.name().ok_or_else(|| {
                    DocsError::vcs("checkout", format!("branch '{}' is not valid UTF-8", revision))
                })?;
                self.repo.set_head(name)
            }
            _ => {
                let commit = object
                    .peel_to_commit()
                    .map_err(|e| DocsError::vcs("checkout", e))?;
                self.repo.set_head_detached(commit.id())
            }
        };
        head_result.map_err(|e| DocsError::vcs("checkout", e))?;

        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| DocsError::vcs("tag", e))?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .map_err(|e| DocsError::vcs("status", e))?;

        Ok(statuses.is_empty())
    }

    fn stage_tracked(&self) -> Result<()> {
        let mut index = self.repo.index().map_err(|e| DocsError::vcs("add", e))?;
        index
            .update_all(["*"], None)
            .map_err(|e| DocsError::vcs("add", e))?;
        index.write().map_err(|e| DocsError::vcs("add", e))?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let commit_err = |e: git2::Error| DocsError::vcs("commit", e);

        let mut index = self.repo.index().map_err(commit_err)?;
        let tree_id = index.write_tree().map_err(commit_err)?;
        let tree = self.repo.find_tree(tree_id).map_err(commit_err)?;
        let signature = self.repo.signature().map_err(commit_err)?;
        let parent = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(commit_err)?;

        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &[&parent],
            )
            .map_err(commit_err)?;

        Ok(oid.to_string())
    }

    fn show_head(&self) -> Result<CommitInfo> {
        let show_err = |e: git2::Error| DocsError::vcs("show", e);

        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(show_err)?;
        let tree = commit.tree().map_err(show_err)?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree().map_err(show_err)?),
            Err(_) => None,
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .map_err(show_err)?;

        let mut files = Vec::new();
        for idx in 0..diff.deltas().len() {
            let Some(delta) = diff.get_delta(idx) else {
                continue;
            };
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.display().to_string())
                .unwrap_or_default();

            let (insertions, deletions) = match git2::Patch::from_diff(&diff, idx).map_err(show_err)? {
                Some(patch) => {
                    let (_, insertions, deletions) = patch.line_stats().map_err(show_err)?;
                    (insertions, deletions)
                }
                None => (0, 0),
            };

            files.push(FileChange {
                path,
                insertions,
                deletions,
            });
        }

        let author = commit.author().name().unwrap_or("unknown").to_string();
        let message = commit.message().unwrap_or("(empty message)").to_string();

        Ok(CommitInfo {
            hash: commit.id().to_string(),
            message,
            author,
            files,
        })
    }
}
