#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PACKAGE_REPO: &str = "https://github.com/GoogleContainerTools/kpt-functions-catalog.git";

pub const FUNCTION_README: &str = "\
# apply-setters

## Usage

`gcr.io/kpt-fn/apply-setters:unstable`

Full reference: https://catalog.kpt.dev/apply-setters/v1.0/

```shell
kpt pkg get https://github.com/GoogleContainerTools/kpt-functions-catalog.git/examples/apply-setters-simple
```
";

pub const EXAMPLE_README: &str = "\
# apply-setters: Simple Example

```shell
kpt pkg get https://github.com/GoogleContainerTools/kpt-functions-catalog.git/examples/apply-setters-simple
kpt fn eval apply-setters-simple --image gcr.io/kpt-fn/apply-setters:v1.0.1
```
";

/// README contents once updated for `patch`
pub fn function_readme_at(patch: &str) -> String {
    FUNCTION_README
        .replace("apply-setters:unstable", &format!("apply-setters:{}", patch))
        .replace(
            "examples/apply-setters-simple\n",
            &format!("examples/apply-setters-simple@apply-setters/{}\n", patch),
        )
}

pub fn example_readme_at(patch: &str) -> String {
    EXAMPLE_README
        .replace("apply-setters:v1.0.1", &format!("apply-setters:{}", patch))
        .replace(
            "examples/apply-setters-simple\n",
            &format!("examples/apply-setters-simple@apply-setters/{}\n", patch),
        )
}

/// A catalog checkout laid out on disk
pub struct Catalog {
    pub dir: TempDir,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The apply-setters function with one core example
    pub fn with_apply_setters() -> Self {
        let catalog = Catalog::new();
        catalog.add_function(
            "functions/go/apply-setters",
            FUNCTION_README,
            &["examples/apply-setters-simple"],
        );
        catalog.add_example("examples/apply-setters-simple", EXAMPLE_README);
        catalog
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a function README plus metadata listing `examples` (repo-relative)
    pub fn add_function(&self, rel: &str, readme: &str, examples: &[&str]) {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), readme).unwrap();

        let mut metadata = String::from("image: gcr.io/kpt-fn/fn\n");
        if !examples.is_empty() {
            metadata.push_str("examplePackageURLs:\n");
            for example in examples {
                metadata.push_str(&format!(
                    "  - https://github.com/GoogleContainerTools/kpt-functions-catalog/tree/master/{}\n",
                    example
                ));
            }
        }
        fs::write(dir.join("metadata.yaml"), metadata).unwrap();
    }

    pub fn add_example(&self, rel: &str, readme: &str) {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), readme).unwrap();
        fs::write(dir.join("Kptfile"), "apiVersion: kpt.dev/v1\nkind: Kptfile\n").unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }
}

/// Initialise a git repository over the catalog and commit everything in it
pub fn init_git(root: &Path) -> git2::Repository {
    let repo = git2::Repository::init(root).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Release Bot").unwrap();
        config.set_str("user.email", "release-bot@example.com").unwrap();
    }
    commit_all(&repo, "initial catalog");
    repo
}

pub fn commit_all(repo: &git2::Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = repo.signature().unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .unwrap()
}

pub fn tag_head(repo: &git2::Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

pub fn branch_head(repo: &git2::Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
}
