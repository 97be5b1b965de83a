use crate::domain::{MinorVersion, PatchVersion};
use std::path::PathBuf;

/// An example package documented alongside a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionExample {
    pub name: String,
    pub path: PathBuf,
}

impl FunctionExample {
    pub fn readme(&self) -> PathBuf {
        self.path.join("README.md")
    }
}

/// A fully resolved function release
///
/// Language, minor version and patch version all come from the same winning
/// release tag. The descriptor is built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRelease {
    function_name: String,
    minor_version: MinorVersion,
    language: String,
    latest_patch_version: PatchVersion,
    function_path: PathBuf,
    is_contrib: bool,
    examples: Vec<FunctionExample>,
}

impl FunctionRelease {
    pub fn new(
        function_name: impl Into<String>,
        minor_version: MinorVersion,
        language: impl Into<String>,
        latest_patch_version: PatchVersion,
        function_path: PathBuf,
        is_contrib: bool,
        examples: Vec<FunctionExample>,
    ) -> Self {
        FunctionRelease {
            function_name: function_name.into(),
            minor_version,
            language: language.into(),
            latest_patch_version,
            function_path,
            is_contrib,
            examples,
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn minor_version(&self) -> MinorVersion {
        self.minor_version
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn latest_patch_version(&self) -> &PatchVersion {
        &self.latest_patch_version
    }

    pub fn function_path(&self) -> &PathBuf {
        &self.function_path
    }

    pub fn is_contrib(&self) -> bool {
        self.is_contrib
    }

    pub fn examples(&self) -> &[FunctionExample] {
        &self.examples
    }

    /// Names of the associated examples, in metadata order
    pub fn example_names(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn function_readme(&self) -> PathBuf {
        self.function_path.join("README.md")
    }

    /// Every documentation file the release touches, function README first
    pub fn doc_files(&self) -> Vec<PathBuf> {
        std::iter::once(self.function_readme())
            .chain(self.examples.iter().map(FunctionExample::readme))
            .collect()
    }

    /// `<language>/<function-name>/<latest-patch-version>`
    pub fn qualified_name(&self) -> String {
        format!(
            "{}/{}/{}",
            self.language, self.function_name, self.latest_patch_version
        )
    }

    pub fn commit_message(&self) -> String {
        format!("docs: Update tags for {}", self.qualified_name())
    }
}
