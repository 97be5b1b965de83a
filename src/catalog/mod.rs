//! Catalog tree layout and path discovery
//!
//! Functions live either in the core catalog (`functions/<lang>/<name>`,
//! examples under `examples/`) or in the community area
//! (`contrib/functions/<lang>/<name>`, examples under `contrib/examples/`).

pub mod metadata;

pub use metadata::FunctionMetadata;

use crate::domain::{FunctionExample, FunctionRelease};
use crate::error::{DocsError, Result};
use std::path::{Path, PathBuf};

/// Which area of the catalog a function belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLayout {
    Core,
    Contrib,
}

impl CatalogLayout {
    /// Probe order used by discovery
    pub const ALL: [CatalogLayout; 2] = [CatalogLayout::Core, CatalogLayout::Contrib];

    /// Layout a resolved release was found in
    pub fn of(release: &FunctionRelease) -> Self {
        if release.is_contrib() {
            CatalogLayout::Contrib
        } else {
            CatalogLayout::Core
        }
    }

    pub fn function_path(&self, root: &Path, language: &str, function_name: &str) -> PathBuf {
        self.base(root).join("functions").join(language).join(function_name)
    }

    pub fn examples_root(&self, root: &Path) -> PathBuf {
        self.base(root).join("examples")
    }

    /// Repository-relative examples directory used in package URLs
    pub fn examples_subpath(&self) -> &'static str {
        match self {
            CatalogLayout::Core => "examples",
            CatalogLayout::Contrib => "contrib/examples",
        }
    }

    pub fn is_contrib(&self) -> bool {
        matches!(self, CatalogLayout::Contrib)
    }

    fn base(&self, root: &Path) -> PathBuf {
        match self {
            CatalogLayout::Core => root.to_path_buf(),
            CatalogLayout::Contrib => root.join("contrib"),
        }
    }
}

/// A function located on disk together with its example packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLocation {
    pub layout: CatalogLayout,
    pub function_path: PathBuf,
    pub examples: Vec<FunctionExample>,
}

/// Find the first layout whose function directory exists
pub fn locate_function(
    root: &Path,
    language: &str,
    function_name: &str,
) -> Result<(CatalogLayout, PathBuf)> {
    let candidates: Vec<(CatalogLayout, PathBuf)> = CatalogLayout::ALL
        .iter()
        .map(|layout| (*layout, layout.function_path(root, language, function_name)))
        .collect();

    if let Some((layout, path)) = candidates.iter().find(|(_, path)| path.is_dir()) {
        return Ok((*layout, path.clone()));
    }

    Err(DocsError::FunctionPathNotFound {
        tried: candidates.into_iter().map(|(_, path)| path).collect(),
    })
}

/// Resolve the examples listed in metadata under the layout's examples root
///
/// Every listed example must exist as a directory.
pub fn resolve_examples(
    root: &Path,
    layout: CatalogLayout,
    metadata: &FunctionMetadata,
) -> Result<Vec<FunctionExample>> {
    let examples_root = layout.examples_root(root);
    metadata
        .example_names()
        .into_iter()
        .map(|name| {
            let path = examples_root.join(&name);
            if !path.is_dir() {
                return Err(DocsError::ExampleDirectoryMissing(path));
            }
            Ok(FunctionExample { name, path })
        })
        .collect()
}

/// Locate a function and its examples in the catalog rooted at `root`
pub fn discover(root: &Path, language: &str, function_name: &str) -> Result<FunctionLocation> {
    let (layout, function_path) = locate_function(root, language, function_name)?;
    let metadata = FunctionMetadata::load(&function_path)?;
    let examples = resolve_examples(root, layout, &metadata)?;

    tracing::debug!(
        function = function_name,
        path = %function_path.display(),
        examples = examples.len(),
        "located function"
    );

    Ok(FunctionLocation {
        layout,
        function_path,
        examples,
    })
}
