use crate::catalog::CatalogLayout;
use crate::config::CatalogConfig;
use crate::domain::FunctionRelease;
use crate::error::{DocsError, Result};
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;

/// Version tokens found in docs, e.g. `unstable`, `v0.1.1`, `v0.1`
const VERSION_GROUP: &str = r"unstable|v\d+\.\d+\.\d+|v\d+\.\d+";

/// The three substitutions applied to every documentation file
///
/// Replacements are built from captures, so text outside the matched
/// version token is copied through untouched.
#[derive(Debug, Clone)]
pub struct RewriteRules {
    tag: Regex,
    catalog_url: Regex,
    package: Option<Regex>,
    patch_version: String,
    minor_version: String,
    pin: String,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DocsError::config(format!("invalid rewrite pattern: {}", e)))
}

impl RewriteRules {
    pub fn new(release: &FunctionRelease, catalog: &CatalogConfig) -> Result<Self> {
        let function = regex::escape(release.function_name());

        // apply-setters:v1.0.1, apply-setters/v1.0.1
        let tag = compile(&format!(r"({})(:|/)({})", function, VERSION_GROUP))?;

        // https://catalog.kpt.dev/apply-setters/v1.0
        let catalog_url = compile(&format!(
            r"({}/{}/)({})",
            regex::escape(catalog.url.trim_end_matches('/')),
            function,
            VERSION_GROUP
        ))?;

        // <package-repository>/examples/apply-setters-simple
        let names = release.example_names();
        let package = if names.is_empty() {
            None
        } else {
            let example_group = names
                .iter()
                .map(|name| regex::escape(name))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(
                r"({}/{}/)({})(\s+|$)",
                regex::escape(catalog.package_repository.trim_end_matches('/')),
                CatalogLayout::of(release).examples_subpath(),
                example_group
            ))?)
        };

        Ok(RewriteRules {
            tag,
            catalog_url,
            package,
            patch_version: release.latest_patch_version().to_string(),
            minor_version: release.minor_version().to_string(),
            pin: format!(
                "@{}/{}",
                release.function_name(),
                release.latest_patch_version()
            ),
        })
    }

    /// Point tag references at the latest patch version
    pub fn replace_tags<'a>(&self, contents: &'a [u8]) -> Cow<'a, [u8]> {
        self.tag.replace_all(contents, |caps: &Captures| {
            [&caps[1], &caps[2], self.patch_version.as_bytes()].concat()
        })
    }

    /// Point catalog URLs at the minor version alias
    pub fn replace_catalog_urls<'a>(&self, contents: &'a [u8]) -> Cow<'a, [u8]> {
        self.catalog_url.replace_all(contents, |caps: &Captures| {
            [&caps[1], self.minor_version.as_bytes()].concat()
        })
    }

    /// Pin example package references to the latest patch tag
    pub fn replace_package_refs<'a>(&self, contents: &'a [u8]) -> Cow<'a, [u8]> {
        match &self.package {
            Some(package) => package.replace_all(contents, |caps: &Captures| {
                [&caps[1], &caps[2], self.pin.as_bytes(), &caps[3]].concat()
            }),
            None => Cow::Borrowed(contents),
        }
    }

    /// Apply all rules once, in order: tags, catalog URLs, package references
    pub fn apply(&self, contents: &[u8]) -> Vec<u8> {
        let contents = self.replace_tags(contents);
        let contents = self.replace_catalog_urls(&contents).into_owned();
        self.replace_package_refs(&contents).into_owned()
    }
}
