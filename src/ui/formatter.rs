//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text, `display_*` functions print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::FunctionRelease;
use crate::git::CommitInfo;
use crate::rewriter::DocUpdate;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Echo a version-control operation before it runs, e.g. `git fetch --tags`.
pub fn display_command(command: &str) {
    println!("{}", style(command).cyan());
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary of a resolved release, one attribute per line.
pub fn format_release(release: &FunctionRelease) -> String {
    let mut lines = vec![
        format!("Function:       {}", release.function_name()),
        format!("Language:       {}", release.language()),
        format!("Minor version:  {}", release.minor_version()),
        format!("Latest patch:   {}", release.latest_patch_version()),
        format!(
            "Catalog area:   {}",
            if release.is_contrib() { "contrib" } else { "core" }
        ),
        format!("Function path:  {}", release.function_path().display()),
    ];
    if release.examples().is_empty() {
        lines.push("Examples:       (none)".to_string());
    } else {
        lines.push("Examples:".to_string());
        for example in release.examples() {
            lines.push(format!("  - {}", example.name));
        }
    }
    lines.join("\n")
}

pub fn display_release(release: &FunctionRelease) {
    println!("\n{}", style("Resolved release:").bold());
    for line in format_release(release).lines() {
        println!("  {}", line);
    }
}

pub fn display_doc_update(update: &DocUpdate) {
    if update.changed {
        display_success(&format!("Updated {}", update.path.display()));
    } else {
        display_status(&format!("Unchanged {}", update.path.display()));
    }
}

/// `git show`-style description of a commit.
pub fn format_commit(commit: &CommitInfo) -> String {
    let mut out = format!(
        "commit {}\nAuthor: {}\n\n    {}\n",
        commit.hash,
        commit.author,
        commit.message.trim_end()
    );
    if !commit.files.is_empty() {
        out.push('\n');
        for file in &commit.files {
            out.push_str(&format!(
                " {} | +{} -{}\n",
                file.path, file.insertions, file.deletions
            ));
        }
    }
    out
}

pub fn display_commit(commit: &CommitInfo) {
    println!("\n{}", format_commit(commit));
}
