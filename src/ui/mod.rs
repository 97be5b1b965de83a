//! User interface module - operator-facing output.
//!
//! The updater never prompts; everything here is reporting. Diagnostic
//! logging goes through `tracing` instead.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_command, display_commit, display_doc_update, display_error,
    display_release, display_status, display_success, format_commit, format_release,
};

/// Install the stderr `tracing` subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
