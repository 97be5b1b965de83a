use anyhow::Result;
use clap::Parser;

use update_function_docs::cli::{run_update_workflow, UpdateWorkflowArgs};
use update_function_docs::config;
use update_function_docs::git::Git2Repository;
use update_function_docs::ui;

#[derive(clap::Parser)]
#[command(
    name = "update-function-docs",
    version,
    about = "Update function and example docs to the latest patch release",
    long_about = "Checks out a release branch (e.g. origin/apply-setters/v0.2), finds the latest \
                  patch tag for that function and minor version, rewrites the function and \
                  example READMEs to reference it, and commits the result. Pushing the commit \
                  and opening a pull request are left to the operator."
)]
struct Args {
    #[arg(
        value_name = "RELEASE_BRANCH",
        help = "Release branch, e.g. origin/apply-setters/v0.2"
    )]
    release_branch: String,
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config()?;
    let repo = Git2Repository::open(".")?;

    let result = run_update_workflow(
        &repo,
        &UpdateWorkflowArgs {
            release_branch: args.release_branch,
        },
        &config,
    )?;

    ui::display_success(&format!(
        "Committed {} ({} file(s) updated)",
        result.release.commit_message(),
        result.changed_files
    ));
    Ok(())
}

fn main() {
    let args = Args::parse();
    ui::init_logging();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
