//! GitHub repository creation and the initial commit/push.
//!
//! Every git and gh call is an [`Action`] sent through the dispatcher, so a
//! dry run only reports them. The precondition check for `gh` and `git` is a
//! read-only `PATH` lookup and runs in dry-run mode too.

use std::path::Path;

use anyhow::Result;
use tracing::{info, instrument};

use crate::config::Config;
use crate::core::action::Action;
use crate::io::dispatch::{ActionRunner, Dispatcher};
use crate::io::env::{self, GH, GIT};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
pub const REMOTE_NAME: &str = "origin";

/// `git init` and `gh repo create` for `owner/name`.
pub fn create_repo_actions(root: &Path, repo_slug: &str) -> Vec<Action> {
    vec![
        Action::run(GIT.name, ["init"], root),
        Action::run(
            GH.name,
            [
                "repo",
                "create",
                repo_slug,
                "--public",
                "--source",
                ".",
                "--remote",
                REMOTE_NAME,
            ],
            root,
        ),
    ]
}

/// Stage everything, commit once, push the current branch.
pub fn publish_actions(root: &Path) -> Vec<Action> {
    vec![
        Action::run(GIT.name, ["add", "-A"], root),
        Action::run(GIT.name, ["commit", "-m", INITIAL_COMMIT_MESSAGE], root),
        Action::run(GIT.name, ["push", "-u", REMOTE_NAME, "HEAD"], root),
    ]
}

/// Create the remote repository and push the scaffold.
///
/// Does nothing in template-only mode. A missing `gh` or `git` fails with
/// [`env::MissingTool`] before any action of this phase is dispatched. The
/// first failing action aborts the rest; nothing is rolled back.
#[instrument(skip_all, fields(repo = %config.repo_slug()))]
pub fn setup_remote<R: ActionRunner>(
    dispatcher: &Dispatcher<R>,
    config: &Config,
    root: &Path,
) -> Result<usize> {
    if config.template_only() {
        info!("template-only: skipping GitHub repository setup");
        return Ok(0);
    }
    env::require_all(&[GH, GIT])?;
    create_and_push(dispatcher, &config.repo_slug(), root)
}

/// Dispatch repository creation, then the initial commit and push.
///
/// Assumes the `gh`/`git` precondition already holds.
pub fn create_and_push<R: ActionRunner>(
    dispatcher: &Dispatcher<R>,
    repo_slug: &str,
    root: &Path,
) -> Result<usize> {
    info!(repo = repo_slug, "creating GitHub repository");
    let mut count = dispatcher.dispatch_all(&create_repo_actions(root, repo_slug))?;

    info!("committing and pushing initial scaffold");
    count += dispatcher.dispatch_all(&publish_actions(root))?;
    Ok(count)
}
