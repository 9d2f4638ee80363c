//! SSH authentication check against GitHub.
//!
//! `ssh -T git@github.com` never opens a shell: it exits 1 and prints a
//! greeting on success, so the outcome is read from the output instead of the
//! exit status. The check writes nothing (unknown host keys are rejected, not
//! recorded) so it is not routed through the dispatcher. In dry-run mode it is
//! only reported.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::core::action::Action;
use crate::io::process::run;

pub const GITHUB_SSH_HOST: &str = "git@github.com";
const AUTH_MARKER: &str = "successfully authenticated";

/// Outcome of the SSH authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshAuth {
    Authenticated,
    Rejected,
}

fn ssh_args() -> Vec<String> {
    [
        "-T",
        "-o",
        "BatchMode=yes",
        "-o",
        "StrictHostKeyChecking=yes",
        GITHUB_SSH_HOST,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Classify the combined ssh output.
pub fn classify(output: &str) -> SshAuth {
    if output.to_ascii_lowercase().contains(AUTH_MARKER) {
        SshAuth::Authenticated
    } else {
        SshAuth::Rejected
    }
}

/// The check as a displayable action.
pub fn auth_check_action(cwd: &Path) -> Action {
    Action::run("ssh", ssh_args(), cwd)
}

/// Run `ssh -T` from `cwd` and classify its output.
#[instrument(skip_all)]
pub fn github_ssh_auth(cwd: &Path) -> Result<SshAuth> {
    let output = run("ssh", &ssh_args(), cwd)?;
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    debug!(exit_code = ?output.status.code(), "ssh auth check finished");
    Ok(classify(&combined))
}

/// Check GitHub SSH authentication and log the outcome. Never fails.
///
/// With `dry_run` set the check is only reported, never spawned.
pub fn check_github_auth(cwd: &Path, dry_run: bool) {
    if dry_run {
        info!("[dry-run] {}", auth_check_action(cwd));
        return;
    }
    match github_ssh_auth(cwd) {
        Ok(SshAuth::Authenticated) => info!("GitHub SSH authentication OK"),
        Ok(SshAuth::Rejected) => warn!(
            "GitHub SSH authentication failed; pushing may not work (add a key with `ssh-add` or see https://docs.github.com/authentication)"
        ),
        Err(err) => warn!(error = %format!("{err:#}"), "could not run GitHub SSH check"),
    }
}
