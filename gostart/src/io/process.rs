//! Helpers for running child processes to completion.
//!
//! Calls block until the child exits; there is no timeout. Output is captured
//! so failures can carry the child's stderr.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, instrument};

/// Run `program args...` in `cwd`, failing on spawn errors and non-zero exit.
#[instrument(skip_all, fields(program = %program, cwd = %cwd.display()))]
pub fn run_checked(program: &str, args: &[String], cwd: &Path) -> Result<Output> {
    let output = run(program, args, cwd)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(exit_code = ?output.status.code(), "command failed");
        return Err(anyhow!(
            "{} {} failed ({}): {}",
            program,
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        debug!(stdout = %stdout.trim(), "command output");
    }
    Ok(output)
}

/// Run `program args...` in `cwd` and return its output whatever the status.
pub fn run(program: &str, args: &[String], cwd: &Path) -> Result<Output> {
    debug!(program, "spawning child process");
    Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("spawn {} {}", program, args.join(" ")))
}
