//! The single chokepoint for side effects.
//!
//! Every filesystem mutation and process invocation goes through
//! [`Dispatcher::dispatch`]. In dry-run mode the dispatcher reports the action
//! and returns success without touching the [`ActionRunner`]; otherwise it
//! delegates and propagates failures.

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::action::Action;
use crate::io::process::run_checked;

/// Performs actions against some environment.
pub trait ActionRunner {
    fn perform(&self, action: &Action) -> Result<()>;
}

/// Performs actions against the real filesystem and process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ActionRunner for SystemRunner {
    fn perform(&self, action: &Action) -> Result<()> {
        match action {
            Action::CreateDir { path } => fs::create_dir_all(path)
                .with_context(|| format!("create directory {}", path.display())),
            Action::WriteFile { path, contents } => {
                fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
            }
            Action::Run { program, args, cwd } => {
                run_checked(program, args, cwd)?;
                Ok(())
            }
        }
    }
}

/// Routes actions to a runner, or only reports them in dry-run mode.
#[derive(Debug)]
pub struct Dispatcher<R> {
    runner: R,
    dry_run: bool,
}

impl<R: ActionRunner> Dispatcher<R> {
    pub fn new(runner: R, dry_run: bool) -> Self {
        Self { runner, dry_run }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Perform `action`, or log it when dry-run is enabled.
    ///
    /// Dry-run never fails: the description is logged verbatim and nothing is
    /// evaluated.
    pub fn dispatch(&self, action: &Action) -> Result<()> {
        if self.dry_run {
            info!("[dry-run] {action}");
            return Ok(());
        }
        debug!(%action, "performing action");
        self.runner
            .perform(action)
            .with_context(|| format!("action failed: {action}"))
    }

    /// Dispatch a sequence in order, stopping at the first failure.
    pub fn dispatch_all<'a, I>(&self, actions: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut count = 0;
        for action in actions {
            self.dispatch(action)?;
            count += 1;
        }
        Ok(count)
    }
}

impl Dispatcher<SystemRunner> {
    /// Dispatcher that touches the real environment unless `dry_run` is set.
    pub fn system(dry_run: bool) -> Self {
        Self::new(SystemRunner, dry_run)
    }
}
