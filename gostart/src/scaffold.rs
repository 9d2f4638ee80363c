//! Orchestration for a full scaffolding run.
//!
//! Phases run in a fixed order: project root, structure, module manifest,
//! developer tools, then the GitHub repository unless template-only. The first
//! failing action stops the run; partially created state is left in place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::core::action::Action;
use crate::core::layout::ProjectLayout;
use crate::io::dispatch::{ActionRunner, Dispatcher};
use crate::module::{init_module, install_tools};
use crate::remote::setup_remote;
use crate::structure::build_structure;

/// Outcome of [`run_scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Project root (`base_dir/<project>`).
    pub root: PathBuf,
    /// Number of actions dispatched (performed or reported).
    pub dispatched: usize,
}

/// Scaffold `config.project()` under `base_dir`.
///
/// `base_dir` is the directory the project root is created in; the process
/// working directory is never changed.
pub fn run_scaffold<R: ActionRunner>(
    config: &Config,
    base_dir: &Path,
    dispatcher: &Dispatcher<R>,
) -> Result<ScaffoldOutcome> {
    info!(
        project = config.project(),
        user = config.user(),
        dry_run = config.dry_run(),
        template_only = config.template_only(),
        "scaffolding Go service"
    );

    let layout = ProjectLayout::new(base_dir, config.project());
    let root = layout.root.clone();
    let mut dispatched = 0;

    dispatcher
        .dispatch(&Action::create_dir(root.as_path()))
        .context("create project root")?;
    dispatched += 1;

    dispatched += build_structure(dispatcher, &layout, config.project())
        .context("build project structure")?;
    dispatched += init_module(dispatcher, &root, &config.module_path())
        .context("initialize Go module")?;
    dispatched += install_tools(dispatcher, &root).context("install developer tools")?;
    dispatched += setup_remote(dispatcher, config, &root)?;

    info!(
        root = %root.display(),
        dispatched,
        "project {} is ready",
        config.project()
    );
    Ok(ScaffoldOutcome { root, dispatched })
}
