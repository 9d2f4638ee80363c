//! Go module manifest and developer tool installation.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::core::action::Action;
use crate::io::dispatch::{ActionRunner, Dispatcher};

pub const GO: &str = "go";

/// Developer tools installed with `go install`, in install order.
pub const DEV_TOOLS: &[&str] = &[
    "golang.org/x/tools/cmd/goimports@latest",
    "github.com/golangci/golangci-lint/cmd/golangci-lint@latest",
    "github.com/air-verse/air@latest",
];

/// `go mod init <module_path>` followed by `go mod tidy`, run in `root`.
pub fn module_actions(root: &Path, module_path: &str) -> Vec<Action> {
    vec![
        Action::run(GO, ["mod", "init", module_path], root),
        Action::run(GO, ["mod", "tidy"], root),
    ]
}

/// One `go install` per developer tool.
pub fn tool_actions(root: &Path) -> Vec<Action> {
    DEV_TOOLS
        .iter()
        .map(|tool| Action::run(GO, ["install", *tool], root))
        .collect()
}

pub fn init_module<R: ActionRunner>(
    dispatcher: &Dispatcher<R>,
    root: &Path,
    module_path: &str,
) -> Result<usize> {
    info!(module = module_path, "initializing Go module");
    dispatcher.dispatch_all(&module_actions(root, module_path))
}

pub fn install_tools<R: ActionRunner>(dispatcher: &Dispatcher<R>, root: &Path) -> Result<usize> {
    info!(count = DEV_TOOLS.len(), "installing developer tools");
    dispatcher.dispatch_all(&tool_actions(root))
}
