//! Read-only checks for external tools the scaffolder shells out to.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// A required executable is not on `PATH`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("required tool '{tool}' was not found on PATH; {hint}")]
pub struct MissingTool {
    pub tool: String,
    pub hint: String,
}

/// An executable the scaffolder may need, with install guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub hint: &'static str,
}

pub const GH: Tool = Tool {
    name: "gh",
    hint: "install the GitHub CLI from https://cli.github.com and run `gh auth login`",
};

pub const GIT: Tool = Tool {
    name: "git",
    hint: "install git from https://git-scm.com/downloads",
};

/// Resolve `tool` on `PATH`.
pub fn require(tool: Tool) -> Result<PathBuf, MissingTool> {
    match which::which(tool.name) {
        Ok(path) => {
            debug!(tool = tool.name, path = %path.display(), "found tool");
            Ok(path)
        }
        Err(_) => Err(MissingTool {
            tool: tool.name.to_string(),
            hint: tool.hint.to_string(),
        }),
    }
}

/// Resolve every tool in order, reporting the first one missing.
pub fn require_all(tools: &[Tool]) -> Result<(), MissingTool> {
    for tool in tools {
        require(*tool)?;
    }
    Ok(())
}
