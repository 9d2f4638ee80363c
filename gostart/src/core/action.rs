//! Deferred units of mutating work.
//!
//! Every side effect the scaffolder performs is first described as an
//! [`Action`] and handed to the dispatcher. Actions are plain data: building
//! one never touches the filesystem or spawns anything, and the textual
//! description is for display only. Process invocations are stored as a
//! program plus an argument list so nothing is ever routed through a shell.

use std::fmt;
use std::path::{Path, PathBuf};

/// A single side-effecting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a directory and any missing parents.
    CreateDir { path: PathBuf },
    /// Create or overwrite a file with fixed contents.
    WriteFile { path: PathBuf, contents: String },
    /// Spawn `program` with `args` in `cwd` and wait for it.
    Run {
        program: String,
        args: Vec<String>,
        cwd: PathBuf,
    },
}

impl Action {
    pub fn create_dir(path: impl Into<PathBuf>) -> Self {
        Action::CreateDir { path: path.into() }
    }

    pub fn write_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Action::WriteFile {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Build a process invocation. `cwd` is explicit; the scaffolder never
    /// changes its own working directory.
    pub fn run<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::Run {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Human-readable description used for logging.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreateDir { path } => write!(f, "mkdir -p {}", path.display()),
            Action::WriteFile { path, contents } => {
                write!(f, "write {} ({} bytes)", path.display(), contents.len())
            }
            Action::Run { program, args, .. } => {
                write!(f, "{program}")?;
                for arg in args {
                    write!(f, " {}", display_arg(arg))?;
                }
                Ok(())
            }
        }
    }
}

/// Quote an argument for display when it would otherwise read ambiguously.
///
/// The text itself is kept verbatim; only surrounding quotes are added.
fn display_arg(arg: &str) -> String {
    const SPECIAL: &[char] = &[
        '$', '`', '"', '\'', '\\', '|', '&', ';', '<', '>', '(', ')', '*', '?', '!', '#', '~',
    ];
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.chars().any(|c| c.is_whitespace() || SPECIAL.contains(&c)) {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_description_joins_program_and_args() {
        let action = Action::run("go", ["mod", "init", "github.com/alice/demo"], Path::new("/tmp"));
        assert_eq!(action.describe(), "go mod init github.com/alice/demo");
    }

    #[test]
    fn run_description_quotes_args_with_spaces() {
        let action = Action::run("git", ["commit", "-m", "Initial commit"], Path::new("/tmp"));
        assert_eq!(action.describe(), "git commit -m 'Initial commit'");
    }

    #[test]
    fn run_description_keeps_substitutions_verbatim() {
        let action = Action::run("echo", ["$(touch pwned)", "`id`"], Path::new("/tmp"));
        let text = action.describe();
        assert!(text.contains("$(touch pwned)"));
        assert!(text.contains("`id`"));
    }

    #[test]
    fn write_description_reports_size_not_contents() {
        let action = Action::write_file("/tmp/demo/Makefile", "build:\n");
        assert_eq!(action.describe(), "write /tmp/demo/Makefile (7 bytes)");
    }

    #[test]
    fn create_dir_description_uses_path() {
        let action = Action::create_dir("/tmp/demo/cmd/demo");
        assert_eq!(action.describe(), "mkdir -p /tmp/demo/cmd/demo");
    }
}
