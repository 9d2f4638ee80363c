//! Command-line parsing into a validated [`Config`].

use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use thiserror::Error;

use crate::config::Config;
use crate::exit_codes;

#[derive(Parser, Debug)]
#[command(
    name = "gostart",
    version,
    about = "Bootstrap a new Go backend service project"
)]
struct Cli {
    /// Project name, used for paths, the module path and file contents.
    #[arg(short, long, value_name = "NAME")]
    project: Option<String>,

    /// GitHub username that owns the module and the remote repository.
    #[arg(short, long, value_name = "NAME")]
    user: Option<String>,

    /// Report every action instead of performing it.
    #[arg(short, long)]
    dry_run: bool,

    /// Only scaffold locally; skip the GitHub repository and git steps.
    #[arg(short, long)]
    template_only: bool,
}

/// Why the command line could not be turned into a [`Config`].
#[derive(Debug, Error)]
pub enum ArgsError {
    /// Unknown flag, missing flag value, or a help/version request.
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("Github username is required (use -u/--user)")]
    MissingUser,
    #[error("Project name is required (use -p/--project)")]
    MissingProject,
    #[error(
        "invalid GitHub username '{0}': use letters, digits or inner '-', starting and ending with a letter or digit"
    )]
    InvalidUser(String),
    #[error(
        "invalid project name '{0}': use letters, digits, '_', '-' or '.', starting with a letter or digit"
    )]
    InvalidProject(String),
}

impl ArgsError {
    /// Process exit status for this error.
    ///
    /// Help and version output are reported through clap as errors but are
    /// successful runs.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::Clap(err) if !err.use_stderr() => exit_codes::OK,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Parse the raw argument vector (including the binary name).
pub fn parse_args<I, T>(args: I) -> Result<Config, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let config = Config::new(
        cli.project.unwrap_or_default(),
        cli.user.unwrap_or_default(),
        cli.dry_run,
        cli.template_only,
    )?;
    Ok(config)
}

/// One-line usage summary for error output.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
