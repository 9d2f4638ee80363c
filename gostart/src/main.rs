//! `gostart`: bootstrap a Go backend service project.
//!
//! Creates the directory skeleton and starter files, initializes the Go
//! module, installs developer tools, and (unless `--template-only`) creates
//! and pushes a GitHub repository. `--dry-run` reports every action instead of
//! performing it.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::error;

use gostart::cli::{self, ArgsError};
use gostart::config::Config;
use gostart::exit_codes;
use gostart::io::dispatch::Dispatcher;
use gostart::io::env::MissingTool;
use gostart::io::ssh;
use gostart::logging;
use gostart::scaffold::run_scaffold;

fn main() -> ExitCode {
    logging::init();

    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => return report_usage_error(&err),
    };

    match run(&config) {
        Ok(()) => ExitCode::from(exit_codes::OK as u8),
        Err(err) => {
            if let Some(missing) = err.downcast_ref::<MissingTool>() {
                error!("environment not ready: {missing}");
            } else {
                error!("{err:#}");
            }
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let base_dir = std::env::current_dir().context("resolve current directory")?;
    if !config.template_only() {
        ssh::check_github_auth(&base_dir, config.dry_run());
    }
    let dispatcher = Dispatcher::system(config.dry_run());
    run_scaffold(config, &base_dir, &dispatcher)?;
    Ok(())
}

fn report_usage_error(err: &ArgsError) -> ExitCode {
    match err {
        // clap renders its own message (with usage) or the help/version text.
        ArgsError::Clap(clap_err) => {
            if let Err(io_err) = clap_err.print() {
                error!(error = %io_err, "failed to print usage");
            }
        }
        _ => {
            error!("{err}");
            eprintln!("{}", cli::usage());
        }
    }
    ExitCode::from(err.exit_code() as u8)
}
