//! Scaffolder for Go backend services.
//!
//! Every side effect is described as an [`core::action::Action`] and sent
//! through a single [`io::dispatch::Dispatcher`], which either performs it or,
//! in dry-run mode, only reports it. The architecture keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (actions, layout, file contents).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (dispatcher, process execution,
//!   environment checks).
//!
//! Phase modules ([`structure`], [`module`], [`remote`]) turn a [`config::Config`]
//! into actions, and [`scaffold`] sequences them.

pub mod cli;
pub mod config;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod module;
pub mod remote;
pub mod scaffold;
pub mod structure;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
