//! Side-effecting operations: the dispatcher, process execution, and
//! read-only environment checks.

pub mod dispatch;
pub mod env;
pub mod process;
pub mod ssh;
