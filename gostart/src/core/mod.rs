//! Deterministic, pure logic for the scaffolder.
//!
//! Core modules must be free of I/O side effects. They describe what to do
//! (actions, layout, file contents) and leave doing it to [`crate::io`].

pub mod action;
pub mod content;
pub mod layout;
