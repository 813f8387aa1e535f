//! Fruit Catcher (workspace facade crate).
//!
//! Re-exports the member crates as `fruit_catcher::{types, core, input, term}`
//! and hosts the app-level pieces shared by the binary and the tests:
//! environment configuration, the JSONL event log and the headless
//! `simulate` mode.

pub use fruit_catcher_core as core;
pub use fruit_catcher_input as input;
pub use fruit_catcher_term as term;
pub use fruit_catcher_types as types;

pub mod config;
pub mod event_log;
pub mod simulate;
