//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under one name and adds
//! the pieces only the binary needs: the file-backed best-score store, the
//! JSON-lines event log, and run configuration.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;
pub mod store;
