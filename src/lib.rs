//! Library crate for user-search.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, reducer, keymap and event loop (`app`)
//! - Command-line configuration (`cli`)
//! - Error and result types (`error`)
//! - Log file setup (`logging`)
//! - The one-shot user list loader (`remote`)
//! - The query filter (`search`)
//! - UI rendering (`ui`)
//!
//! It is used by the `user-search` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod remote;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
pub use error::{LoadError, Result};
pub use remote::UserRecord;
pub use search::filter;
