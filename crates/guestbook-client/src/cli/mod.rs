//! CLI module - Command-line interface for the guestbook client.
//!
//! Provides commands for:
//! - `list` - Show guestbook entries
//! - `create` - Add a guestbook entry

pub mod args;

pub use args::{Cli, Commands};
