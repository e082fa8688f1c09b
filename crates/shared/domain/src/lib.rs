//! Domain layer - Guestbook entities and value objects.
//!
//! This crate contains pure domain types with no I/O.

pub mod constants;
pub mod entry;
pub mod error;

pub use constants::*;
pub use entry::{sort_newest_first, Entry, EntryId, NewEntry};
pub use error::{DomainError, DomainResult};
