//! Common utilities shared across the guestbook crates.
//!
//! This crate provides:
//! - Unified error handling for transport and GraphQL failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
