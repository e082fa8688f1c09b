//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module and talks to the backend
//! through [`GuestbookApi`](crate::clients::GuestbookApi).

pub mod create;
pub mod list;

use std::io;

use common::AppError;

fn output_error(err: io::Error) -> AppError {
    AppError::internal(format!("Failed to write output: {}", err))
}
