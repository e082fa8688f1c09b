//! Guestbook Client Library
//!
//! Reads and writes guestbook entries through a GraphQL backend.
//! [`QueryReader`](clients::QueryReader) normalizes the list query into an
//! [`EntriesView`](clients::EntriesView); [`MutationWriter`](clients::MutationWriter)
//! hands back the create mutation's response body.

pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod graphql;

pub use clients::{EntriesView, GuestbookApi, GuestbookClient, MutationWriter, QueryReader};
pub use config::ClientConfig;
