//! Clients for the guestbook GraphQL backend.

mod guestbook_client;
mod mutation_writer;
mod query_reader;

pub use guestbook_client::{GuestbookApi, GuestbookClient};
pub use mutation_writer::MutationWriter;
pub use query_reader::{EntriesView, QueryReader};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use guestbook_client::MockGuestbookApi;
