//! GraphQL-over-HTTP plumbing: wire envelope, operation documents and transport.

mod envelope;
mod operations;
mod transport;

pub use envelope::{Envelope, GraphqlError, GraphqlRequest, GraphqlResult};
pub use operations::{
    CreateEntryData, CreateEntryVariables, EntriesData, EntriesVariables,
    CREATE_GUESTBOOK_ENTRY_MUTATION, GUESTBOOK_ENTRIES_QUERY,
};
pub use transport::GraphqlTransport;
