//! Operation documents and their variables/response shapes.

use serde::{Deserialize, Serialize};

use domain::Entry;

/// Lists guestbook entries with all their attributes.
pub const GUESTBOOK_ENTRIES_QUERY: &str = r#"query GuestbookEntries {
    guestbookEntries {
        id
        createdAt
        twitterHandle
        story
    }
  }"#;

/// Creates one entry and returns it with its id and creation time.
pub const CREATE_GUESTBOOK_ENTRY_MUTATION: &str = r#"mutation CreateGuestbookEntry($twitterHandle: String!, $story: String!) {
    createGuestbookEntry(data: {
      twitterHandle: $twitterHandle,
      story: $story
    }) {
      id
      createdAt
      twitterHandle
      story
    }
  }"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntriesVariables {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryVariables<'a> {
    pub twitter_handle: &'a str,
    pub story: &'a str,
}

/// `data` member of the entries query response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesData {
    pub guestbook_entries: Vec<Entry>,
}

/// `data` member of the create mutation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryData {
    pub create_guestbook_entry: Entry,
}
