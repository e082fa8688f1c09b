//! Domain-level constants.
//!
//! These constants pin the contract with the guestbook GraphQL backend.

// =============================================================================
// Paging
// =============================================================================

/// Number of entries requested by the entries query
pub const ENTRIES_PAGE_SIZE: u32 = 100;

// =============================================================================
// GraphQL operations
// =============================================================================

/// Operation name of the read query
pub const GUESTBOOK_ENTRIES_OPERATION: &str = "GuestbookEntries";

/// Operation name of the create mutation
pub const CREATE_ENTRY_OPERATION: &str = "CreateGuestbookEntry";

/// Response field holding the entry list
pub const GUESTBOOK_ENTRIES_FIELD: &str = "guestbookEntries";

/// Response field holding the created entry
pub const CREATE_ENTRY_FIELD: &str = "createGuestbookEntry";

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for the backend credential
pub const BASIC_AUTH_PREFIX: &str = "Basic ";
