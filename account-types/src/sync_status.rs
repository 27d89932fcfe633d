//! Synchronization state codes of an account.
//!
//! [`Account::sync_status`](crate::account::Account::sync_status) is a bitmask of the values below.

/// No synchronization is in progress.
pub const NO_SYNC: i32 = 0;
/// The user requested a refresh.
pub const USER_REFRESH: i32 = 1 << 0;
/// A user query (e.g., a server search) is in progress.
pub const USER_QUERY: i32 = 1 << 1;
/// The user requested more results.
pub const USER_MORE_RESULTS: i32 = 1 << 2;
/// A background synchronization is in progress.
pub const BACKGROUND_SYNC: i32 = 1 << 3;
