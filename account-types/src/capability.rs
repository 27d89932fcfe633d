//! Capability flags of an account.
//!
//! An account stores its capabilities as a plain bitmask in [`Account::capabilities`](crate::account::Account::capabilities).
//! Use [`Account::supports_capability`](crate::account::Account::supports_capability) to test a flag.

/// The account supports syncing of individual folders.
pub const SYNCABLE_FOLDERS: i32 = 0x0001;
/// Messages can be reported as spam.
pub const REPORT_SPAM: i32 = 0x0002;
/// Conversations can be archived.
pub const ARCHIVE: i32 = 0x0004;
/// Conversations can be muted.
pub const MUTE: i32 = 0x0008;
/// The server can be searched for messages.
pub const SERVER_SEARCH: i32 = 0x0010;
/// A single folder on the server can be searched.
pub const FOLDER_SERVER_SEARCH: i32 = 0x0020;
/// Message bodies are sanitized HTML.
pub const SANITIZED_HTML: i32 = 0x0040;
/// Drafts are synchronized to the server.
pub const DRAFT_SYNCHRONIZATION: i32 = 0x0080;
/// Messages can be sent from more than one address.
pub const MULTIPLE_FROM_ADDRESS: i32 = 0x0100;
/// Replies may omit quoted text that the server appends itself.
pub const SMART_REPLY: i32 = 0x0200;
/// Messages stored locally can be searched.
pub const LOCAL_SEARCH: i32 = 0x0400;
/// Messages are grouped into conversations by the provider.
pub const THREADED_CONVERSATIONS: i32 = 0x0800;
/// A conversation may live in more than one folder.
pub const MULTIPLE_FOLDERS_PER_CONV: i32 = 0x1000;
/// The last operation can be undone.
pub const UNDO: i32 = 0x2000;
/// The provider offers help content.
pub const HELP_CONTENT: i32 = 0x4000;
/// The provider accepts feedback.
pub const SEND_FEEDBACK: i32 = 0x8000;
/// Conversations can be marked as important.
pub const MARK_IMPORTANT: i32 = 0x10000;
