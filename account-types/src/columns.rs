//! Key and column names shared by all representations of an account.
//!
//! The serialized text form uses these names as its keys and the storage row uses them as its column names.
//! Persisted accounts depend on them, so they must never change.

/// Account keys.
pub mod account {
    pub const NAME: &str = "name";
    /// Not part of a storage row (see [`ACCOUNTS_PROJECTION`](super::ACCOUNTS_PROJECTION)).
    pub const TYPE: &str = "type";
    pub const PROVIDER_VERSION: &str = "providerVersion";
    pub const URI: &str = "accountUri";
    pub const CAPABILITIES: &str = "capabilities";
    pub const FOLDER_LIST_URI: &str = "folderListUri";
    pub const SEARCH_URI: &str = "searchUri";
    pub const ACCOUNT_FROM_ADDRESSES: &str = "accountFromAddresses";
    pub const SAVE_DRAFT_URI: &str = "saveDraftUri";
    pub const SEND_MAIL_URI: &str = "sendMailUri";
    pub const EXPUNGE_MESSAGE_URI: &str = "expungeMessageUri";
    pub const UNDO_URI: &str = "undoUri";
    pub const SETTINGS_INTENT_URI: &str = "accountSettingsIntentUri";
    pub const HELP_INTENT_URI: &str = "helpIntentUri";
    pub const SEND_FEEDBACK_INTENT_URI: &str = "sendFeedbackIntentUri";
    pub const SYNC_STATUS: &str = "syncStatus";
    pub const COMPOSE_URI: &str = "composeUri";
    pub const MIME_TYPE: &str = "mimeType";
    pub const RECENT_FOLDER_LIST_URI: &str = "recentFolderListUri";
}

/// Settings keys.
pub mod settings {
    pub const SIGNATURE: &str = "signature";
    pub const AUTO_ADVANCE: &str = "auto_advance";
    pub const MESSAGE_TEXT_SIZE: &str = "message_text_size";
    pub const SNAP_HEADERS: &str = "snap_headers";
    pub const REPLY_BEHAVIOR: &str = "reply_behavior";
    pub const HIDE_CHECKBOXES: &str = "hide_checkboxes";
    pub const CONFIRM_DELETE: &str = "confirm_delete";
    pub const CONFIRM_ARCHIVE: &str = "confirm_archive";
    pub const CONFIRM_SEND: &str = "confirm_send";
    pub const DEFAULT_INBOX: &str = "default_inbox";
    pub const FORCE_REPLY_FROM_DEFAULT: &str = "force_reply_from_default";
}

/// Reserved key of the nested settings document in the serialized text form.
pub const SETTINGS: &str = "settings";

/// Columns of a storage row, in index order.
///
/// The account columns come first, followed by the settings columns of the same account.
/// A row has no `type` column.
pub const ACCOUNTS_PROJECTION: [&str; 29] = [
    account::NAME,
    account::PROVIDER_VERSION,
    account::URI,
    account::CAPABILITIES,
    account::FOLDER_LIST_URI,
    account::SEARCH_URI,
    account::ACCOUNT_FROM_ADDRESSES,
    account::SAVE_DRAFT_URI,
    account::SEND_MAIL_URI,
    account::EXPUNGE_MESSAGE_URI,
    account::UNDO_URI,
    account::SETTINGS_INTENT_URI,
    account::SYNC_STATUS,
    account::HELP_INTENT_URI,
    account::SEND_FEEDBACK_INTENT_URI,
    account::COMPOSE_URI,
    account::MIME_TYPE,
    account::RECENT_FOLDER_LIST_URI,
    settings::SIGNATURE,
    settings::AUTO_ADVANCE,
    settings::MESSAGE_TEXT_SIZE,
    settings::SNAP_HEADERS,
    settings::REPLY_BEHAVIOR,
    settings::HIDE_CHECKBOXES,
    settings::CONFIRM_DELETE,
    settings::CONFIRM_ARCHIVE,
    settings::CONFIRM_SEND,
    settings::DEFAULT_INBOX,
    settings::FORCE_REPLY_FROM_DEFAULT,
];

/// Indices into [`ACCOUNTS_PROJECTION`].
pub mod index {
    pub const NAME: usize = 0;
    pub const PROVIDER_VERSION: usize = 1;
    pub const URI: usize = 2;
    pub const CAPABILITIES: usize = 3;
    pub const FOLDER_LIST_URI: usize = 4;
    pub const SEARCH_URI: usize = 5;
    pub const ACCOUNT_FROM_ADDRESSES: usize = 6;
    pub const SAVE_DRAFT_URI: usize = 7;
    pub const SEND_MAIL_URI: usize = 8;
    pub const EXPUNGE_MESSAGE_URI: usize = 9;
    pub const UNDO_URI: usize = 10;
    pub const SETTINGS_INTENT_URI: usize = 11;
    pub const SYNC_STATUS: usize = 12;
    pub const HELP_INTENT_URI: usize = 13;
    pub const SEND_FEEDBACK_INTENT_URI: usize = 14;
    pub const COMPOSE_URI: usize = 15;
    pub const MIME_TYPE: usize = 16;
    pub const RECENT_FOLDER_LIST_URI: usize = 17;

    pub const SETTINGS_SIGNATURE: usize = 18;
    pub const SETTINGS_AUTO_ADVANCE: usize = 19;
    pub const SETTINGS_MESSAGE_TEXT_SIZE: usize = 20;
    pub const SETTINGS_SNAP_HEADERS: usize = 21;
    pub const SETTINGS_REPLY_BEHAVIOR: usize = 22;
    pub const SETTINGS_HIDE_CHECKBOXES: usize = 23;
    pub const SETTINGS_CONFIRM_DELETE: usize = 24;
    pub const SETTINGS_CONFIRM_ARCHIVE: usize = 25;
    pub const SETTINGS_CONFIRM_SEND: usize = 26;
    pub const SETTINGS_DEFAULT_INBOX: usize = 27;
    pub const SETTINGS_FORCE_REPLY_FROM_DEFAULT: usize = 28;

    /// First settings column.
    pub const SETTINGS_START: usize = SETTINGS_SIGNATURE;
}
