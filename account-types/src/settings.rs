//! Settings of an account.

#[cfg(feature = "arbitrary")]
use arbitrary::Arbitrary;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    columns::settings::{
        AUTO_ADVANCE, CONFIRM_ARCHIVE, CONFIRM_DELETE, CONFIRM_SEND, DEFAULT_INBOX,
        FORCE_REPLY_FROM_DEFAULT, HIDE_CHECKBOXES, MESSAGE_TEXT_SIZE, REPLY_BEHAVIOR, SIGNATURE,
        SNAP_HEADERS,
    },
    uri::{Uri, UriError},
};

/// Per-account user settings.
///
/// Settings are owned by exactly one [`Account`](crate::account::Account).
/// Their text form is a JSON object keyed by the names in [`columns::settings`](crate::columns::settings).
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Settings {
    pub signature: String,
    pub auto_advance: i32,
    pub message_text_size: i32,
    pub snap_headers: i32,
    pub reply_behavior: i32,
    pub hide_checkboxes: bool,
    pub confirm_delete: bool,
    pub confirm_archive: bool,
    pub confirm_send: bool,
    pub default_inbox: Uri,
    pub force_reply_from_default: bool,
}

impl Settings {
    /// JSON document of these settings.
    pub fn to_json(&self) -> Value {
        let mut document = Map::new();

        document.insert(SIGNATURE.into(), self.signature.clone().into());
        document.insert(AUTO_ADVANCE.into(), self.auto_advance.into());
        document.insert(MESSAGE_TEXT_SIZE.into(), self.message_text_size.into());
        document.insert(SNAP_HEADERS.into(), self.snap_headers.into());
        document.insert(REPLY_BEHAVIOR.into(), self.reply_behavior.into());
        document.insert(HIDE_CHECKBOXES.into(), self.hide_checkboxes.into());
        document.insert(CONFIRM_DELETE.into(), self.confirm_delete.into());
        document.insert(CONFIRM_ARCHIVE.into(), self.confirm_archive.into());
        document.insert(CONFIRM_SEND.into(), self.confirm_send.into());
        document.insert(DEFAULT_INBOX.into(), self.default_inbox.as_str().into());
        document.insert(
            FORCE_REPLY_FROM_DEFAULT.into(),
            self.force_reply_from_default.into(),
        );

        Value::Object(document)
    }

    /// Serialized text form of these settings.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Create settings from a JSON document.
    ///
    /// Missing or mistyped values fall back to their defaults.
    /// The document itself must be an object and `default_inbox`, when present, must be a valid URI.
    pub fn from_json(document: &Value) -> Result<Self, SettingsError> {
        let document = document.as_object().ok_or(SettingsError::NotAnObject)?;

        let string = |key: &str| {
            document
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        let int = |key: &str| {
            document
                .get(key)
                .and_then(Value::as_i64)
                .and_then(|value| i32::try_from(value).ok())
                .unwrap_or_default()
        };
        let boolean = |key: &str| {
            document
                .get(key)
                .and_then(Value::as_bool)
                .unwrap_or_default()
        };

        let default_inbox = match document.get(DEFAULT_INBOX).and_then(Value::as_str) {
            Some(value) => Uri::parse(value).map_err(|source| SettingsError::InvalidUri {
                key: DEFAULT_INBOX,
                source,
            })?,
            None => Uri::EMPTY,
        };

        Ok(Self {
            signature: string(SIGNATURE),
            auto_advance: int(AUTO_ADVANCE),
            message_text_size: int(MESSAGE_TEXT_SIZE),
            snap_headers: int(SNAP_HEADERS),
            reply_behavior: int(REPLY_BEHAVIOR),
            hide_checkboxes: boolean(HIDE_CHECKBOXES),
            confirm_delete: boolean(CONFIRM_DELETE),
            confirm_archive: boolean(CONFIRM_ARCHIVE),
            confirm_send: boolean(CONFIRM_SEND),
            default_inbox,
            force_reply_from_default: boolean(FORCE_REPLY_FROM_DEFAULT),
        })
    }

    /// Create settings from their serialized text form.
    pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
        let document: Value = serde_json::from_str(input)?;

        Self::from_json(&document)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Malformed settings document: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("Settings document is not an object")]
    NotAnObject,
    #[error("Invalid URI in `{key}`: {source}")]
    InvalidUri {
        key: &'static str,
        #[source]
        source: UriError,
    },
}
