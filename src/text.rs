//! The serialized text form, a JSON object keyed by [`columns`](account_types::columns).

use account_types::{
    account::{Account, AccountName, AccountType},
    columns::{account::*, SETTINGS},
    error::IdentityError,
    settings::Settings,
    uri::Uri,
};
use log::{error, warn};
use serde_json::{Map, Value};

use crate::{
    decode::{Decoder, TextDecodeError},
    TextCodec,
};

type Document = Map<String, Value>;

impl TextCodec {
    /// Decode an account with a known identity.
    ///
    /// `name` and `type` in the document (if any) are ignored.
    pub fn decode_with_identity(
        &self,
        name: AccountName,
        r#type: AccountType,
        input: &str,
    ) -> Result<Account, TextDecodeError> {
        let document: Value = serde_json::from_str(input)?;
        let document = document.as_object().ok_or(TextDecodeError::NotAnObject)?;

        self.decode_fields(name, r#type, document)
    }

    /// Decode an account, logging and swallowing any error.
    ///
    /// Failures are logged with level `error` to [`TextCodec::log_target`].
    pub fn decode_or_none(&self, input: &str) -> Option<Account> {
        match self.decode(input.as_bytes()) {
            Ok((_, account)) => Some(account),
            Err(err) => {
                error!(
                    target: self.log_target(),
                    "Could not create an account from {input:?}: {err}"
                );
                None
            }
        }
    }

    /// Encode an account into its serialized text form.
    pub fn encode_to_string(&self, account: &Account) -> String {
        account_to_json(account).to_string()
    }

    pub(crate) fn decode_document(&self, document: &Value) -> Result<Account, TextDecodeError> {
        let document = document.as_object().ok_or(TextDecodeError::NotAnObject)?;

        let name = identity(document, NAME)?;
        let r#type = identity(document, TYPE)?;

        self.decode_fields(name, r#type, document)
    }

    fn decode_fields(
        &self,
        name: AccountName,
        r#type: AccountType,
        document: &Document,
    ) -> Result<Account, TextDecodeError> {
        let required = |key: &'static str| -> Result<i32, TextDecodeError> {
            self.int(document, key)?
                .ok_or(TextDecodeError::MissingKey(key))
        };

        let sync_status = match self.int(document, SYNC_STATUS) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!(target: self.log_target(), "Ignoring `{SYNC_STATUS}`: {err}");
                0
            }
        };

        let settings = match document.get(SETTINGS) {
            None | Some(Value::Null) => None,
            Some(value) => Some(Settings::from_json(value)?),
        };

        Ok(Account {
            name,
            r#type,
            provider_version: required(PROVIDER_VERSION)?,
            uri: uri(document, URI)?,
            capabilities: required(CAPABILITIES)?,
            folder_list_uri: uri(document, FOLDER_LIST_URI)?,
            search_uri: uri(document, SEARCH_URI)?,
            account_from_addresses: text(document, ACCOUNT_FROM_ADDRESSES)?,
            save_draft_uri: uri(document, SAVE_DRAFT_URI)?,
            send_message_uri: uri(document, SEND_MAIL_URI)?,
            expunge_message_uri: uri(document, EXPUNGE_MESSAGE_URI)?,
            undo_uri: uri(document, UNDO_URI)?,
            settings_intent_uri: uri(document, SETTINGS_INTENT_URI)?,
            help_intent_uri: uri(document, HELP_INTENT_URI)?,
            send_feedback_intent_uri: uri(document, SEND_FEEDBACK_INTENT_URI)?,
            sync_status,
            compose_intent_uri: uri(document, COMPOSE_URI)?,
            mime_type: text(document, MIME_TYPE)?,
            recent_folder_list_uri: uri(document, RECENT_FOLDER_LIST_URI)?,
            settings,
        })
    }

    /// Numbers, or strings holding a number.
    fn int(&self, document: &Document, key: &'static str) -> Result<Option<i32>, TextDecodeError> {
        match document.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number
                .as_i64()
                .and_then(|number| i32::try_from(number).ok())
                .map(Some)
                .ok_or(TextDecodeError::InvalidValue(key)),
            Some(Value::String(value)) => match value.trim().parse::<i32>() {
                Ok(number) => {
                    warn!(target: self.log_target(), "Rectified `{key}` from string {value:?}");
                    Ok(Some(number))
                }
                Err(_) => Err(TextDecodeError::InvalidValue(key)),
            },
            Some(_) => Err(TextDecodeError::InvalidValue(key)),
        }
    }
}

fn identity<T>(document: &Document, key: &'static str) -> Result<T, TextDecodeError>
where
    T: for<'a> TryFrom<&'a str, Error = IdentityError>,
{
    match document.get(key) {
        None | Some(Value::Null) => Err(TextDecodeError::MissingKey(key)),
        Some(Value::String(value)) => T::try_from(value.as_str())
            .map_err(|source| TextDecodeError::InvalidIdentity { key, source }),
        Some(_) => Err(TextDecodeError::InvalidValue(key)),
    }
}

/// Missing, `null`, and `""` are the empty URI.
fn uri(document: &Document, key: &'static str) -> Result<Uri, TextDecodeError> {
    match document.get(key) {
        None | Some(Value::Null) => Ok(Uri::EMPTY),
        Some(Value::String(value)) => {
            Uri::parse(value).map_err(|source| TextDecodeError::InvalidUri { key, source })
        }
        Some(_) => Err(TextDecodeError::InvalidValue(key)),
    }
}

fn text(document: &Document, key: &'static str) -> Result<Option<String>, TextDecodeError> {
    match document.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(TextDecodeError::InvalidValue(key)),
    }
}

pub(crate) fn account_to_json(account: &Account) -> Value {
    let mut document = Document::new();

    let mut insert_uri = |key: &str, uri: &Uri| {
        document.insert(key.into(), uri.as_str().into());
    };
    insert_uri(URI, &account.uri);
    insert_uri(FOLDER_LIST_URI, &account.folder_list_uri);
    insert_uri(SEARCH_URI, &account.search_uri);
    insert_uri(SAVE_DRAFT_URI, &account.save_draft_uri);
    insert_uri(SEND_MAIL_URI, &account.send_message_uri);
    insert_uri(EXPUNGE_MESSAGE_URI, &account.expunge_message_uri);
    insert_uri(UNDO_URI, &account.undo_uri);
    insert_uri(SETTINGS_INTENT_URI, &account.settings_intent_uri);
    insert_uri(HELP_INTENT_URI, &account.help_intent_uri);
    insert_uri(SEND_FEEDBACK_INTENT_URI, &account.send_feedback_intent_uri);
    insert_uri(COMPOSE_URI, &account.compose_intent_uri);
    insert_uri(RECENT_FOLDER_LIST_URI, &account.recent_folder_list_uri);

    document.insert(NAME.into(), account.name.inner().into());
    document.insert(TYPE.into(), account.r#type.inner().into());
    document.insert(PROVIDER_VERSION.into(), account.provider_version.into());
    document.insert(CAPABILITIES.into(), account.capabilities.into());
    document.insert(
        ACCOUNT_FROM_ADDRESSES.into(),
        account.account_from_addresses.clone().into(),
    );
    document.insert(SYNC_STATUS.into(), account.sync_status.into());
    document.insert(MIME_TYPE.into(), account.mime_type.clone().into());

    if let Some(settings) = &account.settings {
        document.insert(SETTINGS.into(), settings.to_json());
    }

    Value::Object(document)
}
