//! The storage row, see [`ACCOUNTS_PROJECTION`].

use account_types::{
    account::{Account, AccountName},
    columns::{index, ACCOUNTS_PROJECTION},
    settings::Settings,
    uri::Uri,
};
use log::debug;
use rusqlite::{
    types::{FromSql, Value, ValueRef},
    Row, Rows,
};

use crate::{decode::RowDecodeError, RowCodec};

impl RowCodec {
    /// `SELECT` statement for all accounts in `table`.
    ///
    /// The columns are selected in the order of [`ACCOUNTS_PROJECTION`].
    pub fn select_sql(table: &str) -> String {
        format!("SELECT {} FROM {table}", ACCOUNTS_PROJECTION.join(", "))
    }

    /// Decode the account in `row`.
    ///
    /// The row must hold the columns of [`ACCOUNTS_PROJECTION`] in order.
    /// The type of the account is set to [`RowCodec::placeholder_type`].
    pub fn decode(&self, row: &Row<'_>) -> Result<Account, RowDecodeError> {
        let name: String = get(row, index::NAME)?;
        let name =
            AccountName::try_from(name).map_err(|source| RowDecodeError::InvalidIdentity {
                column: ACCOUNTS_PROJECTION[index::NAME],
                source,
            })?;

        Ok(Account {
            name,
            r#type: self.placeholder_type.clone(),
            provider_version: int(row, index::PROVIDER_VERSION)?,
            uri: uri(row, index::URI)?,
            capabilities: int(row, index::CAPABILITIES)?,
            folder_list_uri: uri(row, index::FOLDER_LIST_URI)?,
            search_uri: uri(row, index::SEARCH_URI)?,
            account_from_addresses: get(row, index::ACCOUNT_FROM_ADDRESSES)?,
            save_draft_uri: uri(row, index::SAVE_DRAFT_URI)?,
            send_message_uri: uri(row, index::SEND_MAIL_URI)?,
            expunge_message_uri: uri(row, index::EXPUNGE_MESSAGE_URI)?,
            undo_uri: uri(row, index::UNDO_URI)?,
            settings_intent_uri: uri(row, index::SETTINGS_INTENT_URI)?,
            help_intent_uri: uri(row, index::HELP_INTENT_URI)?,
            send_feedback_intent_uri: uri(row, index::SEND_FEEDBACK_INTENT_URI)?,
            sync_status: int(row, index::SYNC_STATUS)?,
            compose_intent_uri: uri(row, index::COMPOSE_URI)?,
            mime_type: get(row, index::MIME_TYPE)?,
            recent_folder_list_uri: uri(row, index::RECENT_FOLDER_LIST_URI)?,
            settings: settings(row)?,
        })
    }

    /// Decode all remaining rows, in order.
    ///
    /// The rows are only advanced, never reset, and stay owned by the caller.
    pub fn decode_all(&self, rows: &mut Rows<'_>) -> Result<Vec<Account>, RowDecodeError> {
        let mut accounts = Vec::new();

        while let Some(row) = rows.next()? {
            accounts.push(self.decode(row)?);
        }

        debug!("Decoded {} account(s)", accounts.len());

        Ok(accounts)
    }

    /// Encode `account` into row values in the order of [`ACCOUNTS_PROJECTION`].
    ///
    /// The empty URI and `None` are written as `NULL`.
    /// Without settings, every settings column is `NULL`.
    pub fn encode(&self, account: &Account) -> Vec<Value> {
        let mut values = vec![Value::Null; ACCOUNTS_PROJECTION.len()];

        values[index::NAME] = Value::Text(account.name.inner().to_owned());
        values[index::PROVIDER_VERSION] = account.provider_version.into();
        values[index::URI] = uri_value(&account.uri);
        values[index::CAPABILITIES] = account.capabilities.into();
        values[index::FOLDER_LIST_URI] = uri_value(&account.folder_list_uri);
        values[index::SEARCH_URI] = uri_value(&account.search_uri);
        values[index::ACCOUNT_FROM_ADDRESSES] = account.account_from_addresses.clone().into();
        values[index::SAVE_DRAFT_URI] = uri_value(&account.save_draft_uri);
        values[index::SEND_MAIL_URI] = uri_value(&account.send_message_uri);
        values[index::EXPUNGE_MESSAGE_URI] = uri_value(&account.expunge_message_uri);
        values[index::UNDO_URI] = uri_value(&account.undo_uri);
        values[index::SETTINGS_INTENT_URI] = uri_value(&account.settings_intent_uri);
        values[index::SYNC_STATUS] = account.sync_status.into();
        values[index::HELP_INTENT_URI] = uri_value(&account.help_intent_uri);
        values[index::SEND_FEEDBACK_INTENT_URI] = uri_value(&account.send_feedback_intent_uri);
        values[index::COMPOSE_URI] = uri_value(&account.compose_intent_uri);
        values[index::MIME_TYPE] = account.mime_type.clone().into();
        values[index::RECENT_FOLDER_LIST_URI] = uri_value(&account.recent_folder_list_uri);

        if let Some(settings) = &account.settings {
            values[index::SETTINGS_SIGNATURE] = Value::Text(settings.signature.clone());
            values[index::SETTINGS_AUTO_ADVANCE] = settings.auto_advance.into();
            values[index::SETTINGS_MESSAGE_TEXT_SIZE] = settings.message_text_size.into();
            values[index::SETTINGS_SNAP_HEADERS] = settings.snap_headers.into();
            values[index::SETTINGS_REPLY_BEHAVIOR] = settings.reply_behavior.into();
            values[index::SETTINGS_HIDE_CHECKBOXES] = settings.hide_checkboxes.into();
            values[index::SETTINGS_CONFIRM_DELETE] = settings.confirm_delete.into();
            values[index::SETTINGS_CONFIRM_ARCHIVE] = settings.confirm_archive.into();
            values[index::SETTINGS_CONFIRM_SEND] = settings.confirm_send.into();
            values[index::SETTINGS_DEFAULT_INBOX] = uri_value(&settings.default_inbox);
            values[index::SETTINGS_FORCE_REPLY_FROM_DEFAULT] =
                settings.force_reply_from_default.into();
        }

        values
    }
}

fn get<T: FromSql>(row: &Row<'_>, index: usize) -> Result<T, RowDecodeError> {
    row.get(index).map_err(|source| RowDecodeError::Column {
        index,
        column: ACCOUNTS_PROJECTION[index],
        source,
    })
}

/// `NULL` is `0`.
fn int(row: &Row<'_>, index: usize) -> Result<i32, RowDecodeError> {
    Ok(get::<Option<i32>>(row, index)?.unwrap_or_default())
}

/// `NULL` and `''` are the empty URI.
fn uri(row: &Row<'_>, index: usize) -> Result<Uri, RowDecodeError> {
    let value: Option<String> = get(row, index)?;

    Uri::parse(value.as_deref().unwrap_or_default()).map_err(|source| {
        RowDecodeError::InvalidUri {
            column: ACCOUNTS_PROJECTION[index],
            source,
        }
    })
}

fn uri_value(uri: &Uri) -> Value {
    match uri.as_url() {
        Some(url) => Value::Text(url.as_str().to_owned()),
        None => Value::Null,
    }
}

/// `None` when every settings column is `NULL`.
fn settings(row: &Row<'_>) -> Result<Option<Settings>, RowDecodeError> {
    let mut absent = true;

    for index in index::SETTINGS_START..ACCOUNTS_PROJECTION.len() {
        let value = row
            .get_ref(index)
            .map_err(|source| RowDecodeError::Column {
                index,
                column: ACCOUNTS_PROJECTION[index],
                source,
            })?;

        if value != ValueRef::Null {
            absent = false;
            break;
        }
    }

    if absent {
        return Ok(None);
    }

    let boolean = |index| -> Result<bool, RowDecodeError> {
        Ok(get::<Option<bool>>(row, index)?.unwrap_or_default())
    };

    Ok(Some(Settings {
        signature: get::<Option<String>>(row, index::SETTINGS_SIGNATURE)?.unwrap_or_default(),
        auto_advance: int(row, index::SETTINGS_AUTO_ADVANCE)?,
        message_text_size: int(row, index::SETTINGS_MESSAGE_TEXT_SIZE)?,
        snap_headers: int(row, index::SETTINGS_SNAP_HEADERS)?,
        reply_behavior: int(row, index::SETTINGS_REPLY_BEHAVIOR)?,
        hide_checkboxes: boolean(index::SETTINGS_HIDE_CHECKBOXES)?,
        confirm_delete: boolean(index::SETTINGS_CONFIRM_DELETE)?,
        confirm_archive: boolean(index::SETTINGS_CONFIRM_ARCHIVE)?,
        confirm_send: boolean(index::SETTINGS_CONFIRM_SEND)?,
        default_inbox: uri(row, index::SETTINGS_DEFAULT_INBOX)?,
        force_reply_from_default: boolean(index::SETTINGS_FORCE_REPLY_FROM_DEFAULT)?,
    }))
}
