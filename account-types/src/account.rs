//! The account record.

use std::fmt::{Display, Formatter};

#[cfg(feature = "arbitrary")]
use arbitrary::Arbitrary;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::IdentityError, settings::Settings, uri::Uri};

macro_rules! impl_identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn verify(value: impl AsRef<str>) -> Result<(), IdentityError> {
                if value.as_ref().is_empty() {
                    return Err(IdentityError::Empty);
                }

                Ok(())
            }

            pub fn inner(&self) -> &str {
                self.0.as_ref()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentityError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::verify(value)?;

                Ok(Self(value.to_owned()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentityError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::verify(&value)?;

                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_identity! {
    /// Name of an account, e.g., its primary address.
    ///
    /// Must not be empty.
    AccountName
}

impl_identity! {
    /// Type of an account, e.g., the reverse-domain name of its provider.
    ///
    /// Must not be empty.
    AccountType
}

/// A user's mail account.
///
/// `name` and `type` form the natural key of an account.
/// Equality and hashing cover every field, including the nested settings.
///
/// There are no setters.
/// To "change" an account, build a new one, e.g., `Account { sync_status: 1, ..account }`.
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Account {
    pub name: AccountName,
    pub r#type: AccountType,
    /// Version of the provider schema this account conforms to.
    pub provider_version: i32,
    /// Canonical address of this account.
    pub uri: Uri,
    /// Supported features, see [`capability`](crate::capability).
    pub capabilities: i32,
    /// Lists the top-level folders.
    pub folder_list_uri: Uri,
    /// Can be queried for search results.
    pub search_uri: Uri,
    /// Custom from-addresses, if any.
    pub account_from_addresses: Option<String>,
    /// Saves (inserts) new drafts.
    pub save_draft_uri: Uri,
    /// Sends a message.
    pub send_message_uri: Uri,
    /// Expunges messages.
    pub expunge_message_uri: Uri,
    /// Undoes the last operation.
    pub undo_uri: Uri,
    /// Shows the settings screens of this account type.
    pub settings_intent_uri: Uri,
    /// Shows the help screens of this account type.
    pub help_intent_uri: Uri,
    /// Shows the send-feedback screens of this account type.
    pub send_feedback_intent_uri: Uri,
    /// Current synchronization state, see [`sync_status`](crate::sync_status).
    pub sync_status: i32,
    /// Shows the compose screen of this account type.
    pub compose_intent_uri: Uri,
    pub mime_type: Option<String>,
    /// Lists the recently used folders.
    pub recent_folder_list_uri: Uri,
    pub settings: Option<Settings>,
}

impl Account {
    /// Create an account with the given identity.
    ///
    /// All other fields are empty, i.e., `0`, [`Uri::EMPTY`], or `None`.
    pub fn new<N, T>(name: N, r#type: T) -> Result<Self, IdentityError>
    where
        N: TryInto<AccountName, Error = IdentityError>,
        T: TryInto<AccountType, Error = IdentityError>,
    {
        Ok(Self::with_identity(name.try_into()?, r#type.try_into()?))
    }

    /// Create an account from an already validated identity.
    ///
    /// All other fields are empty, i.e., `0`, [`Uri::EMPTY`], or `None`.
    pub fn with_identity(name: AccountName, r#type: AccountType) -> Self {
        Self {
            name,
            r#type,
            provider_version: 0,
            uri: Uri::EMPTY,
            capabilities: 0,
            folder_list_uri: Uri::EMPTY,
            search_uri: Uri::EMPTY,
            account_from_addresses: None,
            save_draft_uri: Uri::EMPTY,
            send_message_uri: Uri::EMPTY,
            expunge_message_uri: Uri::EMPTY,
            undo_uri: Uri::EMPTY,
            settings_intent_uri: Uri::EMPTY,
            help_intent_uri: Uri::EMPTY,
            send_feedback_intent_uri: Uri::EMPTY,
            sync_status: 0,
            compose_intent_uri: Uri::EMPTY,
            mime_type: None,
            recent_folder_list_uri: Uri::EMPTY,
            settings: None,
        }
    }

    /// Returns `true` iff any bit of `capability` is set in [`Account::capabilities`].
    pub fn supports_capability(&self, capability: i32) -> bool {
        (self.capabilities & capability) != 0
    }
}

struct Nullable<'a>(Option<&'a str>);

impl Display for Nullable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.unwrap_or("null"))
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "name={}", self.name)?;
        write!(f, ",type={}", self.r#type)?;
        write!(
            f,
            ",accountFromAddresses={}",
            Nullable(self.account_from_addresses.as_deref())
        )?;
        write!(f, ",capabilities={}", self.capabilities)?;
        write!(f, ",providerVersion={}", self.provider_version)?;
        write!(f, ",uri={}", self.uri)?;
        write!(f, ",folderListUri={}", self.folder_list_uri)?;
        write!(f, ",searchUri={}", self.search_uri)?;
        write!(f, ",saveDraftUri={}", self.save_draft_uri)?;
        write!(f, ",sendMessageUri={}", self.send_message_uri)?;
        write!(f, ",expungeMessageUri={}", self.expunge_message_uri)?;
        write!(f, ",undoUri={}", self.undo_uri)?;
        write!(f, ",settingsIntentUri={}", self.settings_intent_uri)?;
        write!(f, ",helpIntentUri={}", self.help_intent_uri)?;
        write!(f, ",sendFeedbackIntentUri={}", self.send_feedback_intent_uri)?;
        write!(f, ",syncStatus={}", self.sync_status)?;
        write!(f, ",composeIntentUri={}", self.compose_intent_uri)?;
        write!(f, ",mimeType={}", Nullable(self.mime_type.as_deref()))?;
        write!(f, ",recentFolderListUri={}", self.recent_folder_list_uri)?;
        match &self.settings {
            Some(settings) => write!(f, ",settings={}", settings.to_json_string()),
            None => f.write_str(",settings=null"),
        }
    }
}
