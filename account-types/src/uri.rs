//! URIs of an account.
//!
//! Every URI of an [`Account`](crate::account::Account) is either a parsed, absolute URI or the designated [`Uri::EMPTY`] sentinel.
//! There is no third state: raw (unparsed) strings are never stored.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// A URI or the empty sentinel.
///
/// The empty sentinel is distinct from absence.
/// It is used instead of `None` whenever a source doesn't provide a value for a URI field.
///
/// # Example
///
/// ```
/// use account_types::uri::Uri;
///
/// assert_eq!(Uri::try_from("").unwrap(), Uri::EMPTY);
/// assert_eq!(
///     Uri::try_from("content://mail/account/1").unwrap().as_str(),
///     "content://mail/account/1"
/// );
/// assert!(Uri::try_from("no scheme").is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uri(Option<Url>);

impl Uri {
    /// The empty URI.
    pub const EMPTY: Uri = Uri(None);

    /// Parse a (possibly empty) string into a URI.
    ///
    /// The empty string results in [`Uri::EMPTY`].
    pub fn parse(value: &str) -> Result<Self, UriError> {
        if value.is_empty() {
            return Ok(Self::EMPTY);
        }

        Ok(Self(Some(Url::parse(value)?)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Textual form of this URI, or `""` for [`Uri::EMPTY`].
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Some(url) => url.as_str(),
            None => "",
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<Url> {
        self.0
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Url> for Uri {
    fn from(value: Url) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Url>> for Uri {
    fn from(value: Option<Url>) -> Self {
        Self(value)
    }
}

impl From<Uri> for String {
    fn from(value: Uri) -> Self {
        match value.0 {
            Some(url) => url.into(),
            None => String::new(),
        }
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UriError {
    #[error("Invalid URI: {0}")]
    Invalid(#[from] url::ParseError),
}
