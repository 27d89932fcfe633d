//! # Decoding of accounts.
//!
//! Byte-oriented representations (the transfer buffer and the serialized text form) are decoded through the [`Decoder`] trait.
//! Every decoder takes an input (`&[u8]`) and produces a remainder and a decoded [`Account`].
//!
//! Storage rows aren't bytes and are decoded through [`RowCodec`](crate::RowCodec) directly.

use account_types::{
    account::Account, error::IdentityError, settings::SettingsError, uri::UriError,
};
use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

use crate::{buffer::account, BufferCodec, TextCodec};

/// An extended version of [`nom::IResult`].
pub(crate) type BufferResult<I, O> = Result<(I, O), nom::Err<BufferParseError<I>>>;

/// An extended version of [`nom::error::Error`].
#[derive(Debug)]
pub(crate) struct BufferParseError<I> {
    #[allow(unused)]
    pub input: I,
    pub kind: BufferErrorKind,
}

/// An extended version of [`nom::error::ErrorKind`].
#[derive(Debug)]
pub(crate) enum BufferErrorKind {
    BadLength,
    BadUtf8,
    BadUri,
    BadIdentity,
    BadSettings,
    Nom(ErrorKind),
}

impl<I> ParseError<I> for BufferParseError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Self {
            input,
            kind: BufferErrorKind::Nom(kind),
        }
    }

    fn append(input: I, kind: ErrorKind, _: Self) -> Self {
        Self {
            input,
            kind: BufferErrorKind::Nom(kind),
        }
    }
}

/// Decoder.
///
/// Implemented for types that know how to decode an account from bytes. See [implementors](trait.Decoder.html#implementors).
pub trait Decoder {
    type Message: Sized;
    type Error;

    /// Decode a message and return it together with the remaining input.
    fn decode<'a>(&self, input: &'a [u8]) -> Result<(&'a [u8], Self::Message), Self::Error>;
}

/// Error during transfer-buffer decoding.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BufferDecodeError {
    /// More data is needed.
    #[error("Need more data")]
    Incomplete,

    /// Decoding failed.
    #[error("Malformed transfer buffer")]
    Failed,
}

/// Error during text decoding.
#[derive(Debug, Error)]
pub enum TextDecodeError {
    #[error("Malformed document: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("Document is not an object")]
    NotAnObject,
    #[error("Missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("Unexpected value for `{0}`")]
    InvalidValue(&'static str),
    #[error("Invalid URI in `{key}`: {source}")]
    InvalidUri {
        key: &'static str,
        #[source]
        source: UriError,
    },
    #[error("Invalid identity in `{key}`: {source}")]
    InvalidIdentity {
        key: &'static str,
        #[source]
        source: IdentityError,
    },
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Error during row decoding.
#[derive(Debug, Error)]
pub enum RowDecodeError {
    #[error("Could not read column {index} (`{column}`): {source}")]
    Column {
        index: usize,
        column: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Invalid URI in column `{column}`: {source}")]
    InvalidUri {
        column: &'static str,
        #[source]
        source: UriError,
    },
    #[error("Invalid identity in column `{column}`: {source}")]
    InvalidIdentity {
        column: &'static str,
        #[source]
        source: IdentityError,
    },
    #[error("Could not advance rows: {0}")]
    Step(#[from] rusqlite::Error),
}

// -------------------------------------------------------------------------------------------------

impl Decoder for BufferCodec {
    type Message = Account;
    type Error = BufferDecodeError;

    fn decode<'a>(&self, input: &'a [u8]) -> Result<(&'a [u8], Self::Message), Self::Error> {
        match account(input) {
            Ok((rem, account)) => Ok((rem, account)),
            Err(nom::Err::Incomplete(_)) => Err(BufferDecodeError::Incomplete),
            Err(nom::Err::Failure(_)) => Err(BufferDecodeError::Failed),
            Err(nom::Err::Error(_)) => Err(BufferDecodeError::Failed),
        }
    }
}

impl Decoder for TextCodec {
    type Message = Account;
    type Error = TextDecodeError;

    /// Decode a complete document.
    ///
    /// The identity is taken from the document itself. The remainder is always empty.
    fn decode<'a>(&self, input: &'a [u8]) -> Result<(&'a [u8], Self::Message), Self::Error> {
        let document = serde_json::from_slice(input)?;
        let account = self.decode_document(&document)?;

        Ok((&input[input.len()..], account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode::Encoder, testing::alice};

    #[test]
    fn test_decode_buffer_incomplete() {
        let codec = BufferCodec::new();
        let bytes = codec.encode(&alice()).dump();

        for index in 0..bytes.len() {
            assert_eq!(
                codec.decode(&bytes[..index]),
                Err(BufferDecodeError::Incomplete),
                "prefix of length {index}"
            );
        }

        assert!(codec.decode(&bytes).is_ok());
    }

    #[test]
    fn test_decode_buffer_failed() {
        #[rustfmt::skip]
        let tests: [&[u8]; 6] = [
            // Negative length other than -1.
            &[0xfe, 0xff, 0xff, 0xff],
            // Invalid UTF-8.
            &[2, 0, 0, 0, 0xc3, 0x28],
            // Null name.
            &[0xff, 0xff, 0xff, 0xff],
            // Empty name.
            &[0, 0, 0, 0],
            // Empty type.
            &[1, 0, 0, 0, b'a', 0, 0, 0, 0],
            // Invalid URI.
            &[
                1, 0, 0, 0, b'a',
                1, 0, 0, 0, b'b',
                0, 0, 0, 0,
                3, 0, 0, 0, b'x', b'/', b'y',
            ],
        ];

        for test in tests {
            assert_eq!(
                BufferCodec::new().decode(test),
                Err(BufferDecodeError::Failed),
                "{test:02x?}"
            );
        }
    }

    #[test]
    fn test_decode_text_errors() {
        let codec = TextCodec::new();

        let tests: [&[u8]; 9] = [
            b"{",
            b"[]",
            br#"{"type":"b","providerVersion":1,"capabilities":0}"#,
            br#"{"name":"","type":"b","providerVersion":1,"capabilities":0}"#,
            br#"{"name":"a","type":"b","capabilities":0}"#,
            br#"{"name":"a","type":"b","providerVersion":1}"#,
            br#"{"name":"a","type":"b","providerVersion":"one","capabilities":0}"#,
            br#"{"name":"a","type":"b","providerVersion":1,"capabilities":0,"accountUri":"x/y"}"#,
            br#"{"name":"a","type":"b","providerVersion":1,"capabilities":0,"settings":[]}"#,
        ];

        for test in tests {
            assert!(
                codec.decode(test).is_err(),
                "{:?} should not decode",
                std::str::from_utf8(test)
            );
        }
    }

    #[test]
    fn test_decode_text_error_kinds() {
        let codec = TextCodec::new();

        assert!(matches!(
            codec.decode(br#"{"name":"a","type":"b","capabilities":0}"#),
            Err(TextDecodeError::MissingKey("providerVersion"))
        ));
        assert!(matches!(
            codec.decode(br#"{"name":"a","type":"b","providerVersion":1}"#),
            Err(TextDecodeError::MissingKey("capabilities"))
        ));
        assert!(matches!(
            codec.decode(br#"{"name":"a","type":"","providerVersion":1,"capabilities":0}"#),
            Err(TextDecodeError::InvalidIdentity { key: "type", .. })
        ));
        assert!(matches!(
            codec.decode(br#"{"name":"a","type":"b","providerVersion":1.5,"capabilities":0}"#),
            Err(TextDecodeError::InvalidValue("providerVersion"))
        ));
        assert!(matches!(
            codec.decode(b"1"),
            Err(TextDecodeError::NotAnObject)
        ));
    }
}
