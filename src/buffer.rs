//! Parsers for the transfer buffer.
//!
//! ```text
//! int     = 4 bytes, little endian, two's complement
//! nstring = int (byte length, -1 for null) followed by UTF-8 bytes
//! uri     = nstring (null or empty for the empty URI)
//! ```
//!
//! An account is the sequence of its fields in a fixed order without any framing or version tag.

use account_types::{
    account::{Account, AccountName, AccountType},
    settings::Settings,
    uri::Uri,
};
use nom::{bytes::streaming::take, number::streaming::le_i32};

use crate::decode::{BufferErrorKind, BufferParseError, BufferResult};

pub(crate) fn int(input: &[u8]) -> BufferResult<&[u8], i32> {
    le_i32(input)
}

/// `None` for null.
pub(crate) fn nstring(input: &[u8]) -> BufferResult<&[u8], Option<&str>> {
    let (remaining, length) = int(input)?;

    if length == -1 {
        return Ok((remaining, None));
    }

    let length = usize::try_from(length).map_err(|_| {
        nom::Err::Failure(BufferParseError {
            input,
            kind: BufferErrorKind::BadLength,
        })
    })?;

    let (remaining, data) = take::<_, _, BufferParseError<&[u8]>>(length)(remaining)?;

    match std::str::from_utf8(data) {
        Ok(data) => Ok((remaining, Some(data))),
        Err(_) => Err(nom::Err::Failure(BufferParseError {
            input: data,
            kind: BufferErrorKind::BadUtf8,
        })),
    }
}

pub(crate) fn uri(input: &[u8]) -> BufferResult<&[u8], Uri> {
    let (remaining, value) = nstring(input)?;

    match Uri::parse(value.unwrap_or_default()) {
        Ok(uri) => Ok((remaining, uri)),
        Err(_) => Err(nom::Err::Failure(BufferParseError {
            input,
            kind: BufferErrorKind::BadUri,
        })),
    }
}

/// Non-empty text, see [`AccountName`] and [`AccountType`].
fn identity<'a, T>(input: &'a [u8]) -> BufferResult<&'a [u8], T>
where
    T: TryFrom<&'a str>,
{
    let (remaining, value) = nstring(input)?;

    match value.map(T::try_from) {
        Some(Ok(value)) => Ok((remaining, value)),
        _ => Err(nom::Err::Failure(BufferParseError {
            input,
            kind: BufferErrorKind::BadIdentity,
        })),
    }
}

fn settings(input: &[u8]) -> BufferResult<&[u8], Option<Settings>> {
    let (remaining, value) = nstring(input)?;

    match value.map(Settings::from_json_str).transpose() {
        Ok(settings) => Ok((remaining, settings)),
        Err(_) => Err(nom::Err::Failure(BufferParseError {
            input,
            kind: BufferErrorKind::BadSettings,
        })),
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(ToOwned::to_owned)
}

pub(crate) fn account(input: &[u8]) -> BufferResult<&[u8], Account> {
    let (input, name) = identity::<AccountName>(input)?;
    let (input, r#type) = identity::<AccountType>(input)?;
    let (input, provider_version) = int(input)?;
    let (input, account_uri) = uri(input)?;
    let (input, capabilities) = int(input)?;
    let (input, folder_list_uri) = uri(input)?;
    let (input, search_uri) = uri(input)?;
    let (input, account_from_addresses) = nstring(input)?;
    let (input, save_draft_uri) = uri(input)?;
    let (input, send_message_uri) = uri(input)?;
    let (input, expunge_message_uri) = uri(input)?;
    let (input, undo_uri) = uri(input)?;
    let (input, settings_intent_uri) = uri(input)?;
    let (input, help_intent_uri) = uri(input)?;
    let (input, send_feedback_intent_uri) = uri(input)?;
    let (input, sync_status) = int(input)?;
    let (input, compose_intent_uri) = uri(input)?;
    let (input, mime_type) = nstring(input)?;
    let (input, recent_folder_list_uri) = uri(input)?;
    let (input, settings) = settings(input)?;

    Ok((
        input,
        Account {
            name,
            r#type,
            provider_version,
            uri: account_uri,
            capabilities,
            folder_list_uri,
            search_uri,
            account_from_addresses: owned(account_from_addresses),
            save_draft_uri,
            send_message_uri,
            expunge_message_uri,
            undo_uri,
            settings_intent_uri,
            help_intent_uri,
            send_feedback_intent_uri,
            sync_status,
            compose_intent_uri,
            mime_type: owned(mime_type),
            recent_folder_list_uri,
            settings,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::known_answer_test_parse;

    #[test]
    fn test_parse_int() {
        let tests = [
            (b"\x00\x00\x00\x00".as_ref(), b"".as_ref(), 0),
            (b"\x01\x00\x00\x00?", b"?", 1),
            (b"\xff\xff\xff\xff", b"", -1),
            (b"\x00\x00\x00\x80", b"", i32::MIN),
            (b"\xff\xff\xff\x7f", b"", i32::MAX),
        ];

        for test in tests {
            known_answer_test_parse(test, int);
        }
    }

    #[test]
    fn test_parse_nstring() {
        let tests = [
            (b"\xff\xff\xff\xff".as_ref(), b"".as_ref(), None),
            (b"\x00\x00\x00\x00", b"", Some("")),
            (b"\x03\x00\x00\x00abc???", b"???", Some("abc")),
            (b"\x02\x00\x00\x00\xc3\xa4", b"", Some("ä")),
        ];

        for test in tests {
            known_answer_test_parse(test, nstring);
        }

        assert!(matches!(
            nstring(b"\x03\x00\x00\x00ab"),
            Err(nom::Err::Incomplete(_))
        ));
        assert!(matches!(
            nstring(b"\xfe\xff\xff\xff"),
            Err(nom::Err::Failure(BufferParseError {
                kind: BufferErrorKind::BadLength,
                ..
            }))
        ));
        assert!(matches!(
            nstring(b"\x01\x00\x00\x00\xff"),
            Err(nom::Err::Failure(BufferParseError {
                kind: BufferErrorKind::BadUtf8,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_uri() {
        let tests = [
            (b"\xff\xff\xff\xff".as_ref(), b"".as_ref(), Uri::EMPTY),
            (b"\x00\x00\x00\x00", b"", Uri::EMPTY),
            (
                b"\x09\x00\x00\x00http://a/",
                b"",
                Uri::try_from("http://a/").unwrap(),
            ),
        ];

        for test in tests {
            known_answer_test_parse(test, uri);
        }

        assert!(matches!(
            uri(b"\x03\x00\x00\x00a/b"),
            Err(nom::Err::Failure(BufferParseError {
                kind: BufferErrorKind::BadUri,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(settings(b"\xff\xff\xff\xff").unwrap().1, None);
        assert_eq!(
            settings(b"\x02\x00\x00\x00{}").unwrap().1,
            Some(Settings::default())
        );
        assert!(matches!(
            settings(b"\x02\x00\x00\x00[]"),
            Err(nom::Err::Failure(BufferParseError {
                kind: BufferErrorKind::BadSettings,
                ..
            }))
        ));
    }
}
