use std::fmt::Debug;

use account_types::{
    account::Account, columns::ACCOUNTS_PROJECTION, settings::Settings, uri::Uri,
};
use rusqlite::Connection;

use crate::{
    decode::{BufferResult, Decoder},
    encode::Encoder,
    BufferCodec, TextCodec,
};

/// Every field holds a distinct value.
pub(crate) fn alice() -> Account {
    let uri = |path: &str| Uri::try_from(format!("content://mail/account/1{path}")).unwrap();

    Account {
        provider_version: 1,
        uri: uri(""),
        capabilities: 5,
        folder_list_uri: uri("/folders"),
        search_uri: uri("/search"),
        account_from_addresses: Some(r#"["alice@example.com","alice@example.org"]"#.into()),
        save_draft_uri: uri("/draft"),
        send_message_uri: uri("/send"),
        expunge_message_uri: uri("/expunge"),
        undo_uri: uri("/undo"),
        settings_intent_uri: uri("/settings"),
        help_intent_uri: Uri::try_from("https://example.com/help").unwrap(),
        send_feedback_intent_uri: Uri::try_from("https://example.com/feedback").unwrap(),
        sync_status: 8,
        compose_intent_uri: uri("/compose"),
        mime_type: Some("application/mail-ls".into()),
        recent_folder_list_uri: uri("/recent"),
        ..Account::new("alice@example.com", "com.example").unwrap()
    }
}

pub(crate) fn alice_with_settings() -> Account {
    Account {
        sync_status: 2,
        settings: Some(Settings {
            signature: "-- \nAlice".into(),
            auto_advance: 1,
            message_text_size: 3,
            reply_behavior: 1,
            confirm_delete: true,
            confirm_send: true,
            default_inbox: Uri::try_from("content://mail/account/1/folder/inbox").unwrap(),
            ..Settings::default()
        }),
        ..alice()
    }
}

/// In-memory database with an empty `accounts` table.
pub(crate) fn accounts_table() -> Connection {
    let connection = Connection::open_in_memory().unwrap();

    let columns = ACCOUNTS_PROJECTION.join(", ");
    connection
        .execute(&format!("CREATE TABLE accounts ({columns})"), [])
        .unwrap();

    connection
}

fn escape_byte_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|byte| std::ascii::escape_default(*byte))
        .map(char::from)
        .collect()
}

pub(crate) fn known_answer_test_encode<C, M>(
    (codec, message, expected_bytes): (&C, &M, impl AsRef<[u8]>),
) where
    C: Encoder<Message = M>,
{
    let expected_bytes = expected_bytes.as_ref();
    let got_bytes = codec.encode(message).dump();
    let got_bytes = got_bytes.as_slice();

    if expected_bytes != got_bytes {
        println!("# Debug (`escape_byte_string`, encapsulated by `<<<` and `>>>`)");
        println!(
            "Left:  <<<{}>>>\nRight: <<<{}>>>",
            escape_byte_string(expected_bytes),
            escape_byte_string(got_bytes),
        );
        println!("# Debug");
        panic!("Left:  {:02x?}\nRight: {:02x?}", expected_bytes, got_bytes);
    }
}

pub(crate) fn known_answer_test_parse<'a, O, P>(
    (test, expected_remainder, expected_object): (&'a [u8], &[u8], O),
    parser: P,
) where
    O: Debug + Eq + 'a,
    P: Fn(&'a [u8]) -> BufferResult<&'a [u8], O>,
{
    let (got_remainder, got_object) = parser(test).unwrap();
    assert_eq!(expected_remainder, got_remainder);
    assert_eq!(expected_object, got_object);
}

pub(crate) fn kat_inverse_buffer(tests: &[(&[u8], &[u8], Account)]) {
    let codec = BufferCodec::new();

    for (no, (test_input, expected_remainder, expected_object)) in tests.iter().enumerate() {
        println!("# {no}");

        let (got_remainder, got_object) = codec.decode(test_input).unwrap();
        assert_eq!(*expected_object, got_object);
        assert_eq!(*expected_remainder, got_remainder);

        let got_output = codec.encode(&got_object).dump();

        let (got_remainder, got_object_again) = codec.decode(&got_output).unwrap();
        assert_eq!(got_object, got_object_again);
        assert!(got_remainder.is_empty());
    }
}

pub(crate) fn kat_inverse_text(tests: &[(&[u8], Account)]) {
    let codec = TextCodec::new();

    for (no, (test_input, expected_object)) in tests.iter().enumerate() {
        println!("# {no}");

        let (got_remainder, got_object) = codec.decode(test_input).unwrap();
        assert_eq!(*expected_object, got_object);
        assert!(got_remainder.is_empty());

        let got_output = codec.encode(&got_object).dump();

        let (_, got_object_again) = codec.decode(&got_output).unwrap();
        assert_eq!(got_object, got_object_again);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_known_answer_test_encode() {
        known_answer_test_encode((&BufferCodec::new(), &alice(), b""));
    }

    #[test]
    fn test_escape_byte_string() {
        assert_eq!(escape_byte_string(b"a\xff\r\n"), "a\\xff\\r\\n");
    }
}
