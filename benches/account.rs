use std::hint::black_box;

use account_codec::{
    account_types::{account::Account, capability, settings::Settings, uri::Uri},
    decode::Decoder,
    encode::Encoder,
    BufferCodec, TextCodec,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    // # Setup
    let instances = [("simple", create_simple()), ("complex", create_complex())];

    for (instance, object) in instances {
        let codec = BufferCodec::new();
        c.bench_function(
            format!("bench_buffer_serialize_{instance}").as_str(),
            |b| b.iter(|| serialize(&codec, &object)),
        );

        let input = serialize(&codec, &object);
        c.bench_function(format!("bench_buffer_parse_{instance}").as_str(), |b| {
            b.iter(|| parse(&codec, black_box(&input[..])))
        });

        let codec = TextCodec::new();
        c.bench_function(format!("bench_text_serialize_{instance}").as_str(), |b| {
            b.iter(|| serialize(&codec, &object))
        });

        let input = serialize(&codec, &object);
        c.bench_function(format!("bench_text_parse_{instance}").as_str(), |b| {
            b.iter(|| parse(&codec, black_box(&input[..])))
        });
    }
}

fn create_simple() -> Account {
    Account::new("alice@example.com", "com.example").unwrap()
}

fn create_complex() -> Account {
    let uri = |path: &str| Uri::try_from(format!("content://mail/account/1/{path}")).unwrap();

    Account {
        provider_version: 3,
        uri: uri(""),
        capabilities: capability::SYNCABLE_FOLDERS
            | capability::ARCHIVE
            | capability::MULTIPLE_FOLDERS_PER_CONV,
        folder_list_uri: uri("folders"),
        search_uri: uri("search"),
        account_from_addresses: Some(r#"["alice@example.com","alice@example.org"]"#.into()),
        save_draft_uri: uri("draft"),
        send_message_uri: uri("send"),
        expunge_message_uri: uri("expunge"),
        undo_uri: uri("undo"),
        settings_intent_uri: uri("settings"),
        help_intent_uri: uri("help"),
        send_feedback_intent_uri: uri("feedback"),
        sync_status: 2,
        compose_intent_uri: uri("compose"),
        mime_type: Some("application/mail-ls".into()),
        recent_folder_list_uri: uri("recent"),
        settings: Some(Settings {
            signature: "-- \nAlice".into(),
            auto_advance: 1,
            message_text_size: 3,
            confirm_delete: true,
            default_inbox: uri("folder/inbox"),
            ..Settings::default()
        }),
        ..create_simple()
    }
}

#[inline]
fn serialize<C>(codec: &C, object: &Account) -> Vec<u8>
where
    C: Encoder<Message = Account>,
{
    codec.encode(object).dump()
}

#[inline]
fn parse<C>(codec: &C, input: &[u8]) -> Account
where
    C: Decoder<Message = Account>,
    C::Error: std::fmt::Debug,
{
    let (_, account) = codec.decode(input).unwrap();

    account
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);
