//! # Mail Account Codec
//!
//! account-codec translates a mail [`Account`](account_types::account::Account) between its external representations.
//! It is based on [account-types] and extends it with encoding and decoding support.
//!
//! | Representation  | Codec          | Decoding                                         |
//! |-----------------|----------------|--------------------------------------------------|
//! | Transfer buffer | [`BufferCodec`] | [`Decoder`](decode::Decoder), parsed with [nom]  |
//! | Serialized text | [`TextCodec`]   | [`Decoder`](decode::Decoder), parsed with [serde_json] |
//! | Storage row     | [`RowCodec`]    | [`RowCodec::decode`], read with [rusqlite]       |
//!
//! ## Example
//!
//! ```rust
//! use account_codec::{
//!     account_types::{account::Account, capability},
//!     decode::Decoder,
//!     encode::Encoder,
//!     TextCodec,
//! };
//!
//! let input = br#"{"name":"alice@example.com","type":"com.example","providerVersion":1,"capabilities":5}"#;
//!
//! let (_remainder, account) = TextCodec::default().decode(input).unwrap();
//! assert!(account.supports_capability(capability::SYNCABLE_FOLDERS));
//!
//! // An account without settings is written without a `settings` key.
//! let text = String::from_utf8(TextCodec::default().encode(&account).dump()).unwrap();
//! assert!(!text.contains("settings"));
//!
//! let account: Account = TextCodec::default().decode(text.as_bytes()).unwrap().1;
//! assert_eq!(account.name.inner(), "alice@example.com");
//! ```
//!
//! ## Logging
//!
//! Decoding is logged through the [log] facade.
//! [`TextCodec::decode_or_none`] reports failures with level `error` to [`TextCodec::log_target`],
//! and rectified values are reported with level `warn`.
//!
//! [account-types]: account_types
//! [nom]: https://docs.rs/nom/latest/nom/
//! [serde_json]: https://docs.rs/serde_json/latest/serde_json/
//! [rusqlite]: https://docs.rs/rusqlite/latest/rusqlite/
//! [log]: https://docs.rs/log/latest/log/

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod buffer;
mod codec;
mod row;
#[cfg(test)]
mod testing;
mod text;

pub use codec::*;
// Re-export.
pub use account_types;
