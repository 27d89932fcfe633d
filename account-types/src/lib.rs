//! # Misuse-resistant mail account types
//!
//! The most prominent type in account-types is [`Account`](account::Account), a record describing a user's mail account:
//! its identity (name and type), capability flags, a set of URIs for related operations, and nested [`Settings`](settings::Settings).
//!
//! Like every type in this crate, an account can't be constructed in an invalid state.
//! The identity pair is wrapped in [`AccountName`](account::AccountName) and [`AccountType`](account::AccountType), which reject empty values,
//! and every URI field is a [`Uri`](uri::Uri), which is either a parsed URI or the designated [`Uri::EMPTY`](uri::Uri::EMPTY) sentinel.
//!
//! ## Construction of accounts
//!
//! account-types relies on the standard conversion traits, i.e., [`From`], [`TryFrom`], [`Into`], and [`TryInto`].
//! [`Account::new`](account::Account::new) validates the identity pair and fills everything else with empty values.
//! An account is a plain value: to "change" a field, build a new account, e.g., with struct-update syntax.
//!
//! ### Example
//!
//! ```
//! use account_types::{account::Account, capability, uri::Uri};
//!
//! let account = Account {
//!     capabilities: capability::SYNCABLE_FOLDERS | capability::ARCHIVE,
//!     uri: Uri::try_from("content://mail/account/1").unwrap(),
//!     ..Account::new("alice@example.com", "com.example").unwrap()
//! };
//!
//! assert!(account.supports_capability(capability::ARCHIVE));
//! assert!(!account.supports_capability(capability::REPORT_SPAM));
//! assert_eq!(account.folder_list_uri, Uri::EMPTY);
//! ```
//!
//! ## Representations
//!
//! The external representations of an account (serialized text, transfer buffer, storage row) are implemented in `account-codec`.
//! All of them use the key and column names defined in [`columns`].
//!
//! # Features
//!
//! | Feature   | Description                                                    | Enabled by default |
//! |-----------|----------------------------------------------------------------|--------------------|
//! | arbitrary | Derive `Arbitrary` implementations.                            | No                 |
//! | serde     | Derive `serde`s `Serialize` and `Deserialize` implementations. | No                 |
//!
//! When using `arbitrary`, all types defined in account-types implement the [Arbitrary] trait to ease testing.
//! This is used, for example, to generate instances during fuzz-testing.
//!
//! Note that the `serde` derives are a convenience for embedding accounts into other documents.
//! The persisted text form with its stable key set is produced by `account-codec`'s `TextCodec`.
//!
//! [Arbitrary]: https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "arbitrary")]
mod arbitrary;
pub mod account;
pub mod capability;
pub mod columns;
pub mod error;
pub mod settings;
pub mod sync_status;
pub mod uri;

pub use url;
