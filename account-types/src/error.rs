//! Error-related types.

use thiserror::Error;

/// An invalid account identity, i.e., name or type.
#[derive(Clone, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub enum IdentityError {
    #[error("Must not be empty")]
    Empty,
}
