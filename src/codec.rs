use std::borrow::Cow;

use account_types::account::AccountType;

pub mod decode;
pub mod encode;

/// Default log target of [`TextCodec`].
pub const TEXT_LOG_TARGET: &str = "account_codec::text";

/// Default placeholder type of [`RowCodec`].
pub const PLACEHOLDER_TYPE: &str = "unknown";

/// Codec for the transfer buffer.
#[derive(Debug, Default)]
// We use `#[non_exhaustive]` to prevent users from using struct literal syntax.
//
// This allows to add configuration options later without breaking users.
#[non_exhaustive]
pub struct BufferCodec;

/// Codec for the serialized text form.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TextCodec {
    pub(crate) log_target: Cow<'static, str>,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self {
            log_target: Cow::Borrowed(TEXT_LOG_TARGET),
        }
    }
}

impl TextCodec {
    /// Use `target` when logging decode failures (see [`TextCodec::decode_or_none`]).
    pub fn with_log_target(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn log_target(&self) -> &str {
        &self.log_target
    }
}

/// Codec for storage rows.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RowCodec {
    pub(crate) placeholder_type: AccountType,
}

impl Default for RowCodec {
    fn default() -> Self {
        Self {
            placeholder_type: placeholder_type(),
        }
    }
}

impl RowCodec {
    /// Use `r#type` for decoded accounts.
    ///
    /// A storage row carries no account type.
    pub fn with_placeholder_type(mut self, r#type: AccountType) -> Self {
        self.placeholder_type = r#type;
        self
    }

    pub fn placeholder_type(&self) -> &AccountType {
        &self.placeholder_type
    }
}

fn placeholder_type() -> AccountType {
    match AccountType::try_from(PLACEHOLDER_TYPE) {
        Ok(r#type) => r#type,
        Err(_) => unreachable!("`PLACEHOLDER_TYPE` is not empty"),
    }
}

macro_rules! impl_codec_new {
    ($codec:ty) => {
        impl $codec {
            /// Create codec with default configuration.
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
}

impl_codec_new!(BufferCodec);
impl_codec_new!(TextCodec);
impl_codec_new!(RowCodec);
