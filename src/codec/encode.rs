//! # Encoding of accounts.
//!
//! [`Encoder::encode`] returns an instance of [`Encoded`] that can be dumped into bytes.
//!
//! # Example
//!
//! ```rust
//! use account_codec::{
//!     account_types::account::Account,
//!     decode::Decoder,
//!     encode::Encoder,
//!     BufferCodec,
//! };
//!
//! let account = Account::new("alice@example.com", "com.example").unwrap();
//!
//! let bytes = BufferCodec::default().encode(&account).dump();
//! let (remaining, decoded) = BufferCodec::default().decode(&bytes).unwrap();
//!
//! assert!(remaining.is_empty());
//! assert_eq!(decoded, account);
//! ```

use std::io::Write;

use account_types::{account::Account, settings::Settings, uri::Uri};

use crate::{text::account_to_json, BufferCodec, TextCodec};

/// Encoder.
///
/// Implemented for types that know how to encode an account into bytes. See [implementors](trait.Encoder.html#implementors).
pub trait Encoder {
    type Message;

    /// Encode this message.
    ///
    /// This will return an [`Encoded`] message.
    fn encode(&self, message: &Self::Message) -> Encoded;
}

/// An encoded message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoded {
    data: Vec<u8>,
}

impl Encoded {
    /// Dump the encoded data.
    pub fn dump(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

//--------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EncodeContext {
    accumulator: Vec<u8>,
}

impl EncodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.accumulator
    }
}

impl Write for EncodeContext {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.accumulator.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Encoder for BufferCodec {
    type Message = Account;

    fn encode(&self, message: &Self::Message) -> Encoded {
        let mut encode_context = EncodeContext::new();
        // Writing into an in-memory accumulator can't fail.
        EncodeIntoContext::encode_ctx(message, &mut encode_context).unwrap();

        Encoded {
            data: encode_context.into_inner(),
        }
    }
}

impl Encoder for TextCodec {
    type Message = Account;

    fn encode(&self, message: &Self::Message) -> Encoded {
        Encoded {
            data: account_to_json(message).to_string().into_bytes(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Transfer-buffer encoding of a value.
pub(crate) trait EncodeIntoContext {
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()>;
}

// ----- Primitive ---------------------------------------------------------------------------------

impl EncodeIntoContext for i32 {
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()> {
        ctx.write_all(&self.to_le_bytes())
    }
}

impl EncodeIntoContext for str {
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()> {
        let length = i32::try_from(self.len())
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidInput, "string too long"))?;

        length.encode_ctx(ctx)?;
        ctx.write_all(self.as_bytes())
    }
}

/// `None` is written as length `-1`.
impl<T> EncodeIntoContext for Option<T>
where
    T: AsRef<str>,
{
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()> {
        match self {
            Some(value) => value.as_ref().encode_ctx(ctx),
            None => (-1i32).encode_ctx(ctx),
        }
    }
}

// ----- Account -----------------------------------------------------------------------------------

impl EncodeIntoContext for Uri {
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()> {
        self.as_url().map(|url| url.as_str()).encode_ctx(ctx)
    }
}

impl EncodeIntoContext for Account {
    fn encode_ctx(&self, ctx: &mut EncodeContext) -> std::io::Result<()> {
        self.name.inner().encode_ctx(ctx)?;
        self.r#type.inner().encode_ctx(ctx)?;
        self.provider_version.encode_ctx(ctx)?;
        self.uri.encode_ctx(ctx)?;
        self.capabilities.encode_ctx(ctx)?;
        self.folder_list_uri.encode_ctx(ctx)?;
        self.search_uri.encode_ctx(ctx)?;
        self.account_from_addresses.encode_ctx(ctx)?;
        self.save_draft_uri.encode_ctx(ctx)?;
        self.send_message_uri.encode_ctx(ctx)?;
        self.expunge_message_uri.encode_ctx(ctx)?;
        self.undo_uri.encode_ctx(ctx)?;
        self.settings_intent_uri.encode_ctx(ctx)?;
        self.help_intent_uri.encode_ctx(ctx)?;
        self.send_feedback_intent_uri.encode_ctx(ctx)?;
        self.sync_status.encode_ctx(ctx)?;
        self.compose_intent_uri.encode_ctx(ctx)?;
        self.mime_type.encode_ctx(ctx)?;
        self.recent_folder_list_uri.encode_ctx(ctx)?;
        self.settings
            .as_ref()
            .map(Settings::to_json_string)
            .encode_ctx(ctx)
    }
}
