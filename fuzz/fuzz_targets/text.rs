#![no_main]

use account_codec_fuzz::impl_decode_target;

impl_decode_target!(TextCodec);
