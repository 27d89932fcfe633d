#![no_main]

use account_codec_fuzz::impl_to_bytes_and_back;

impl_to_bytes_and_back!(TextCodec);
