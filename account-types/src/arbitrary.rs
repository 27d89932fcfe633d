use arbitrary::{Arbitrary, Unstructured};

use crate::{
    account::{AccountName, AccountType},
    uri::Uri,
};

macro_rules! implement_tryfrom {
    ($target:ty, $from:ty) => {
        impl<'a> Arbitrary<'a> for $target {
            fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
                match <$target>::try_from(<$from>::arbitrary(u)?) {
                    Ok(passed) => Ok(passed),
                    Err(_) => Err(arbitrary::Error::IncorrectFormat),
                }
            }
        }
    };
}

implement_tryfrom! { AccountName, &str }
implement_tryfrom! { AccountType, &str }

impl<'a> Arbitrary<'a> for Uri {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Random strings are almost never valid URIs.
        // Assemble one from known-good parts instead.
        if bool::arbitrary(u)? {
            return Ok(Uri::EMPTY);
        }

        let scheme = u.choose(&["content", "https", "http"])?;
        let authority = u.choose(&[
            "mail",
            "com.android.mail.provider",
            "example.org",
            "mail.example.com",
        ])?;

        let mut uri = format!("{scheme}://{authority}");
        for _ in 0..u.int_in_range(0u8..=4)? {
            let segment = *u.choose(&["account", "folder", "search", "undo", "settings"])?;
            uri.push('/');
            uri.push_str(segment);
            uri.push('/');
            uri.push_str(&u32::arbitrary(u)?.to_string());
        }

        match Uri::try_from(uri) {
            Ok(passed) => Ok(passed),
            Err(_) => Err(arbitrary::Error::IncorrectFormat),
        }
    }
}
