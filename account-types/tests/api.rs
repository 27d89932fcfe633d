use std::fmt::{Debug, Display};

use account_types::{
    account::{Account, AccountName, AccountType},
    settings::Settings,
    uri::Uri,
};

macro_rules! test_conversions {
    ($object:ty, $sample:expr) => {{
        let a = <$object>::try_from($sample).unwrap();
        let b = <$object>::try_from($sample.to_owned()).unwrap();
        assert_eq!(a, b);

        assert_eq!(a.as_ref(), $sample);
        assert_eq!(a.to_string(), $sample);
        assert_eq!(String::from(b), $sample);
    }};
}

#[test]
fn test_constructions() {
    test_conversions!(AccountName, "alice@example.com");
    test_conversions!(AccountType, "com.example");
    test_conversions!(Uri, "content://mail/account/1");
    test_conversions!(Uri, "");
}

#[test]
fn test_construction_errors() {
    trait DisplayDebug: Display + Debug {}

    impl<T> DisplayDebug for T where T: Display + Debug {}

    let tests: Vec<Box<dyn DisplayDebug>> = vec![
        Box::new(AccountName::try_from("").unwrap_err()),
        Box::new(AccountType::try_from(String::new()).unwrap_err()),
        Box::new("---"),
        Box::new(Account::new("", "com.example").unwrap_err()),
        Box::new(Account::new("alice@example.com", "").unwrap_err()),
        Box::new("---"),
        Box::new(Uri::try_from("no scheme").unwrap_err()),
        Box::new(Settings::from_json_str("[]").unwrap_err()),
        Box::new(Settings::from_json_str("{").unwrap_err()),
    ];

    for test in tests.into_iter() {
        println!("{test:?} // {test}");
    }
}

#[test]
fn test_construction_of_account() {
    let name = AccountName::try_from("alice@example.com").unwrap();
    let r#type = AccountType::try_from("com.example").unwrap();

    let a = Account::with_identity(name.clone(), r#type.clone());
    let b = Account::new(name.into_inner(), r#type.into_inner()).unwrap();
    assert_eq!(a, b);

    let c = Account {
        settings: Some(Settings {
            default_inbox: Uri::try_from("content://mail/account/1/folder/inbox").unwrap(),
            ..Settings::default()
        }),
        ..b
    };
    assert_ne!(a, c);
}
