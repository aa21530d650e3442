use mfit_derive::{api_model, mfit_error, mfit_slice};
use std::borrow::Cow;

#[mfit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[api_model]
pub struct Profile {
    pub display_name: String,
    pub phone_number: String,
}

#[mfit_slice]
pub struct Counter {
    pub label: &'static str,
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

#[test]
fn expansion_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/mfit_error_pass.rs");
    t.pass("tests/ui/api_model_pass.rs");
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = failing_io().context("reading settings").unwrap_err();
    assert!(matches!(err, DemoError::Io { .. }));
    assert_eq!(err.to_string(), "IO error (reading settings): disk unplugged");
}

#[test]
fn context_overrides_on_own_errors() {
    let result: Result<(), DemoError> = Err("bad state".into());
    let err = result.context("second attempt").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (second attempt): bad state");
}

#[test]
fn display_without_context_has_no_suffix() {
    let err = DemoError::from(String::from("oops"));
    assert_eq!(err.to_string(), "Internal error: oops");
}

#[test]
fn api_model_uses_camel_case_and_rejects_unknown_fields() {
    let profile = Profile { display_name: "Al".into(), phone_number: "5551234567".into() };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["displayName"], "Al");
    assert_eq!(json["phoneNumber"], "5551234567");

    let extra = r#"{"displayName":"Al","phoneNumber":"1","admin":true}"#;
    assert!(serde_json::from_str::<Profile>(extra).is_err());
}

#[test]
fn slice_handles_share_state() {
    let first = Counter::new(CounterInner { label: "signup" });
    let second = first.clone();
    let other = Counter::new(CounterInner { label: "signup" });

    assert_eq!(second.label, "signup");
    assert_eq!(first, second);
    assert_ne!(first, other);
}
