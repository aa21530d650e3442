#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `MatFit` workspace crates.
//!
//! * [`macro@mfit_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] applies the wire conventions used for request/response DTOs.
//! * [`macro@mfit_slice`] generates a cheaply clonable, `Arc`-backed feature handle.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the consuming crates carry the real tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Injected behaviour
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A companion `<Name>Ext` trait whose `.context(...)` attaches a human readable
///   note to `Result<T, Name>` and to `Result<T, Source>` for every variant that
///   wraps an upstream error.
/// * `From<Source>` for variants holding only a source (a field named `source` or
///   marked `#[source]`) and `context`.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[mfit_derive::mfit_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal config error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn mfit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Attribute macro for wire DTOs exchanged with the backend.
///
/// Adds `Debug`, `serde::Serialize` and `serde::Deserialize` when missing,
/// `#[serde(rename_all = "camelCase")]` and `#[serde(deny_unknown_fields)]`.
///
/// # Arguments
///
/// * `rename_all = "..."` overrides the rename policy.
/// * `deny_unknown_fields = false` accepts extra fields (use it for bodies owned by
///   someone else, such as server error envelopes).
///
/// # Example
///
/// ```rust,ignore
/// #[mfit_derive::api_model(deny_unknown_fields = false)]
/// pub struct ErrorBody {
///     pub message: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand(attr.into(), input).into()
}

/// Attribute macro for feature handles.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// implements `Deref<Target = <Name>Inner>` and derives `Debug` and `Clone`, so
/// the handle can be shared with UI contexts and background tasks freely.
///
/// # Example
///
/// ```rust,ignore
/// #[mfit_derive::mfit_slice]
/// pub struct Registration {
///     pub messages: &'static Messages,
/// }
///
/// let handle = Registration::new(RegistrationInner { messages: Messages::for_locale(locale) });
/// ```
#[proc_macro_attribute]
pub fn mfit_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
