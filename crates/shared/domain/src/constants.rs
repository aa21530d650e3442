//! Routes, links and defaults the client crates agree on.

pub const APP_NAME: &str = "MatFit";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

pub const REGISTER_ROUTE: &str = "/register";
pub const LOGIN_ROUTE: &str = "/login";
pub const TERMS_ROUTE: &str = "/terms";

/// Default config file stem, resolved by the `config` crate to any supported extension.
pub const CONFIG_FILE: &str = "client";
/// Environment prefix for config overrides, e.g. `MFIT__API__BASE_URL`.
pub const ENV_PREFIX: &str = "MFIT";
