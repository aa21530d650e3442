//! Kernel utilities shared by the client applications.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use mfit_kernel::config::load_client_config;
//!
//! let cfg = load_client_config(None::<&str>).unwrap_or_default();
//! assert!(!cfg.api.base_url.is_empty());
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use mfit_domain as domain;
