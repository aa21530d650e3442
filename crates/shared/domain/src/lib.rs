//! # Domain Models
//!
//! Plain configuration types and route constants shared by the `MatFit` clients.
//! Only `serde` is allowed here: no I/O, networking, or validation logic.

pub mod config;
pub mod constants;
