#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(clippy::pedantic)]
//! Shared types for the storefront client.
//!
//! Everything here is target-agnostic so it can be unit tested natively and
//! compiled into the WebAssembly frontend unchanged.

pub mod catalog;
pub mod models;
pub mod session;

pub use catalog::CategoryFilter;
pub use session::{Access, GuardOutcome, LoginDestination, Session};
