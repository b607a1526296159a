//! Gatehouse Core - Shared types library.
//!
//! This crate provides the types shared by all Gatehouse components:
//! - `storefront` - Storefront service that enforces the access gate
//! - `cli` - Command-line tool for evaluating the gate offline
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no session access, no
//! configuration loading. The gate itself lives in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, the customer record and the activated group set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
