//! Domain models for storefront.

pub mod session;

pub use session::{SessionSnapshot, keys as session_keys};
