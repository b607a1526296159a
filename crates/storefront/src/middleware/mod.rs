//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Access gate (route layer on gated routes only)

pub mod access_gate;
pub mod auth;
pub mod session;

pub use access_gate::access_gate_middleware;
pub use auth::{OptionalCustomer, clear_current_customer, set_current_customer};
pub use session::create_session_layer;
