//! Username/password authentication with cookie sessions.
//!
//! This facade crate re-exports the keyward crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Shared constants and logger setup
//! - [`auth`] — Hashing, user store, and the authentication service
//! - [`server`] — actix-web routes and bootstrap (`server` feature)

pub use kw_core as core;
pub use kw_auth as auth;
#[cfg(feature = "server")]
pub use kw_server as server;

// Re-export commonly used types at the root
pub use kw_auth::*;
