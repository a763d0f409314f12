//! Credential hashing, user storage, and session issuance.
//!
//! Argon2id password hashing over a pluggable user store. Login hands back a
//! bare username token meant to ride in a cookie.
//!
//! ## Domain
//!
//! - [`User`] — Stored account: username plus password hash
//! - [`Credentials`] — Username and plaintext password from a request
//! - [`PasswordChange`] — Current and replacement password
//! - [`Session`] — Identity claim issued at login
//! - [`AuthError`] — Failure signals, mapped to HTTP under `server`
//!
//! ## Machinery
//!
//! - [`Scheme`] — Hash and verify capability the service composes
//! - [`Hasher`] — Argon2id [`Scheme`]
//! - [`UserStore`] — Storage capability with check-and-set
//! - [`Memory`] — In-process store behind a reader/writer lock
//! - [`Authenticator`] — Register, login, and password change
mod dto;
mod error;
mod memory;
mod password;
mod service;
mod session;
mod store;
mod user;

pub use dto::*;
pub use error::*;
pub use memory::*;
pub use password::*;
pub use service::*;
pub use session::*;
pub use store::*;
pub use user::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
