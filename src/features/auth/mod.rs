//! Session tokens issued to newly registered accounts.
//!
//! Tokens are stateless HS256 JWTs; nothing is stored server-side.

pub mod model;
pub mod services;

pub use services::TokenService;
