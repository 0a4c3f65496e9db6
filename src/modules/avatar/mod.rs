//! Avatar module
//!
//! Derives profile image URLs from an account's email address.

mod gravatar;

pub use gravatar::GravatarClient;
