//! Gravatar URL builder
//!
//! Gravatar serves an image for `{base}/{hash}` where `hash` is the hex digest
//! of the normalised (trimmed, lowercased) email. SHA-256 digests are accepted
//! alongside the legacy MD5 form. No network call is made here.

use sha2::{Digest, Sha256};

use crate::core::config::AvatarConfig;
use crate::shared::constants::{AVATAR_DEFAULT, AVATAR_RATING, AVATAR_SIZE};

/// Builds avatar URLs with the fixed visual style used for new accounts
#[derive(Debug, Clone)]
pub struct GravatarClient {
    base_url: String,
}

impl GravatarClient {
    pub fn new(config: &AvatarConfig) -> Self {
        Self {
            base_url: config.gravatar_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Avatar URL for `email` (size 200, rating "pg", default "mm")
    pub fn avatar_url(&self, email: &str) -> String {
        format!(
            "{}/{}?s={}&r={}&d={}",
            self.base_url,
            email_hash(email),
            AVATAR_SIZE,
            urlencoding::encode(AVATAR_RATING),
            urlencoding::encode(AVATAR_DEFAULT),
        )
    }
}

fn email_hash(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GravatarClient {
        GravatarClient::new(&AvatarConfig::default())
    }

    #[test]
    fn test_avatar_url_uses_fixed_style() {
        let url = client().avatar_url("alice@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));
    }

    #[test]
    fn test_avatar_url_is_deterministic() {
        let client = client();
        assert_eq!(
            client.avatar_url("alice@example.com"),
            client.avatar_url("alice@example.com")
        );
        assert_ne!(
            client.avatar_url("alice@example.com"),
            client.avatar_url("bob@example.com")
        );
    }

    #[test]
    fn test_avatar_url_normalizes_case_and_whitespace() {
        let client = client();
        assert_eq!(
            client.avatar_url("  Alice@Example.COM "),
            client.avatar_url("alice@example.com")
        );
    }

    #[test]
    fn test_email_hash_is_sha256_hex() {
        // sha256("test@example.com")
        assert_eq!(
            email_hash("test@example.com"),
            "973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GravatarClient::new(&AvatarConfig {
            gravatar_base_url: "https://avatars.internal/avatar/".to_string(),
        });
        let url = client.avatar_url("alice@example.com");
        assert!(url.starts_with("https://avatars.internal/avatar/"));
        assert!(!url.contains("avatar//"));
    }
}
