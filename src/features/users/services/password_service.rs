use crate::core::config::PasswordConfig;
use crate::core::error::{AppError, Result};

/// Salted one-way password hashing (bcrypt)
///
/// bcrypt is CPU-bound, so hashing runs on tokio's blocking pool and never
/// stalls the async workers serving other requests.
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hash `password` with a fresh random salt. The plaintext is consumed.
    pub async fn hash(&self, password: String) -> Result<String> {
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(&PasswordConfig::new(4).unwrap())
    }

    #[tokio::test]
    async fn test_hash_never_equals_plaintext() {
        let hash = service().hash("secret1".to_string()).await.unwrap();
        assert_ne!(hash, "secret1");
        assert!(!hash.contains("secret1"));
    }

    #[tokio::test]
    async fn test_hash_verifies_against_plaintext() {
        let hash = service().hash("secret1".to_string()).await.unwrap();
        assert!(bcrypt::verify("secret1", &hash).unwrap());
        assert!(!bcrypt::verify("secret2", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let service = service();
        let first = service.hash("secret1".to_string()).await.unwrap();
        let second = service.hash("secret1".to_string()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_hash_uses_configured_cost() {
        let hash = PasswordService::new(&PasswordConfig::default())
            .hash("secret1".to_string())
            .await
            .unwrap();
        // Modular crypt format: $2b$<cost>$<salt+hash>
        assert!(hash.starts_with("$2b$10$"));
    }
}
