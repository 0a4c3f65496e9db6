use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::core::config::AuthTokenConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::TokenClaims;

/// Signs session tokens with the configured secret and expiry
pub struct TokenService {
    config: AuthTokenConfig,
}

impl TokenService {
    pub fn new(config: AuthTokenConfig) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given account
    ///
    /// The payload is `{ account: { id }, iat, exp }` with
    /// `exp = iat + token_expiry`.
    pub async fn issue(&self, account_id: Uuid) -> Result<String> {
        if self.config.jwt_secret.is_empty() {
            return Err(AppError::Internal("JWT secret is not configured".to_string()));
        }

        let expiry_secs = i64::try_from(self.config.token_expiry.as_secs()).map_err(|_| {
            AppError::Internal(format!(
                "Token expiry out of range: {:?}",
                self.config.token_expiry
            ))
        })?;

        let iat = Utc::now().timestamp();
        let exp = iat.checked_add(expiry_secs).ok_or_else(|| {
            AppError::Internal(format!("Token expiry overflows: {} + {}", iat, expiry_secs))
        })?;

        let claims = TokenClaims::new(account_id, iat, exp);
        let key = EncodingKey::from_secret(self.config.jwt_secret.as_bytes());

        let token = encode(&Header::default(), &claims, &key).map_err(|e| {
            tracing::error!("Failed to sign token for account {}: {}", account_id, e);
            AppError::Internal(format!("Failed to sign token: {}", e))
        })?;

        tracing::debug!(
            "Token issued for account {}, expires in {} seconds",
            account_id,
            expiry_secs
        );

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use std::time::Duration;

    const SECRET: &str = "test-secret";

    fn service(secret: &str, expiry: Duration) -> TokenService {
        TokenService::new(AuthTokenConfig {
            jwt_secret: secret.to_string(),
            token_expiry: expiry,
        })
    }

    fn decode_claims(token: &str, secret: &str) -> jsonwebtoken::errors::Result<TokenClaims> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
    }

    #[tokio::test]
    async fn test_issue_encodes_account_id() {
        let account_id = Uuid::new_v4();
        let token = service(SECRET, Duration::from_secs(3600))
            .issue(account_id)
            .await
            .unwrap();

        let claims = decode_claims(&token, SECRET).unwrap();
        assert_eq!(claims.account.id, account_id);
    }

    #[tokio::test]
    async fn test_issue_applies_configured_expiry() {
        let token = service(SECRET, Duration::from_secs(360_000))
            .issue(Uuid::new_v4())
            .await
            .unwrap();

        let claims = decode_claims(&token, SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, 360_000);
    }

    #[tokio::test]
    async fn test_token_does_not_verify_with_other_secret() {
        let token = service(SECRET, Duration::from_secs(3600))
            .issue(Uuid::new_v4())
            .await
            .unwrap();

        assert!(decode_claims(&token, "another-secret").is_err());
    }

    #[tokio::test]
    async fn test_issue_fails_without_secret() {
        let result = service("", Duration::from_secs(3600))
            .issue(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_issue_rejects_unrepresentable_expiry() {
        let result = service(SECRET, Duration::from_secs(u64::MAX))
            .issue(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
