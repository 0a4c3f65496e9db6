use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an issued session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub account: AccountClaim,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClaim {
    pub id: Uuid,
}

impl TokenClaims {
    pub fn new(account_id: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            account: AccountClaim { id: account_id },
            iat,
            exp,
        }
    }
}
