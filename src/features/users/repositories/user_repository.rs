use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::users::models::{NewUserAccount, UserAccount};

/// Persistent store for user accounts
///
/// Implementations must reject a second account with the same email on
/// `create` with `AppError::Conflict`, independently of any prior lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>>;

    /// Insert a new account and return it with its assigned id
    async fn create(&self, account: NewUserAccount) -> Result<UserAccount>;
}
