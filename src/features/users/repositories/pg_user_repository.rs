use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUserAccount, UserAccount};
use crate::features::users::repositories::UserRepository;
use crate::shared::constants::USER_ALREADY_EXISTS;

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Convert database error to a more specific AppError
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            // users_email_key is the only unique index on the table
            return AppError::Conflict(USER_ALREADY_EXISTS.to_string());
        }
    }

    AppError::Database(e)
}

/// `UserRepository` backed by the `users` table
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, name, email, avatar_url, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn create(&self, account: NewUserAccount) -> Result<UserAccount> {
        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            INSERT INTO users (name, email, avatar_url, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, avatar_url, password_hash, created_at
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.avatar_url)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("User account created: id={}", user.id);

        Ok(user)
    }
}
