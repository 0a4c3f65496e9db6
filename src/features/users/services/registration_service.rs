//! Registration workflow
//!
//! duplicate check -> avatar -> password hash -> insert -> token.
//! Input validation happens in the handler before this service is reached.

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::TokenService;
use crate::features::users::dtos::{RegisterUserDto, RegisterUserResponseDto};
use crate::features::users::models::NewUserAccount;
use crate::features::users::repositories::UserRepository;
use crate::features::users::services::PasswordService;
use crate::modules::avatar::GravatarClient;
use crate::shared::constants::USER_ALREADY_EXISTS;

/// Service for creating user accounts
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    avatars: Arc<GravatarClient>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl RegistrationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        avatars: Arc<GravatarClient>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            avatars,
            passwords,
            tokens,
        }
    }

    /// Register a new account and return a signed token for it
    ///
    /// The lookup is a fast path for the common duplicate case. The store's
    /// uniqueness check on insert is what actually guarantees one account per
    /// email when requests race.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<RegisterUserResponseDto> {
        let RegisterUserDto {
            name,
            email,
            password,
        } = dto;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(USER_ALREADY_EXISTS.to_string()));
        }

        let avatar_url = self.avatars.avatar_url(&email);
        let password_hash = self.passwords.hash(password).await?;

        let user = self
            .users
            .create(NewUserAccount {
                name,
                email,
                avatar_url,
                password_hash,
            })
            .await?;

        // No rollback: if signing fails the account stays, without a token.
        let token = self.tokens.issue(user.id).await.map_err(|e| {
            tracing::error!("Account {} saved but token could not be issued", user.id);
            e
        })?;

        tracing::info!("User registered: id={}", user.id);

        Ok(RegisterUserResponseDto { token })
    }
}
