use crate::core::error::{field_errors, AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{RegisterUserDto, RegisterUserResponseDto};
use crate::features::users::services::RegistrationService;
use crate::shared::types::ErrorResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered, token issued", body = RegisterUserResponseDto),
        (status = 400, description = "Validation error or user already exists", body = ErrorResponse),
        (status = 500, description = "Server error", body = String, content_type = "text/plain")
    ),
    tag = "users"
)]
pub async fn register_user(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<Json<RegisterUserResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(field_errors(&e, RegisterUserDto::FIELD_ORDER)))?;

    let response = service.register(dto).await?;
    Ok(Json(response))
}
