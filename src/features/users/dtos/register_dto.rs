use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::shared::validation::{validate_not_blank, with_message};

/// Request DTO for account registration
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than rejected as malformed JSON.
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    #[schema(min_length = 6, format = Password)]
    pub password: String,
}

impl RegisterUserDto {
    /// Order in which field errors are reported
    pub const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

impl std::fmt::Debug for RegisterUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_not_blank(name).map_err(|e| with_message(e, "Name is required"))
}

/// Response DTO for a successful registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserResponseDto {
    /// Signed bearer token for the new account
    pub token: String,
}
