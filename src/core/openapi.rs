use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::register_user,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            ErrorDetail,
            // Users
            users_dtos::RegisterUserDto,
            users_dtos::RegisterUserResponseDto,
        )
    ),
    tags(
        (name = "users", description = "User account registration"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "DevConnect API",
        version = "0.1.0",
        description = "API documentation for DevConnect",
    )
)]
pub struct ApiDoc;

/// Documents the Bearer JWT scheme that clients use with the issued token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_registration_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/users"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Custom docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Custom docs"));
    }
}
