//! User routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::users::handlers;
use crate::features::users::services::RegistrationService;

/// Create routes for the users feature
///
/// Registration is public; the token it returns is what later requests present.
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::register_user))
        .with_state(service)
}
