// =============================================================================
// REGISTRATION
// =============================================================================

/// Message returned when an email is already registered
pub const USER_ALREADY_EXISTS: &str = "User already exists";

// =============================================================================
// AVATAR STYLE
// =============================================================================

/// Gravatar image size in pixels
pub const AVATAR_SIZE: u32 = 200;

/// Highest Gravatar rating allowed for the image
pub const AVATAR_RATING: &str = "pg";

/// Gravatar fallback image when the email has no avatar ("mystery person")
pub const AVATAR_DEFAULT: &str = "mm";
