pub mod password_service;
pub mod registration_service;

pub use password_service::PasswordService;
pub use registration_service::RegistrationService;
