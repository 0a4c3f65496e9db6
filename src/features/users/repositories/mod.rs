mod pg_user_repository;
mod user_repository;

pub use pg_user_repository::PgUserRepository;
pub use user_repository::UserRepository;
