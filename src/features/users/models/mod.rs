pub mod user;

pub use user::{NewUserAccount, UserAccount};
