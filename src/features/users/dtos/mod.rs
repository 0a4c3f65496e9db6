pub mod register_dto;

pub use register_dto::{RegisterUserDto, RegisterUserResponseDto};
