//! Data transfer objects for the application layer.

mod auth_dto;
mod review_dto;

pub use auth_dto::{LoginRequest, LoginResponse, TokenSource};
pub use review_dto::{COMMENT_MAX_LENGTH, COMMENT_MIN_LENGTH, ReviewRequest};
