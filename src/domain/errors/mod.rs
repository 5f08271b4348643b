//! Domain error types.

mod api_error;
mod secret_error;
mod validation_error;

pub use api_error::ApiError;
pub use secret_error::SecretError;
pub use validation_error::ValidationError;
