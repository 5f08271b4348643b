//! Infrastructure layer with external service adapters.

/// Rental API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::RentalApiClient;
pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use storage::KeyringTokenStorage;
