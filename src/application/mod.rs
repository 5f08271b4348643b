//! Application layer with the store, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Centralized state store.
pub mod store;
/// Use case implementations.
pub mod use_cases;
