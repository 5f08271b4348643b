//! Six Cities - a terminal client for browsing rental offers.
//!
//! The crate follows a layered layout: domain entities and ports, an
//! application layer with the store and use cases, infrastructure adapters
//! for the rental API and secure storage, and a ratatui presentation layer
//! with path-based routing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the store, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing routing, screens and widgets.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "six-cities";
