//! Presentation layer with routing, screens and event handling.

/// Key classification.
pub mod events;
/// Route resolution and guards.
pub mod routing;
/// Screens and the application loop.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
