//! Centralized state store.
//!
//! The store owns the single [`StoreState`]. It is created once at startup
//! and only changes through [`Store::dispatch`], which runs the reducer on
//! the application loop. Background tasks never touch the state directly:
//! they hold a [`Dispatch`] handle that forwards actions to the loop.

pub mod action;
mod reducer;
mod state;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

pub use action::Action;
pub use reducer::reduce;
pub use state::StoreState;

use crate::domain::AppRoute;

/// Sink for actions produced outside the application loop.
pub trait Dispatch: Send + Sync {
    /// Sends an action towards the store.
    fn dispatch(&self, action: Action);
}

impl Dispatch for UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        let kind = action.kind();
        if self.send(action).is_err() {
            warn!(action = kind, "Store channel closed, dropping action");
        }
    }
}

/// Owner of the application state.
#[derive(Debug, Default)]
pub struct Store {
    state: StoreState,
}

impl Store {
    /// Creates store with initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates store with the given state.
    #[must_use]
    pub const fn with_state(state: StoreState) -> Self {
        Self { state }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), "Dispatching action");
        reduce(&mut self.state, action);
    }

    /// Takes the pending redirect, if any.
    pub fn take_redirect(&mut self) -> Option<AppRoute> {
        self.state.redirect.take()
    }
}
