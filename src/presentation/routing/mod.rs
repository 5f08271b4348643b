//! Path resolution and authorization gating.

mod guard;
mod route;

pub use guard::{GuardOutcome, PrivateRoute, is_allowed};
pub use route::{MISSING_OFFER_ID, RouteMatch};
