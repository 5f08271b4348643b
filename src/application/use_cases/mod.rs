//! Use case implementations.

mod check_auth_use_case;
mod login_use_case;
mod offers_use_case;
mod review_use_case;

pub use check_auth_use_case::{CheckAuthUseCase, ResolvedToken};
pub use login_use_case::LoginUseCase;
pub use offers_use_case::OffersUseCase;
pub use review_use_case::ReviewUseCase;
