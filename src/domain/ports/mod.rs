mod auth_port;
mod offers_port;
mod token_storage_port;

pub use auth_port::AuthPort;
#[cfg(test)]
pub use offers_port::MockOffersPort;
pub use offers_port::OffersPort;
pub use token_storage_port::TokenStoragePort;
