//! Rental API HTTP adapter.

mod client;
mod dto;

pub use client::RentalApiClient;
