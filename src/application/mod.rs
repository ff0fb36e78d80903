//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::rental_service::RentalService`] - Rental listing, lookup, creation and closing

pub mod services;
