//! Business logic services for the application layer.

pub mod rental_service;

pub use rental_service::RentalService;
