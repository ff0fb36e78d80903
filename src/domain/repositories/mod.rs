//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RentalRepository`] - Rental lookups, filtered listing and mutations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_rental.rs` for usage examples.

pub mod rental_repository;

pub use rental_repository::RentalRepository;

#[cfg(test)]
pub use rental_repository::MockRentalRepository;
