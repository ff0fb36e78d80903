//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgRentalRepository`] - Rental storage in PostgreSQL via SQLx
//! - [`MemoryRentalRepository`] - Rental storage in process memory

pub mod memory_rental_repository;
pub mod pg_rental_repository;

pub use memory_rental_repository::MemoryRentalRepository;
pub use pg_rental_repository::PgRentalRepository;
