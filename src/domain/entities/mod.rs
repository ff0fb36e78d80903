//! Core domain entities.
//!
//! Entities are plain data records. Relationships to customers, staff and
//! inventory are carried as foreign-key scalars only; related records are
//! never loaded lazily.
//!
//! - [`Rental`] - A persisted rental
//! - [`NewRental`] - Input for inserting a rental; the store assigns the id

pub mod rental;

pub use rental::{NewRental, Rental};
