//! Domain layer containing business entities and data access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`], and business rules live in
//! [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Rental records as the store holds them
//! - [`filter`] - Optional prefix filters composed into explicit predicates
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod filter;
pub mod repositories;
