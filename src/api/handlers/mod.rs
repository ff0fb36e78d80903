//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod rentals;

pub use health::health_handler;
pub use rentals::{
    close_rental_handler, create_rental_handler, filtered_rentals_handler, rental_by_id_handler,
};
