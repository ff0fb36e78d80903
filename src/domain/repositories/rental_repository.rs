//! Repository trait for rental data access.

use crate::domain::entities::{NewRental, Rental};
use crate::domain::filter::RentalFilter;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for rentals.
///
/// Works on plain [`Rental`] records. Each mutating call commits on its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryRentalRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Lists every rental whose customer, staff member and film satisfy all
    /// predicates of `filter`.
    ///
    /// Results are ordered by rental id ascending. An empty filter returns
    /// every rental.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: &RentalFilter) -> Result<Vec<Rental>, AppError>;

    /// Finds a rental by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Rental))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError>;

    /// Inserts a rental and returns the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a missing
    /// inventory item, customer or staff member.
    async fn insert(&self, new_rental: NewRental) -> Result<i32, AppError>;

    /// Sets `return_date` and `last_update` to `returned_at` on an open rental.
    ///
    /// Returns `Ok(true)` if the rental was open and is now closed, `Ok(false)`
    /// if it does not exist or was already closed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_returned(&self, id: i32, returned_at: DateTime<Utc>) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
