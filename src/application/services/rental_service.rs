//! Rental lifecycle service.

use std::sync::Arc;

use crate::api::dto::rental::{RentalRequest, RentalResponse};
use crate::domain::entities::NewRental;
use crate::domain::filter::RentalFilter;
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;

/// Service owning the rental rules: filtered listing, lookup, opening and
/// closing.
///
/// Application state holds `RentalService<dyn RentalRepository>`; unit tests
/// use a concrete mock repository.
pub struct RentalService<R: RentalRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RentalRepository + ?Sized> RentalService<R> {
    /// Creates a new rental service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists rentals matching every non-blank filter value by prefix.
    ///
    /// Results are ordered by rental id ascending and are not paginated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_filtered(
        &self,
        filter: &RentalFilter,
    ) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.repository.list(filter).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    /// Retrieves one rental by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rental has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<RentalResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(RentalResponse::from)
            .ok_or_else(|| AppError::rental_not_found(id))
    }

    /// Opens a rental stamped with the current time.
    ///
    /// The stored record is read back after the insert so the response carries
    /// the id and values the store actually committed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a missing
    /// referenced record.
    pub async fn create(&self, request: RentalRequest) -> Result<RentalResponse, AppError> {
        tracing::info!(
            inventory_id = request.inventory_id,
            customer_id = request.customer_id,
            staff_id = request.staff_id,
            "Creating rental"
        );

        let new_rental = NewRental::opened_at(
            request.inventory_id,
            request.customer_id,
            request.staff_id,
            Utc::now(),
        );
        let id = self.repository.insert(new_rental).await?;

        self.get_by_id(id).await
    }

    /// Closes an open rental by stamping its return date.
    ///
    /// A rental is closed at most once. A second close is refused and leaves
    /// the stored return date untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rental has this id.
    /// Returns [`AppError::Conflict`] if the rental is already closed, including
    /// when a concurrent request closed it first.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn close(&self, id: i32) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::rental_not_found(id))?;

        if !rental.is_open() {
            return Err(already_closed(id));
        }

        if !self.repository.mark_returned(id, Utc::now()).await? {
            return Err(already_closed(id));
        }

        tracing::info!(rental_id = id, "Rental closed");

        self.get_by_id(id).await
    }

    /// Reports whether the backing store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn already_closed(id: i32) -> AppError {
    AppError::conflict(
        format!("Rental with ID {id} is already closed"),
        json!({ "rental_id": id }),
    )
}
