//! DTOs for the rental endpoints.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::Rental;
use crate::domain::filter::RentalFilter;

/// Request body for `POST /rental`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub inventory_id: u32,
    pub customer_id: u16,
    pub staff_id: u8,
}

/// Flattened, read-only projection of a [`Rental`].
///
/// Carries foreign-key scalars only, no related records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub rental_id: i32,
    pub rental_date: DateTime<Utc>,
    pub inventory_id: u32,
    pub customer_id: u16,
    pub return_date: Option<DateTime<Utc>>,
    pub staff_id: u8,
    pub last_update: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            rental_id: rental.id,
            rental_date: rental.rental_date,
            inventory_id: rental.inventory_id,
            customer_id: rental.customer_id,
            return_date: rental.return_date,
            staff_id: rental.staff_id,
            last_update: rental.last_update,
        }
    }
}

/// Query parameters for `GET /rental/filtered`.
///
/// An empty value (`?filmTitle=`) is treated the same as an absent one.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalFilterParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub customer_first_name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub customer_last_name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub film_title: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub staff_first_name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub staff_last_name: Option<String>,
}

impl From<RentalFilterParams> for RentalFilter {
    fn from(params: RentalFilterParams) -> Self {
        Self {
            customer_first_name: params.customer_first_name,
            customer_last_name: params.customer_last_name,
            film_title: params.film_title,
            staff_first_name: params.staff_first_name,
            staff_last_name: params.staff_last_name,
        }
    }
}
