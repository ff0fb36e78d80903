//! In-memory implementation of rental repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{NewRental, Rental};
use crate::domain::filter::{RentalFilter, RentalParties};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct PersonName {
    first: String,
    last: String,
}

#[derive(Default)]
struct Store {
    rentals: BTreeMap<i32, Rental>,
    next_id: i32,
}

/// Rental store held in process memory.
///
/// Customers, staff members and inventory items (with their film title) are
/// registered up front; inserts referencing unknown records fail the way a
/// foreign-key violation does in PostgreSQL, as an internal error. Backs the
/// handler tests; the server itself always runs on PostgreSQL.
#[derive(Default)]
pub struct MemoryRentalRepository {
    customers: HashMap<u16, PersonName>,
    staff: HashMap<u8, PersonName>,
    inventory: HashMap<u32, String>,
    store: RwLock<Store>,
}

impl MemoryRentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, id: u16, first: &str, last: &str) -> Self {
        self.customers.insert(
            id,
            PersonName {
                first: first.to_string(),
                last: last.to_string(),
            },
        );
        self
    }

    pub fn with_staff(mut self, id: u8, first: &str, last: &str) -> Self {
        self.staff.insert(
            id,
            PersonName {
                first: first.to_string(),
                last: last.to_string(),
            },
        );
        self
    }

    /// Registers an inventory item holding a copy of `film_title`.
    pub fn with_inventory(mut self, id: u32, film_title: &str) -> Self {
        self.inventory.insert(id, film_title.to_string());
        self
    }

    /// Stores an existing rental as-is, keeping its id.
    pub fn with_rental(mut self, rental: Rental) -> Self {
        let store = self.store.get_mut();
        store.next_id = store.next_id.max(rental.id);
        store.rentals.insert(rental.id, rental);
        self
    }

    fn parties(&self, rental: &Rental) -> Option<RentalParties> {
        let customer = self.customers.get(&rental.customer_id)?;
        let staff = self.staff.get(&rental.staff_id)?;
        let film_title = self.inventory.get(&rental.inventory_id)?;

        Some(RentalParties {
            customer_first_name: customer.first.clone(),
            customer_last_name: customer.last.clone(),
            film_title: film_title.clone(),
            staff_first_name: staff.first.clone(),
            staff_last_name: staff.last.clone(),
        })
    }

    fn check_references(&self, new_rental: &NewRental) -> Result<(), AppError> {
        let missing = if !self.inventory.contains_key(&new_rental.inventory_id) {
            Some("inventory_id")
        } else if !self.customers.contains_key(&new_rental.customer_id) {
            Some("customer_id")
        } else if !self.staff.contains_key(&new_rental.staff_id) {
            Some("staff_id")
        } else {
            None
        };

        match missing {
            Some(column) => Err(AppError::internal(
                "Database error",
                json!({ "column": column }),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RentalRepository for MemoryRentalRepository {
    async fn list(&self, filter: &RentalFilter) -> Result<Vec<Rental>, AppError> {
        let store = self.store.read().await;

        // Rentals whose related records are unknown drop out, as with an inner join.
        Ok(store
            .rentals
            .values()
            .filter(|rental| {
                self.parties(rental)
                    .is_some_and(|parties| filter.matches(&parties))
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        Ok(self.store.read().await.rentals.get(&id).cloned())
    }

    async fn insert(&self, new_rental: NewRental) -> Result<i32, AppError> {
        self.check_references(&new_rental)?;

        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = store.next_id;
        store.rentals.insert(id, new_rental.into_rental(id));

        Ok(id)
    }

    async fn mark_returned(&self, id: i32, returned_at: DateTime<Utc>) -> Result<bool, AppError> {
        let mut store = self.store.write().await;

        match store.rentals.get_mut(&id) {
            Some(rental) if rental.is_open() => {
                rental.return_date = Some(returned_at);
                rental.last_update = returned_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
