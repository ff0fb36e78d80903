//! Rental entity.

use chrono::{DateTime, Utc};

/// A customer borrowing one inventory item.
///
/// A rental is open while `return_date` is `None`. Closing it sets
/// `return_date` once; it is never reset to `None` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    pub id: i32,
    pub rental_date: DateTime<Utc>,
    pub inventory_id: u32,
    pub customer_id: u16,
    pub return_date: Option<DateTime<Utc>>,
    pub staff_id: u8,
    pub last_update: DateTime<Utc>,
}

impl Rental {
    /// Creates a new Rental instance.
    pub fn new(
        id: i32,
        rental_date: DateTime<Utc>,
        inventory_id: u32,
        customer_id: u16,
        return_date: Option<DateTime<Utc>>,
        staff_id: u8,
        last_update: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            rental_date,
            inventory_id,
            customer_id,
            return_date,
            staff_id,
            last_update,
        }
    }

    /// Returns true while the item has not been returned.
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Input data for inserting a rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRental {
    pub inventory_id: u32,
    pub customer_id: u16,
    pub staff_id: u8,
    pub rental_date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

impl NewRental {
    /// Opens a rental at `now`; both timestamps carry the same instant.
    pub fn opened_at(
        inventory_id: u32,
        customer_id: u16,
        staff_id: u8,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            inventory_id,
            customer_id,
            staff_id,
            rental_date: now,
            last_update: now,
        }
    }

    /// Materializes the record once the store has assigned an id.
    pub fn into_rental(self, id: i32) -> Rental {
        Rental::new(
            id,
            self.rental_date,
            self.inventory_id,
            self.customer_id,
            None,
            self.staff_id,
            self.last_update,
        )
    }
}
