//! PostgreSQL implementation of rental repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewRental, Rental};
use crate::domain::filter::RentalFilter;
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

/// Rental query joined with the tables filters apply to.
const FILTERED_SELECT: &str = r#"
    SELECT
        r.rental_id,
        r.rental_date,
        r.inventory_id,
        r.customer_id,
        r.return_date,
        r.staff_id,
        r.last_update
    FROM rental r
    JOIN customer c ON c.customer_id = r.customer_id
    JOIN staff s ON s.staff_id = r.staff_id
    JOIN inventory i ON i.inventory_id = r.inventory_id
    JOIN film f ON f.film_id = i.film_id
"#;

/// PostgreSQL repository for rentals.
///
/// Unsigned ids are stored in wider signed columns: `inventory_id BIGINT`,
/// `customer_id INTEGER`, `staff_id SMALLINT`.
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    rental_id: i32,
    rental_date: DateTime<Utc>,
    inventory_id: i64,
    customer_id: i32,
    return_date: Option<DateTime<Utc>>,
    staff_id: i16,
    last_update: DateTime<Utc>,
}

impl TryFrom<RentalRow> for Rental {
    type Error = AppError;

    fn try_from(row: RentalRow) -> Result<Self, Self::Error> {
        let rental_id = row.rental_id;
        let out_of_range = |column: &str| {
            AppError::internal(
                "Stored rental has an out-of-range reference",
                json!({ "rental_id": rental_id, "column": column }),
            )
        };

        Ok(Rental::new(
            rental_id,
            row.rental_date,
            u32::try_from(row.inventory_id).map_err(|_| out_of_range("inventory_id"))?,
            u16::try_from(row.customer_id).map_err(|_| out_of_range("customer_id"))?,
            row.return_date,
            u8::try_from(row.staff_id).map_err(|_| out_of_range("staff_id"))?,
            row.last_update,
        ))
    }
}

/// Appends one `column LIKE $n` clause per predicate, joined with `AND`,
/// followed by the id ordering.
fn build_filtered_query(filter: &RentalFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(FILTERED_SELECT);

    for (idx, predicate) in filter.predicates().into_iter().enumerate() {
        builder.push(if idx == 0 { " WHERE " } else { " AND " });
        builder.push(predicate.field.column());
        builder.push(" LIKE ");
        builder.push_bind(predicate.like_pattern());
    }

    builder.push(" ORDER BY r.rental_id");
    builder
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn list(&self, filter: &RentalFilter) -> Result<Vec<Rental>, AppError> {
        let rows = build_filtered_query(filter)
            .build_query_as::<RentalRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Rental::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            r#"
            SELECT rental_id, rental_date, inventory_id, customer_id,
                   return_date, staff_id, last_update
            FROM rental
            WHERE rental_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Rental::try_from).transpose()
    }

    async fn insert(&self, new_rental: NewRental) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO rental (rental_date, inventory_id, customer_id, staff_id, last_update)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING rental_id
            "#,
        )
        .bind(new_rental.rental_date)
        .bind(i64::from(new_rental.inventory_id))
        .bind(i32::from(new_rental.customer_id))
        .bind(i16::from(new_rental.staff_id))
        .bind(new_rental.last_update)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn mark_returned(&self, id: i32, returned_at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE rental
            SET return_date = $2, last_update = $2
            WHERE rental_id = $1 AND return_date IS NULL
            "#,
        )
        .bind(id)
        .bind(returned_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
