#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sakila_rentals::domain::entities::Rental;
use sakila_rentals::infrastructure::persistence::MemoryRentalRepository;
use sakila_rentals::routes::{api_router, app_router};
use sakila_rentals::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Reference data shared by the in-memory and PostgreSQL fixtures.
///
/// Customers: 1 MARY SMITH, 2 PATRICIA JOHNSON, 3 LINDA WILLIAMS.
/// Staff: 1 Mike Hillyer, 2 Jon Stephens.
/// Inventory: 1 and 2 hold ACADEMY DINOSAUR, 5 holds ACE GOLDFINGER,
/// 9 holds AFFAIR PREJUDICE.
pub fn seeded_repository() -> MemoryRentalRepository {
    MemoryRentalRepository::new()
        .with_customer(1, "MARY", "SMITH")
        .with_customer(2, "PATRICIA", "JOHNSON")
        .with_customer(3, "LINDA", "WILLIAMS")
        .with_staff(1, "Mike", "Hillyer")
        .with_staff(2, "Jon", "Stephens")
        .with_inventory(1, "ACADEMY DINOSAUR")
        .with_inventory(2, "ACADEMY DINOSAUR")
        .with_inventory(5, "ACE GOLDFINGER")
        .with_inventory(9, "AFFAIR PREJUDICE")
}

/// Three rentals on top of [`seeded_repository`]:
///
/// - 1: MARY SMITH, ACADEMY DINOSAUR, Mike Hillyer, open
/// - 2: PATRICIA JOHNSON, ACE GOLDFINGER, Jon Stephens, returned
/// - 3: MARY SMITH, AFFAIR PREJUDICE, Jon Stephens, open
pub fn repository_with_rentals() -> MemoryRentalRepository {
    let rented = at("2005-05-24T22:53:30Z");
    let returned = at("2005-05-26T22:04:30Z");

    seeded_repository()
        .with_rental(Rental::new(1, rented, 1, 1, None, 1, rented))
        .with_rental(Rental::new(2, rented, 5, 2, Some(returned), 2, returned))
        .with_rental(Rental::new(3, rented, 9, 1, None, 2, rented))
}

pub fn make_server(repository: MemoryRentalRepository) -> TestServer {
    let state = AppState::new(Arc::new(repository));
    TestServer::new(api_router(state)).unwrap()
}

/// Serves the full application stack, middleware and path normalization
/// included, the way `server::run` does.
pub fn make_app_server(repository: MemoryRentalRepository) -> TestServer {
    let state = AppState::new(Arc::new(repository));
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Inserts the reference data of [`seeded_repository`] into PostgreSQL, plus
/// inventory 12 holding `50% OFF_SALE` for wildcard escaping checks.
pub async fn seed_reference_data(pool: &PgPool) {
    for statement in [
        "INSERT INTO film (film_id, title) VALUES
            (1, 'ACADEMY DINOSAUR'), (2, 'ACE GOLDFINGER'), (3, 'AFFAIR PREJUDICE'),
            (4, '50% OFF_SALE')",
        "INSERT INTO inventory (inventory_id, film_id) VALUES (1, 1), (2, 1), (5, 2), (9, 3), (12, 4)",
        "INSERT INTO customer (customer_id, first_name, last_name) VALUES
            (1, 'MARY', 'SMITH'), (2, 'PATRICIA', 'JOHNSON'), (3, 'LINDA', 'WILLIAMS')",
        "INSERT INTO staff (staff_id, first_name, last_name) VALUES
            (1, 'Mike', 'Hillyer'), (2, 'Jon', 'Stephens')",
    ] {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

pub async fn insert_rental(
    pool: &PgPool,
    inventory_id: i64,
    customer_id: i32,
    staff_id: i16,
    returned: bool,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO rental (rental_date, inventory_id, customer_id, staff_id, return_date, last_update)
         VALUES (NOW() - INTERVAL '2 days', $1, $2, $3,
                 CASE WHEN $4 THEN NOW() ELSE NULL END, NOW())
         RETURNING rental_id",
    )
    .bind(inventory_id)
    .bind(customer_id)
    .bind(staff_id)
    .bind(returned)
    .fetch_one(pool)
    .await
    .unwrap()
}
