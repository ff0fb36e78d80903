//! API route configuration.

use crate::api::handlers::{
    close_rental_handler, create_rental_handler, filtered_rentals_handler, rental_by_id_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Rental routes.
///
/// # Endpoints
///
/// - `GET  /rental/filtered` - List rentals by optional name/title prefixes
/// - `GET  /rental/{id}`     - Fetch one rental
/// - `POST /rental`          - Open a rental
/// - `PUT  /rental/{id}`     - Close a rental
pub fn rental_routes() -> Router<AppState> {
    Router::new()
        .route("/rental", post(create_rental_handler))
        .route("/rental/filtered", get(filtered_rentals_handler))
        .route(
            "/rental/{id}",
            get(rental_by_id_handler).put(close_rental_handler),
        )
}
