//! Handlers for the rental endpoints (list, lookup, create, close).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
};

use crate::api::dto::rental::{RentalFilterParams, RentalRequest, RentalResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists rentals filtered by customer, film and staff name prefixes.
///
/// # Endpoint
///
/// `GET /rental/filtered?customerFirstName=&customerLastName=&filmTitle=&staffFirstName=&staffLastName=`
///
/// Every parameter is optional; blank values are ignored. Supplied values must
/// all match (AND), each as a case-sensitive prefix. Results are ordered by
/// rental id ascending.
pub async fn filtered_rentals_handler(
    State(state): State<AppState>,
    params: Result<Query<RentalFilterParams>, QueryRejection>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let Query(params) = params?;
    let rentals = state.rental_service.list_filtered(&params.into()).await?;
    Ok(Json(rentals))
}

/// Returns a single rental.
///
/// # Endpoint
///
/// `GET /rental/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an integer.
/// Returns 404 Not Found with a plain-text message if the rental doesn't exist.
pub async fn rental_by_id_handler(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<RentalResponse>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.rental_service.get_by_id(id).await?))
}

/// Opens a new rental.
///
/// # Endpoint
///
/// `POST /rental`
///
/// # Request Body
///
/// ```json
/// { "inventoryId": 5, "customerId": 3, "staffId": 1 }
/// ```
///
/// Responds with 201 Created, an empty `Location` header and the stored rental.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a valid rental request.
/// Returns 500 Internal Server Error if the inventory item, customer or staff
/// member doesn't exist.
pub async fn create_rental_handler(
    State(state): State<AppState>,
    payload: Result<Json<RentalRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1], Json<RentalResponse>), AppError>
{
    let Json(payload) = payload?;
    let rental = state.rental_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "")],
        Json(rental),
    ))
}

/// Closes a rental by stamping its return date.
///
/// # Endpoint
///
/// `PUT /rental/{id}`
///
/// # Errors
///
/// Returns 404 Not Found with a plain-text message if the rental doesn't exist.
/// Returns 409 Conflict if the rental is already closed.
pub async fn close_rental_handler(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<RentalResponse>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.rental_service.close(id).await?))
}
