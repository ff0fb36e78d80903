mod common;

use axum::http::{StatusCode, header};
use chrono::Utc;
use sakila_rentals::api::dto::rental::RentalResponse;
use serde_json::json;

fn ids(rentals: &[RentalResponse]) -> Vec<i32> {
    rentals.iter().map(|r| r.rental_id).collect()
}

// ─── GET /rental/filtered ────────────────────────────────────────────────────

#[tokio::test]
async fn test_filtered_without_params_returns_all_in_id_order() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.get("/rental/filtered").await;

    response.assert_status_ok();
    let rentals = response.json::<Vec<RentalResponse>>();
    assert_eq!(ids(&rentals), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_filtered_empty_store_returns_empty_list() {
    let server = common::make_server(common::seeded_repository());

    let response = server.get("/rental/filtered").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_filtered_by_customer_first_name_prefix() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server
        .get("/rental/filtered")
        .add_query_param("customerFirstName", "MA")
        .await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json::<Vec<RentalResponse>>()), vec![1, 3]);
}

#[tokio::test]
async fn test_filtered_by_film_title_prefix() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server
        .get("/rental/filtered")
        .add_query_param("filmTitle", "AC")
        .await;

    assert_eq!(ids(&response.json::<Vec<RentalResponse>>()), vec![1, 2]);
}

#[tokio::test]
async fn test_filtered_combines_params_with_and() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server
        .get("/rental/filtered")
        .add_query_param("customerLastName", "SMITH")
        .add_query_param("staffFirstName", "Jon")
        .await;

    assert_eq!(ids(&response.json::<Vec<RentalResponse>>()), vec![3]);

    let response = server
        .get("/rental/filtered")
        .add_query_param("customerLastName", "SMITH")
        .add_query_param("staffLastName", "Stephens")
        .add_query_param("filmTitle", "ACADEMY")
        .await;

    assert!(response.json::<Vec<RentalResponse>>().is_empty());
}

#[tokio::test]
async fn test_filtered_blank_params_are_ignored() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.get("/rental/filtered?filmTitle=&staffLastName=%20%20").await;

    response.assert_status_ok();
    assert_eq!(ids(&response.json::<Vec<RentalResponse>>()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_filtered_is_case_sensitive_and_prefix_only() {
    let server = common::make_server(common::repository_with_rentals());

    let lowercase = server
        .get("/rental/filtered")
        .add_query_param("customerFirstName", "mary")
        .await;
    assert!(lowercase.json::<Vec<RentalResponse>>().is_empty());

    let infix = server
        .get("/rental/filtered")
        .add_query_param("filmTitle", "DINOSAUR")
        .await;
    assert!(infix.json::<Vec<RentalResponse>>().is_empty());
}

#[tokio::test]
async fn test_filtered_result_is_subset_of_unfiltered() {
    let server = common::make_server(common::repository_with_rentals());

    let all = ids(&server.get("/rental/filtered").await.json::<Vec<RentalResponse>>());

    for (param, value) in [
        ("customerFirstName", "P"),
        ("customerLastName", "S"),
        ("filmTitle", "A"),
        ("staffFirstName", "Mike"),
        ("staffLastName", "H"),
    ] {
        let filtered = ids(
            &server
                .get("/rental/filtered")
                .add_query_param(param, value)
                .await
                .json::<Vec<RentalResponse>>(),
        );
        assert!(filtered.iter().all(|id| all.contains(id)), "{param}={value}");
    }
}

// ─── GET /rental/{id} ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_by_id_success() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.get("/rental/2").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["rentalId"], 2);
    assert_eq!(body["inventoryId"], 5);
    assert_eq!(body["customerId"], 2);
    assert_eq!(body["staffId"], 2);
    assert_eq!(body["rentalDate"], "2005-05-24T22:53:30Z");
    assert_eq!(body["returnDate"], "2005-05-26T22:04:30Z");
    assert_eq!(body["lastUpdate"], "2005-05-26T22:04:30Z");
}

#[tokio::test]
async fn test_get_by_id_not_found_is_plain_text() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.get("/rental/777").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Could not find rental with ID 777");
}

#[tokio::test]
async fn test_get_by_id_rejects_non_numeric_id() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.get("/rental/abc").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

// ─── POST /rental ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_rental() {
    let server = common::make_server(common::repository_with_rentals());

    let before = Utc::now();
    let response = server
        .post("/rental")
        .json(&json!({ "inventoryId": 5, "customerId": 3, "staffId": 1 }))
        .await;
    let after = Utc::now();

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header(header::LOCATION), "");

    let created = response.json::<RentalResponse>();
    assert_eq!(created.rental_id, 4);
    assert_eq!(created.inventory_id, 5);
    assert_eq!(created.customer_id, 3);
    assert_eq!(created.staff_id, 1);
    assert!(created.return_date.is_none());
    assert_eq!(created.rental_date, created.last_update);
    assert!(before <= created.rental_date && created.rental_date <= after);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let server = common::make_server(common::seeded_repository());

    let created = server
        .post("/rental")
        .json(&json!({ "inventoryId": 9, "customerId": 2, "staffId": 2 }))
        .await
        .json::<RentalResponse>();

    let fetched = server
        .get(&format!("/rental/{}", created.rental_id))
        .await
        .json::<RentalResponse>();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_unknown_inventory_is_internal_error() {
    let server = common::make_server(common::seeded_repository());

    let response = server
        .post("/rental")
        .json(&json!({ "inventoryId": 404, "customerId": 1, "staffId": 1 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");

    let rentals = server.get("/rental/filtered").await.json::<Vec<RentalResponse>>();
    assert!(rentals.is_empty());
}

#[tokio::test]
async fn test_create_with_out_of_range_staff_is_rejected() {
    let server = common::make_server(common::seeded_repository());

    let response = server
        .post("/rental")
        .json(&json!({ "inventoryId": 1, "customerId": 1, "staffId": 300 }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let server = common::make_server(common::seeded_repository());

    let response = server
        .post("/rental")
        .json(&json!({ "inventoryId": 1, "customerId": 1 }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

// ─── PUT /rental/{id} ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_close() {
    let server = common::make_server(common::seeded_repository());

    let created = server
        .post("/rental")
        .json(&json!({ "inventoryId": 5, "customerId": 3, "staffId": 1 }))
        .await
        .json::<RentalResponse>();
    assert!(created.return_date.is_none());

    let response = server.put(&format!("/rental/{}", created.rental_id)).await;

    response.assert_status_ok();
    let closed = response.json::<RentalResponse>();
    let returned = closed.return_date.unwrap();
    assert!(returned >= closed.rental_date);
    assert_eq!(closed.last_update, returned);
    assert_eq!(closed.rental_date, created.rental_date);

    let fetched = server
        .get(&format!("/rental/{}", created.rental_id))
        .await
        .json::<RentalResponse>();
    assert_eq!(fetched, closed);
}

#[tokio::test]
async fn test_close_not_found_is_plain_text() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.put("/rental/55").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Could not find rental with ID 55");
}

#[tokio::test]
async fn test_close_already_closed_conflicts_and_keeps_return_date() {
    let server = common::make_server(common::repository_with_rentals());

    let response = server.put("/rental/2").await;

    response.assert_status(StatusCode::CONFLICT);

    let unchanged = server.get("/rental/2").await.json::<RentalResponse>();
    assert_eq!(unchanged.return_date, Some(common::at("2005-05-26T22:04:30Z")));
}

#[tokio::test]
async fn test_close_twice() {
    let server = common::make_server(common::repository_with_rentals());

    server.put("/rental/1").await.assert_status_ok();
    server
        .put("/rental/1")
        .await
        .assert_status(StatusCode::CONFLICT);
}

// ─── Full application router ─────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let server = common::make_app_server(common::repository_with_rentals());

    let filtered = server.get("/rental/filtered/?filmTitle=").await;
    filtered.assert_status_ok();
    assert_eq!(ids(&filtered.json::<Vec<RentalResponse>>()), vec![1, 2, 3]);

    let single = server.get("/rental/1/").await;
    single.assert_status_ok();
    assert_eq!(single.json::<RentalResponse>().rental_id, 1);

    server.put("/rental/3/").await.assert_status_ok();
}
