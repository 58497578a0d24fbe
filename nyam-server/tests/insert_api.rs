//! Insert endpoint behavior: validation, normalization, conflict and
//! referential failures.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{seed_category, seed_client, spawn};
use nyam_server::db::repository;

#[tokio::test]
async fn category_insert_roundtrip() {
    let app = spawn().await;

    let (status, body) = app
        .post_json("/api/insert-category", json!({ "name": "Carns" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Carns");

    let categories = repository::category::find_all(app.state.pool())
        .await
        .unwrap();
    assert!(categories.iter().any(|c| c.name == "Carns"));
}

#[tokio::test]
async fn category_name_is_trimmed_and_length_checked() {
    let app = spawn().await;

    let (status, body) = app
        .post_json("/api/insert-category", json!({ "name": "  Postres  " }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Postres");

    for bad in ["", "  ", "ab"] {
        let (status, _) = app
            .post_json("/api/insert-category", json!({ "name": bad }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "name '{bad}'");
    }
}

#[tokio::test]
async fn missing_or_mistyped_fields_are_rejected() {
    let app = spawn().await;

    // missing field
    let (status, _) = app.post_json("/api/insert-category", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // wrong primitive type
    let (status, _) = app
        .post_json("/api/insert-category", json!({ "name": 42 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // not even JSON shape
    let (status, _) = app
        .post_json("/api/insert-product", json!({ "name": "Pizza", "price": "a lot" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_method_is_method_not_allowed() {
    let app = spawn().await;
    let (status, _) = app.get("/api/insert-category").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn client_email_is_normalized() {
    let app = spawn().await;
    seed_client(&app, "Laia Martí", "  Laia.MARTI@Example.com  ").await;

    let stored = repository::client::find_by_email(app.state.pool(), "laia.marti@example.com")
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn duplicate_email_conflicts_and_leaves_store_unchanged() {
    let app = spawn().await;
    seed_client(&app, "Laia Martí", "laia@example.com").await;

    let before = repository::client::count(app.state.pool()).await.unwrap();

    // Same email, different case and padding
    let (status, body) = app
        .post_json(
            "/api/insert-client",
            json!({
                "name": "Another Person",
                "email": " LAIA@example.com ",
                "phone": "698765432",
                "password": "different1",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already registered"));

    let after = repository::client::count(app.state.pool()).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn client_requires_every_field_nonempty() {
    let app = spawn().await;
    let payloads = [
        json!({ "name": "", "email": "a@b.com", "phone": "612345678", "password": "x" }),
        json!({ "name": "Pau Costa", "email": "", "phone": "612345678", "password": "x" }),
        json!({ "name": "Pau Costa", "email": "a@b.com", "phone": " ", "password": "x" }),
        json!({ "name": "Pau Costa", "email": "a@b.com", "phone": "612345678", "password": "" }),
    ];
    for payload in payloads {
        let (status, _) = app.post_json("/api/insert-client", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
    }
}

#[tokio::test]
async fn product_insert_validates_price_and_category() {
    let app = spawn().await;
    let category_id = seed_category(&app, "Pizzes").await;

    let (status, body) = app
        .post_json(
            "/api/insert-product",
            json!({
                "name": "Pizza Mediterrània",
                "price": 12.5,
                "category_id": category_id,
                "available": true,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], 12.5);

    // negative price
    let (status, _) = app
        .post_json(
            "/api/insert-product",
            json!({ "name": "Gratis", "price": -1.0, "category_id": category_id, "available": true }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // dangling category reference fails the foreign key, reported as 400
    let (status, _) = app
        .post_json(
            "/api/insert-product",
            json!({ "name": "Orfe", "price": 5.0, "category_id": 9999, "available": true }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reservation_insert_validates_fields() {
    let app = spawn().await;
    let client_id = seed_client(&app, "Marc Llopis", "marc@example.com").await;

    let (status, body) = app
        .post_json(
            "/api/insert-reservation",
            json!({
                "client_id": client_id,
                "date": "2026-09-20T20:30",
                "party_size": 4,
                "status": "confirmed",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let reservations = repository::reservation::find_all(app.state.pool())
        .await
        .unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].party_size, 4);
    assert_eq!(reservations[0].status, "confirmed");

    // party of zero
    let (status, _) = app
        .post_json(
            "/api/insert-reservation",
            json!({ "client_id": client_id, "date": "2026-09-20T20:30", "party_size": 0, "status": "pending" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // unknown status
    let (status, _) = app
        .post_json(
            "/api/insert-reservation",
            json!({ "client_id": client_id, "date": "2026-09-20T20:30", "party_size": 2, "status": "maybe" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // unparseable date
    let (status, _) = app
        .post_json(
            "/api/insert-reservation",
            json!({ "client_id": client_id, "date": "tonight", "party_size": 2, "status": "pending" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
