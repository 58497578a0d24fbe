//! Order insert: computed totals, atomicity, referential failures.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{seed_category, seed_client, seed_product, spawn};
use nyam_server::db::repository;

#[tokio::test]
async fn order_total_is_the_sum_of_line_subtotals() {
    let app = spawn().await;
    let category = seed_category(&app, "Plats").await;
    let pizza = seed_product(&app, "Pizza", 10.0, category).await;
    let soup = seed_product(&app, "Sopa", 5.5, category).await;
    let client = seed_client(&app, "Laia Martí", "laia@example.com").await;

    let (status, body) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "card",
                "lines": [
                    { "product_id": pizza, "quantity": 2 },
                    { "product_id": soup, "quantity": 1 },
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["total"], 25.5);

    let order_id = body["data"]["order_id"].as_i64().unwrap();
    let order = repository::order::find_by_id(app.state.pool(), order_id)
        .await
        .unwrap()
        .expect("order persisted");
    assert_eq!(order.total, 25.5);
    assert_eq!(order.status, "in_progress");
    assert_eq!(order.payment_method, "card");

    let lines = repository::order::find_lines(app.state.pool(), order_id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].subtotal, 20.0);
    assert_eq!(lines[1].subtotal, 5.5);
}

#[tokio::test]
async fn subtotals_freeze_the_price_at_insert_time() {
    let app = spawn().await;
    let category = seed_category(&app, "Plats").await;
    let product = seed_product(&app, "Taco", 4.25, category).await;
    let client = seed_client(&app, "Pau Costa", "pau@example.com").await;

    let (_, body) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "delivered",
                "payment_method": "cash",
                "lines": [{ "product_id": product, "quantity": 3 }],
            }),
        )
        .await;
    let order_id = body["data"]["order_id"].as_i64().unwrap();

    let lines = repository::order::find_lines(app.state.pool(), order_id)
        .await
        .unwrap();
    // 3 × 4.25, computed in decimal, not floating point
    assert_eq!(lines[0].subtotal, 12.75);
    assert_eq!(body["data"]["total"], 12.75);
}

#[tokio::test]
async fn unknown_product_fails_and_persists_nothing() {
    let app = spawn().await;
    let category = seed_category(&app, "Plats").await;
    let product = seed_product(&app, "Pizza", 10.0, category).await;
    let client = seed_client(&app, "Aina Ribas", "aina@example.com").await;

    let (status, body) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "card",
                "lines": [
                    { "product_id": product, "quantity": 1 },
                    { "product_id": 9999, "quantity": 1 },
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("9999"));

    assert_eq!(repository::order::count(app.state.pool()).await.unwrap(), 0);
    assert_eq!(
        repository::order::count_lines(app.state.pool()).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn order_payload_validation() {
    let app = spawn().await;
    let category = seed_category(&app, "Plats").await;
    let product = seed_product(&app, "Pizza", 10.0, category).await;
    let client = seed_client(&app, "Hug Navarro", "hug@example.com").await;

    // empty line list
    let (status, _) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "card",
                "lines": [],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // zero quantity
    let (status, _) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "card",
                "lines": [{ "product_id": product, "quantity": 0 }],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // unknown payment method
    let (status, _) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "cheque",
                "lines": [{ "product_id": product, "quantity": 1 }],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // unknown status
    let (status, _) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "shipped",
                "payment_method": "card",
                "lines": [{ "product_id": product, "quantity": 1 }],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // nothing persisted by any of the rejected payloads
    assert_eq!(repository::order::count(app.state.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_products_across_lines_are_priced_once_each() {
    let app = spawn().await;
    let category = seed_category(&app, "Plats").await;
    let product = seed_product(&app, "Pizza", 10.0, category).await;
    let client = seed_client(&app, "Clara Soriano", "clara@example.com").await;

    // The same product may appear on several lines; each keeps its own
    // quantity and subtotal.
    let (status, body) = app
        .post_json(
            "/api/insert-order",
            json!({
                "client_id": client,
                "date": "2026-09-20",
                "status": "in_progress",
                "payment_method": "instant_transfer",
                "lines": [
                    { "product_id": product, "quantity": 1 },
                    { "product_id": product, "quantity": 2 },
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["total"], 30.0);

    let order_id = body["data"]["order_id"].as_i64().unwrap();
    let lines = repository::order::find_lines(app.state.pool(), order_id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 2);
}
