//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository;
use crate::db::repository::order::NewOrder;
use crate::money;
use crate::utils::validation::{parse_datetime, validate_at_least_one, validate_positive_id};
use crate::utils::{AppError, AppJson, AppResult};
use shared::ApiResponse;
use shared::models::{OrderCreate, OrderStatus, PaymentMethod};

/// Returned to the caller so the form can display the computed total.
#[derive(Debug, Serialize)]
pub struct OrderTotal {
    pub order_id: i64,
    pub total: f64,
}

/// POST /api/insert-order
///
/// The repository resolves the referenced products' prices, computes the
/// subtotals and the total, and writes order + lines in one transaction.
pub async fn insert(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderTotal>>)> {
    validate_positive_id(payload.client_id, "client_id")?;
    let date = parse_datetime(&payload.date, "date")?;
    let status: OrderStatus = payload
        .status
        .trim()
        .parse::<OrderStatus>()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let payment_method: PaymentMethod = payload
        .payment_method
        .trim()
        .parse::<PaymentMethod>()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if payload.lines.is_empty() {
        return Err(AppError::validation(
            "an order must contain at least one line",
        ));
    }
    for line in &payload.lines {
        validate_positive_id(line.product_id, "product_id")?;
        validate_at_least_one(line.quantity, "quantity")?;
        if line.quantity > money::MAX_QUANTITY {
            return Err(AppError::validation(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                money::MAX_QUANTITY,
                line.quantity
            )));
        }
    }

    let data = NewOrder {
        client_id: payload.client_id,
        date,
        status,
        payment_method,
        lines: payload.lines,
    };
    let created = repository::order::create(state.pool(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Order inserted.",
            OrderTotal {
                order_id: created.id,
                total: created.total,
            },
        )),
    ))
}
