//! Reservation API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository;
use crate::db::repository::reservation::NewReservation;
use crate::utils::validation::{parse_datetime, validate_at_least_one, validate_positive_id};
use crate::utils::{AppError, AppJson, AppResult};
use shared::ApiResponse;
use shared::models::{Reservation, ReservationCreate, ReservationStatus};

/// POST /api/insert-reservation
pub async fn insert(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ReservationCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Reservation>>)> {
    validate_positive_id(payload.client_id, "client_id")?;
    let date = parse_datetime(&payload.date, "date")?;
    validate_at_least_one(payload.party_size, "party_size")?;
    let status: ReservationStatus = payload
        .status
        .trim()
        .parse::<ReservationStatus>()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = NewReservation {
        client_id: payload.client_id,
        date,
        party_size: payload.party_size,
        status,
    };
    let reservation = repository::reservation::create(state.pool(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Reservation inserted.",
            reservation,
        )),
    ))
}
