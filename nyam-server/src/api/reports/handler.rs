//! Report API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::reports::{self, ReportKind};
use crate::db::row::JsonRow;
use crate::utils::{AppError, AppResult};
use shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// One of the eight report keys
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// GET /api/queries?type=K — run one canned report.
pub async fn run(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ApiResponse<Vec<JsonRow>>>> {
    let key = query.kind.unwrap_or_default();
    let kind: ReportKind = key
        .parse()
        .map_err(|_| AppError::validation(format!("type parameter not recognized: '{key}'")))?;

    let rows = reports::run(state.pool(), kind).await?;
    Ok(Json(ApiResponse::ok(rows)))
}
