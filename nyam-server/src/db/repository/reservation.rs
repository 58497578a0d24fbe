//! Reservation Repository

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Reservation, ReservationStatus};

/// Validated reservation, ready to insert.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub client_id: i64,
    pub date: NaiveDateTime,
    pub party_size: i64,
    pub status: ReservationStatus,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(
        "SELECT id, client_id, date, party_size, status FROM reservation ORDER BY date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

pub async fn create(pool: &SqlitePool, data: NewReservation) -> RepoResult<Reservation> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservation (client_id, date, party_size, status) VALUES (?, ?, ?, ?) \
         RETURNING id",
    )
    .bind(data.client_id)
    .bind(data.date)
    .bind(data.party_size)
    .bind(data.status.as_str())
    .fetch_one(pool)
    .await?;
    Ok(Reservation {
        id,
        client_id: data.client_id,
        date: data.date,
        party_size: data.party_size,
        status: data.status.to_string(),
    })
}
