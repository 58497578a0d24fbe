//! Client Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Client, ClientCreate};

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Client>> {
    let client = sqlx::query_as::<_, Client>(
        "SELECT id, name, email, phone, password FROM client WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(client)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM client")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a client. The unique index on email turns a concurrent
/// duplicate into `RepoError::Duplicate` even when the caller's
/// existence pre-check passed.
pub async fn create(pool: &SqlitePool, data: ClientCreate) -> RepoResult<Client> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO client (name, email, phone, password) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.password)
    .fetch_one(pool)
    .await?;
    Ok(Client {
        id,
        name: data.name,
        email: data.email,
        phone: data.phone,
        password: data.password,
    })
}
