//! Client Model

use serde::{Deserialize, Serialize};

/// Client entity
///
/// The password is an opaque demo string: it is never hashed or verified,
/// there is no login anywhere in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// Unique across all clients, stored trimmed and lower-cased
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Create client payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}
