//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in euros. Stored as REAL; arithmetic on prices goes
    /// through `Decimal` (see the server's money module).
    pub price: f64,
    pub available: bool,
    /// Category reference
    pub category_id: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub available: bool,
}

/// Product with its category name resolved, as listed by `GET /api/products`
/// for the order form's product selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub available: bool,
    /// Category name, if the category still exists
    pub category: Option<String>,
}
