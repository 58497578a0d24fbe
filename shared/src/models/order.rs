//! Order Model
//!
//! An order and its lines are created together, atomically; an order is
//! never observed without at least one line. Line subtotals freeze the
//! product price at insert time and are not recomputed later.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Client reference
    pub client_id: i64,
    pub date: NaiveDateTime,
    /// One of [`OrderStatus`], stored as text
    pub status: String,
    /// One of [`PaymentMethod`], stored as text
    pub payment_method: String,
    /// Sum of the lines' subtotals, computed server-side at insert time
    pub total: f64,
}

/// Order line entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// product price at insert time × quantity
    pub subtotal: f64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub client_id: i64,
    pub date: String,
    pub status: String,
    pub payment_method: String,
    pub lines: Vec<OrderLineInput>,
}

/// One requested line within a create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Error returned when parsing a closed vocabulary fails
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {field}: '{value}'")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

/// Closed order status vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InProgress,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(OrderStatus::InProgress),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownVariant {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Closed payment method vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    InstantTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::InstantTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::InstantTransfer => "instant_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            "instant_transfer" => Ok(PaymentMethod::InstantTransfer),
            other => Err(UnknownVariant {
                field: "payment_method",
                value: other.to_string(),
            }),
        }
    }
}
