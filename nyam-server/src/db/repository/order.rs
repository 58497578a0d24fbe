//! Order Repository
//!
//! An order and its lines are written in one transaction, and the
//! product prices used for the subtotals are read inside that same
//! transaction, so the stored total is always consistent with the
//! stored lines even under concurrent product updates.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::{QueryBuilder, SqlitePool};

use super::{RepoError, RepoResult};
use crate::money;
use shared::models::{Order, OrderLine, OrderLineInput, OrderStatus, PaymentMethod};

/// Validated order, ready to insert. Subtotals and the total are
/// computed here, not by the caller.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client_id: i64,
    pub date: NaiveDateTime,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub lines: Vec<OrderLineInput>,
}

/// Outcome of a successful order insert.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: i64,
    pub total: f64,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, client_id, date, status, payment_method, total \
         FROM customer_order WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

pub async fn find_lines(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderLine>> {
    let lines = sqlx::query_as::<_, OrderLine>(
        "SELECT id, order_id, product_id, quantity, subtotal \
         FROM order_line WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customer_order")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_lines(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_line")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Create an order together with all its lines, atomically.
///
/// Resolves the referenced products' current prices in one batch lookup,
/// fails if any referenced product does not exist, computes each line's
/// subtotal and the order total, and commits order + lines as a unit.
pub async fn create(pool: &SqlitePool, data: NewOrder) -> RepoResult<CreatedOrder> {
    let mut tx = pool.begin().await?;

    // Distinct product ids, order preserved for stable error messages
    let mut product_ids: Vec<i64> = Vec::new();
    for line in &data.lines {
        if !product_ids.contains(&line.product_id) {
            product_ids.push(line.product_id);
        }
    }

    // Batch price lookup inside the transaction
    let mut builder: QueryBuilder<sqlx::Sqlite> =
        QueryBuilder::new("SELECT id, price FROM product WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in &product_ids {
        separated.push_bind(*id);
    }
    builder.push(")");
    let priced: Vec<(i64, f64)> = builder.build_query_as().fetch_all(&mut *tx).await?;

    let prices: HashMap<i64, f64> = priced.into_iter().collect();
    if let Some(missing) = product_ids.iter().find(|id| !prices.contains_key(*id)) {
        return Err(RepoError::ForeignKey(format!(
            "order references product {missing}, which does not exist"
        )));
    }

    let subtotals: Vec<f64> = data
        .lines
        .iter()
        .map(|line| money::line_subtotal(prices[&line.product_id], line.quantity))
        .collect();
    let total = money::sum(subtotals.iter().copied());

    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO customer_order (client_id, date, status, payment_method, total) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.client_id)
    .bind(data.date)
    .bind(data.status.as_str())
    .bind(data.payment_method.as_str())
    .bind(total)
    .fetch_one(&mut *tx)
    .await?;

    for (line, subtotal) in data.lines.iter().zip(&subtotals) {
        sqlx::query(
            "INSERT INTO order_line (order_id, product_id, quantity, subtotal) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(*subtotal)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(CreatedOrder {
        id: order_id,
        total,
    })
}
