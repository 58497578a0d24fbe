//! Full table dumps for the read-only data view
//!
//! One snapshot query per table, with references resolved to names the
//! way the data page presents them (passwords are not dumped).

use sqlx::SqlitePool;

use super::repository::{RepoError, RepoResult};
use super::row::{JsonRow, rows_to_json};

/// One dumped table: display title plus its snapshot query.
#[derive(Debug, Clone, Copy)]
pub struct TableDump {
    pub title: &'static str,
    sql: &'static str,
}

pub const TABLES: [TableDump; 6] = [
    TableDump {
        title: "Categories",
        sql: "SELECT id, name FROM category ORDER BY id",
    },
    TableDump {
        title: "Products",
        sql: "SELECT p.id, p.name, p.price, c.name AS category, p.available \
              FROM product p LEFT JOIN category c ON p.category_id = c.id \
              ORDER BY p.id",
    },
    TableDump {
        title: "Clients",
        sql: "SELECT id, name, email, phone FROM client ORDER BY id",
    },
    TableDump {
        title: "Reservations",
        sql: "SELECT r.id, COALESCE(c.name, r.client_id) AS client, r.date, \
              r.party_size, r.status \
              FROM reservation r LEFT JOIN client c ON r.client_id = c.id \
              ORDER BY r.date DESC",
    },
    TableDump {
        title: "Orders",
        sql: "SELECT o.id, COALESCE(c.name, o.client_id) AS client, o.date, o.total, \
              o.status, o.payment_method, COUNT(l.id) AS lines \
              FROM customer_order o \
              LEFT JOIN client c ON o.client_id = c.id \
              LEFT JOIN order_line l ON l.order_id = o.id \
              GROUP BY o.id, c.name, o.date, o.total, o.status, o.payment_method \
              ORDER BY o.id DESC",
    },
    TableDump {
        title: "Order lines",
        sql: "SELECT l.id, l.order_id, p.name AS product, l.quantity, l.subtotal \
              FROM order_line l LEFT JOIN product p ON l.product_id = p.id \
              ORDER BY l.id DESC",
    },
];

/// Snapshot every table, in presentation order.
pub async fn run_all(pool: &SqlitePool) -> RepoResult<Vec<(&'static str, Vec<JsonRow>)>> {
    let mut out = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let rows = sqlx::query(table.sql).fetch_all(pool).await?;
        let rows = rows_to_json(&rows).map_err(|e| RepoError::Database(e.to_string()))?;
        out.push((table.title, rows));
    }
    Ok(out)
}
