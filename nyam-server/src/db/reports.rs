//! Canned reports
//!
//! A fixed menu of eight parameterless read queries keyed by
//! [`ReportKind`]. There is no dynamic query construction anywhere: an
//! unknown key fails before touching the database, a known key runs
//! exactly the SQL written here.

use std::str::FromStr;

use sqlx::SqlitePool;

use super::repository::RepoResult;
use super::row::{JsonRow, rows_to_json};
use shared::models::UnknownVariant;

pub use super::repository::RepoError;

/// The closed set of report keys exposed by `GET /api/queries?type=...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ClientsReservations,
    ClientSpend,
    ClientsWithoutReservations,
    CategoryProductCounts,
    AvailableProducts,
    ReservationsByStatus,
    OrderSummaries,
    OrderLineDetails,
}

impl ReportKind {
    pub const ALL: [ReportKind; 8] = [
        ReportKind::ClientsReservations,
        ReportKind::ClientSpend,
        ReportKind::ClientsWithoutReservations,
        ReportKind::CategoryProductCounts,
        ReportKind::AvailableProducts,
        ReportKind::ReservationsByStatus,
        ReportKind::OrderSummaries,
        ReportKind::OrderLineDetails,
    ];

    /// Wire key, as used in the `type` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::ClientsReservations => "clients_reservations",
            ReportKind::ClientSpend => "client_spend",
            ReportKind::ClientsWithoutReservations => "clients_without_reservations",
            ReportKind::CategoryProductCounts => "category_product_counts",
            ReportKind::AvailableProducts => "available_products",
            ReportKind::ReservationsByStatus => "reservations_by_status",
            ReportKind::OrderSummaries => "order_summaries",
            ReportKind::OrderLineDetails => "order_line_details",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ClientsReservations => "Clients with their reservations",
            ReportKind::ClientSpend => "Total spent per client",
            ReportKind::ClientsWithoutReservations => "Clients without reservations",
            ReportKind::CategoryProductCounts => "Categories with product counts",
            ReportKind::AvailableProducts => "Products available today",
            ReportKind::ReservationsByStatus => "Reservations by status",
            ReportKind::OrderSummaries => "Order summaries",
            ReportKind::OrderLineDetails => "Order line details",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::ClientsReservations => {
                "Joins client and reservation to see how many people attend and the state of each booking."
            }
            ReportKind::ClientSpend => {
                "Groups orders by client and shows the accumulated spend using SUM over the total column."
            }
            ReportKind::ClientsWithoutReservations => {
                "LEFT JOIN between client and reservation filtering the null rows to find clients with no booking."
            }
            ReportKind::CategoryProductCounts => {
                "LEFT JOIN between category and product to count how many items each category holds."
            }
            ReportKind::AvailableProducts => {
                "Products marked available with their category and price, ordered by name."
            }
            ReportKind::ReservationsByStatus => {
                "Counts reservations per status together with the most recent booking date."
            }
            ReportKind::OrderSummaries => {
                "Orders with their client, total, payment method, status and number of lines."
            }
            ReportKind::OrderLineDetails => {
                "Every order line with its order, product and the subtotal frozen at insert time."
            }
        }
    }

    fn sql(&self) -> &'static str {
        match self {
            ReportKind::ClientsReservations => {
                "SELECT c.name AS client, r.date AS date, r.party_size AS party_size, \
                        r.status AS status \
                 FROM client c \
                 INNER JOIN reservation r ON c.id = r.client_id \
                 ORDER BY r.date DESC"
            }
            ReportKind::ClientSpend => {
                "SELECT c.name AS client, SUM(o.total) AS total_spent \
                 FROM client c \
                 INNER JOIN customer_order o ON c.id = o.client_id \
                 GROUP BY c.id, c.name \
                 ORDER BY total_spent DESC"
            }
            ReportKind::ClientsWithoutReservations => {
                "SELECT c.name AS client, c.email AS email \
                 FROM client c \
                 LEFT JOIN reservation r ON c.id = r.client_id \
                 WHERE r.id IS NULL \
                 ORDER BY c.name"
            }
            ReportKind::CategoryProductCounts => {
                "SELECT cat.name AS category, COUNT(p.id) AS products, \
                        SUM(CASE WHEN p.available THEN 1 ELSE 0 END) AS available \
                 FROM category cat \
                 LEFT JOIN product p ON cat.id = p.category_id \
                 GROUP BY cat.id, cat.name \
                 ORDER BY cat.name"
            }
            ReportKind::AvailableProducts => {
                "SELECT p.name AS product, p.price AS price, cat.name AS category, \
                        p.available AS available \
                 FROM product p \
                 LEFT JOIN category cat ON p.category_id = cat.id \
                 WHERE p.available = 1 \
                 ORDER BY cat.name, p.name"
            }
            ReportKind::ReservationsByStatus => {
                "SELECT r.status AS status, COUNT(*) AS reservations, \
                        MAX(r.date) AS latest \
                 FROM reservation r \
                 GROUP BY r.status \
                 ORDER BY reservations DESC"
            }
            ReportKind::OrderSummaries => {
                "SELECT o.id AS order_id, c.name AS client, o.total AS total, \
                        o.payment_method AS payment_method, o.status AS status, \
                        COUNT(l.id) AS lines \
                 FROM customer_order o \
                 LEFT JOIN client c ON o.client_id = c.id \
                 LEFT JOIN order_line l ON l.order_id = o.id \
                 GROUP BY o.id, c.name, o.total, o.payment_method, o.status \
                 ORDER BY o.id DESC"
            }
            ReportKind::OrderLineDetails => {
                "SELECT l.id AS line, o.id AS order_id, p.name AS product, \
                        l.quantity AS quantity, l.subtotal AS subtotal \
                 FROM order_line l \
                 LEFT JOIN customer_order o ON l.order_id = o.id \
                 LEFT JOIN product p ON l.product_id = p.id \
                 ORDER BY o.id DESC, l.id DESC"
            }
        }
    }
}

impl FromStr for ReportKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownVariant {
                field: "type",
                value: s.to_string(),
            })
    }
}

/// Execute one report and serialize its rows.
pub async fn run(pool: &SqlitePool, kind: ReportKind) -> RepoResult<Vec<JsonRow>> {
    let rows = sqlx::query(kind.sql()).fetch_all(pool).await?;
    rows_to_json(&rows).map_err(|e| RepoError::Database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_to_its_kind() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.key().parse::<ReportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("unknown_key".parse::<ReportKind>().is_err());
        assert!("".parse::<ReportKind>().is_err());
    }
}
