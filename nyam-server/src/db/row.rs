//! Row serializer
//!
//! Dynamically-shaped query results (the canned reports, the table
//! dumps) must cross the JSON boundary without knowing their columns in
//! advance. This converts a raw SQLite row into a JSON-safe map: NULL
//! stays null, INTEGER becomes an i64 number, REAL an f64 number,
//! BOOLEAN a bool, TEXT (including the ISO datetime columns) a string,
//! and anything else falls back to a textual marker.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// One serialized result row: column name → JSON-safe value
pub type JsonRow = Map<String, Value>;

/// Convert a whole result set.
pub fn rows_to_json(rows: &[SqliteRow]) -> Result<Vec<JsonRow>, sqlx::Error> {
    rows.iter().map(row_to_json).collect()
}

/// Convert one row, preserving column order.
pub fn row_to_json(row: &SqliteRow) -> Result<JsonRow, sqlx::Error> {
    let mut out = Map::new();
    for (index, column) in row.columns().iter().enumerate() {
        out.insert(column.name().to_string(), column_to_json(row, index)?);
    }
    Ok(out)
}

fn column_to_json(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" | "NUMERIC" => float_value(row.try_get::<f64, _>(index)?),
        "BOOLEAN" => Value::from(row.try_get::<bool, _>(index)?),
        "TEXT" | "DATETIME" | "DATE" | "TIME" => Value::from(row.try_get::<String, _>(index)?),
        // BLOB and anything unexpected: textual fallback rather than an error
        other => match row.try_get::<String, _>(index) {
            Ok(text) => Value::from(text),
            Err(_) => Value::from(format!("<{}>", other.to_ascii_lowercase())),
        },
    };
    Ok(value)
}

fn float_value(value: f64) -> Value {
    // NaN/Infinity have no JSON representation
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    async fn pool() -> SqlitePool {
        SqlitePool::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn mixed_value_types_become_json_safe() {
        let pool = pool().await;
        let rows = sqlx::query(
            "SELECT NULL AS \"nothing\", 1.5 AS amount, 42 AS count, 'text' AS label, \
             '2026-01-01 10:00:00' AS ts",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let json = rows_to_json(&rows).unwrap();
        let row = &json[0];
        assert!(row["nothing"].is_null());
        assert_eq!(row["amount"], 1.5);
        assert_eq!(row["count"], 42);
        assert_eq!(row["label"], "text");
        assert_eq!(row["ts"], "2026-01-01 10:00:00");
    }

    #[tokio::test]
    async fn column_order_is_preserved() {
        let pool = pool().await;
        let rows = sqlx::query("SELECT 1 AS z, 2 AS a, 3 AS m")
            .fetch_all(&pool)
            .await
            .unwrap();

        let json = rows_to_json(&rows).unwrap();
        let keys: Vec<&str> = json[0].keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[tokio::test]
    async fn declared_boolean_and_datetime_columns_decode_by_type() {
        let pool = pool().await;
        sqlx::query("CREATE TABLE t (flag BOOLEAN NOT NULL, at DATETIME NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (flag, at) VALUES (1, '2026-03-14 20:30:00')")
            .execute(&pool)
            .await
            .unwrap();

        let rows = sqlx::query("SELECT flag, at FROM t")
            .fetch_all(&pool)
            .await
            .unwrap();
        let row = &rows_to_json(&rows).unwrap()[0];
        assert_eq!(row["flag"], true);
        assert_eq!(row["at"], "2026-03-14 20:30:00");
    }
}
