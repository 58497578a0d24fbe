//! Product Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Product, ProductCreate, ProductSummary};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, available, category_id FROM product WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

/// All products with their category name resolved, ordered by name, for
/// the order form's product selector.
pub async fn find_summaries(pool: &SqlitePool) -> RepoResult<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(
        "SELECT p.id, p.name, p.price, p.available, c.name AS category \
         FROM product p LEFT JOIN category c ON p.category_id = c.id \
         ORDER BY p.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product (name, price, available, category_id) VALUES (?, ?, ?, ?) \
         RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.available)
    .bind(data.category_id)
    .fetch_one(pool)
    .await?;
    Ok(Product {
        id,
        name: data.name,
        price: data.price,
        available: data.available,
        category_id: data.category_id,
    })
}
