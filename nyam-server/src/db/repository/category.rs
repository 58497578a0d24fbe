//! Category Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Category, CategoryCreate};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(categories)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let id = sqlx::query_scalar::<_, i64>("INSERT INTO category (name) VALUES (?) RETURNING id")
        .bind(&data.name)
        .fetch_one(pool)
        .await?;
    Ok(Category {
        id,
        name: data.name,
    })
}
