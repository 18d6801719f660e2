//! Category repository (read-only)

use sqlx::PgPool;

use crate::models::Category;
use crate::store::{StoreError, StoreResult};

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i32) -> StoreResult<Category> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("category", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_category_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let err = CategoryRepo::new(&pool).get(-1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "category", .. }));
    }
}
