use crate::{
    abstract_trait::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

const CATEGORY_COLUMNS: &str = "category_id, name, description, created_at, updated_at";

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        info!("🔍 Fetching categories with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let (limit, offset) = crate::repository::page_bounds(req.page, req.page_size);

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM categories
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let categories = sqlx::query_as::<_, Category>(&format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM categories
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY category_id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (name, description, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category {}: {:?}", req.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Created category ID {}", category.category_id);
        Ok(category)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = $2, description = $3, updated_at = current_timestamp
            WHERE category_id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated category ID {}", id);
        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
                .bind(id)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        if dependents > 0 {
            error!(
                "❌ Refusing to delete category {}: {} products still attached",
                id, dependents
            );
            return Err(RepositoryError::CategoryInUse(id));
        }

        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted category ID {}", id);
        Ok(())
    }
}
