use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product,
    repository::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = crate::repository::page_bounds(req.page, req.page_size);

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY product_id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn find_random(&self) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY RANDOM() LIMIT 1"
        ))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch random product: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
