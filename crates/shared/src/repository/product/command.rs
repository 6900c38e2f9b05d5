use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
    repository::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (category_id, name, description, price, stock, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(req.category_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.stock)
        .bind(&req.image)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                error!("❌ Unknown category {} for product {}", req.category_id, req.name);
                RepositoryError::ForeignKey(format!("category {} does not exist", req.category_id))
            } else {
                error!("❌ Failed to create product {}: {:?}", req.name, e);
                RepositoryError::from(e)
            }
        })?;

        info!("✅ Created product ID {}", product.product_id);
        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET category_id = $2,
                name        = $3,
                description = $4,
                price       = $5,
                stock       = $6,
                image       = $7,
                updated_at  = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.category_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.stock)
        .bind(&req.image)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                RepositoryError::ForeignKey(format!("category {} does not exist", req.category_id))
            } else {
                error!("❌ Failed to update product {}: {:?}", id, e);
                RepositoryError::from(e)
            }
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", id);
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let referenced: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM order_items WHERE product_id = $1")
                .bind(id)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        if referenced > 0 {
            error!(
                "❌ Refusing to delete product {}: referenced by {} order items",
                id, referenced
            );
            return Err(RepositoryError::ProductInUse(id));
        }

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {}", id);
        Ok(())
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503")
    )
}
