use crate::{
    abstract_trait::OrderItemCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
    errors::RepositoryError,
    model::{OrderItem, Product},
    repository::{order::ORDER_ITEM_COLUMNS, product::PRODUCT_COLUMNS},
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

/// Standalone order-item mutations. Each method is one transaction that also
/// keeps the product stock and the owning order's total in step: the total
/// is re-derived from `SUM(order_items.price)` before committing.
#[derive(Clone)]
pub struct OrderItemCommandRepository {
    db: ConnectionPool,
}

impl OrderItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn lock_product(
        tx: &mut Transaction<'_, Postgres>,
        product_id: i32,
    ) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1 FOR UPDATE"
        ))
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn adjust_stock(
        tx: &mut Transaction<'_, Postgres>,
        product_id: i32,
        delta: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE products SET stock = stock + $1 WHERE product_id = $2")
            .bind(delta)
            .bind(product_id)
            .execute(&mut **tx)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn refresh_order_total(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE orders
            SET total_amount = (
                    SELECT COALESCE(SUM(price), 0)
                    FROM order_items
                    WHERE order_id = $1
                ),
                updated_at = current_timestamp
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .execute(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for OrderItemCommandRepository {
    async fn create(&self, req: &CreateOrderItemRequest) -> Result<OrderItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE order_id = $1")
            .bind(req.order_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if order_exists == 0 {
            return Err(RepositoryError::NotFound);
        }

        let product = Self::lock_product(&mut tx, req.product_id).await?;

        if product.stock < req.quantity {
            error!(
                "❌ Not enough stock for product {}: requested={}, available={}",
                req.product_id, req.quantity, product.stock
            );
            return Err(RepositoryError::InsufficientStock {
                product_id: req.product_id,
            });
        }

        let item = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {ORDER_ITEM_COLUMNS}
            "#
        ))
        .bind(req.order_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(product.price * req.quantity as i64)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        Self::adjust_stock(&mut tx, req.product_id, -req.quantity).await?;
        Self::refresh_order_total(&mut tx, req.order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order item ID {} on order {}",
            item.order_item_id, item.order_id
        );
        Ok(item)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let old = sqlx::query_as::<_, OrderItem>(&format!(
            "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_item_id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        // The old quantity goes back to the product it was taken from, which
        // is not necessarily the product the line is being switched to.
        Self::lock_product(&mut tx, old.product_id).await?;
        Self::adjust_stock(&mut tx, old.product_id, old.quantity).await?;

        // Re-read after the restore so a same-product update sees the old
        // quantity as available again.
        let product = Self::lock_product(&mut tx, req.product_id).await?;

        if product.stock < req.quantity {
            error!(
                "❌ Not enough stock for product {}: requested={}, available={}",
                req.product_id, req.quantity, product.stock
            );
            return Err(RepositoryError::InsufficientStock {
                product_id: req.product_id,
            });
        }

        let item = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            UPDATE order_items
            SET product_id = $2,
                quantity   = $3,
                price      = $4,
                updated_at = current_timestamp
            WHERE order_item_id = $1
            RETURNING {ORDER_ITEM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(product.price * req.quantity as i64)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        Self::adjust_stock(&mut tx, req.product_id, -req.quantity).await?;
        Self::refresh_order_total(&mut tx, item.order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order item ID {}", id);
        Ok(item)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, OrderItem>(&format!(
            "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_item_id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        Self::adjust_stock(&mut tx, item.product_id, item.quantity).await?;

        sqlx::query("DELETE FROM order_items WHERE order_item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        Self::refresh_order_total(&mut tx, item.order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted order item ID {}", id);
        Ok(())
    }
}
