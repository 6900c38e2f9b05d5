use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::OrderLineRequest,
    errors::RepositoryError,
    model::{Order, OrderStatus, Product},
    repository::{order::ORDER_COLUMNS, product::PRODUCT_COLUMNS},
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

/// Order mutations with stock accounting. Every public operation is one
/// transaction: the stock check, the item rows, the stock decrement and the
/// order total either all land or none do. Products are read with
/// `FOR UPDATE` so concurrent placements against the same product serialize
/// on the row lock instead of racing between check and decrement.
#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn lock_order(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i32,
    ) -> Result<Order, RepositoryError> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1 FOR UPDATE"
        ))
        .bind(order_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
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

    /// Inserts one item per line, decrementing stock as it goes, and returns
    /// the accumulated total. Item prices are frozen here: product price at
    /// this moment times quantity.
    async fn apply_lines(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i32,
        lines: &[OrderLineRequest],
    ) -> Result<i64, RepositoryError> {
        let mut total: i64 = 0;

        for line in lines {
            let product = Self::lock_product(tx, line.product_id).await?;

            if product.stock < line.quantity {
                error!(
                    "❌ Not enough stock for product {}: requested={}, available={}",
                    line.product_id, line.quantity, product.stock
                );
                return Err(RepositoryError::InsufficientStock {
                    product_id: line.product_id,
                });
            }

            let price = product.price * line.quantity as i64;

            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price, created_at, updated_at)
                VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
                "#,
            )
            .bind(order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(price)
            .execute(&mut **tx)
            .await
            .map_err(RepositoryError::from)?;

            sqlx::query("UPDATE products SET stock = stock - $1 WHERE product_id = $2")
                .bind(line.quantity)
                .bind(line.product_id)
                .execute(&mut **tx)
                .await
                .map_err(RepositoryError::from)?;

            total += price;
        }

        Ok(total)
    }

    /// Gives every item's quantity back to its product in one statement.
    async fn restore_items_stock(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE products p
            SET stock = p.stock + oi.quantity
            FROM order_items oi
            WHERE oi.order_id = $1 AND oi.product_id = p.product_id
            "#,
        )
        .bind(order_id)
        .execute(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn persist_total(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i32,
        total: i64,
        status: Option<OrderStatus>,
    ) -> Result<Order, RepositoryError> {
        sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET total_amount = $2,
                status       = COALESCE($3, status),
                updated_at   = current_timestamp
            WHERE order_id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order_id)
        .bind(total)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(
        &self,
        user_id: i32,
        lines: &[OrderLineRequest],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (user_id, status, total_amount, created_at, updated_at)
            VALUES ($1, 'pending', 0, current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to create order for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        let total = Self::apply_lines(&mut tx, order.order_id, lines).await?;
        let order = Self::persist_total(&mut tx, order.order_id, total, None).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Placed order ID {} for user {} (total {})",
            order.order_id, order.user_id, order.total_amount
        );
        Ok(order)
    }

    async fn rebuild_order(
        &self,
        order_id: i32,
        status: Option<OrderStatus>,
        lines: &[OrderLineRequest],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        Self::lock_order(&mut tx, order_id).await?;

        // Hand the old lines' stock back before the new lines are validated,
        // so an update that only changes quantities passes its own check.
        Self::restore_items_stock(&mut tx, order_id).await?;

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let total = Self::apply_lines(&mut tx, order_id, lines).await?;
        let order = Self::persist_total(&mut tx, order_id, total, status).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Rebuilt order ID {} (total {})", order_id, order.total_amount);
        Ok(order)
    }

    async fn cancel_order(&self, order_id: i32) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = Self::lock_order(&mut tx, order_id).await?;

        // Canceling twice must not restore stock twice.
        if !order.status.holds_stock() {
            tx.commit().await.map_err(RepositoryError::from)?;
            info!("ℹ️ Order ID {} already canceled, nothing to do", order_id);
            return Ok(order);
        }

        Self::restore_items_stock(&mut tx, order_id).await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET status = 'canceled', updated_at = current_timestamp
            WHERE order_id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🚫 Canceled order ID {}", order_id);
        Ok(order)
    }

    async fn delete_order(&self, order_id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = Self::lock_order(&mut tx, order_id).await?;

        // A canceled order already gave its stock back.
        if order.status.holds_stock() {
            Self::restore_items_stock(&mut tx, order_id).await?;
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted order ID {}", order_id);
        Ok(())
    }
}
