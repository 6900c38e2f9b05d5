use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllOrders,
    errors::RepositoryError,
    model::{Order, OrderItem},
    repository::order::{ORDER_COLUMNS, ORDER_ITEM_COLUMNS},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!("🔍 Fetching orders page {}", req.page);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let (limit, offset) = crate::repository::page_bounds(req.page, req.page_size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            ORDER BY order_id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((orders, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            SELECT {ORDER_ITEM_COLUMNS}
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id
            "#
        ))
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
