use crate::{
    abstract_trait::OrderItemQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllOrderItems, errors::RepositoryError, model::OrderItem,
    repository::order::ORDER_ITEM_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderItemQueryRepository {
    db: ConnectionPool,
}

impl OrderItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for OrderItemQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllOrderItems,
    ) -> Result<(Vec<OrderItem>, i64), RepositoryError> {
        info!("🔍 Fetching order items page {}", req.page);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let (limit, offset) = crate::repository::page_bounds(req.page, req.page_size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            SELECT {ORDER_ITEM_COLUMNS}
            FROM order_items
            ORDER BY order_item_id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, OrderItem>(&format!(
            "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_item_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order item {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(item)
    }
}
