use crate::{
    abstract_trait::{
        DynOrderItemCommandRepository, DynOrderItemQueryRepository, OrderItemServiceTrait,
    },
    domain::{
        requests::{CreateOrderItemRequest, FindAllOrderItems, UpdateOrderItemRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderItemResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderItemService {
    query: DynOrderItemQueryRepository,
    command: DynOrderItemCommandRepository,
}

impl OrderItemService {
    pub fn new(
        query: DynOrderItemQueryRepository,
        command: DynOrderItemCommandRepository,
    ) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl OrderItemServiceTrait for OrderItemService {
    async fn find_all(
        &self,
        req: &FindAllOrderItems,
    ) -> Result<ApiResponsePagination<Vec<OrderItemResponse>>, ServiceError> {
        let (items, total) = self.query.find_all(req).await?;

        let data = items
            .into_iter()
            .map(OrderItemResponse::from)
            .collect::<Vec<_>>();

        Ok(ApiResponsePagination::success(
            "Order items retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        let item = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Order item retrieved successfully",
            item.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        info!(
            "🏗️ Adding item to order {}: product {} x{}",
            req.order_id, req.product_id, req.quantity
        );
        let item = self.command.create(req).await?;

        Ok(ApiResponse::success(
            "Order item created successfully",
            item.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        let item = self.command.update(id, req).await?;

        Ok(ApiResponse::success(
            "Order item updated successfully",
            item.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;
        Ok(())
    }
}
