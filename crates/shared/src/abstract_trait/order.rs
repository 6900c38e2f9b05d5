use crate::{
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, OrderLineRequest, UpdateOrderRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
}

/// Every method runs as a single database transaction; a failure anywhere
/// rolls the whole operation back.
#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn place_order(
        &self,
        user_id: i32,
        lines: &[OrderLineRequest],
    ) -> Result<Order, RepositoryError>;
    async fn rebuild_order(
        &self,
        order_id: i32,
        status: Option<OrderStatus>,
        lines: &[OrderLineRequest],
    ) -> Result<Order, RepositoryError>;
    async fn cancel_order(&self, order_id: i32) -> Result<Order, RepositoryError>;
    async fn delete_order(&self, order_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn get_status(&self, id: i32) -> Result<ApiResponse<String>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        auth_user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn cancel_order(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<(), ServiceError>;
}
