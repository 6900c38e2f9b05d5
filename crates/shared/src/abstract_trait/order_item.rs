use crate::{
    domain::{
        requests::{CreateOrderItemRequest, FindAllOrderItems, UpdateOrderItemRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderItem,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderItemQueryRepository = Arc<dyn OrderItemQueryRepositoryTrait + Send + Sync>;
pub type DynOrderItemCommandRepository = Arc<dyn OrderItemCommandRepositoryTrait + Send + Sync>;
pub type DynOrderItemService = Arc<dyn OrderItemServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllOrderItems,
    ) -> Result<(Vec<OrderItem>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, RepositoryError>;
}

/// Stock adjustment, the item mutation, and the order-total refresh run in
/// one transaction per method.
#[async_trait]
pub trait OrderItemCommandRepositoryTrait {
    async fn create(&self, req: &CreateOrderItemRequest) -> Result<OrderItem, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderItemServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrderItems,
    ) -> Result<ApiResponsePagination<Vec<OrderItemResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
