use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        responses::{
            ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse, Pagination,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        let data = orders
            .into_iter()
            .map(OrderResponse::from)
            .collect::<Vec<_>>();

        Ok(ApiResponsePagination::success(
            "Orders retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let items = self.query.find_items(id).await?;

        Ok(ApiResponse::success(
            "Order retrieved successfully",
            OrderDetailResponse::from_parts(order, items),
        ))
    }

    async fn get_status(&self, id: i32) -> Result<ApiResponse<String>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Order status retrieved successfully",
            order.status.to_string(),
        ))
    }
}
