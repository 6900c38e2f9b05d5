use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        let data = products
            .into_iter()
            .map(ProductResponse::from)
            .collect::<Vec<_>>();

        Ok(ApiResponsePagination::success(
            "Products retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Product retrieved successfully",
            product.into(),
        ))
    }

    async fn find_random(&self) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_random()
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Random product retrieved successfully",
            product.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product {}", req.name);
        let product = self.command.create(req).await?;

        Ok(ApiResponse::success(
            "Product created successfully",
            product.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.update(id, req).await?;

        Ok(ApiResponse::success(
            "Product updated successfully",
            product.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;
        Ok(())
    }
}
