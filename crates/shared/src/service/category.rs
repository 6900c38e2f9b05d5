use crate::{
    abstract_trait::{
        CategoryServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
    },
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse, Pagination},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
}

impl CategoryService {
    pub fn new(query: DynCategoryQueryRepository, command: DynCategoryCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        let (categories, total) = self.query.find_all(req).await?;

        let data = categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>();

        Ok(ApiResponsePagination::success(
            "Categories retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(crate::errors::RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Category retrieved successfully",
            category.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🏗️ Creating category {}", req.name);
        let category = self.command.create(req).await?;

        Ok(ApiResponse::success(
            "Category created successfully",
            category.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self.command.update(id, req).await?;

        Ok(ApiResponse::success(
            "Category updated successfully",
            category.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;
        Ok(())
    }
}
