use crate::{
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(FindAllCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponsePagination<Vec<CategoryResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
    Query(params): Query<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = serde_json::Value),
        (status = 400, description = "Category still has products"),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Category deleted successfully"
        })),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(get_category))
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", put(update_category))
        .route("/api/categories/{id}", delete(delete_category))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
