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
use shared::{
    abstract_trait::DynOrderItemService,
    domain::{
        requests::{CreateOrderItemRequest, FindAllOrderItems, UpdateOrderItemRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderItemResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/order-items",
    tag = "Order-item",
    security(("bearer_auth" = [])),
    params(FindAllOrderItems),
    responses(
        (status = 200, description = "List of order items", body = ApiResponsePagination<Vec<OrderItemResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order_items(
    Extension(service): Extension<DynOrderItemService>,
    Query(params): Query<FindAllOrderItems>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order-items/{id}",
    tag = "Order-item",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item details", body = ApiResponse<OrderItemResponse>),
        (status = 404, description = "Order item not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/order-items",
    tag = "Order-item",
    security(("bearer_auth" = [])),
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Order item added, stock decremented", body = ApiResponse<OrderItemResponse>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_order_item(
    Extension(service): Extension<DynOrderItemService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/order-items/{id}",
    tag = "Order-item",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order item ID")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated, stock rebalanced", body = ApiResponse<OrderItemResponse>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 404, description = "Order item not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/order-items/{id}",
    tag = "Order-item",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order item ID")),
    responses(
        (status = 204, description = "Order item removed, stock restored"),
        (status = 404, description = "Order item not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn delete_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/order-items", get(get_order_items))
        .route("/api/order-items/{id}", get(get_order_item))
        .route("/api/order-items", post(create_order_item))
        .route("/api/order-items/{id}", put(update_order_item))
        .route("/api/order-items/{id}", delete(delete_order_item))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_item_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
