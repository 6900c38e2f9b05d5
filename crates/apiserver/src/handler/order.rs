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
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(FindAllOrders),
    responses(
        (status = 200, description = "List of orders", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = ApiResponse<OrderDetailResponse>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/status",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Current order status", body = ApiResponse<String>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_status(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_status(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderDetailResponse>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order rebuilt", body = ApiResponse<OrderDetailResponse>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/cancel",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order canceled, stock restored", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn cancel_order_handler(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.cancel_order(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted, stock restored", body = serde_json::Value),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Order deleted successfully"
        })),
    ))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", get(get_order_status))
        .route("/api/orders/{id}/cancel", get(cancel_order_handler))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
