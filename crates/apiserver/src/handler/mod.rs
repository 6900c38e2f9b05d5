mod auth;
mod category;
mod order;
mod order_item;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::category::category_routes;
pub use self::order::order_routes;
pub use self::order_item::order_item_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::health_checker_handler,
        auth::login_user_handler,
        auth::logout_user_handler,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        product::get_products,
        product::get_random_product,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::get_order,
        order::get_order_status,
        order::create_order,
        order::update_order,
        order::cancel_order_handler,
        order::delete_order,

        order_item::get_order_items,
        order_item::get_order_item,
        order_item::create_order_item,
        order_item::update_order_item,
        order_item::delete_order_item,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Order-item", description = "Order item endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_item_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
