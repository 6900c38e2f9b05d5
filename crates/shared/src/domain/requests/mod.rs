mod auth;
mod category;
mod order;
mod order_item;
mod product;

pub use self::auth::LoginRequest;
pub use self::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest};
pub use self::order::{CreateOrderRequest, FindAllOrders, OrderLineRequest, UpdateOrderRequest};
pub use self::order_item::{CreateOrderItemRequest, FindAllOrderItems, UpdateOrderItemRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};

pub(crate) fn default_page() -> i32 {
    1
}

pub(crate) fn default_page_size() -> i32 {
    10
}
