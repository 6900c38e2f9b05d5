mod api;
mod category;
mod order;
mod order_item;
mod pagination;
mod product;
mod token;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::category::CategoryResponse;
pub use self::order::{OrderDetailResponse, OrderResponse};
pub use self::order_item::OrderItemResponse;
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
pub use self::token::TokenResponse;
