mod auth;
mod category;
mod order;
mod order_item;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::category::CategoryService;
pub use self::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
pub use self::order_item::OrderItemService;
pub use self::product::ProductService;
