mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

pub(crate) const ORDER_COLUMNS: &str =
    "order_id, user_id, status, total_amount, created_at, updated_at";
pub(crate) const ORDER_ITEM_COLUMNS: &str =
    "order_item_id, order_id, product_id, quantity, price, created_at, updated_at";
