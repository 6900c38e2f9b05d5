mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

pub(crate) const PRODUCT_COLUMNS: &str =
    "product_id, category_id, name, description, price, stock, image, created_at, updated_at";
