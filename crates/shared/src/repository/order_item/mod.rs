mod command;
mod query;

pub use self::command::OrderItemCommandRepository;
pub use self::query::OrderItemQueryRepository;
