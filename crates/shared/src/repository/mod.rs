mod category;
mod order;
mod order_item;
mod product;
mod user;

/// LIMIT/OFFSET for a page request. Hostile paging values are clamped
/// instead of rejected: a page below 1 reads the first page, a page size
/// below 1 falls back to a single row.
pub(crate) fn page_bounds(page: i32, page_size: i32) -> (i64, i64) {
    let limit = page_size.max(1) as i64;
    let offset = ((page - 1).max(0) as i64) * limit;
    (limit, offset)
}

pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::order_item::{OrderItemCommandRepository, OrderItemQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::user::UserQueryRepository;

#[cfg(test)]
mod tests {
    use super::page_bounds;

    #[test]
    fn normal_pages_step_by_page_size() {
        assert_eq!(page_bounds(1, 10), (10, 0));
        assert_eq!(page_bounds(3, 10), (10, 20));
    }

    #[test]
    fn negative_page_size_clamps_to_one_row() {
        assert_eq!(page_bounds(1, -5), (1, 0));
        assert_eq!(page_bounds(1, 0), (1, 0));
    }

    #[test]
    fn page_below_one_reads_the_first_page() {
        assert_eq!(page_bounds(0, 10), (10, 0));
        assert_eq!(page_bounds(-2, 10), (10, 0));
    }
}
