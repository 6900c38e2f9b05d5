use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i32, page_size: i32, total_items: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_items + page_size as i64 - 1) / page_size as i64
        } else {
            0
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_pages_up() {
        let p = Pagination::new(1, 10, 21);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let p = Pagination::new(2, 5, 20);
        assert_eq!(p.total_pages, 4);
    }
}
