use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Whether an order in this status still has stock reserved against it.
    /// Canceled orders already gave their stock back, so canceling or
    /// deleting them must not restore it a second time.
    pub fn holds_stock(&self) -> bool {
        !matches!(self, OrderStatus::Canceled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_completed_orders_hold_stock() {
        assert!(OrderStatus::Pending.holds_stock());
        assert!(OrderStatus::Completed.holds_stock());
    }

    #[test]
    fn canceled_orders_do_not_hold_stock() {
        assert!(!OrderStatus::Canceled.holds_stock());
    }
}
