use crate::{
    domain::responses::OrderItemResponse,
    model::{Order, OrderItem, OrderStatus},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    /// Sum of the order's item prices, in integer cents.
    pub total_amount: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            status: value.status,
            total_amount: value.total_amount,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl OrderDetailResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        OrderDetailResponse {
            id: order.order_id,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_response_carries_items_and_total() {
        let order = Order {
            order_id: 1,
            user_id: 2,
            status: OrderStatus::Pending,
            total_amount: 1500,
            created_at: None,
            updated_at: None,
        };
        let items = vec![OrderItem {
            order_item_id: 10,
            order_id: 1,
            product_id: 1,
            quantity: 3,
            price: 1500,
            created_at: None,
            updated_at: None,
        }];

        let resp = OrderDetailResponse::from_parts(order, items);
        assert_eq!(resp.total_amount, 1500);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].price, 1500);
    }
}
