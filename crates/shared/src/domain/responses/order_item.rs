use crate::model::OrderItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Line total in integer cents, frozen at creation time.
    pub price: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
