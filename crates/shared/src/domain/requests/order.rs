use crate::{
    domain::requests::{default_page, default_page_size},
    model::OrderStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllOrders {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderLineRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Defaults to the authenticated caller when omitted.
    pub user_id: Option<i32>,

    #[validate(length(min = 1, message = "At least one product is required"), nested)]
    pub products: Vec<OrderLineRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    /// Leaves the current status untouched when omitted.
    pub status: Option<OrderStatus>,

    #[validate(length(min = 1, message = "At least one product is required"), nested)]
    pub products: Vec<OrderLineRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_product_list_is_rejected() {
        let req = CreateOrderRequest {
            user_id: None,
            products: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_line_is_rejected() {
        let req = CreateOrderRequest {
            user_id: Some(1),
            products: vec![OrderLineRequest {
                product_id: 1,
                quantity: 0,
            }],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_request_passes() {
        let req = CreateOrderRequest {
            user_id: None,
            products: vec![OrderLineRequest {
                product_id: 1,
                quantity: 3,
            }],
        };
        assert!(req.validate().is_ok());
    }
}
