use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price in integer cents.
    pub price: i64,
    pub stock: i32,
    pub image: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            category_id: value.category_id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
            image: value.image,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
