use crate::domain::requests::{default_page, default_page_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Arabica beans 1kg")]
    pub name: String,

    pub description: Option<String>,

    /// Price in integer cents.
    #[validate(range(min = 0, message = "Price must be at least 0"))]
    #[schema(example = 500)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 10)]
    pub stock: i32,

    #[validate(range(min = 1, message = "Category ID is required"))]
    #[schema(example = 1)]
    pub category_id: i32,

    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    /// Price in integer cents.
    #[validate(range(min = 0, message = "Price must be at least 0"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,

    #[validate(range(min = 1, message = "Category ID is required"))]
    pub category_id: i32,

    pub image: Option<String>,
}
