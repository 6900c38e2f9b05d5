use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    #[schema(example = "admin@store.test")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
