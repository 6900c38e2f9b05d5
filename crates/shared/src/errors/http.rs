use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    BusinessRule { code: String, message: String },
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) | HttpError::BusinessRule { .. } => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::InsufficientStock { product_id } => HttpError::BusinessRule {
                    code: "INSUFFICIENT_STOCK".into(),
                    message: format!("Insufficient stock for product {product_id}"),
                },
                RepositoryError::CategoryInUse(id) => HttpError::BusinessRule {
                    code: "CATEGORY_HAS_PRODUCTS".into(),
                    message: format!("Category {id} cannot be deleted while products reference it"),
                },
                RepositoryError::ProductInUse(id) => HttpError::BusinessRule {
                    code: "PRODUCT_HAS_ORDER_ITEMS".into(),
                    message: format!(
                        "Product {id} cannot be deleted while order items reference it"
                    ),
                },
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (msg, code) = match self {
            HttpError::BusinessRule { code, message } => (message, Some(code)),
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::Internal(msg) => (msg, None),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
            code,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_maps_to_bad_request_with_code() {
        let err: HttpError =
            ServiceError::Repo(RepositoryError::InsufficientStock { product_id: 9 }).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            HttpError::BusinessRule { ref code, .. } if code == "INSUFFICIENT_STOCK"
        ));
    }

    #[test]
    fn category_in_use_maps_to_bad_request_with_code() {
        let err: HttpError = ServiceError::Repo(RepositoryError::CategoryInUse(3)).into();
        assert!(matches!(
            err,
            HttpError::BusinessRule { ref code, .. } if code == "CATEGORY_HAS_PRODUCTS"
        ));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err: HttpError = ServiceError::Repo(RepositoryError::NotFound).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let err: HttpError = ServiceError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn sqlx_error_maps_to_500() {
        let err: HttpError = ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        ))
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
