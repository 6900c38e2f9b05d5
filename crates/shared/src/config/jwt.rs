use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i32) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(24)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<i32, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        if token_data.claims.exp < Utc::now().timestamp() as usize {
            return Err(ServiceError::TokenExpired);
        }

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_returns_original_user_id() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42).unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtConfig::new("secret-a").generate_token(7).unwrap();
        assert!(JwtConfig::new("secret-b").verify_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        assert!(jwt.verify_token("not.a.token").is_err());
    }
}
