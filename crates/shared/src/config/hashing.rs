use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

#[derive(Clone, Default)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, 4).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let is_valid = verify(password, hashed_password).map_err(ServiceError::Bcrypt)?;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn correct_password_matches() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("hunter2").await.unwrap();
        assert!(hashing.compare_password(&hashed, "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("hunter2").await.unwrap();
        let err = hashing
            .compare_password(&hashed, "hunter3")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
