use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserQueryRepository},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps { query, hash, jwt } = deps;
        Self { query, hash, jwt }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Attempting login for email: {}", req.email);

        let user = match self.query.find_by_email(&req.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!("❌ No user for email: {}", req.email);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                error!("❌ Failed to query user: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        let token = self.jwt.generate_token(user.user_id)?;

        info!("✅ Login succeeded for user ID {}", user.user_id);
        Ok(ApiResponse::success(
            "Authenticated successfully",
            TokenResponse { token },
        ))
    }

    async fn logout(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        // A token can outlive its account; don't acknowledge for users that
        // no longer exist.
        self.query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        // Tokens are stateless; logout is an acknowledgement, expiry does the
        // actual invalidation.
        info!("👋 User ID {} logged out", user_id);
        Ok(ApiResponse::success("Successfully logged out", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::HashingTrait,
        config::{Hashing, JwtConfig},
        errors::RepositoryError,
        model::User,
    };
    use std::sync::Arc;

    struct FakeUsers {
        user: Option<User>,
    }

    #[async_trait]
    impl crate::abstract_trait::UserQueryRepositoryTrait for FakeUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }
    }

    fn service_with(user: Option<User>) -> AuthService {
        AuthService::new(AuthServiceDeps {
            query: Arc::new(FakeUsers { user }),
            hash: Arc::new(Hashing::new()),
            jwt: Arc::new(JwtConfig::new("test-secret")),
        })
    }

    async fn user_with_password(password: &str) -> User {
        let hash = Hashing::new().hash_password(password).await.unwrap();
        User {
            user_id: 1,
            name: "Test".into(),
            email: "test@store.test".into(),
            password: hash,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn login_with_correct_password_returns_token() {
        let user = user_with_password("hunter2").await;
        let service = service_with(Some(user));

        let resp = service
            .login(&LoginRequest {
                email: "test@store.test".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap();

        assert_eq!(resp.status, "success");
        assert!(!resp.data.token.is_empty());
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let user = user_with_password("hunter2").await;
        let service = service_with(Some(user));

        let err = service
            .login(&LoginRequest {
                email: "test@store.test".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn logout_for_existing_user_is_acknowledged() {
        let user = user_with_password("hunter2").await;
        let service = service_with(Some(user));

        let resp = service.logout(1).await.unwrap();
        assert_eq!(resp.status, "success");
    }

    #[tokio::test]
    async fn logout_for_unknown_user_fails() {
        let service = service_with(None);

        let err = service.logout(999).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn login_for_unknown_email_fails() {
        let service = service_with(None);

        let err = service
            .login(&LoginRequest {
                email: "nobody@store.test".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
