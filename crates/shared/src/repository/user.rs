use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by email: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}
