use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::user::User;

/// Account lookups and registration inserts. The post layer only ever reads
/// from here.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            pool: DatabaseManager::pool().await?,
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at
             FROM users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, username, email, password_hash, created_at",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
