use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::post::Post;

const POST_COLUMNS: &str = "id, title, content, images, is_public, user_email";

/// Typed query surface over the posts table. No caching; every call goes to
/// the store.
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            pool: DatabaseManager::pool().await?,
        })
    }

    /// All posts owned by the given email, in store order
    pub async fn find_by_owner(&self, email: &str) -> Result<Vec<Post>, DatabaseError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts WHERE user_email = $1",
            POST_COLUMNS
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// All posts flagged public, regardless of owner
    pub async fn find_public(&self) -> Result<Vec<Post>, DatabaseError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts WHERE is_public",
            POST_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts WHERE id = $1",
            POST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Insert when the post carries no id yet, otherwise replace the stored
    /// record wholesale. Returns the persisted row with the id populated.
    pub async fn save(&self, post: &Post) -> Result<Post, DatabaseError> {
        let saved = match post.id {
            None => {
                sqlx::query_as::<_, Post>(&format!(
                    "INSERT INTO posts (title, content, images, is_public, user_email)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {}",
                    POST_COLUMNS
                ))
                .bind(&post.title)
                .bind(&post.content)
                .bind(&post.images)
                .bind(post.is_public)
                .bind(&post.user_email)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Post>(&format!(
                    "UPDATE posts
                     SET title = $2, content = $3, images = $4, is_public = $5, user_email = $6
                     WHERE id = $1
                     RETURNING {}",
                    POST_COLUMNS
                ))
                .bind(id)
                .bind(&post.title)
                .bind(&post.content)
                .bind(&post.images)
                .bind(post.is_public)
                .bind(&post.user_email)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(saved)
    }

    /// Removes the record; deleting an absent id is a no-op
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
