use tracing::warn;
use uuid::Uuid;

use crate::api::post_dto::PostDto;
use crate::database::manager::DatabaseError;
use crate::database::models::post::Post;
use crate::database::repositories::posts::PostRepository;
use crate::database::repositories::users::UserRepository;

/// Display name used when a post's owner has no matching account
const UNKNOWN_USERNAME: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("User email is required to create a post")]
    MissingOwnerEmail,

    #[error("Post not found with id: {0}")]
    NotFound(Uuid),

    #[error("You do not have permission to modify this post")]
    PermissionDenied,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Business rules for the post resource: ownership enforcement, visibility
/// toggling, and DTO assembly. Caller identity always arrives as an explicit
/// argument from the boundary layer.
pub struct PostService {
    posts: PostRepository,
    users: UserRepository,
}

impl PostService {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            posts: PostRepository::new().await?,
            users: UserRepository::new().await?,
        })
    }

    /// All posts owned by the given email, each joined with the owner's
    /// display name. Returns an empty list rather than failing.
    pub async fn posts_by_owner(&self, email: &str) -> Result<Vec<PostDto>, PostError> {
        let posts = self.posts.find_by_owner(email).await?;
        Ok(self.to_dtos(posts).await)
    }

    /// Every post flagged public, regardless of owner
    pub async fn public_posts(&self) -> Result<Vec<PostDto>, PostError> {
        let posts = self.posts.find_public().await?;
        Ok(self.to_dtos(posts).await)
    }

    /// Create a post owned by the email the DTO carries. The boundary layer
    /// has already overwritten that field with the authenticated caller, so
    /// an empty value means the request never went through it.
    pub async fn create_post(&self, dto: PostDto) -> Result<Post, PostError> {
        if dto.user_email.is_empty() {
            return Err(PostError::MissingOwnerEmail);
        }

        let post = dto.into_entity();
        Ok(self.posts.save(&post).await?)
    }

    /// Flip a post's public flag. Only the owner may do this; every other
    /// field is left untouched.
    pub async fn update_visibility(
        &self,
        post_id: Uuid,
        is_public: bool,
        caller_email: &str,
    ) -> Result<Post, PostError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.user_email != caller_email {
            return Err(PostError::PermissionDenied);
        }

        post.is_public = is_public;
        Ok(self.posts.save(&post).await?)
    }

    /// Overwrite a post's title, content, images and visibility. The owner
    /// email is never changed by updates.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        dto: PostDto,
        caller_email: &str,
    ) -> Result<Post, PostError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.user_email != caller_email {
            return Err(PostError::PermissionDenied);
        }

        post.title = dto.title;
        post.content = dto.content;
        post.images = dto.images;
        post.is_public = dto.is_public;

        Ok(self.posts.save(&post).await?)
    }

    /// Delete a post. A missing id reports `false` rather than an error;
    /// deleting someone else's post is always an error.
    pub async fn delete_post(&self, post_id: Uuid, caller_email: &str) -> Result<bool, PostError> {
        let post = match self.posts.find_by_id(post_id).await? {
            Some(post) => post,
            None => return Ok(false),
        };

        if post.user_email != caller_email {
            return Err(PostError::PermissionDenied);
        }

        self.posts.delete_by_id(post_id).await?;
        Ok(true)
    }

    async fn to_dtos(&self, posts: Vec<Post>) -> Vec<PostDto> {
        let mut dtos = Vec::with_capacity(posts.len());
        for post in &posts {
            let username = self.resolve_username(&post.user_email).await;
            dtos.push(PostDto::from_entity(post, username));
        }
        dtos
    }

    /// Owner display name for DTO assembly. Lookup failures degrade to the
    /// placeholder instead of failing the whole listing.
    async fn resolve_username(&self, email: &str) -> String {
        match self.users.find_by_email(email).await {
            Ok(Some(user)) => user.username,
            Ok(None) => UNKNOWN_USERNAME.to_string(),
            Err(e) => {
                warn!("username lookup failed for {}: {}", email, e);
                UNKNOWN_USERNAME.to_string()
            }
        }
    }
}
