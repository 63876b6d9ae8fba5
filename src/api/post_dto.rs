use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::post::Post;

/// Wire shape for posts: the entity fields plus the owner's display name,
/// resolved at read time and never stored.
///
/// On inbound requests the `userEmail` field is untrusted; the boundary layer
/// overwrites it with the authenticated caller's email before any of this
/// reaches a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl PostDto {
    /// Build the outbound shape from a stored post and its owner's display name
    pub fn from_entity(post: &Post, username: String) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            images: post.images.clone(),
            is_public: post.is_public,
            user_email: post.user_email.clone(),
            username: Some(username),
        }
    }

    /// Build a fresh entity from an inbound shape. The id is left unset so
    /// the store assigns one on save.
    pub fn into_entity(self) -> Post {
        Post::new(
            self.title,
            self.content,
            self.images,
            self.is_public,
            self.user_email,
        )
    }
}
