use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A shared post. `id` is assigned by the store on first save; `user_email`
/// is fixed at creation and is the sole authorization key for mutations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub is_public: bool,
    pub user_email: String,
}

impl Post {
    pub fn new(
        title: String,
        content: String,
        images: Vec<String>,
        is_public: bool,
        user_email: String,
    ) -> Self {
        Self {
            id: None,
            title,
            content,
            images,
            is_public,
            user_email,
        }
    }
}
