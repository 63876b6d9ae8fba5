use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::post_dto::PostDto;
use crate::database::models::post::Post;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::post_service::PostService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityUpdate {
    /// Required on the wire; a missing field is a client error, not a default
    pub is_public: Option<bool>,
}

/// GET /api/posts/byLoggedInUser - All posts owned by the caller
pub async fn by_logged_in_user(
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    let service = PostService::new().await?;
    let posts = service.posts_by_owner(&auth.email).await?;

    Ok(Json(posts))
}

/// GET /api/posts/public - The public feed, possibly empty
pub async fn public_posts(
    Extension(_auth): Extension<AuthUser>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    let service = PostService::new().await?;
    let posts = service.public_posts().await?;

    Ok(Json(posts))
}

/// POST /api/posts - Create a post owned by the caller
///
/// The body's `userEmail` is ignored; ownership always comes from the
/// authenticated session.
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Json(mut dto): Json<PostDto>,
) -> Result<Json<Post>, ApiError> {
    dto.user_email = auth.email;

    let service = PostService::new().await?;
    let post = service.create_post(dto).await?;

    Ok(Json(post))
}

/// PUT /api/posts/:id - Overwrite title, content, images and visibility
pub async fn update(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(mut dto): Json<PostDto>,
) -> Result<Json<Post>, ApiError> {
    // Same overwrite rule as create; the stored owner is checked against the
    // session, never against the body
    dto.user_email = auth.email.clone();

    let service = PostService::new().await?;
    let post = service.update_post(id, dto, &auth.email).await?;

    Ok(Json(post))
}

/// PUT /api/posts/:id/visibility - Toggle the public flag
pub async fn update_visibility(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<VisibilityUpdate>,
) -> Result<Json<Post>, ApiError> {
    let is_public = body
        .is_public
        .ok_or_else(|| ApiError::bad_request("isPublic is required"))?;

    let service = PostService::new().await?;
    let post = service.update_visibility(id, is_public, &auth.email).await?;

    Ok(Json(post))
}

/// DELETE /api/posts/:id - Remove a post owned by the caller
pub async fn delete(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let service = PostService::new().await?;
    let deleted = service.delete_post(id, &auth.email).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Post not found with id: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
