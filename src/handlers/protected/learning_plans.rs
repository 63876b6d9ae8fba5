use axum::{extract::Path, response::Json, Extension};
use uuid::Uuid;

use crate::database::models::learning_plan::LearningPlan;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::learning_plan_service::LearningPlanService;

/// POST /api/learningplans - Create a learning plan
pub async fn create(
    Extension(_auth): Extension<AuthUser>,
    Json(plan): Json<LearningPlan>,
) -> Result<Json<LearningPlan>, ApiError> {
    let service = LearningPlanService::new().await?;
    let plan = service.create_plan(plan).await?;

    Ok(Json(plan))
}

/// GET /api/learningplans - List every learning plan
pub async fn list(
    Extension(_auth): Extension<AuthUser>,
) -> Result<Json<Vec<LearningPlan>>, ApiError> {
    let service = LearningPlanService::new().await?;
    let plans = service.all_plans().await?;

    Ok(Json(plans))
}

/// GET /api/learningplans/:id - Fetch a single plan
pub async fn get(
    Extension(_auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningPlan>, ApiError> {
    let service = LearningPlanService::new().await?;
    let plan = service
        .plan_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Learning plan not found with id: {}", id)))?;

    Ok(Json(plan))
}
