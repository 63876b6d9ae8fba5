use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One step of a learning plan; the list is persisted as a single JSONB column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub topic: String,
    pub resources: String,
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: Option<Uuid>,
    pub title: String,
    pub goal: String,
    pub skills: String,
    pub image: String,
    pub steps: Json<Vec<PlanStep>>,
}
