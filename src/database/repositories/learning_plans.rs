use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::learning_plan::LearningPlan;

const PLAN_COLUMNS: &str = "id, title, goal, skills, image, steps";

pub struct LearningPlanRepository {
    pool: PgPool,
}

impl LearningPlanRepository {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            pool: DatabaseManager::pool().await?,
        })
    }

    /// Insert when the plan carries no id, otherwise upsert under the given
    /// id, document-store style.
    pub async fn save(&self, plan: &LearningPlan) -> Result<LearningPlan, DatabaseError> {
        let saved = match plan.id {
            None => {
                sqlx::query_as::<_, LearningPlan>(&format!(
                    "INSERT INTO learning_plans (title, goal, skills, image, steps)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {}",
                    PLAN_COLUMNS
                ))
                .bind(&plan.title)
                .bind(&plan.goal)
                .bind(&plan.skills)
                .bind(&plan.image)
                .bind(&plan.steps)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, LearningPlan>(&format!(
                    "INSERT INTO learning_plans (id, title, goal, skills, image, steps)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     ON CONFLICT (id) DO UPDATE
                     SET title = $2, goal = $3, skills = $4, image = $5, steps = $6
                     RETURNING {}",
                    PLAN_COLUMNS
                ))
                .bind(id)
                .bind(&plan.title)
                .bind(&plan.goal)
                .bind(&plan.skills)
                .bind(&plan.image)
                .bind(&plan.steps)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(saved)
    }

    pub async fn find_all(&self) -> Result<Vec<LearningPlan>, DatabaseError> {
        let plans = sqlx::query_as::<_, LearningPlan>(&format!(
            "SELECT {} FROM learning_plans",
            PLAN_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LearningPlan>, DatabaseError> {
        let plan = sqlx::query_as::<_, LearningPlan>(&format!(
            "SELECT {} FROM learning_plans WHERE id = $1",
            PLAN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }
}
