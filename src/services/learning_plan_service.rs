use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::learning_plan::LearningPlan;
use crate::database::repositories::learning_plans::LearningPlanRepository;

/// Thin pass-through over the learning plan store; plans carry no ownership
/// rules, so there is nothing to enforce here.
pub struct LearningPlanService {
    plans: LearningPlanRepository,
}

impl LearningPlanService {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            plans: LearningPlanRepository::new().await?,
        })
    }

    pub async fn create_plan(&self, plan: LearningPlan) -> Result<LearningPlan, DatabaseError> {
        self.plans.save(&plan).await
    }

    pub async fn all_plans(&self) -> Result<Vec<LearningPlan>, DatabaseError> {
        self.plans.find_all().await
    }

    pub async fn plan_by_id(&self, id: Uuid) -> Result<Option<LearningPlan>, DatabaseError> {
        self.plans.find_by_id(id).await
    }
}
