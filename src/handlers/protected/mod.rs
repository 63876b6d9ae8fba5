pub mod learning_plans;
pub mod posts;
