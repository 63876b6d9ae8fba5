pub mod learning_plans;
pub mod posts;
pub mod users;
