pub mod auth_service;
pub mod learning_plan_service;
pub mod post_service;
