//! Data service storage for goals.

mod model;
mod repository;

pub use model::{goal_from_record, GoalPayload};
pub use repository::GoalRepository;
