//! Data service storage for debts.

mod model;
mod repository;

pub use model::{debt_from_record, DebtPayload};
pub use repository::DebtRepository;
