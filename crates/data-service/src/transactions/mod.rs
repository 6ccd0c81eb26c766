//! Data service storage for transactions.

mod model;
mod repository;

pub use model::{transaction_from_record, TransactionPayload};
pub use repository::TransactionRepository;
