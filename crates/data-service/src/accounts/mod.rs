//! Data service storage for accounts.

mod model;
mod repository;

pub use model::{account_from_record, AccountPayload};
pub use repository::AccountRepository;
