//! Data service storage for income sources and collections.

mod model;
mod repository;

pub use model::{
    income_collection_from_record, income_source_from_record, IncomeCollectionPayload,
    IncomeSourcePayload,
};
pub use repository::IncomeRepository;
