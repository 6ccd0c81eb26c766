//! Data service storage for portfolio holdings.

mod model;
mod repository;

pub use model::{holding_from_record, HoldingPayload};
pub use repository::PortfolioRepository;
