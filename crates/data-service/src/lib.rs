//! Finsight Data Service - REST storage for the Finsight core.
//!
//! Implements the repository traits of `finsight_core` against the data
//! service HTTP API and wires them into the page services.

pub mod accounts;
pub mod budgets;
pub mod client;
pub mod config;
pub mod debts;
pub mod errors;
pub mod goals;
pub mod income;
pub mod normalize;
pub mod portfolio;
pub mod services;
pub mod transactions;

pub use client::DataServiceClient;
pub use config::DataServiceConfig;
pub use errors::DataServiceError;
pub use normalize::normalize_id;
pub use services::ServiceContext;
