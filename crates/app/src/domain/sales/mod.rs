//! Sales

pub mod errors;
pub mod models;
pub mod prices;
pub(crate) mod repository;
pub mod service;

pub use errors::SalesServiceError;
pub use service::*;
