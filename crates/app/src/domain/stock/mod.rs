//! Stock

pub mod data;
pub mod errors;
pub mod keys;
pub mod models;
pub(crate) mod repository;
pub mod service;
pub mod summary;

pub use errors::StockServiceError;
pub use service::*;
