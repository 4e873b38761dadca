//! Authentication

mod errors;
mod models;
mod repository;
mod service;

pub use errors::*;
pub use models::*;
pub use service::*;
