//! Inventory Domain Concerns

pub mod movements;
pub mod products;
pub mod sales;
pub mod sizes;
pub mod stock;
