//! Stock Handlers

pub(crate) mod by_product;
pub(crate) mod index;
pub(crate) mod summary;
pub(crate) mod update;
