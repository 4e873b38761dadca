//! Password Login

pub(crate) mod validate;
