//! Product Records

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,

    /// Display name, e.g. `Collant Básico Adulto`.
    pub name: String,

    /// Whether stock is tracked per size.
    pub has_sizes: bool,

    /// Inactive products are hidden from stock views.
    pub active: bool,
}
