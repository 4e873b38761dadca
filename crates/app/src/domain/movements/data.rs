//! Movements Data

use crate::domain::{
    movements::records::MovementKind, products::records::ProductId, sizes::records::SizeId,
};

/// Default page size for movement listings.
pub const DEFAULT_MOVEMENTS_LIMIT: u32 = 50;

/// Largest page size a caller may request.
pub const MAX_MOVEMENTS_LIMIT: u32 = 500;

/// New Movement Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    pub product: ProductId,
    pub size: Option<SizeId>,

    /// Magnitude, must be positive; the sign comes from `kind`.
    pub quantity: i32,

    pub kind: MovementKind,
}

/// Movement listing filter and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementFilter {
    pub product: Option<ProductId>,
    pub kind: Option<MovementKind>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for MovementFilter {
    fn default() -> Self {
        Self {
            product: None,
            kind: None,
            limit: DEFAULT_MOVEMENTS_LIMIT,
            offset: 0,
        }
    }
}

impl MovementFilter {
    /// Page size clamped to `1..=MAX_MOVEMENTS_LIMIT`.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.clamp(1, MAX_MOVEMENTS_LIMIT)
    }
}
