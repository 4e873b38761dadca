//! Stock Models

use crate::domain::{
    products::records::ProductId,
    sizes::records::{SizeId, SizeRecord},
    stock::keys::normalized_key,
};

/// One row of the product × stock × size join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevelRow {
    pub product: ProductId,
    pub product_name: String,
    pub has_sizes: bool,
    pub size: Option<SizeId>,
    pub size_name: Option<String>,

    /// Absent when the product has no stock row at all.
    pub quantity: Option<i32>,
}

/// Quantity held for one size of a sized product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeQuantity {
    pub size: SizeId,
    pub name: String,
    pub quantity: i64,
}

/// Stock of one product, shaped by whether it is tracked per size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductStock {
    Sized {
        product: ProductId,
        name: String,
        sizes: Vec<SizeQuantity>,
    },
    Simple {
        product: ProductId,
        name: String,
        quantity: i64,
    },
}

impl ProductStock {
    pub(crate) fn empty(product: ProductId, name: String, has_sizes: bool) -> Self {
        if has_sizes {
            Self::Sized {
                product,
                name,
                sizes: Vec::new(),
            }
        } else {
            Self::Simple {
                product,
                name,
                quantity: 0,
            }
        }
    }

    #[must_use]
    pub fn product(&self) -> ProductId {
        match self {
            Self::Sized { product, .. } | Self::Simple { product, .. } => *product,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sized { name, .. } | Self::Simple { name, .. } => name,
        }
    }

    /// Normalized lookup key of the display name.
    #[must_use]
    pub fn key(&self) -> String {
        normalized_key(self.name())
    }

    /// Sum over sizes, or the single quantity.
    #[must_use]
    pub fn total(&self) -> i64 {
        match self {
            Self::Sized { sizes, .. } => sizes.iter().map(|size| size.quantity).sum(),
            Self::Simple { quantity, .. } => *quantity,
        }
    }

    /// Gives a sized product one entry per defined size, in definition order,
    /// with zero for sizes that have no stock row.
    #[must_use]
    pub fn with_all_sizes(self, defined: &[SizeRecord]) -> Self {
        match self {
            Self::Sized {
                product,
                name,
                sizes,
            } => {
                let sizes = defined
                    .iter()
                    .map(|size| SizeQuantity {
                        size: size.id,
                        name: size.name.clone(),
                        quantity: sizes
                            .iter()
                            .find(|held| held.size == size.id)
                            .map_or(0, |held| held.quantity),
                    })
                    .collect();

                Self::Sized {
                    product,
                    name,
                    sizes,
                }
            }
            simple @ Self::Simple { .. } => simple,
        }
    }
}
