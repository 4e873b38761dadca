//! Stock Data

use crate::domain::{
    movements::records::{MovementId, MovementKind},
    products::records::ProductId,
    sizes::records::SizeId,
};

/// Operation label that records an entry; every other label records an exit.
pub const ADD_OPERATION: &str = "adicionar";

/// Operation attached to a stock update, driving the movement log direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Remove,
}

impl OperationKind {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ADD_OPERATION {
            Self::Add
        } else {
            Self::Remove
        }
    }

    #[must_use]
    pub const fn movement_kind(self) -> MovementKind {
        match self {
            Self::Add => MovementKind::Entry,
            Self::Remove => MovementKind::Exit,
        }
    }
}

/// Absolute stock update addressed by human-entered names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdate {
    pub product_name: String,
    pub size_name: Option<String>,

    /// New absolute quantity, not a delta.
    pub new_quantity: i32,

    /// When present, one movement is appended.
    pub operation: Option<OperationKind>,
}

/// Outcome of an applied stock update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdated {
    pub product: ProductId,
    pub size: Option<SizeId>,
    pub quantity: i32,
    pub movement: Option<MovementId>,
}
