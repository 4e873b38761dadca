//! Movement Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{products::records::ProductId, sizes::records::SizeId},
    ids::TypedId,
};

/// Movement Id
pub type MovementId = TypedId<MovementRecord>;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Stock coming in (`entrada`).
    #[serde(rename = "entrada")]
    Entry,

    /// Stock going out (`saida`).
    #[serde(rename = "saida")]
    Exit,
}

impl MovementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entrada",
            Self::Exit => "saida",
        }
    }

    /// Applies the movement direction to a quantity magnitude.
    #[must_use]
    pub const fn signed(self, quantity: i32) -> i32 {
        match self {
            Self::Entry => quantity,
            Self::Exit => -quantity,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown movement kind: {0}")]
pub struct UnknownMovementKind(pub String);

impl FromStr for MovementKind {
    type Err = UnknownMovementKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entrada" => Ok(Self::Entry),
            "saida" => Ok(Self::Exit),
            other => Err(UnknownMovementKind(other.to_string())),
        }
    }
}

/// Movement Record, joined with product and size names.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRecord {
    pub id: MovementId,
    pub product: ProductId,
    pub size: Option<SizeId>,

    /// Quantity magnitude as recorded.
    pub quantity: i32,

    pub kind: MovementKind,
    pub created_at: Timestamp,

    /// Product display name, absent when the join found nothing.
    pub product_name: Option<String>,

    /// Size label, absent for sizeless movements.
    pub size_name: Option<String>,
}
