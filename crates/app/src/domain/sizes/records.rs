//! Size Records

use crate::ids::TypedId;

/// Size Id
pub type SizeId = TypedId<SizeRecord>;

/// Size Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRecord {
    pub id: SizeId,

    /// Garment size label (`P`, `M`, `G`, `GG`).
    pub name: String,
}
