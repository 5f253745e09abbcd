use crate::model::{CellKey, OrderId};

/// Ledger entry for one physical cell: which order, if any, currently holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockerCell {
    pub key: CellKey,
    pub occupant: Option<OrderId>,
}

impl LockerCell {
    pub fn free(key: CellKey) -> Self {
        Self {
            key,
            occupant: None,
        }
    }
}
