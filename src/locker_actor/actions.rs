//! Custom actions for the Locker actor.

use crate::model::OrderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockerAction {
    /// Assigns the cell to the order if it is free. Claiming a cell the order already
    /// holds succeeds.
    Claim(OrderId),
    /// Frees the cell if, and only if, the order holds it.
    Release(OrderId),
}

/// Results from LockerActions - variants match 1:1 with LockerAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockerActionResult {
    Claim(()),
    /// Whether the cell was actually freed.
    Release(bool),
}
