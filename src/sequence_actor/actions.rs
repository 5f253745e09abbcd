//! Custom actions for the Sequence actor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceAction {
    /// Increments the counter and returns the new value.
    Next,
    /// Undoes a `Next` whose value ended up unused, but only if nothing was allocated
    /// after it.
    Rollback(u32),
    /// Restores the last allocated value, e.g. from persisted orders after a restart.
    /// Never moves the counter backwards.
    Seed(u32),
}

/// Results from SequenceActions - variants match 1:1 with SequenceAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceActionResult {
    Next(u32),
    /// Whether the counter was actually decremented.
    Rollback(bool),
    Seed(()),
}
