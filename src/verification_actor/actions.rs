//! Custom actions for the Verification actor.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationAction {
    /// Compares a submitted code against the pending one.
    Check(String),
}

/// How a check ended. Every outcome is a successful action so the attempt counter
/// (or the consumption of the code) is committed; the client turns the terminal ones
/// into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Accepted,
    Rejected { remaining: u32 },
    /// The last allowed attempt failed; the code is gone.
    Exhausted,
    /// The code outlived its time-to-live; the code is gone.
    Expired,
}
