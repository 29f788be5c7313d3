use std::fmt;

use thiserror::Error;

/// Ordering strength a caller can request for a plain read or write.
///
/// Closed set: call sites pick the cheapest level that is still correct for
/// their protocol instead of paying for a full barrier everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenceLevel {
    /// Full barrier. No reordering across the operation in either direction,
    /// globally visible before it returns.
    Full,
    /// Later operations may not be reordered before this point. Pairs with a
    /// release to establish happens-before.
    Acquire,
    /// Earlier operations may not be reordered after this point.
    Release,
    /// Restricts optimizer reordering only. No cross-thread hardware
    /// guarantee.
    CompilerOnly,
    /// No ordering guarantee beyond the indivisibility of the access itself.
    Unfenced,
}

impl fmt::Display for FenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenceLevel::Full => "full",
            FenceLevel::Acquire => "acquire",
            FenceLevel::Release => "release",
            FenceLevel::CompilerOnly => "compiler-only",
            FenceLevel::Unfenced => "unfenced",
        };

        f.write_str(name)
    }
}

/// Failure raised when a requested ordering level is declared but not
/// available in this implementation.
///
/// The cell never substitutes a neighboring level: a silently weaker fence
/// could hide a synchronization bug and a silently stronger one hides a cost,
/// so the caller must learn immediately that the guarantee is unavailable.
/// The error is produced before any access to the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenceError {
    #[error("unsupported ordering: {0} fenced reads are not implemented")]
    UnsupportedRead(FenceLevel),
    #[error("unsupported ordering: {0} fenced writes are not implemented")]
    UnsupportedWrite(FenceLevel),
}
