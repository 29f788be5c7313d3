use std::fmt::{self, Debug};

use crossbeam_utils::CachePadded;

use crate::fence::{FenceError, FenceLevel};
use crate::sync::{AtomicI32, Ordering};

/// A 32-bit integer cell whose reads and writes carry a caller-selected
/// memory ordering, plus full-fence atomic compound operations.
///
/// The cell is safe to share across threads by reference; every operation is
/// a single bounded hardware step, so nothing ever blocks. Acquire, release
/// and compiler-only fenced accesses are part of the declared surface but not
/// implemented yet: they fail with [`FenceError`] instead of degrading to a
/// neighboring ordering (see [`crate::fence`]).
pub struct AtomicCell {
    // Padded so an adjacent hot field cannot drag this cell into its cache
    // line. The storage address is stable for the cell's whole lifetime.
    value: CachePadded<AtomicI32>,
}

impl AtomicCell {
    /// Creates a cell holding `initial`.
    ///
    /// Construction is single-threaded; publish the cell to other threads
    /// only after `new` returns.
    pub fn new(initial: i32) -> Self {
        Self {
            value: CachePadded::new(AtomicI32::new(initial)),
        }
    }

    /// Reads the current value at the requested fence level.
    ///
    /// Unavailable levels (including a release-ordered read, which has no
    /// defined pairing) return [`FenceError::UnsupportedRead`] without
    /// touching the stored value.
    pub fn read(&self, level: FenceLevel) -> Result<i32, FenceError> {
        match level {
            FenceLevel::Full => Ok(self.read_full_fence()),
            FenceLevel::Unfenced => Ok(self.read_unfenced()),
            FenceLevel::Acquire | FenceLevel::Release | FenceLevel::CompilerOnly => {
                Err(FenceError::UnsupportedRead(level))
            }
        }
    }

    /// Writes `value` at the requested fence level.
    ///
    /// Unavailable levels (including an acquire-ordered write) return
    /// [`FenceError::UnsupportedWrite`] and leave the stored value unchanged.
    pub fn write(&self, value: i32, level: FenceLevel) -> Result<(), FenceError> {
        match level {
            FenceLevel::Full => {
                self.write_full_fence(value);
                Ok(())
            }
            FenceLevel::Unfenced => {
                self.write_unfenced(value);
                Ok(())
            }
            FenceLevel::Acquire | FenceLevel::Release | FenceLevel::CompilerOnly => {
                Err(FenceError::UnsupportedWrite(level))
            }
        }
    }

    /// Full-barrier read: no operation of this thread may be reordered
    /// across it, and it observes every full-fence write that precedes it in
    /// the global order.
    pub fn read_full_fence(&self) -> i32 {
        self.value.load(Ordering::SeqCst)
    }

    /// Acquire read. Declared but not implemented.
    pub fn read_acquire_fence(&self) -> Result<i32, FenceError> {
        Err(FenceError::UnsupportedRead(FenceLevel::Acquire))
    }

    /// Compiler-only fenced read. Declared but not implemented.
    pub fn read_compiler_only_fence(&self) -> Result<i32, FenceError> {
        Err(FenceError::UnsupportedRead(FenceLevel::CompilerOnly))
    }

    /// Unordered read. Indivisible (never torn) but freely reorderable by
    /// compiler and hardware.
    pub fn read_unfenced(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Full-barrier write: globally visible before any subsequent operation
    /// of this thread.
    pub fn write_full_fence(&self, value: i32) {
        self.value.store(value, Ordering::SeqCst);
    }

    /// Release write. Declared but not implemented.
    pub fn write_release_fence(&self, value: i32) -> Result<(), FenceError> {
        let _ = value;
        Err(FenceError::UnsupportedWrite(FenceLevel::Release))
    }

    /// Compiler-only fenced write. Declared but not implemented.
    pub fn write_compiler_only_fence(&self, value: i32) -> Result<(), FenceError> {
        let _ = value;
        Err(FenceError::UnsupportedWrite(FenceLevel::CompilerOnly))
    }

    /// Unordered write. Indivisible but carries no ordering guarantee.
    pub fn write_unfenced(&self, value: i32) {
        self.value.store(value, Ordering::Relaxed);
    }

    /// Atomically replaces the value with `new_value` if it currently equals
    /// `expected`. Returns whether the replacement happened; the prior value
    /// is not exposed. Full-fence strength.
    pub fn compare_and_exchange(&self, new_value: i32, expected: i32) -> bool {
        self.value
            .compare_exchange(expected, new_value, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically replaces the value with `new_value`, returning the value
    /// stored immediately before. Full-fence strength.
    pub fn exchange(&self, new_value: i32) -> i32 {
        self.value.swap(new_value, Ordering::SeqCst)
    }

    /// Atomically adds `delta`, returning the post-addition value. Overflow
    /// wraps in two's complement, matching machine-word behavior.
    pub fn add_and_get(&self, delta: i32) -> i32 {
        self.value.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
    }

    /// Atomically increments, returning the new value.
    pub fn increment_and_get(&self) -> i32 {
        self.add_and_get(1)
    }

    /// Atomically decrements, returning the new value.
    pub fn decrement_and_get(&self) -> i32 {
        self.add_and_get(-1)
    }

    /// Consumes the cell and returns the stored value. Ownership proves no
    /// other thread can still reach it, so no fence is needed.
    pub fn into_inner(self) -> i32 {
        self.value.into_inner().into_inner()
    }
}

impl From<i32> for AtomicCell {
    fn from(initial: i32) -> Self {
        Self::new(initial)
    }
}

impl Debug for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicCell").field(&self.read_unfenced()).finish()
    }
}
