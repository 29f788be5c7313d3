#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{AtomicI32, Ordering};

#[cfg(all(not(loom), any(test, feature = "testing")))]
pub(crate) type Contender = crossbeam_utils::Backoff;

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{AtomicI32, Ordering};

#[cfg(all(loom, any(test, feature = "testing")))]
pub(crate) type Contender = CustomBackoff;

#[cfg(all(loom, any(test, feature = "testing")))]
pub(crate) struct CustomBackoff;

#[cfg(all(loom, any(test, feature = "testing")))]
impl CustomBackoff {
    pub fn new() -> Self {
        Self {}
    }

    pub fn is_completed(&self) -> bool {
        true
    }

    pub fn snooze(&self) {
        loom::thread::yield_now();
    }
}
