use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use super::TerminationCondition;

/// A [`TerminationCondition`] backed by a shared flag which can be flipped from another thread.
///
/// This is the interrupt monitor for callers which implement their own timeout or cancellation
/// policy: clone the flag, hand one copy to the engine, and call [`InterruptFlag::interrupt`] on
/// the other when the search should stop.
#[derive(Clone, Debug, Default)]
pub struct InterruptFlag {
    interrupted: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> InterruptFlag {
        InterruptFlag::default()
    }

    /// Request the search to stop at its next poll.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::Relaxed);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}

impl TerminationCondition for InterruptFlag {
    fn should_stop(&mut self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}
