//! A [`TerminationCondition`] is a condition which is polled by the engines during the search
//! process. It indicates when the search should stop, even if not all minimal justifications or
//! repairs have been reported. The most common examples are [`TimeBudget`], which gives the
//! search a certain time budget, and [`InterruptFlag`], which another thread can flip.

mod combinator;
mod indefinite;
mod interrupt_flag;
mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use interrupt_flag::*;
pub use time_budget::*;

/// The central trait that defines a termination condition. A termination condition determines
/// when an engine should give up searching for further results.
///
/// The engines poll the condition at the top of every work-queue iteration. Once it triggers, no
/// further listener callbacks are issued beyond the closing
/// [`computation_complete`](crate::listener::EnumerationListener::computation_complete);
/// callbacks already issued are not rolled back.
pub trait TerminationCondition {
    /// Returns `true` when the engine should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}
