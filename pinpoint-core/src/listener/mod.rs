//! The streaming callback protocol through which the engines report their results.
//!
//! An enumeration announces the kind of computation it performs, then reports zero or more
//! non-nesting `found ... complete` brackets (one per minimal justification or repair, with the
//! member axioms reported through [`EnumerationListener::useful_axiom`] inside the bracket), and
//! closes with exactly one [`EnumerationListener::computation_complete`].

mod adapters;
mod collectors;

pub use adapters::*;
pub use collectors::*;

/// The callbacks invoked by the engines while they enumerate minimal justifications and repairs.
///
/// All methods default to doing nothing, so a listener only implements the events it cares
/// about. Justification and repair brackets may interleave at the top level when listeners are
/// shared between engines, but they never nest.
pub trait EnumerationListener<A> {
    /// Announced once per enumeration, before any results, if the enumeration computes
    /// justifications.
    fn computes_justifications(&mut self) {}

    /// Announced once per enumeration, before any results, if the enumeration computes repairs.
    fn computes_repairs(&mut self) {}

    /// Opens the bracket of the next minimal justification.
    fn new_justification_found(&mut self) {}

    /// Closes the bracket opened by
    /// [`new_justification_found`](EnumerationListener::new_justification_found).
    fn new_justification_complete(&mut self) {}

    /// Opens the bracket of the next minimal repair.
    fn new_repair_found(&mut self) {}

    /// Closes the bracket opened by [`new_repair_found`](EnumerationListener::new_repair_found).
    fn new_repair_complete(&mut self) {}

    /// An axiom which appears in the justification or repair whose bracket is currently open.
    fn useful_axiom(&mut self, _axiom: &A) {}

    /// The terminal event; invoked exactly once, also when the enumeration was interrupted.
    fn computation_complete(&mut self) {}
}
