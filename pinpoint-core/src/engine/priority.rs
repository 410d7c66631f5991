use crate::basic_types::AxiomId;
use crate::basic_types::SortedIdSet;

/// Determines the order in which minimal justifications and repairs are reported.
///
/// The work queues order their elements by the priority of the justification (resp. repair) of
/// each element, so results reach the listener in non-decreasing priority order.
///
/// # Monotonicity law
/// For axiom sets `s1` and `s2` with `s2` a strict superset of `s1`, it must hold that
/// `priority(s1) < priority(s2)`. The engines rely on this law for the streaming minimality
/// pruning itself, not just for the report order; it is a documented precondition which is
/// validated in tests, not at runtime.
pub trait PriorityComparator {
    type Priority: Ord + Clone;

    fn priority(&self, axioms: &SortedIdSet<AxiomId>) -> Self::Priority;
}

/// The default [`PriorityComparator`]: orders by cardinality, so the smallest explanations are
/// reported first.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardinalityPriority;

impl PriorityComparator for CardinalityPriority {
    type Priority = usize;

    fn priority(&self, axioms: &SortedIdSet<AxiomId>) -> usize {
        axioms.len()
    }
}
