use std::cmp::Ordering;

use crate::basic_types::AxiomId;
use crate::basic_types::InferenceId;
use crate::basic_types::SortedIdSet;

/// A not-yet-processed element of the justification search queue.
#[derive(Debug, Clone)]
pub(crate) enum UnprocessedInference {
    /// An inference already stored in the arena.
    Initial(InferenceId),
    /// Two indexed inferences to be combined on the conclusion of the first.
    ///
    /// The combined inference is only materialized when the element is dequeued, so resolvents
    /// which are interrupted away or dominated by then are never built. The justification union
    /// is precomputed because the queue orders by it anyway.
    Resolvent {
        selected_conclusion: InferenceId,
        selected_premise: InferenceId,
        justification: SortedIdSet<AxiomId>,
    },
}

/// A queue element: an [`UnprocessedInference`] ordered by the priority of its justification,
/// ties broken by ascending premise count.
#[derive(Debug, Clone)]
pub(crate) struct QueueEntry<P> {
    pub(crate) priority: P,
    pub(crate) premise_count: usize,
    pub(crate) inference: UnprocessedInference,
}

impl<P: Ord> PartialEq for QueueEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord> Eq for QueueEntry<P> {}

impl<P: Ord> PartialOrd for QueueEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord> Ord for QueueEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.premise_count.cmp(&other.premise_count))
    }
}
