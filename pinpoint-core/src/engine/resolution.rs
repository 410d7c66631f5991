use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

use log::debug;
use log::trace;

use super::derived_inference::DerivedInference;
use super::priority::CardinalityPriority;
use super::priority::PriorityComparator;
use super::proof_index::ProofIndex;
use super::selection::SelectionStrategy;
use super::unprocessed::QueueEntry;
use super::unprocessed::UnprocessedInference;
use crate::basic_types::AxiomId;
use crate::basic_types::ConclusionId;
use crate::basic_types::EnumerationOutcome;
use crate::basic_types::InferenceId;
use crate::basic_types::Interrupted;
use crate::basic_types::Proof;
use crate::basic_types::SortedIdSet;
use crate::containers::HashMap;
use crate::listener::EnumerationListener;
use crate::minimality::MinimalityIndex;
use crate::minimality::SubsetTrie;
use crate::pinpoint_assert_moderate;
use crate::pinpoint_assert_simple;
use crate::statistics::ProofStatistics;
use crate::statistics::ResolutionStatistics;
use crate::termination::TerminationCondition;

/// The justification-search engine.
///
/// Given a [`Proof`] and a query conclusion, the engine enumerates every minimal justification
/// of the query: each minimal axiom subset sufficient to derive it through some combination of
/// proof inferences. Justifications are streamed to an
/// [`EnumerationListener`] in non-decreasing priority order of the configured
/// [`PriorityComparator`].
///
/// The search resolves normalized inferences against each other on pivot atoms chosen by the
/// configured [`SelectionStrategy`], and prunes through two subsumption levels: per conclusion,
/// dominated derived inferences are dropped; per query, candidates whose justification is a
/// superset of an already-reported justification are deferred to a blocked list. The normalized
/// proof, the resolution indexes and the blocked list persist across queries on the same
/// instance, so repeated and related queries reuse all prior derivations.
pub struct ResolutionEngine<C, A, P, R = CardinalityPriority> {
    proof: P,
    pub(crate) index: ProofIndex<C, A>,
    resolution: ResolutionIndex,
    strategy: SelectionStrategy,
    comparator: R,
    statistics: ResolutionStatistics,
}

/// The resolution state which persists across queries.
#[derive(Debug, Default)]
struct ResolutionIndex {
    /// Locally minimal inferences which selected their own conclusion, by pivot.
    by_conclusion: HashMap<ConclusionId, Vec<InferenceId>>,
    /// Locally minimal inferences which selected one of their premises, by pivot.
    by_premise: HashMap<ConclusionId, Vec<InferenceId>>,
    /// Per conclusion, the signatures of all locally minimal derived inferences.
    local_minimality: HashMap<ConclusionId, SubsetTrie<u64>>,
    /// Inferences deferred because a reported justification dominated theirs; replayed on the
    /// next query, where that justification may not dominate them.
    blocked: Vec<InferenceId>,
    /// Inferences whose pivot choice depended on the query identity.
    query_sensitive: Vec<InferenceId>,
    /// Work discovered but not yet processed; outlives an interrupted enumeration.
    pending: Vec<UnprocessedInference>,
    previous_query: Option<ConclusionId>,
}

impl ResolutionIndex {
    fn unindex(&mut self, id: InferenceId, pivot: ConclusionId) {
        if let Some(bucket) = self.by_conclusion.get_mut(&pivot) {
            bucket.retain(|&other| other != id);
        }
        if let Some(bucket) = self.by_premise.get_mut(&pivot) {
            bucket.retain(|&other| other != id);
        }
    }
}

/// The state of a single `enumerate` call; never escapes it.
struct Session<Priority> {
    query: ConclusionId,
    queue: BinaryHeap<Reverse<QueueEntry<Priority>>>,
    /// The justifications reported for this query so far.
    minimal_justifications: SubsetTrie<AxiomId>,
}

impl<C, A, P> ResolutionEngine<C, A, P>
where
    C: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    P: Proof<C, A>,
{
    /// Create an engine over `proof` with the default cardinality comparator.
    pub fn new(proof: P, strategy: SelectionStrategy) -> Self {
        ResolutionEngine::with_comparator(proof, strategy, CardinalityPriority)
    }
}

impl<C, A, P, R> ResolutionEngine<C, A, P, R>
where
    C: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    P: Proof<C, A>,
    R: PriorityComparator,
{
    /// Create an engine over `proof` which reports justifications in the order of `comparator`.
    ///
    /// The comparator must satisfy the monotonicity law documented on [`PriorityComparator`].
    pub fn with_comparator(proof: P, strategy: SelectionStrategy, comparator: R) -> Self {
        ResolutionEngine {
            proof,
            index: ProofIndex::default(),
            resolution: ResolutionIndex::default(),
            strategy,
            comparator,
            statistics: ResolutionStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &ResolutionStatistics {
        &self.statistics
    }

    pub fn proof_statistics(&self) -> &ProofStatistics {
        &self.index.statistics
    }

    /// Enumerate all minimal justifications of `query`, streaming them to `listener`.
    ///
    /// The termination condition is polled between work units; once it triggers, the engine
    /// stops silently after closing with
    /// [`computation_complete`](EnumerationListener::computation_complete). Already-reported
    /// justifications stand. The engine can be queried repeatedly, with the same or different
    /// queries, and reuses all state built by earlier calls.
    pub fn enumerate<L, T>(
        &mut self,
        query: &C,
        listener: &mut L,
        termination: &mut T,
    ) -> EnumerationOutcome
    where
        L: EnumerationListener<A>,
        T: TerminationCondition,
    {
        listener.computes_justifications();

        let query_id = self.index.conclusions.intern(query);
        let mut session = Session {
            query: query_id,
            queue: BinaryHeap::new(),
            minimal_justifications: SubsetTrie::default(),
        };

        let result = self.search(&mut session, listener, termination);

        self.index.statistics.log();
        self.statistics.log();
        listener.computation_complete();

        result.into()
    }

    fn search<L, T>(
        &mut self,
        session: &mut Session<R::Priority>,
        listener: &mut L,
        termination: &mut T,
    ) -> Result<(), Interrupted>
    where
        L: EnumerationListener<A>,
        T: TerminationCondition,
    {
        let result = self.run(session, listener, termination);

        if result.is_err() {
            // keep the unprocessed work for the next query instead of losing it with the
            // session
            self.salvage(session);
        }

        result
    }

    fn run<L, T>(
        &mut self,
        session: &mut Session<R::Priority>,
        listener: &mut L,
        termination: &mut T,
    ) -> Result<(), Interrupted>
    where
        L: EnumerationListener<A>,
        T: TerminationCondition,
    {
        self.prepare_query(session, termination)?;

        debug!(
            "justification search for {:?} starts from {} queued inferences",
            session.query,
            session.queue.len()
        );

        loop {
            if termination.should_stop() {
                return Err(Interrupted);
            }

            let Some(Reverse(entry)) = session.queue.pop() else {
                break;
            };

            self.process(entry, session, listener);
        }

        Ok(())
    }

    fn salvage(&mut self, session: &mut Session<R::Priority>) {
        while let Some(Reverse(entry)) = session.queue.pop() {
            self.resolution.pending.push(entry.inference);
        }
    }

    /// Initialize the session: redo query-dependent selections, replay blocked inferences, and
    /// pull the part of the proof the query newly reaches.
    fn prepare_query<T: TerminationCondition>(
        &mut self,
        session: &mut Session<R::Priority>,
        termination: &mut T,
    ) -> Result<(), Interrupted> {
        let query = session.query;

        if self.resolution.previous_query != Some(query) {
            // selections which applied the query exception under the previous query, and
            // inferences currently indexed under the new query id, are no longer legal pivots
            let mut stale = std::mem::take(&mut self.resolution.query_sensitive);
            stale.extend(self.resolution.by_conclusion.remove(&query).unwrap_or_default());
            stale.extend(self.resolution.by_premise.remove(&query).unwrap_or_default());

            for id in stale {
                if let Some(pivot) = self.index.inferences[id].selected_pivot.take() {
                    self.resolution.unindex(id, pivot);
                    self.resolution.pending.push(UnprocessedInference::Initial(id));
                }
            }
        }

        // a justification which dominated these for the previous query may not dominate them
        // for this one
        for id in std::mem::take(&mut self.resolution.blocked) {
            self.resolution.pending.push(UnprocessedInference::Initial(id));
        }

        self.index
            .pull_reachable(&self.proof, query, termination, |id| {
                self.resolution.pending.push(UnprocessedInference::Initial(id));
            })?;

        self.resolution.previous_query = Some(query);

        for unprocessed in std::mem::take(&mut self.resolution.pending) {
            self.enqueue_unprocessed(session, unprocessed);
        }

        Ok(())
    }

    fn enqueue_unprocessed(
        &self,
        session: &mut Session<R::Priority>,
        unprocessed: UnprocessedInference,
    ) {
        match unprocessed {
            UnprocessedInference::Initial(id) => self.enqueue_stored(session, id),
            UnprocessedInference::Resolvent {
                selected_conclusion,
                selected_premise,
                justification,
            } => {
                let conclusion_side = &self.index.inferences[selected_conclusion];
                let premise_side = &self.index.inferences[selected_premise];
                let premise_count = conclusion_side
                    .premises
                    .union_size_without(&premise_side.premises, conclusion_side.conclusion);

                session.queue.push(Reverse(QueueEntry {
                    priority: self.comparator.priority(&justification),
                    premise_count,
                    inference: UnprocessedInference::Resolvent {
                        selected_conclusion,
                        selected_premise,
                        justification,
                    },
                }));
            }
        }
    }

    fn enqueue_stored(&self, session: &mut Session<R::Priority>, id: InferenceId) {
        let inference = &self.index.inferences[id];

        session.queue.push(Reverse(QueueEntry {
            priority: self.comparator.priority(&inference.justification),
            premise_count: inference.premises.len(),
            inference: UnprocessedInference::Initial(id),
        }));
    }

    fn process<L: EnumerationListener<A>>(
        &mut self,
        entry: QueueEntry<R::Priority>,
        session: &mut Session<R::Priority>,
        listener: &mut L,
    ) {
        match entry.inference {
            UnprocessedInference::Initial(id) => self.process_stored(id, session, listener),
            UnprocessedInference::Resolvent {
                selected_conclusion,
                selected_premise,
                justification,
            } => {
                if let Some(derived) =
                    self.materialize(selected_conclusion, selected_premise, justification)
                {
                    self.process_derived(derived, session, listener);
                }
            }
        }
    }

    /// Run an arena-stored inference through the pruning and resolution pipeline.
    fn process_stored<L: EnumerationListener<A>>(
        &mut self,
        id: InferenceId,
        session: &mut Session<R::Priority>,
        listener: &mut L,
    ) {
        if !session
            .minimal_justifications
            .is_minimal(&self.index.inferences[id].justification)
        {
            self.block(id);
            return;
        }

        let inference = &self.index.inferences[id];
        if inference.premises.is_empty() && inference.conclusion == session.query {
            let justification = inference.justification.clone();
            self.report_justification(justification, session, listener);
            // it cannot produce further useful resolvents for this query
            self.block(id);
            return;
        }

        if !self.index.inferences[id].checked_minimal {
            let conclusion = self.index.inferences[id].conclusion;
            let signature = self.index.inferences[id].signature();
            let local = self.resolution.local_minimality.entry(conclusion).or_default();

            if !local.is_minimal(&signature) {
                self.statistics.dominated_inferences += 1;
                return;
            }

            local.insert(signature);
            self.index.inferences[id].checked_minimal = true;
        }

        self.resolve(id, session);
    }

    /// Run a freshly materialized resolvent through the pipeline; it only enters the arena once
    /// it survives, or is deferred by, the minimality checks.
    fn process_derived<L: EnumerationListener<A>>(
        &mut self,
        derived: DerivedInference,
        session: &mut Session<R::Priority>,
        listener: &mut L,
    ) {
        if !session.minimal_justifications.is_minimal(&derived.justification) {
            let id = self.index.inferences.push(derived);
            self.block(id);
            return;
        }

        if derived.premises.is_empty() && derived.conclusion == session.query {
            let justification = derived.justification.clone();
            let id = self.index.inferences.push(derived);
            self.report_justification(justification, session, listener);
            self.block(id);
            return;
        }

        let signature = derived.signature();
        let local = self
            .resolution
            .local_minimality
            .entry(derived.conclusion)
            .or_default();

        if !local.is_minimal(&signature) {
            self.statistics.dominated_inferences += 1;
            return;
        }

        local.insert(signature);

        let mut derived = derived;
        derived.checked_minimal = true;
        let id = self.index.inferences.push(derived);

        self.resolve(id, session);
    }

    fn block(&mut self, id: InferenceId) {
        self.statistics.blocked_inferences += 1;
        self.resolution.blocked.push(id);
    }

    fn report_justification<L: EnumerationListener<A>>(
        &mut self,
        justification: SortedIdSet<AxiomId>,
        session: &mut Session<R::Priority>,
        listener: &mut L,
    ) {
        trace!("minimal justification of {} axioms found", justification.len());

        session.minimal_justifications.insert(justification.clone());
        self.statistics.justifications_found += 1;

        listener.new_justification_found();
        for axiom in justification.iter() {
            listener.useful_axiom(self.index.axioms.resolve(axiom));
        }
        listener.new_justification_complete();
    }

    /// Choose a pivot for the locally minimal inference `id`, index it, and combine it with
    /// every previously indexed inference on the opposite side of that pivot.
    ///
    /// New inferences are matched immediately against the opposite index and never re-matched
    /// later, so each valid resolvent pair is produced exactly once.
    fn resolve(&mut self, id: InferenceId, session: &mut Session<R::Priority>) {
        let (pivot, on_conclusion, query_dependent, partners) = {
            let inference = &self.index.inferences[id];

            pinpoint_assert_moderate!(
                inference.selected_pivot.is_none(),
                "an inference is only selected while it is unindexed"
            );
            let chosen = self.strategy.select(inference, session.query, |conclusion| {
                self.index.defining_count(conclusion)
            });

            pinpoint_assert_simple!(
                inference.premises.is_empty() || chosen.pivot != session.query,
                "the query conclusion must never be selected as a resolution pivot"
            );

            let on_conclusion = chosen.pivot == inference.conclusion;
            let partners = if on_conclusion {
                self.resolution.by_premise.get(&chosen.pivot)
            } else {
                self.resolution.by_conclusion.get(&chosen.pivot)
            }
            .cloned()
            .unwrap_or_default();

            (chosen.pivot, on_conclusion, chosen.query_dependent, partners)
        };

        self.index.inferences[id].selected_pivot = Some(pivot);
        if query_dependent {
            self.resolution.query_sensitive.push(id);
        }

        if on_conclusion {
            self.resolution.by_conclusion.entry(pivot).or_default().push(id);
        } else {
            self.resolution.by_premise.entry(pivot).or_default().push(id);
        }

        for partner in partners {
            let (selected_conclusion, selected_premise) = if on_conclusion {
                (id, partner)
            } else {
                (partner, id)
            };

            self.enqueue_resolvent(selected_conclusion, selected_premise, session);
        }
    }

    fn enqueue_resolvent(
        &mut self,
        selected_conclusion: InferenceId,
        selected_premise: InferenceId,
        session: &mut Session<R::Priority>,
    ) {
        let justification = {
            let conclusion_side = &self.index.inferences[selected_conclusion];
            let premise_side = &self.index.inferences[selected_premise];

            pinpoint_assert_moderate!(
                premise_side.premises.contains(conclusion_side.conclusion),
                "resolution partners share the pivot atom"
            );

            conclusion_side.justification.union(&premise_side.justification)
        };

        self.enqueue_unprocessed(
            session,
            UnprocessedInference::Resolvent {
                selected_conclusion,
                selected_premise,
                justification,
            },
        );

        self.statistics.resolvents_enqueued += 1;
    }

    /// Build the resolvent recorded by a queue element: the conclusion of the premise side,
    /// the united premises minus the pivot, and the united justification.
    fn materialize(
        &mut self,
        selected_conclusion: InferenceId,
        selected_premise: InferenceId,
        justification: SortedIdSet<AxiomId>,
    ) -> Option<DerivedInference> {
        let conclusion_side = &self.index.inferences[selected_conclusion];
        let premise_side = &self.index.inferences[selected_premise];
        let pivot = conclusion_side.conclusion;

        let conclusion = premise_side.conclusion;
        let premises = conclusion_side
            .premises
            .union_without(&premise_side.premises, pivot);

        if premises.contains(conclusion) {
            self.index.statistics.discarded_tautologies += 1;
            return None;
        }

        Some(DerivedInference::new(conclusion, premises, justification))
    }
}

impl<C, A, P, R> Debug for ResolutionEngine<C, A, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("strategy", &self.strategy)
            .field("num_conclusions", &self.index.conclusions.len())
            .field("num_axioms", &self.index.axioms.len())
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::InMemoryProof;
    use crate::basic_types::Inference;
    use crate::listener::JustificationCollector;
    use crate::termination::Indefinite;

    fn sorted(mut justifications: Vec<Vec<&'static str>>) -> Vec<Vec<&'static str>> {
        for justification in &mut justifications {
            justification.sort_unstable();
        }
        justifications.sort();
        justifications
    }

    fn enumerate<P: Proof<&'static str, &'static str>>(
        engine: &mut ResolutionEngine<&'static str, &'static str, P>,
        query: &'static str,
    ) -> Vec<Vec<&'static str>> {
        let mut collector = JustificationCollector::default();
        let outcome = engine.enumerate(&query, &mut collector, &mut Indefinite);

        assert_eq!(outcome, EnumerationOutcome::Completed);
        assert!(collector.is_complete());

        collector.into_justifications()
    }

    #[test]
    fn a_three_inference_chain_has_one_justification() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["p"], vec!["x"]),
            Inference::new("p", vec!["r"], vec!["y"]),
            Inference::new("r", vec![], vec!["z"]),
        ]
        .into_iter()
        .collect();

        for strategy in [
            SelectionStrategy::BottomUp,
            SelectionStrategy::TopDown,
            SelectionStrategy::Threshold,
        ] {
            let mut engine = ResolutionEngine::new(&proof, strategy);
            let justifications = enumerate(&mut engine, "q");

            assert_eq!(sorted(justifications), vec![vec!["x", "y", "z"]]);
        }
    }

    #[test]
    fn dominated_justifications_are_not_reported() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec![], vec!["b"]),
            Inference::new("q", vec![], vec!["b", "d"]),
            Inference::new("q", vec!["p"], vec!["a"]),
            Inference::new("p", vec![], vec!["c"]),
        ]
        .into_iter()
        .collect();

        let mut engine = ResolutionEngine::new(&proof, SelectionStrategy::default());
        let justifications = enumerate(&mut engine, "q");

        assert_eq!(sorted(justifications), vec![vec!["a", "c"], vec!["b"]]);
    }

    #[test]
    fn tautologies_never_contribute() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["q"], vec!["a"]),
            Inference::new("q", vec![], vec!["b"]),
        ]
        .into_iter()
        .collect();

        let mut engine = ResolutionEngine::new(&proof, SelectionStrategy::default());
        let justifications = enumerate(&mut engine, "q");

        assert_eq!(sorted(justifications), vec![vec!["b"]]);
    }

    #[test]
    fn multi_premise_inferences_collect_all_branches() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["l", "r"], vec!["w"]),
            Inference::new("l", vec![], vec!["x"]),
            Inference::new("r", vec![], vec!["y"]),
            Inference::new("r", vec![], vec!["z"]),
        ]
        .into_iter()
        .collect();

        let mut engine = ResolutionEngine::new(&proof, SelectionStrategy::default());
        let justifications = enumerate(&mut engine, "q");

        assert_eq!(
            sorted(justifications),
            vec![vec!["w", "x", "y"], vec!["w", "x", "z"]]
        );
    }

    #[test]
    fn cyclic_proofs_terminate() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["p"], vec!["x"]),
            Inference::new("p", vec!["q"], vec!["y"]),
            Inference::new("p", vec![], vec!["z"]),
        ]
        .into_iter()
        .collect();

        let mut engine = ResolutionEngine::new(&proof, SelectionStrategy::default());
        let justifications = enumerate(&mut engine, "q");

        assert_eq!(sorted(justifications), vec![vec!["x", "z"]]);
    }
}
