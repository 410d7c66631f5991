mod hitting_set;

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

pub use hitting_set::*;
use log::debug;
use log::trace;

use crate::basic_types::AxiomId;
use crate::basic_types::ConclusionId;
use crate::basic_types::EnumerationOutcome;
use crate::basic_types::InferenceId;
use crate::basic_types::Interrupted;
use crate::basic_types::Proof;
use crate::basic_types::SortedIdSet;
use crate::engine::CardinalityPriority;
use crate::engine::PriorityComparator;
use crate::engine::proof_index::ProofIndex;
use crate::listener::EnumerationListener;
use crate::minimality::MinimalityIndex;
use crate::minimality::SubsetTrie;
use crate::minimality::merge_signature;
use crate::pinpoint_assert_advanced;
use crate::statistics::ProofStatistics;
use crate::statistics::RepairStatistics;
use crate::termination::TerminationCondition;

/// The repair-search engine.
///
/// Given a [`Proof`] and a query conclusion, the engine enumerates every minimal repair of the
/// query: each minimal axiom subset whose removal makes the query underivable. Equivalently,
/// the repairs are the minimal hitting sets of all justifications of the query. Repairs are
/// streamed to an [`EnumerationListener`] in non-decreasing priority order of the configured
/// [`PriorityComparator`].
///
/// The search explores partial repair jobs: along every branch the repair only grows and the
/// live derivations left to disable only shrink, which bounds the search and keeps the
/// minimality checks against previously reported repairs sound. The pulled proof persists
/// across queries; job state is query-scoped.
pub struct RepairSearch<C, A, P, R = CardinalityPriority> {
    proof: P,
    index: ProofIndex<C, A>,
    comparator: R,
    statistics: RepairStatistics,
}

/// A partial state of the repair search.
#[derive(Debug, Clone)]
struct RepairJob<Priority> {
    /// The priority of `repair`; cached because the queue compares it often.
    priority: Priority,
    /// Axioms already chosen for removal.
    repair: SortedIdSet<AxiomId>,
    /// Live derivations which must still be disabled.
    to_break: SortedIdSet<InferenceId>,
    /// Conclusions already made underivable in this partial state.
    broken: SortedIdSet<ConclusionId>,
}

impl<Priority: Ord> PartialEq for RepairJob<Priority> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Priority: Ord> Eq for RepairJob<Priority> {}

impl<Priority: Ord> PartialOrd for RepairJob<Priority> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Priority: Ord> Ord for RepairJob<Priority> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.to_break.len().cmp(&other.to_break.len()))
    }
}

impl<C, A, P> RepairSearch<C, A, P>
where
    C: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    P: Proof<C, A>,
{
    /// Create an engine over `proof` with the default cardinality comparator.
    pub fn new(proof: P) -> Self {
        RepairSearch::with_comparator(proof, CardinalityPriority)
    }
}

impl<C, A, P, R> RepairSearch<C, A, P, R>
where
    C: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
    P: Proof<C, A>,
    R: PriorityComparator,
{
    /// Create an engine over `proof` which reports repairs in the order of `comparator`.
    ///
    /// The comparator must satisfy the monotonicity law documented on [`PriorityComparator`].
    pub fn with_comparator(proof: P, comparator: R) -> Self {
        RepairSearch {
            proof,
            index: ProofIndex::default(),
            comparator,
            statistics: RepairStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &RepairStatistics {
        &self.statistics
    }

    pub fn proof_statistics(&self) -> &ProofStatistics {
        &self.index.statistics
    }

    /// Enumerate all minimal repairs of `query`, streaming them to `listener`.
    ///
    /// The termination condition is polled between work units; once it triggers, the engine
    /// stops silently after closing with
    /// [`computation_complete`](EnumerationListener::computation_complete). Already-reported
    /// repairs stand.
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
        listener.computes_repairs();

        let query_id = self.index.conclusions.intern(query);
        let result = self.search(query_id, listener, termination);

        self.index.statistics.log();
        self.statistics.log();
        listener.computation_complete();

        result.into()
    }

    fn search<L, T>(
        &mut self,
        query: ConclusionId,
        listener: &mut L,
        termination: &mut T,
    ) -> Result<(), Interrupted>
    where
        L: EnumerationListener<A>,
        T: TerminationCondition,
    {
        // the repair search only needs the defining map, not the individual inference ids
        self.index
            .pull_reachable(&self.proof, query, termination, |_| {})?;

        let mut queue = BinaryHeap::new();
        queue.push(Reverse(self.initial_job(query)));

        // repairs reported for this query so far
        let mut minimal_repairs: SubsetTrie<AxiomId> = SubsetTrie::default();
        // signatures of the jobs expanded so far
        let mut expanded_jobs: SubsetTrie<u64> = SubsetTrie::default();

        debug!("repair search for {query:?} started");

        loop {
            if termination.should_stop() {
                return Err(Interrupted);
            }

            let Some(Reverse(job)) = queue.pop() else {
                break;
            };

            // a superset of a reported repair can never become minimal
            if !minimal_repairs.is_minimal(&job.repair) {
                self.statistics.dominated_jobs += 1;
                continue;
            }

            let signature = merge_signature(&job.repair, &job.to_break);
            if !expanded_jobs.is_minimal(&signature) {
                self.statistics.dominated_jobs += 1;
                continue;
            }
            expanded_jobs.insert(signature);

            if job.to_break.is_empty() {
                self.report_repair(&job.repair, &mut minimal_repairs, listener);
                continue;
            }

            self.statistics.expanded_jobs += 1;
            self.expand(&job, &mut queue);
        }

        Ok(())
    }

    /// The seed of the search: the result of breaking the query conclusion on the empty state.
    fn initial_job(&self, query: ConclusionId) -> RepairJob<R::Priority> {
        let repair = SortedIdSet::empty();
        let (to_break, broken) = self.break_conclusion(
            query,
            &repair,
            &SortedIdSet::empty(),
            &SortedIdSet::empty(),
        );

        RepairJob {
            priority: self.comparator.priority(&repair),
            repair,
            to_break,
            broken,
        }
    }

    /// Enqueue one successor job per way of disabling one live inference of `job`: breaking one
    /// of its premises, or adding one of its justification axioms to the repair.
    fn expand(
        &self,
        job: &RepairJob<R::Priority>,
        queue: &mut BinaryHeap<Reverse<RepairJob<R::Priority>>>,
    ) {
        // the live inference with the fewest premises and justification axioms branches least
        let target = job
            .to_break
            .iter()
            .min_by_key(|&id| {
                let inference = &self.index.inferences[id];
                inference.premises.len() + inference.justification.len()
            })
            .unwrap();

        trace!(
            "disabling inference {target:?} of job with {} live inferences",
            job.to_break.len()
        );

        let premises = self.index.inferences[target].premises.clone();
        let justification = self.index.inferences[target].justification.clone();

        for premise in premises.iter() {
            pinpoint_assert_advanced!(
                !job.broken.contains(premise),
                "live inferences have no broken premises"
            );

            let (to_break, broken) =
                self.break_conclusion(premise, &job.repair, &job.to_break, &job.broken);

            queue.push(Reverse(RepairJob {
                priority: job.priority.clone(),
                repair: job.repair.clone(),
                to_break,
                broken,
            }));
        }

        for axiom in justification.iter() {
            let repair = job.repair.with(axiom);
            let to_break = job
                .to_break
                .filtered(|id| !self.index.inferences[id].justification.contains(axiom));

            queue.push(Reverse(RepairJob {
                priority: self.comparator.priority(&repair),
                repair,
                to_break,
                broken: job.broken.clone(),
            }));
        }
    }

    /// Mark `conclusion` broken: drop the live inferences it disables, and add every inference
    /// defining it which is still live under the repair and the broken conclusions.
    fn break_conclusion(
        &self,
        conclusion: ConclusionId,
        repair: &SortedIdSet<AxiomId>,
        to_break: &SortedIdSet<InferenceId>,
        broken: &SortedIdSet<ConclusionId>,
    ) -> (SortedIdSet<InferenceId>, SortedIdSet<ConclusionId>) {
        let broken = broken.with(conclusion);

        let mut live: Vec<InferenceId> = to_break
            .iter()
            .filter(|&id| !self.index.inferences[id].premises.contains(conclusion))
            .collect();

        for &id in self
            .index
            .defining
            .get(&conclusion)
            .map(Vec::as_slice)
            .unwrap_or(&[])
        {
            let inference = &self.index.inferences[id];
            if inference.premises.is_disjoint_from(&broken)
                && inference.justification.is_disjoint_from(repair)
            {
                live.push(id);
            }
        }

        (SortedIdSet::from_unsorted(live), broken)
    }

    fn report_repair<L: EnumerationListener<A>>(
        &mut self,
        repair: &SortedIdSet<AxiomId>,
        minimal_repairs: &mut SubsetTrie<AxiomId>,
        listener: &mut L,
    ) {
        trace!("minimal repair of {} axioms found", repair.len());

        minimal_repairs.insert(repair.clone());
        self.statistics.repairs_found += 1;

        listener.new_repair_found();
        for axiom in repair.iter() {
            listener.useful_axiom(self.index.axioms.resolve(axiom));
        }
        listener.new_repair_complete();
    }
}

impl<C, A, P, R> Debug for RepairSearch<C, A, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepairSearch")
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
    use crate::listener::RepairCollector;
    use crate::termination::Indefinite;

    fn sorted(mut repairs: Vec<Vec<&'static str>>) -> Vec<Vec<&'static str>> {
        for repair in &mut repairs {
            repair.sort_unstable();
        }
        repairs.sort();
        repairs
    }

    fn enumerate<P: Proof<&'static str, &'static str>>(
        search: &mut RepairSearch<&'static str, &'static str, P>,
        query: &'static str,
    ) -> Vec<Vec<&'static str>> {
        let mut collector = RepairCollector::default();
        let outcome = search.enumerate(&query, &mut collector, &mut Indefinite);

        assert_eq!(outcome, EnumerationOutcome::Completed);
        assert!(collector.is_complete());

        collector.into_repairs()
    }

    #[test]
    fn every_link_of_a_chain_is_a_repair() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["p"], vec!["x"]),
            Inference::new("p", vec!["r"], vec!["y"]),
            Inference::new("r", vec![], vec!["z"]),
        ]
        .into_iter()
        .collect();

        let mut search = RepairSearch::new(&proof);
        let repairs = enumerate(&mut search, "q");

        assert_eq!(sorted(repairs), vec![vec!["x"], vec!["y"], vec!["z"]]);
    }

    #[test]
    fn alternative_derivations_must_all_be_hit() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec![], vec!["b"]),
            Inference::new("q", vec!["p"], vec!["a"]),
            Inference::new("p", vec![], vec!["c"]),
        ]
        .into_iter()
        .collect();

        let mut search = RepairSearch::new(&proof);
        let repairs = enumerate(&mut search, "q");

        assert_eq!(sorted(repairs), vec![vec!["a", "b"], vec!["b", "c"]]);
    }

    #[test]
    fn an_underivable_query_has_the_empty_repair() {
        let proof: InMemoryProof<&str, &str> =
            [Inference::new("q", vec![], vec!["b"])].into_iter().collect();

        let mut search = RepairSearch::new(&proof);
        let repairs = enumerate(&mut search, "unknown");

        assert_eq!(repairs, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn an_axiom_free_derivation_cannot_be_repaired() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["p"], vec![]),
            Inference::new("p", vec![], vec![]),
        ]
        .into_iter()
        .collect();

        let mut search = RepairSearch::new(&proof);
        let repairs = enumerate(&mut search, "q");

        assert!(repairs.is_empty());
    }
}
