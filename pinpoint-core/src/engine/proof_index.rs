use std::hash::Hash;

use log::trace;

use super::derived_inference::DerivedInference;
use crate::basic_types::AxiomId;
use crate::basic_types::ConclusionId;
use crate::basic_types::IdInterner;
use crate::basic_types::Inference;
use crate::basic_types::InferenceId;
use crate::basic_types::Interrupted;
use crate::basic_types::Proof;
use crate::basic_types::SortedIdSet;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::statistics::ProofStatistics;
use crate::termination::TerminationCondition;

/// The persistent proof-exploration state of an engine.
///
/// The interners, the normalized inference arena and the defining-inference map live for the
/// lifetime of the engine and are reused across queries: each conclusion's inferences are
/// fetched from the proof source exactly once.
pub(crate) struct ProofIndex<C, A> {
    pub(crate) conclusions: IdInterner<C, ConclusionId>,
    pub(crate) axioms: IdInterner<A, AxiomId>,
    /// Arena of all normalized inferences, original and derived by resolution.
    pub(crate) inferences: KeyedVec<InferenceId, DerivedInference>,
    /// The normalized original inferences of each fetched conclusion.
    pub(crate) defining: HashMap<ConclusionId, Vec<InferenceId>>,
    /// Conclusions whose inferences have been fetched from the proof source.
    fetched: HashSet<ConclusionId>,
    pub(crate) statistics: ProofStatistics,
}

impl<C, A> Default for ProofIndex<C, A> {
    fn default() -> Self {
        ProofIndex {
            conclusions: IdInterner::default(),
            axioms: IdInterner::default(),
            inferences: KeyedVec::default(),
            defining: HashMap::default(),
            fetched: HashSet::default(),
            statistics: ProofStatistics::default(),
        }
    }
}

impl<C, A> ProofIndex<C, A>
where
    C: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// The number of original inferences defining `conclusion`.
    pub(crate) fn defining_count(&self, conclusion: ConclusionId) -> usize {
        self.defining.get(&conclusion).map_or(0, Vec::len)
    }

    /// Fetch and normalize the inferences of every conclusion reachable backwards from `root`
    /// which has not been fetched before, reporting each newly normalized inference through
    /// `on_new_inference`.
    ///
    /// The callback fires as soon as an inference is stored, so inferences normalized before an
    /// interruption are not lost; a later pull resumes with the remaining conclusions.
    pub(crate) fn pull_reachable<P: Proof<C, A>>(
        &mut self,
        proof: &P,
        root: ConclusionId,
        termination: &mut impl TerminationCondition,
        mut on_new_inference: impl FnMut(InferenceId),
    ) -> Result<(), Interrupted> {
        let mut pending = vec![root];

        while let Some(conclusion) = pending.pop() {
            if self.fetched.contains(&conclusion) {
                continue;
            }

            if termination.should_stop() {
                return Err(Interrupted);
            }

            let _ = self.fetched.insert(conclusion);
            self.statistics.fetched_conclusions += 1;

            let object = self.conclusions.resolve(conclusion).clone();
            for inference in proof.inferences_of(&object) {
                if let Some(id) = self.normalize(&inference) {
                    pending.extend(self.inferences[id].premises.iter());
                    on_new_inference(id);
                }
            }
        }

        trace!("{} conclusions fetched in total", self.fetched.len());

        Ok(())
    }

    /// Convert an original inference to a [`DerivedInference`] over sorted id arrays and store
    /// it in the arena and the defining map.
    ///
    /// Tautologies are discarded immediately: an inference whose conclusion appears among its
    /// own premises can never contribute a minimal justification.
    fn normalize(&mut self, inference: &Inference<C, A>) -> Option<InferenceId> {
        self.statistics.original_inferences += 1;

        let conclusion = self.conclusions.intern(inference.conclusion());
        let premises: SortedIdSet<ConclusionId> = inference
            .premises()
            .iter()
            .map(|premise| self.conclusions.intern(premise))
            .collect();
        let justification: SortedIdSet<AxiomId> = inference
            .justification()
            .iter()
            .map(|axiom| self.axioms.intern(axiom))
            .collect();

        if premises.contains(conclusion) {
            self.statistics.discarded_tautologies += 1;
            return None;
        }

        let id = self
            .inferences
            .push(DerivedInference::new(conclusion, premises, justification));
        self.defining.entry(conclusion).or_default().push(id);

        Some(id)
    }
}
