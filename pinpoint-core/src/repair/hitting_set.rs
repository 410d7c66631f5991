use std::hash::Hash;

use super::RepairSearch;
use crate::basic_types::EnumerationOutcome;
use crate::basic_types::Inference;
use crate::basic_types::Proof;
use crate::listener::EnumerationListener;
use crate::listener::RepairCollector;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

/// The synthetic goal conclusion of the one-level proof the reduction builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SyntheticGoal;

/// A one-level proof in which the goal is derivable by one axiom-only inference per input set.
///
/// A repair of the goal must remove an axiom from every inference, which is exactly a hitting
/// set of the family.
struct SetFamilyProof<A> {
    family: Vec<Vec<A>>,
}

impl<A: Clone> Proof<SyntheticGoal, A> for SetFamilyProof<A> {
    fn inferences_of(&self, _conclusion: &SyntheticGoal) -> Vec<Inference<SyntheticGoal, A>> {
        self.family
            .iter()
            .map(|set| Inference::new(SyntheticGoal, Vec::new(), set.clone()))
            .collect()
    }
}

/// Compute all minimal hitting sets of a family of sets: the minimal sets intersecting every
/// member of the family.
///
/// A standalone utility independent of the justification machinery; the hitting sets are
/// reported smallest first. The hitting sets of an empty family are `[[]]` (the empty set hits
/// every member vacuously), and a family containing the empty set has no hitting set at all.
pub fn minimal_hitting_sets<A>(family: impl IntoIterator<Item = Vec<A>>) -> Vec<Vec<A>>
where
    A: Clone + Eq + Hash,
{
    let mut collector = RepairCollector::default();
    let _ = enumerate_minimal_hitting_sets(family, &mut collector, &mut Indefinite);

    collector.into_repairs()
}

/// The streaming variant of [`minimal_hitting_sets`]: hitting sets are reported to `listener`
/// through the repair callbacks, and the search polls `termination` between work units.
pub fn enumerate_minimal_hitting_sets<A, L, T>(
    family: impl IntoIterator<Item = Vec<A>>,
    listener: &mut L,
    termination: &mut T,
) -> EnumerationOutcome
where
    A: Clone + Eq + Hash,
    L: EnumerationListener<A>,
    T: TerminationCondition,
{
    let proof = SetFamilyProof {
        family: family.into_iter().collect(),
    };

    RepairSearch::new(proof).enumerate(&SyntheticGoal, listener, termination)
}
