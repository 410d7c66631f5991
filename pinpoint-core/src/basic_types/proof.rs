use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

use crate::containers::HashMap;

/// A single inference of a proof: the `conclusion` is derivable from the `premises` under the
/// `justification` axioms.
///
/// Conclusions and axioms are opaque tokens; the engines only ever hash, compare and clone them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inference<C, A> {
    conclusion: C,
    premises: Vec<C>,
    justification: Vec<A>,
}

impl<C, A> Inference<C, A> {
    pub fn new(conclusion: C, premises: Vec<C>, justification: Vec<A>) -> Self {
        Inference {
            conclusion,
            premises,
            justification,
        }
    }

    pub fn conclusion(&self) -> &C {
        &self.conclusion
    }

    pub fn premises(&self) -> &[C] {
        &self.premises
    }

    pub fn justification(&self) -> &[A] {
        &self.justification
    }
}

/// The proof source consumed by the engines.
///
/// Implementations must be deterministic and side-effect-free for a given proof snapshot. The
/// engines fetch the inferences of each conclusion exactly once per engine lifetime, so an
/// implementation does not need to cache unless it is shared between engines.
pub trait Proof<C, A> {
    /// All inferences which derive `conclusion`.
    fn inferences_of(&self, conclusion: &C) -> Vec<Inference<C, A>>;
}

impl<C, A, P: Proof<C, A>> Proof<C, A> for &P {
    fn inferences_of(&self, conclusion: &C) -> Vec<Inference<C, A>> {
        (*self).inferences_of(conclusion)
    }
}

/// A [`Proof`] backed by a hash map, built up inference by inference.
pub struct InMemoryProof<C, A> {
    inferences: HashMap<C, Vec<Inference<C, A>>>,
}

impl<C, A> Default for InMemoryProof<C, A> {
    fn default() -> Self {
        InMemoryProof {
            inferences: HashMap::default(),
        }
    }
}

impl<C, A> InMemoryProof<C, A>
where
    C: Clone + Eq + Hash,
{
    pub fn add(&mut self, inference: Inference<C, A>) {
        self.inferences
            .entry(inference.conclusion().clone())
            .or_default()
            .push(inference);
    }
}

impl<C, A> FromIterator<Inference<C, A>> for InMemoryProof<C, A>
where
    C: Clone + Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = Inference<C, A>>>(iter: T) -> Self {
        let mut proof = InMemoryProof::default();

        for inference in iter {
            proof.add(inference);
        }

        proof
    }
}

impl<C, A> Proof<C, A> for InMemoryProof<C, A>
where
    C: Clone + Eq + Hash,
    A: Clone,
{
    fn inferences_of(&self, conclusion: &C) -> Vec<Inference<C, A>> {
        self.inferences.get(conclusion).cloned().unwrap_or_default()
    }
}

impl<C, A> Debug for InMemoryProof<C, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProof")
            .field("num_conclusions", &self.inferences.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferences_are_grouped_by_conclusion() {
        let proof: InMemoryProof<&str, &str> = [
            Inference::new("q", vec!["p"], vec!["x"]),
            Inference::new("q", vec![], vec!["y"]),
            Inference::new("p", vec![], vec!["z"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(proof.inferences_of(&"q").len(), 2);
        assert_eq!(proof.inferences_of(&"p").len(), 1);
        assert!(proof.inferences_of(&"r").is_empty());
    }
}
