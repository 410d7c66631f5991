use crate::containers::StorageKey;

/// The dense id of an interned conclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConclusionId(u32);

/// The dense id of an interned axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxiomId(u32);

/// The id of a normalized inference in the inference arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InferenceId(u32);

impl StorageKey for ConclusionId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConclusionId(index as u32)
    }
}

impl StorageKey for AxiomId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        AxiomId(index as u32)
    }
}

impl StorageKey for InferenceId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        InferenceId(index as u32)
    }
}
