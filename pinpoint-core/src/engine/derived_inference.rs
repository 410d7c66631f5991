use crate::basic_types::AxiomId;
use crate::basic_types::ConclusionId;
use crate::basic_types::SortedIdSet;
use crate::minimality::merge_signature;

/// The working unit of the engines: an inference normalized to sorted id arrays.
///
/// Two derived inferences sharing a conclusion are comparable by a partial order: one dominates
/// the other iff both its premises and its justification are subsets of the other's. Only
/// non-dominated inferences are kept for indexing and resolution.
#[derive(Debug, Clone)]
pub(crate) struct DerivedInference {
    pub(crate) conclusion: ConclusionId,
    pub(crate) premises: SortedIdSet<ConclusionId>,
    pub(crate) justification: SortedIdSet<AxiomId>,
    /// Whether the inference has passed the local minimality check and was indexed.
    pub(crate) checked_minimal: bool,
    /// The pivot the inference is currently indexed under, if any.
    pub(crate) selected_pivot: Option<ConclusionId>,
}

impl DerivedInference {
    pub(crate) fn new(
        conclusion: ConclusionId,
        premises: SortedIdSet<ConclusionId>,
        justification: SortedIdSet<AxiomId>,
    ) -> DerivedInference {
        DerivedInference {
            conclusion,
            premises,
            justification,
            checked_minimal: false,
            selected_pivot: None,
        }
    }

    /// The signature deciding domination between derived inferences of the same conclusion.
    pub(crate) fn signature(&self) -> SortedIdSet<u64> {
        merge_signature(&self.justification, &self.premises)
    }
}
