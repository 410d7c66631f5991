use super::derived_inference::DerivedInference;
use crate::basic_types::ConclusionId;

/// Above this number of defining inferences, [`SelectionStrategy::Threshold`] stops selecting a
/// premise and selects the conclusion instead.
pub(crate) const DEFINING_THRESHOLD: usize = 2;

/// The strategy choosing which atom of a derived inference becomes the pivot for resolution.
///
/// The pivot determines which of the two selection indexes the inference joins: an inference
/// selecting its conclusion is combined with every inference selecting an equal premise, and
/// vice versa. The query conclusion is never a legitimate pivot, since resolving it away would
/// prevent the search from ever terminating on a premise-free inference of the query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Always select the premise with the fewest defining inferences; the conclusion if there
    /// are no premises.
    BottomUp,
    /// Select the conclusion, unless the conclusion is the query; then fall back to the least
    /// defined premise.
    TopDown,
    /// Like [`SelectionStrategy::BottomUp`], but select the conclusion once the least defined
    /// premise exceeds [`DEFINING_THRESHOLD`] defining inferences, trading a larger
    /// conclusion-side index for avoiding very large premise-side joins.
    #[default]
    Threshold,
}

/// The result of a selection: the pivot, and whether the decision depended on which conclusion
/// is currently the query.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChosenPivot {
    pub(crate) pivot: ConclusionId,
    pub(crate) query_dependent: bool,
}

impl SelectionStrategy {
    pub(crate) fn select(
        self,
        inference: &DerivedInference,
        query: ConclusionId,
        defining_count: impl Fn(ConclusionId) -> usize,
    ) -> ChosenPivot {
        let conclusion = inference.conclusion;
        let premises = &inference.premises;

        if premises.is_empty() {
            return ChosenPivot {
                pivot: conclusion,
                query_dependent: false,
            };
        }

        // the query is excluded from candidacy, so any choice made in its presence must be
        // redone once another conclusion is the query
        let query_dependent = conclusion == query || premises.contains(query);
        let least_defined = premises
            .iter()
            .filter(|&premise| premise != query)
            .min_by_key(|&premise| defining_count(premise));

        let pivot = match (self, least_defined) {
            (SelectionStrategy::BottomUp, Some(premise)) => premise,
            (SelectionStrategy::TopDown, Some(premise)) if conclusion == query => premise,
            (SelectionStrategy::TopDown, Some(_)) => conclusion,
            (SelectionStrategy::Threshold, Some(premise)) => {
                if defining_count(premise) <= DEFINING_THRESHOLD || conclusion == query {
                    premise
                } else {
                    conclusion
                }
            }
            // every premise equals the query; resolving on the conclusion is the only option
            (_, None) => conclusion,
        };

        ChosenPivot {
            pivot,
            query_dependent,
        }
    }
}
