use super::EnumerationListener;

/// An [`EnumerationListener`] which broadcasts every event to two listeners.
///
/// Pairs nest, so any number of listeners can be attached to one enumeration without modifying
/// the existing ones.
#[derive(Clone, Copy, Debug)]
pub struct ListenerPair<L1, L2> {
    first: L1,
    second: L2,
}

impl<L1, L2> ListenerPair<L1, L2> {
    /// Combine two listeners into one.
    pub fn new(first: L1, second: L2) -> Self {
        ListenerPair { first, second }
    }
}

impl<A, L1, L2> EnumerationListener<A> for ListenerPair<L1, L2>
where
    L1: EnumerationListener<A>,
    L2: EnumerationListener<A>,
{
    fn computes_justifications(&mut self) {
        self.first.computes_justifications();
        self.second.computes_justifications();
    }

    fn computes_repairs(&mut self) {
        self.first.computes_repairs();
        self.second.computes_repairs();
    }

    fn new_justification_found(&mut self) {
        self.first.new_justification_found();
        self.second.new_justification_found();
    }

    fn new_justification_complete(&mut self) {
        self.first.new_justification_complete();
        self.second.new_justification_complete();
    }

    fn new_repair_found(&mut self) {
        self.first.new_repair_found();
        self.second.new_repair_found();
    }

    fn new_repair_complete(&mut self) {
        self.first.new_repair_complete();
        self.second.new_repair_complete();
    }

    fn useful_axiom(&mut self, axiom: &A) {
        self.first.useful_axiom(axiom);
        self.second.useful_axiom(axiom);
    }

    fn computation_complete(&mut self) {
        self.first.computation_complete();
        self.second.computation_complete();
    }
}

/// Restricts a listener to the justification concern.
///
/// Repair events are a contract violation for the wrapped listener and fail loudly; use this to
/// detect a justification-only listener being handed to a repair enumeration.
#[derive(Clone, Copy, Debug)]
pub struct JustificationsOnly<L> {
    inner: L,
}

impl<L> JustificationsOnly<L> {
    pub fn new(inner: L) -> Self {
        JustificationsOnly { inner }
    }
}

impl<A, L: EnumerationListener<A>> EnumerationListener<A> for JustificationsOnly<L> {
    fn computes_justifications(&mut self) {
        self.inner.computes_justifications();
    }

    fn computes_repairs(&mut self) {
        panic!("this listener only supports justifications, but computes_repairs was invoked");
    }

    fn new_justification_found(&mut self) {
        self.inner.new_justification_found();
    }

    fn new_justification_complete(&mut self) {
        self.inner.new_justification_complete();
    }

    fn new_repair_found(&mut self) {
        panic!("this listener only supports justifications, but new_repair_found was invoked");
    }

    fn new_repair_complete(&mut self) {
        panic!("this listener only supports justifications, but new_repair_complete was invoked");
    }

    fn useful_axiom(&mut self, axiom: &A) {
        self.inner.useful_axiom(axiom);
    }

    fn computation_complete(&mut self) {
        self.inner.computation_complete();
    }
}

/// Restricts a listener to the repair concern.
///
/// The counterpart of [`JustificationsOnly`]: justification events fail loudly.
#[derive(Clone, Copy, Debug)]
pub struct RepairsOnly<L> {
    inner: L,
}

impl<L> RepairsOnly<L> {
    pub fn new(inner: L) -> Self {
        RepairsOnly { inner }
    }
}

impl<A, L: EnumerationListener<A>> EnumerationListener<A> for RepairsOnly<L> {
    fn computes_justifications(&mut self) {
        panic!("this listener only supports repairs, but computes_justifications was invoked");
    }

    fn computes_repairs(&mut self) {
        self.inner.computes_repairs();
    }

    fn new_justification_found(&mut self) {
        panic!("this listener only supports repairs, but new_justification_found was invoked");
    }

    fn new_justification_complete(&mut self) {
        panic!("this listener only supports repairs, but new_justification_complete was invoked");
    }

    fn new_repair_found(&mut self) {
        self.inner.new_repair_found();
    }

    fn new_repair_complete(&mut self) {
        self.inner.new_repair_complete();
    }

    fn useful_axiom(&mut self, axiom: &A) {
        self.inner.useful_axiom(axiom);
    }

    fn computation_complete(&mut self) {
        self.inner.computation_complete();
    }
}

/// Projects the event stream down to the axiom callbacks, ignoring brackets and announcements.
#[derive(Clone, Copy, Debug)]
pub struct UsefulAxiomsOnly<F> {
    callback: F,
}

impl<F> UsefulAxiomsOnly<F> {
    pub fn new(callback: F) -> Self {
        UsefulAxiomsOnly { callback }
    }
}

impl<A, F: FnMut(&A)> EnumerationListener<A> for UsefulAxiomsOnly<F> {
    fn useful_axiom(&mut self, axiom: &A) {
        (self.callback)(axiom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::JustificationCollector;

    #[test]
    fn a_pair_broadcasts_to_both_listeners() {
        let mut pair: ListenerPair<JustificationCollector<u32>, JustificationCollector<u32>> =
            ListenerPair::new(JustificationCollector::default(), JustificationCollector::default());

        pair.computes_justifications();
        pair.new_justification_found();
        pair.useful_axiom(&7);
        pair.new_justification_complete();
        pair.computation_complete();

        assert_eq!(pair.first.justifications(), &[vec![7]]);
        assert_eq!(pair.second.justifications(), &[vec![7]]);
        assert!(pair.first.is_complete());
        assert!(pair.second.is_complete());
    }

    #[test]
    fn useful_axioms_only_projects_the_stream() {
        let mut seen = Vec::new();
        {
            let mut listener = UsefulAxiomsOnly::new(|axiom: &u32| seen.push(*axiom));

            listener.computes_repairs();
            listener.new_repair_found();
            listener.useful_axiom(&1);
            listener.useful_axiom(&2);
            listener.new_repair_complete();
            listener.computation_complete();
        }

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "only supports justifications")]
    fn justification_restrictor_rejects_repair_events() {
        let mut listener: JustificationsOnly<JustificationCollector<u32>> =
            JustificationsOnly::new(JustificationCollector::default());

        listener.computes_repairs();
    }

    #[test]
    #[should_panic(expected = "only supports repairs")]
    fn repair_restrictor_rejects_justification_events() {
        let mut listener: RepairsOnly<JustificationCollector<u32>> =
            RepairsOnly::new(JustificationCollector::default());

        listener.new_justification_found();
    }
}
