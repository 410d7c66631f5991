use super::EnumerationListener;
use crate::pinpoint_assert_simple;

/// An [`EnumerationListener`] which collects every reported justification.
#[derive(Clone, Debug)]
pub struct JustificationCollector<A> {
    current: Option<Vec<A>>,
    justifications: Vec<Vec<A>>,
    useful_axioms: Vec<A>,
    is_complete: bool,
}

impl<A> Default for JustificationCollector<A> {
    fn default() -> Self {
        JustificationCollector {
            current: None,
            justifications: Vec::new(),
            useful_axioms: Vec::new(),
            is_complete: false,
        }
    }
}

impl<A> JustificationCollector<A> {
    /// The justifications collected so far, in report order.
    pub fn justifications(&self) -> &[Vec<A>] {
        &self.justifications
    }

    pub fn into_justifications(self) -> Vec<Vec<A>> {
        self.justifications
    }

    /// Axioms reported outside any bracket.
    pub fn useful_axioms(&self) -> &[A] {
        &self.useful_axioms
    }

    /// `true` once the enumeration has announced its completion.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

impl<A: Clone + Eq> EnumerationListener<A> for JustificationCollector<A> {
    fn new_justification_found(&mut self) {
        pinpoint_assert_simple!(
            self.current.is_none(),
            "justification brackets must not nest"
        );

        self.current = Some(Vec::new());
    }

    fn useful_axiom(&mut self, axiom: &A) {
        match &mut self.current {
            Some(justification) => justification.push(axiom.clone()),
            None => {
                if !self.useful_axioms.contains(axiom) {
                    self.useful_axioms.push(axiom.clone());
                }
            }
        }
    }

    fn new_justification_complete(&mut self) {
        let justification = self
            .current
            .take()
            .expect("a bracket is open when it is completed");

        self.justifications.push(justification);
    }

    fn computation_complete(&mut self) {
        self.is_complete = true;
    }
}

/// An [`EnumerationListener`] which collects every reported repair.
#[derive(Clone, Debug)]
pub struct RepairCollector<A> {
    current: Option<Vec<A>>,
    repairs: Vec<Vec<A>>,
    is_complete: bool,
}

impl<A> Default for RepairCollector<A> {
    fn default() -> Self {
        RepairCollector {
            current: None,
            repairs: Vec::new(),
            is_complete: false,
        }
    }
}

impl<A> RepairCollector<A> {
    /// The repairs collected so far, in report order.
    pub fn repairs(&self) -> &[Vec<A>] {
        &self.repairs
    }

    pub fn into_repairs(self) -> Vec<Vec<A>> {
        self.repairs
    }

    /// `true` once the enumeration has announced its completion.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

impl<A: Clone> EnumerationListener<A> for RepairCollector<A> {
    fn new_repair_found(&mut self) {
        pinpoint_assert_simple!(self.current.is_none(), "repair brackets must not nest");

        self.current = Some(Vec::new());
    }

    fn useful_axiom(&mut self, axiom: &A) {
        if let Some(repair) = &mut self.current {
            repair.push(axiom.clone());
        }
    }

    fn new_repair_complete(&mut self) {
        let repair = self
            .current
            .take()
            .expect("a bracket is open when it is completed");

        self.repairs.push(repair);
    }

    fn computation_complete(&mut self) {
        self.is_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_brackets_in_report_order() {
        let mut collector: JustificationCollector<&str> = JustificationCollector::default();

        collector.computes_justifications();
        collector.new_justification_found();
        collector.useful_axiom(&"a");
        collector.new_justification_complete();
        collector.new_justification_found();
        collector.useful_axiom(&"b");
        collector.useful_axiom(&"c");
        collector.new_justification_complete();
        collector.computation_complete();

        assert_eq!(collector.justifications(), &[vec!["a"], vec!["b", "c"]]);
        assert!(collector.is_complete());
    }

    #[test]
    fn axioms_outside_brackets_are_recorded_once() {
        let mut collector: JustificationCollector<&str> = JustificationCollector::default();

        collector.useful_axiom(&"a");
        collector.useful_axiom(&"a");
        collector.useful_axiom(&"b");

        assert_eq!(collector.useful_axioms(), &["a", "b"]);
        assert!(collector.justifications().is_empty());
    }
}
