//! Counters tracked by the engines during the search, logged at debug level once per
//! enumeration.

use log::debug;

/// Counters about the proof exploration shared by both engines.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProofStatistics {
    /// Conclusions whose defining inferences were fetched from the proof source.
    pub fetched_conclusions: u64,
    /// Inferences obtained from the proof source and normalized.
    pub original_inferences: u64,
    /// Inferences discarded because their conclusion occurred among their own premises.
    pub discarded_tautologies: u64,
}

impl ProofStatistics {
    pub(crate) fn log(&self) {
        debug!(
            "proof exploration: {} conclusions fetched, {} inferences normalized, {} tautologies discarded",
            self.fetched_conclusions, self.original_inferences, self.discarded_tautologies
        );
    }
}

/// Counters tracked by the justification search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolutionStatistics {
    /// Resolvents put onto the work queue.
    pub resolvents_enqueued: u64,
    /// Derived inferences discarded because a locally minimal inference dominated them.
    pub dominated_inferences: u64,
    /// Inferences deferred because an already-reported justification dominated theirs.
    pub blocked_inferences: u64,
    /// Minimal justifications reported to the listener.
    pub justifications_found: u64,
}

impl ResolutionStatistics {
    pub(crate) fn log(&self) {
        debug!(
            "justification search: {} resolvents enqueued, {} dominated, {} blocked, {} justifications",
            self.resolvents_enqueued,
            self.dominated_inferences,
            self.blocked_inferences,
            self.justifications_found
        );
    }
}

/// Counters tracked by the repair search.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepairStatistics {
    /// Repair jobs expanded into successor jobs.
    pub expanded_jobs: u64,
    /// Repair jobs discarded because a reported repair or an expanded job dominated them.
    pub dominated_jobs: u64,
    /// Minimal repairs reported to the listener.
    pub repairs_found: u64,
}

impl RepairStatistics {
    pub(crate) fn log(&self) {
        debug!(
            "repair search: {} jobs expanded, {} jobs dominated, {} repairs",
            self.expanded_jobs, self.dominated_jobs, self.repairs_found
        );
    }
}
