/// The result of running an enumeration to completion or until the termination condition
/// triggered.
///
/// Justifications or repairs reported before an interruption stand; the engines never roll back
/// listener callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationOutcome {
    /// The search space was exhausted; every minimal result has been reported.
    Completed,
    /// The termination condition triggered before the search space was exhausted.
    Interrupted,
}

/// Internal status used to unwind the queue loops when the termination condition triggers.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq, Eq)]
#[error("the enumeration was interrupted before the search space was exhausted")]
pub(crate) struct Interrupted;

impl From<Result<(), Interrupted>> for EnumerationOutcome {
    fn from(result: Result<(), Interrupted>) -> Self {
        match result {
            Ok(()) => EnumerationOutcome::Completed,
            Err(Interrupted) => EnumerationOutcome::Interrupted,
        }
    }
}
