//! # Pinpoint
//! Pinpoint is an axiom-pinpointing engine. Given a proof — a set of inferences deriving
//! conclusions from other conclusions and axioms — it enumerates all minimal **justifications**
//! of a goal conclusion (minimal axiom subsets sufficient to derive it) and all minimal
//! **repairs** (minimal axiom subsets whose removal makes the goal underivable).
//!
//! Both searches stream their results to a [`listener::EnumerationListener`] in non-decreasing
//! priority order (smallest first by default), can be cancelled cooperatively through a
//! [`termination::TerminationCondition`], and reuse the explored proof across queries on the
//! same engine instance.
//!
//! # Enumerating justifications
//! ```rust
//! use pinpoint_core::Inference;
//! use pinpoint_core::InMemoryProof;
//! use pinpoint_core::ResolutionEngine;
//! use pinpoint_core::SelectionStrategy;
//! use pinpoint_core::listener::JustificationCollector;
//! use pinpoint_core::termination::Indefinite;
//!
//! let proof: InMemoryProof<&str, &str> = [
//!     Inference::new("q", vec!["p"], vec!["x"]),
//!     Inference::new("p", vec![], vec!["y"]),
//!     Inference::new("q", vec![], vec!["z"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut engine = ResolutionEngine::new(&proof, SelectionStrategy::default());
//! let mut collector = JustificationCollector::default();
//!
//! let _ = engine.enumerate(&"q", &mut collector, &mut Indefinite);
//!
//! // the smallest justification is reported first
//! assert_eq!(collector.justifications(), &[vec!["z"], vec!["x", "y"]]);
//! ```
//!
//! # Enumerating repairs
//! [`RepairSearch`] enumerates the minimal repairs of a goal over the same proof
//! representation, and [`minimal_hitting_sets`] exposes the underlying search as a standalone
//! utility over arbitrary set families.
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the engines. Turning this on slows the
//!   search down considerably, so it is turned off by default.

#[doc(hidden)]
pub mod asserts;

pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod repair;

pub mod listener;
pub mod minimality;
pub mod statistics;
pub mod termination;

pub use crate::basic_types::AxiomId;
pub use crate::basic_types::ConclusionId;
pub use crate::basic_types::EnumerationOutcome;
pub use crate::basic_types::InMemoryProof;
pub use crate::basic_types::Inference;
pub use crate::basic_types::Proof;
pub use crate::basic_types::SortedIdSet;
pub use crate::engine::CardinalityPriority;
pub use crate::engine::PriorityComparator;
pub use crate::engine::ResolutionEngine;
pub use crate::engine::SelectionStrategy;
pub use crate::repair::RepairSearch;
pub use crate::repair::enumerate_minimal_hitting_sets;
pub use crate::repair::minimal_hitting_sets;
