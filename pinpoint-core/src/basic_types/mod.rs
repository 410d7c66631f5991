mod ids;
mod interner;
mod outcome;
mod proof;
mod sorted_id_set;

pub use ids::*;
pub(crate) use interner::*;
pub use outcome::*;
pub use proof::*;
pub use sorted_id_set::*;
