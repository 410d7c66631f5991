//! The subsumption indexes which keep the searches minimal.
//!
//! Both engines prune candidates that are dominated by an already-stored set: a stored signature
//! dominates a candidate iff it is a subset of the candidate. The [`MinimalityIndex`] trait is
//! the contract; [`SubsetTrie`] is the implementation used by the engines, and any conforming
//! implementation is substitutable.

mod subset_trie;

use std::hash::Hash;

pub use subset_trie::*;

use crate::basic_types::SortedIdSet;
use crate::containers::StorageKey;

/// A mutable collection of signature sets with an efficient non-domination query.
///
/// This operation is on the hot path of both engines: every candidate inference, justification,
/// repair and repair job is checked against such an index before it is processed further.
pub trait MinimalityIndex<E> {
    /// Store `signature` in the index.
    fn insert(&mut self, signature: SortedIdSet<E>);

    /// `true` iff no stored signature is a subset of `candidate`.
    ///
    /// A stored signature equal to the candidate counts as a subset, so re-checking an already
    /// inserted set reports it as dominated. Both engines rely on this for duplicate
    /// elimination.
    fn is_minimal(&self, candidate: &SortedIdSet<E>) -> bool;
}

/// Interleave two id sets from disjoint key spaces into one subsumption signature.
///
/// Ids of the first set land on even codes, ids of the second on odd codes, so that one subset
/// test on the merged signature decides the component-wise domination of the pair.
pub(crate) fn merge_signature<K1, K2>(
    even: &SortedIdSet<K1>,
    odd: &SortedIdSet<K2>,
) -> SortedIdSet<u64>
where
    K1: StorageKey + Copy + Ord,
    K2: StorageKey + Copy + Ord,
{
    let even = even.iter().map(|key| (key.index() as u64) << 1);
    let odd = odd.iter().map(|key| ((key.index() as u64) << 1) | 1);

    SortedIdSet::from_sorted(itertools::merge(even, odd).collect())
}

/// A 64-bit superset fingerprint: if `fingerprint(a)` has a bit outside `fingerprint(b)`, then
/// `a` cannot be a subset of `b`.
pub(crate) fn fingerprint<E: Hash>(ids: impl Iterator<Item = E>) -> u64 {
    use std::hash::Hasher;

    ids.fold(0_u64, |fingerprint, id| {
        let mut hasher = fnv::FnvHasher::default();
        id.hash(&mut hasher);

        fingerprint | (1 << (hasher.finish() & 63))
    })
}
