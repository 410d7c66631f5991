use itertools::Itertools;

use crate::pinpoint_assert_moderate;

/// A canonical set of ids stored as a sorted, deduplicated array.
///
/// All set algebra the engines rely on (union, subset and disjointness tests, filtering) runs in
/// a single pass over the sorted arrays. This is the representation for premises,
/// justifications, repairs, and subsumption signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortedIdSet<K> {
    ids: Vec<K>,
}

impl<K: Copy + Ord> SortedIdSet<K> {
    pub fn empty() -> Self {
        SortedIdSet { ids: Vec::new() }
    }

    /// Create a set from ids in arbitrary order; duplicates are removed.
    pub fn from_unsorted(mut ids: Vec<K>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        SortedIdSet { ids }
    }

    /// Create a set from ids which are already sorted and deduplicated.
    pub(crate) fn from_sorted(ids: Vec<K>) -> Self {
        pinpoint_assert_moderate!(
            ids.windows(2).all(|pair| pair[0] < pair[1]),
            "the ids must be strictly increasing"
        );

        SortedIdSet { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.ids.iter().copied()
    }

    pub(crate) fn as_slice(&self) -> &[K] {
        &self.ids
    }

    pub fn contains(&self, id: K) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// `true` iff every id of `self` is also an id of `other`.
    pub fn is_subset_of(&self, other: &SortedIdSet<K>) -> bool {
        let mut candidates = other.ids.iter();

        'outer: for id in &self.ids {
            for candidate in candidates.by_ref() {
                match candidate.cmp(id) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }

            return false;
        }

        true
    }

    /// `true` iff `self` and `other` share no id.
    pub fn is_disjoint_from(&self, other: &SortedIdSet<K>) -> bool {
        let mut left = self.ids.iter().peekable();
        let mut right = other.ids.iter().peekable();

        while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
            match l.cmp(r) {
                std::cmp::Ordering::Less => {
                    let _ = left.next();
                }
                std::cmp::Ordering::Equal => return false,
                std::cmp::Ordering::Greater => {
                    let _ = right.next();
                }
            }
        }

        true
    }

    pub fn union(&self, other: &SortedIdSet<K>) -> SortedIdSet<K> {
        SortedIdSet {
            ids: self.iter().merge(other.iter()).dedup().collect(),
        }
    }

    /// The union of `self` and `other` with `excluded` removed.
    pub(crate) fn union_without(&self, other: &SortedIdSet<K>, excluded: K) -> SortedIdSet<K> {
        SortedIdSet {
            ids: self
                .iter()
                .merge(other.iter())
                .dedup()
                .filter(|&id| id != excluded)
                .collect(),
        }
    }

    /// The cardinality of [`SortedIdSet::union_without`], computed without building the set.
    pub(crate) fn union_size_without(&self, other: &SortedIdSet<K>, excluded: K) -> usize {
        self.iter()
            .merge(other.iter())
            .dedup()
            .filter(|&id| id != excluded)
            .count()
    }

    /// A copy of the set with `id` added.
    pub fn with(&self, id: K) -> SortedIdSet<K> {
        let mut ids = self.ids.clone();

        if let Err(position) = ids.binary_search(&id) {
            ids.insert(position, id);
        }

        SortedIdSet { ids }
    }

    /// A copy of the set retaining the ids for which the predicate holds.
    pub(crate) fn filtered(&self, mut predicate: impl FnMut(K) -> bool) -> SortedIdSet<K> {
        SortedIdSet {
            ids: self.iter().filter(|&id| predicate(id)).collect(),
        }
    }
}

impl<K: Copy + Ord> FromIterator<K> for SortedIdSet<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        SortedIdSet::from_unsorted(iter.into_iter().collect())
    }
}
