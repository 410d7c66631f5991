use std::hash::Hash;

use super::MinimalityIndex;
use super::fingerprint;
use crate::basic_types::SortedIdSet;
use crate::containers::HashMap;

/// A [`MinimalityIndex`] over sorted id sequences, backed by a trie with a fingerprint
/// prefilter.
///
/// Every stored set is a root-to-terminal path through the trie in ascending id order. The
/// subset query descends only along candidate ids, so a query visits at most the stored sets
/// sharing a prefix with the candidate. Each node additionally keeps the bitwise AND of the
/// fingerprints of all sets below it; a branch whose aggregate requires a bit the candidate
/// does not have cannot contain a subset and is rejected without descending.
#[derive(Debug, Clone)]
pub struct SubsetTrie<E> {
    root: Node<E>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<E> {
    /// Marks that a stored set ends here.
    is_terminal: bool,
    /// The bitwise AND of the fingerprints of every set stored in this subtree.
    subtree_fingerprint: u64,
    children: HashMap<E, Node<E>>,
}

impl<E> Default for Node<E> {
    fn default() -> Self {
        Node {
            is_terminal: false,
            subtree_fingerprint: !0,
            children: HashMap::default(),
        }
    }
}

impl<E> Default for SubsetTrie<E> {
    fn default() -> Self {
        SubsetTrie {
            root: Node::default(),
            len: 0,
        }
    }
}

impl<E> SubsetTrie<E> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<E: Copy + Ord + Eq + Hash> MinimalityIndex<E> for SubsetTrie<E> {
    fn insert(&mut self, signature: SortedIdSet<E>) {
        let set_fingerprint = fingerprint(signature.iter());

        let mut node = &mut self.root;
        node.subtree_fingerprint &= set_fingerprint;

        for id in signature.iter() {
            node = node.children.entry(id).or_default();
            node.subtree_fingerprint &= set_fingerprint;
        }

        node.is_terminal = true;
        self.len += 1;
    }

    fn is_minimal(&self, candidate: &SortedIdSet<E>) -> bool {
        let candidate_fingerprint = fingerprint(candidate.iter());

        !contains_subset(&self.root, candidate.as_slice(), candidate_fingerprint)
    }
}

fn contains_subset<E: Copy + Ord + Eq + Hash>(
    node: &Node<E>,
    candidate: &[E],
    candidate_fingerprint: u64,
) -> bool {
    if node.is_terminal {
        return true;
    }

    // every set below this node requires a bit the candidate does not have
    if node.subtree_fingerprint & !candidate_fingerprint != 0 {
        return false;
    }

    candidate.iter().enumerate().any(|(position, id)| {
        node.children.get(id).is_some_and(|child| {
            contains_subset(child, &candidate[position + 1..], candidate_fingerprint)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The naive reference implementation of the same contract.
    #[derive(Default)]
    struct LinearScan {
        signatures: Vec<SortedIdSet<u32>>,
    }

    impl MinimalityIndex<u32> for LinearScan {
        fn insert(&mut self, signature: SortedIdSet<u32>) {
            self.signatures.push(signature);
        }

        fn is_minimal(&self, candidate: &SortedIdSet<u32>) -> bool {
            !self
                .signatures
                .iter()
                .any(|signature| signature.is_subset_of(candidate))
        }
    }

    fn set(ids: &[u32]) -> SortedIdSet<u32> {
        SortedIdSet::from_unsorted(ids.to_vec())
    }

    #[test]
    fn empty_index_considers_everything_minimal() {
        let trie: SubsetTrie<u32> = SubsetTrie::default();

        assert!(trie.is_empty());
        assert!(trie.is_minimal(&set(&[])));
        assert!(trie.is_minimal(&set(&[1, 2])));
    }

    #[test]
    fn stored_subsets_dominate() {
        let mut trie = SubsetTrie::default();
        trie.insert(set(&[1, 3]));

        assert!(!trie.is_minimal(&set(&[1, 2, 3])));
        assert!(!trie.is_minimal(&set(&[1, 3])));
        assert!(trie.is_minimal(&set(&[1, 2])));
        assert!(trie.is_minimal(&set(&[3])));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn the_empty_signature_dominates_everything() {
        let mut trie = SubsetTrie::default();
        trie.insert(set(&[]));

        assert!(!trie.is_minimal(&set(&[])));
        assert!(!trie.is_minimal(&set(&[7])));
    }

    #[test]
    fn agrees_with_the_linear_scan_reference() {
        let stored: Vec<SortedIdSet<u32>> = vec![
            set(&[1, 2]),
            set(&[2, 3, 5]),
            set(&[4]),
            set(&[1, 5, 8, 13]),
            set(&[6, 7]),
        ];

        let mut trie = SubsetTrie::default();
        let mut reference = LinearScan::default();

        for signature in &stored {
            trie.insert(signature.clone());
            reference.insert(signature.clone());
        }

        // all subsets and supersets of the stored family, plus unrelated sets
        let candidates: Vec<SortedIdSet<u32>> = vec![
            set(&[]),
            set(&[1]),
            set(&[1, 2]),
            set(&[1, 2, 3]),
            set(&[2, 3]),
            set(&[2, 3, 5, 9]),
            set(&[4]),
            set(&[4, 6, 7]),
            set(&[5, 8, 13]),
            set(&[1, 5, 8, 13, 21]),
            set(&[9, 10]),
        ];

        for candidate in &candidates {
            assert_eq!(
                trie.is_minimal(candidate),
                reference.is_minimal(candidate),
                "trie and reference disagree on {candidate:?}"
            );
        }
    }
}
