use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A bidirectional mapping between opaque objects and dense integer keys.
///
/// Interning conclusions and axioms once lets all set operations run on sorted integer arrays
/// instead of hashing the objects themselves.
pub(crate) struct IdInterner<T, Key> {
    keys: HashMap<T, Key>,
    objects: KeyedVec<Key, T>,
}

impl<T, Key> Default for IdInterner<T, Key> {
    fn default() -> Self {
        IdInterner {
            keys: HashMap::default(),
            objects: KeyedVec::default(),
        }
    }
}

impl<T, Key> IdInterner<T, Key>
where
    T: Clone + Eq + Hash,
    Key: StorageKey + Copy,
{
    /// The key for `object`, allocating the next dense key if it has not been seen before.
    pub(crate) fn intern(&mut self, object: &T) -> Key {
        if let Some(&key) = self.keys.get(object) {
            return key;
        }

        let key = self.objects.push(object.clone());
        let _ = self.keys.insert(object.clone(), key);

        key
    }

    pub(crate) fn resolve(&self, key: Key) -> &T {
        &self.objects[key]
    }
}

impl<T, Key> IdInterner<T, Key> {
    pub(crate) fn len(&self) -> usize {
        self.objects.len()
    }
}

impl<T, Key> Debug for IdInterner<T, Key> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdInterner")
            .field("len", &self.objects.len())
            .finish_non_exhaustive()
    }
}
