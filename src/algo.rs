//! The bucket sort engine.
//!
//! Elements are grouped into per-key buckets in a single pass, the distinct
//! keys are ordered with a comparison sort, and the buckets are concatenated
//! in ascending key order. Buckets preserve encounter order, which makes the
//! whole sort stable; the comparison sort only ever sees distinct keys, so its
//! own stability is irrelevant.
//!
//! This layout wins over a general O(n log n) sort when the key domain is
//! small and heavily repeated: grouping is O(n), the key sort is O(k log k)
//! for k distinct keys, and concatenation is O(n) again.
//!
//! The main entry points are [`sort`] and [`sort_by_key`].

use crate::core::SortKey;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Sorts a slice of self-keyed elements, returning a new `Vec`.
///
/// This is the [`SortKey`] form of [`sort_by_key`]: each element supplies its
/// own key. The input slice is read once and never mutated.
///
/// # Examples
///
/// ```
/// let shipments = vec![("NU", 14_u32), ("AT", 3), ("NU", 9)];
/// let ordered = keysort::sort(&shipments);
///
/// // Equal keys keep their arrival order.
/// assert_eq!(ordered, vec![("AT", 3), ("NU", 14), ("NU", 9)]);
/// ```
pub fn sort<T>(items: &[T]) -> Vec<T>
where
    T: SortKey + Clone,
    T::Key: Hash + Clone,
{
    sort_by_key(items, T::sort_key)
}

/// Sorts a slice by an externally supplied key extractor, returning a new
/// `Vec`.
///
/// The extractor decouples the key from the element type: elements that do not
/// implement [`SortKey`] can still be sorted, and the same elements can be
/// sorted by different keys in different calls. Extraction is expected to be
/// pure and is invoked exactly once per element.
///
/// The sort is stable (equal-key elements keep their input order), completes
/// in O(n + k log k) for n elements over k distinct keys, and copies the
/// elements into a fresh output sequence without touching the input.
///
/// # Arguments
///
/// * `items` - The slice to be sorted.
/// * `key_of` - Maps an element to its key.
///
/// # Returns
///
/// A new vector containing every input element, ordered by ascending key.
///
/// # Examples
///
/// ```
/// let words = vec!["plum", "fig", "apricot", "date"];
/// let by_len = keysort::sort_by_key(&words, |w| w.len());
///
/// assert_eq!(by_len, vec!["fig", "plum", "date", "apricot"]);
/// ```
pub fn sort_by_key<T, K, F>(items: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord + Hash + Clone,
    F: FnMut(&T) -> K,
{
    if items.is_empty() {
        return Vec::new();
    }

    // The registry maps each key to its bucket; `distinct` remembers the keys
    // in first-seen order because the map itself is unordered.
    let mut buckets: FxHashMap<K, Vec<T>> = FxHashMap::default();
    let mut distinct: Vec<K> = Vec::new();

    for item in items {
        match buckets.entry(key_of(item)) {
            Entry::Vacant(slot) => {
                distinct.push(slot.key().clone());
                slot.insert(vec![item.clone()]);
            }
            Entry::Occupied(slot) => slot.into_mut().push(item.clone()),
        }
    }

    // Keys in `distinct` are unique, so ties cannot occur at this stage and an
    // unstable sort is safe.
    distinct.sort_unstable();

    let mut sorted = Vec::with_capacity(items.len());
    for key in &distinct {
        if let Some(bucket) = buckets.remove(key) {
            sorted.extend(bucket);
        }
    }

    sorted
}
