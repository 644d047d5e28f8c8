//! Core traits for Keysort.
//!
//! This module defines:
//! - [`SortKey`]: The main trait users implement to sort their custom types.
//! - Convenience implementations for key/value pairs and scalar keys.

/// A trait for elements that carry their own sort key.
///
/// This trait allows [`sort`](crate::sort) to order any element type that can
/// produce an ordered key on demand. Extraction must be pure and deterministic;
/// it is called once per element per sort. Keys are returned by value, so they
/// should be cheap to produce: `Copy` types or short tuples, not freshly
/// allocated buffers.
///
/// Elements that do not know their own key (or that need to be ordered by a
/// different key per call) can skip this trait entirely and go through
/// [`sort_by_key`](crate::sort_by_key) with a closure.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use keysort::SortKey;
///
/// #[derive(Clone)]
/// struct Shipment {
///     route: (char, char),
///     parcel: u32,
/// }
///
/// impl SortKey for Shipment {
///     type Key = (char, char);
///
///     fn sort_key(&self) -> (char, char) {
///         self.route
///     }
/// }
///
/// let manifest = vec![
///     Shipment { route: ('D', 'E'), parcel: 0 },
///     Shipment { route: ('A', 'T'), parcel: 1 },
///     Shipment { route: ('D', 'E'), parcel: 2 },
/// ];
///
/// let ordered = keysort::sort(&manifest);
/// assert_eq!(ordered[0].parcel, 1);
/// // Equal routes keep their arrival order.
/// assert_eq!((ordered[1].parcel, ordered[2].parcel), (0, 2));
/// ```
pub trait SortKey {
    /// The key this element is ordered by.
    type Key: Ord;

    /// Extracts the element's key.
    fn sort_key(&self) -> Self::Key;
}

// Pairs sort by their first component; the second rides along as payload.
impl<K: Ord + Clone, V> SortKey for (K, V) {
    type Key = K;

    #[inline]
    fn sort_key(&self) -> K {
        self.0.clone()
    }
}

// Scalars are their own key, so a plain `&[u32]` or `&[char]` can go straight
// through `sort`.
macro_rules! identity_key {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                type Key = $t;

                #[inline]
                fn sort_key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

identity_key!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
