//! # Keysort
//!
//! `keysort` is a stability-preserving bucket sort for collections whose sort
//! keys are drawn from a small, heavily repeated domain, such as two-letter
//! region or carrier codes attached to tens of thousands of records.
//!
//! Instead of comparing whole elements O(n log n) times, the sort makes one
//! pass that groups elements into per-key buckets (preserving arrival order),
//! comparison-sorts only the k distinct keys, and concatenates the buckets in
//! ascending key order. When k ≪ n this does strictly less work than a general
//! comparison sort, and stability falls out of the bucket order for free.
//!
//! ## Key Features
//!
//! - **Stable by construction**: buckets preserve encounter order and are
//!   drained exactly once, so equal-key elements never swap places.
//! - **Key extraction, two ways**: elements can describe their own key via the
//!   [`SortKey`] trait, or callers can hand [`sort_by_key`] a closure, which
//!   also lets the same elements be sorted by different keys in different
//!   calls.
//! - **Non-destructive**: the input is only borrowed; every call returns a
//!   brand-new ordered `Vec` and keeps no state behind.
//! - **Measured, not assumed**: the [`bench`] module times the engine against
//!   the standard library's stable sort and re-verifies ordering, stability,
//!   and completeness after every timed run.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Pairs sort by their first component, so keyed data in `(key, payload)` form
//! works out of the box:
//!
//! ```rust
//! use keysort::sort;
//!
//! let shipments = vec![("DE", 101_u32), ("AT", 207), ("DE", 33)];
//! let ordered = sort(&shipments);
//!
//! // Stable: the two "DE" shipments keep their arrival order.
//! assert_eq!(ordered, vec![("AT", 207), ("DE", 101), ("DE", 33)]);
//! ```
//!
//! ### Custom Types
//!
//! Implement [`SortKey`] for types that know their own key:
//!
//! ```rust
//! use keysort::{SortKey, sort};
//!
//! #[derive(Clone)]
//! struct Order {
//!     region: [u8; 2],
//!     id: u64,
//! }
//!
//! impl SortKey for Order {
//!     type Key = [u8; 2];
//!
//!     fn sort_key(&self) -> [u8; 2] {
//!         self.region
//!     }
//! }
//!
//! let orders = vec![
//!     Order { region: *b"NW", id: 1 },
//!     Order { region: *b"AK", id: 2 },
//! ];
//!
//! let ordered = sort(&orders);
//! assert_eq!(ordered[0].region, *b"AK");
//! ```
//!
//! Or keep the element type out of it entirely and sort through a closure:
//!
//! ```rust
//! use keysort::sort_by_key;
//!
//! let towns = vec![("Ybbs", 3), ("Melk", 2), ("Ybbs", 1)];
//!
//! // Sort by the numeric field; the same rows could be sorted by name elsewhere.
//! let by_number = sort_by_key(&towns, |t| t.1);
//! assert_eq!(by_number, vec![("Ybbs", 1), ("Melk", 2), ("Ybbs", 3)]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Grouping**: O(n) hash-map inserts over cheap keys.
//! - **Key ordering**: O(k log k) for k distinct keys, the only comparison
//!   stage.
//! - **Concatenation**: O(n) moves into a pre-sized output vector.
//! - **Memory**: one bucket registry spanning the input plus the output
//!   vector; the input itself is untouched.
//!
//! This is not a general-purpose `slice::sort` replacement: with mostly-unique
//! keys (k approaching n) the registry overhead buys nothing and a plain
//! comparison sort wins. The win shows up when many elements share few keys,
//! which is exactly what the bundled `keysort-bench` binary and criterion
//! suites measure.

pub mod algo;
pub mod bench;
pub mod core;
pub mod data;

pub use algo::{sort, sort_by_key};
pub use core::SortKey;

pub mod prelude {
    pub use crate::algo::{sort, sort_by_key};
    pub use crate::core::SortKey;
}
