//! Synthetic benchmark workload: two-letter codes and the records keyed by
//! them.
//!
//! This is glue around `rand`, kept apart from the engine: the sort never
//! cares where its elements come from, and the harness only needs a population
//! with a small, repetitive key domain and a per-record arrival index.

use crate::core::SortKey;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of possible two-letter codes (`AA` through `ZZ`).
pub const MAX_CODES: usize = 26 * 26;

/// A two-letter uppercase code, the sort key of the benchmark workload.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; 2]);

impl Code {
    /// Builds a code from two ASCII uppercase letters.
    pub fn new(first: u8, second: u8) -> Self {
        debug_assert!(first.is_ascii_uppercase() && second.is_ascii_uppercase());
        Code([first, second])
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({self})")
    }
}

/// A benchmark record: one code plus the position it was generated at.
///
/// `seq` plays no part in the ordering. Verification reads it to detect
/// stability violations, which is only sound because generation assigns it
/// from a strictly increasing counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code: Code,
    pub seq: u32,
}

impl Record {
    pub fn new(code: Code, seq: u32) -> Self {
        Record { code, seq }
    }
}

impl SortKey for Record {
    type Key = Code;

    #[inline]
    fn sort_key(&self) -> Code {
        self.code
    }
}

/// Draws `count` distinct two-letter codes.
///
/// Codes are rejection-sampled: duplicates are discarded until `count`
/// distinct ones have been seen.
///
/// # Panics
///
/// Panics if `count` exceeds [`MAX_CODES`], the size of the code space.
pub fn generate_codes<R: Rng>(count: usize, rng: &mut R) -> Vec<Code> {
    assert!(
        count <= MAX_CODES,
        "cannot draw {count} distinct codes from a domain of {MAX_CODES}"
    );

    let mut seen = FxHashSet::default();
    let mut codes = Vec::with_capacity(count);
    while codes.len() < count {
        let code = Code::new(
            b'A' + rng.random_range(0..26),
            b'A' + rng.random_range(0..26),
        );
        if seen.insert(code) {
            codes.push(code);
        }
    }
    codes
}

/// Builds a population of `count` records, each referencing a random code.
///
/// `seq` is the generation index, so it increases strictly with position.
///
/// # Panics
///
/// Panics if `codes` is empty.
pub fn generate_records<R: Rng>(codes: &[Code], count: usize, rng: &mut R) -> Vec<Record> {
    assert!(!codes.is_empty(), "record generation needs at least one code");

    (0..count)
        .map(|seq| Record::new(codes[rng.random_range(0..codes.len())], seq as u32))
        .collect()
}
