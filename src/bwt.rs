//! Sentinel-mode Burrows-Wheeler transform.
//!
//! **Forward**: suffix array -> last column (`out[k] = seq[(sa[k] + n - 1) % n]`).
//! **Backward**: rank tables + LF-mapping walk from row 0.
//!
//! The rank tables are the C-table machinery every BWT variant shares:
//! `alpha` gives the first row of each symbol's run in the sorted first
//! column, `count_table[k]` the number of equal symbols before position `k`
//! in the last column. `alpha[T[k]] + count_table[k]` is then the row of the
//! rotation obtained by prepending `T[k]`.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::sais::suffix_array;
use crate::seq::Sequence;

/// Compute the BWT of a sentinel-terminated sequence.
///
/// # Example
/// ```
/// use wheelhouse::{bwt, Sequence};
///
/// let seq = Sequence::with_sentinel(b"banana".to_vec(), b'$').unwrap();
/// assert_eq!(bwt::transform(&seq).unwrap(), b"annb$aa");
/// ```
pub fn transform<T: Ord + Copy>(seq: &Sequence<T>) -> Result<Vec<T>, Error> {
    if seq.sentinel().is_none() {
        return Err(Error::InvalidInput(
            "sentinel-mode transform requires a sentinel-terminated sequence",
        ));
    }
    let symbols = seq.symbols();
    let sa = suffix_array(symbols)?;
    Ok(from_suffix_array(symbols, &sa))
}

/// Derive the last column from an already-built suffix array.
///
/// The modulo keeps row 0 (the sentinel suffix) pointing at the final
/// symbol instead of underflowing.
#[inline]
pub fn from_suffix_array<T: Copy>(symbols: &[T], sa: &[usize]) -> Vec<T> {
    let n = symbols.len();
    sa.iter().map(|&i| symbols[(i + n - 1) % n]).collect()
}

/// Occurrence ranks and cumulative symbol offsets for a transformed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable<T> {
    /// Sorted distinct symbols of the transform.
    alphabet: Vec<T>,
    /// Per distinct symbol: total occurrences of strictly smaller symbols.
    starts: Vec<usize>,
    /// Per position `k`: occurrences of `bwt[k]` within `bwt[0..k)`.
    count_table: Vec<usize>,
}

/// Build the rank tables in one pass over the transform plus one pass over
/// the sorted alphabet. Symbol lookup goes through the sorted-distinct
/// table, so no hashing happens on the per-position path.
pub fn rank_table<T: Ord + Copy>(bwt: &[T]) -> RankTable<T> {
    let mut alphabet = bwt.to_vec();
    alphabet.sort_unstable();
    alphabet.dedup();

    let mut seen = vec![0usize; alphabet.len()];
    let mut count_table = Vec::with_capacity(bwt.len());
    for sym in bwt {
        let r = match alphabet.binary_search(sym) {
            Ok(r) => r,
            Err(r) => r,
        };
        count_table.push(seen[r]);
        seen[r] += 1;
    }

    let mut starts = Vec::with_capacity(alphabet.len());
    let mut total = 0usize;
    for &c in &seen {
        starts.push(total);
        total += c;
    }

    RankTable { alphabet, starts, count_table }
}

impl<T: Ord> RankTable<T> {
    /// Number of rows covered by the tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.count_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count_table.is_empty()
    }

    /// LF-mapping: the row of the rotation obtained by prepending `sym`
    /// (which must be the transform symbol at row `k`).
    #[inline]
    pub fn lf(&self, sym: &T, k: usize) -> usize {
        let r = match self.alphabet.binary_search(sym) {
            Ok(r) => r,
            Err(r) => r,
        };
        self.starts[r] + self.count_table[k]
    }
}

/// Invert a sentinel-mode BWT via the LF walk.
///
/// Starts at row 0 and prepends symbols until the sentinel is read; the
/// sentinel itself is not part of the output. A transform that does not
/// contain exactly one sentinel, or whose LF walk cycles without reaching
/// it, is [`Error::MalformedTransform`].
pub fn inverse<T: Ord + Copy>(
    bwt: &[T],
    ranks: &RankTable<T>,
    sentinel: &T,
) -> Result<Vec<T>, Error> {
    let n = bwt.len();
    if n == 0 || ranks.len() != n {
        return Err(Error::InvalidInput(
            "transform and rank table must be non-empty and the same length",
        ));
    }
    if bwt.iter().filter(|s| *s == sentinel).count() != 1 {
        return Err(Error::MalformedTransform);
    }

    let mut out = Vec::with_capacity(n - 1);
    let mut p = 0usize;
    for _ in 0..n {
        let x = bwt[p];
        if x == *sentinel {
            // The walk emits the sequence back to front.
            out.reverse();
            return Ok(out);
        }
        out.push(x);
        p = ranks.lf(&x, p);
        if p >= n {
            return Err(Error::MalformedTransform);
        }
    }
    Err(Error::MalformedTransform)
}
