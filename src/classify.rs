//! S/L suffix classification and LMS boundary detection.
//!
//! One right-to-left scan, O(n) time and space. The classification is
//! recomputed from the sequence whenever it is needed; it is never patched
//! in place.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Per-position suffix class.
///
/// `S`: the suffix at `i` sorts before the suffix at `i + 1` (or ties and
/// `i + 1` is `S`). `L`: the other way around. The final position is `S` by
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixType {
    S,
    L,
}

/// Classify every position of `s` and collect the LMS positions.
///
/// An LMS ("left-most S") position is an `S` position whose left neighbour
/// is `L`; the returned list is strictly ascending. A length-1 sequence has
/// types `[S]` and no LMS positions.
pub fn suffix_types<T: Ord>(s: &[T]) -> (Vec<SuffixType>, Vec<usize>) {
    let n = s.len();
    let mut types = vec![SuffixType::S; n];
    let mut lms = Vec::new();
    if n < 2 {
        return (types, lms);
    }
    for i in (0..n - 1).rev() {
        types[i] = match s[i].cmp(&s[i + 1]) {
            core::cmp::Ordering::Less => SuffixType::S,
            core::cmp::Ordering::Greater => SuffixType::L,
            core::cmp::Ordering::Equal => types[i + 1],
        };
        if types[i] == SuffixType::L && types[i + 1] == SuffixType::S {
            lms.push(i + 1);
        }
    }
    lms.reverse();
    (types, lms)
}
