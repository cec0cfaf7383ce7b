//! Lyndon factorization via Duval's algorithm.
//!
//! Splits a sequence into the unique non-increasing run of Lyndon words
//! whose concatenation is the input, in O(n) time and constant extra space.
//! Only the bijective transform consumes this.

extern crate alloc;
use alloc::vec::Vec;
use core::ops::Range;

/// Factor boundaries of the Lyndon factorization of `s`, left to right.
///
/// Each returned range is a Lyndon word (strictly smaller than all of its
/// own nontrivial rotations); the ranges tile `0..s.len()` exactly. The
/// empty sequence has no factors.
pub fn factorize<T: Ord>(s: &[T]) -> Vec<Range<usize>> {
    let n = s.len();
    let mut factors = Vec::new();
    let mut i = 0;
    while i < n {
        // (j, k) walk forward while the candidate stays non-decreasing; the
        // first strict drop fixes the period j - k.
        let mut j = i + 1;
        let mut k = i;
        while j < n && s[k] <= s[j] {
            if s[k] < s[j] {
                k = i;
            } else {
                k += 1;
            }
            j += 1;
        }
        let period = j - k;
        // Emit every complete period as its own factor.
        while i <= k {
            factors.push(i..i + period);
            i += period;
        }
    }
    factors
}
