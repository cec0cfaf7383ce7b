//! Suffix array construction by induced sorting (SA-IS).
//!
//! **Pipeline**: dense rank encoding -> S/L classification -> LMS placement
//! -> L/R induction sweeps -> LMS substring naming -> recursion on duplicate
//! names -> final induction.
//!
//! Symbols are mapped to integer ranks through a sorted-distinct table, so
//! the hot loops index fixed arrays instead of hashing. A virtual rank-0
//! sentinel is appended internally, which keeps the induction uniform; its
//! row is dropped before returning.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::classify::{suffix_types, SuffixType};
use crate::error::Error;

/// Slot not yet filled during induction.
const UNSET: u32 = u32::MAX;

/// Build the suffix array of `text` with the recursive SA-IS algorithm.
///
/// The result is a permutation of `[0, n)` ordering all suffixes of `text`
/// lexicographically (a proper prefix sorts before its extensions).
///
/// # Errors
/// - [`Error::InvalidInput`] when `text` is empty.
/// - [`Error::AlphabetOverflow`] when the length does not fit the internal
///   `u32` rank space.
///
/// # Example
/// ```
/// let sa = wheelhouse::suffix_array(b"aaaa$").unwrap();
/// assert_eq!(sa, vec![4, 3, 2, 1, 0]);
/// ```
pub fn suffix_array<T: Ord>(text: &[T]) -> Result<Vec<usize>, Error> {
    if text.is_empty() {
        return Err(Error::InvalidInput("cannot index an empty sequence"));
    }
    // One rank is reserved for the virtual sentinel, one for the UNSET marker.
    if text.len() >= (UNSET as usize) - 1 {
        return Err(Error::AlphabetOverflow);
    }
    let (ranks, sigma) = rank_encode(text);
    let sa = sa_is(&ranks, sigma);
    // Row 0 is the virtual sentinel suffix; everything after it is the
    // answer for `text` itself.
    Ok(sa[1..].iter().map(|&i| i as usize).collect())
}

/// Reference construction: comparison sort over whole suffixes.
///
/// O(n^2 log n) worst case. Kept as the cross-check baseline for the induced
/// sorter and for benchmark comparison; not intended for large inputs.
pub fn suffix_array_naive<T: Ord>(text: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Map symbols to dense ranks `1..=sigma-1` via a sorted-distinct table,
/// then append the virtual sentinel rank 0. Returns the encoded text and
/// the rank alphabet size.
fn rank_encode<T: Ord>(text: &[T]) -> (Vec<u32>, u32) {
    let mut alphabet: Vec<&T> = text.iter().collect();
    alphabet.sort_unstable();
    alphabet.dedup();

    let mut ranks = Vec::with_capacity(text.len() + 1);
    for sym in text {
        // Present by construction, so both arms agree.
        let r = match alphabet.binary_search(&sym) {
            Ok(r) => r,
            Err(r) => r,
        };
        ranks.push(r as u32 + 1);
    }
    ranks.push(0);
    (ranks, alphabet.len() as u32 + 1)
}

/// Core SA-IS over a rank-encoded text whose final symbol is the unique
/// minimum. Returns the full suffix array, sentinel row included.
fn sa_is(s: &[u32], sigma: u32) -> Vec<u32> {
    let n = s.len();
    let mut sa = vec![UNSET; n];
    if n == 1 {
        sa[0] = 0;
        return sa;
    }

    let (types, lms) = suffix_types(s);
    let buckets = Buckets::new(s, sigma);

    // First round: place LMS suffixes in input order, then induce. This
    // sorts the LMS *substrings*, which is all the naming step needs.
    place_lms(&mut sa, s, &buckets, lms.iter().copied());
    induce(&mut sa, s, &types, &buckets);

    let mut lms_mask = vec![false; n];
    for &p in &lms {
        lms_mask[p] = true;
    }
    let sorted_lms: Vec<u32> = sa
        .iter()
        .copied()
        .filter(|&p| p != UNSET && lms_mask[p as usize])
        .collect();

    // Each LMS substring runs to the next LMS position inclusive; the last
    // one is the lone sentinel.
    let mut lms_end = vec![0u32; n];
    for w in lms.windows(2) {
        lms_end[w[0]] = w[1] as u32;
    }
    if let Some(&last) = lms.last() {
        lms_end[last] = (n - 1) as u32;
    }

    // Name the LMS substrings in their sorted order; equal substrings share
    // a name.
    let mut names = vec![UNSET; n];
    let mut name = 0u32;
    let mut prev: Option<u32> = None;
    for &p in &sorted_lms {
        if let Some(q) = prev {
            if !lms_substring_eq(s, &lms_end, q, p) {
                name += 1;
            }
        }
        names[p as usize] = name;
        prev = Some(p);
    }
    let name_count = name + 1;

    // Duplicate names mean the one-round induction could not fully order the
    // LMS suffixes: recurse on the reduced text of names. The reduced text
    // is strictly shorter (at most n/2) and ends with the unique minimum
    // name of the sentinel, so the invariant carries down.
    let lms_order: Vec<u32> = if (name_count as usize) < lms.len() {
        let reduced: Vec<u32> = lms.iter().map(|&p| names[p]).collect();
        let reduced_sa = sa_is(&reduced, name_count);
        reduced_sa.iter().map(|&ri| lms[ri as usize] as u32).collect()
    } else {
        sorted_lms
    };

    // Final round: seed with the LMS suffixes in their true order and induce
    // once more. Reverse iteration packs each bucket tail right-to-left
    // without disturbing the relative order.
    for v in sa.iter_mut() {
        *v = UNSET;
    }
    place_lms(&mut sa, s, &buckets, lms_order.iter().rev().map(|&p| p as usize));
    induce(&mut sa, s, &types, &buckets);
    sa
}

/// Insert the given LMS positions at the tail of their symbol buckets.
fn place_lms<I>(sa: &mut [u32], s: &[u32], buckets: &Buckets, positions: I)
where
    I: Iterator<Item = usize>,
{
    let mut tails = buckets.tails();
    for p in positions {
        let c = s[p] as usize;
        sa[tails[c]] = p as u32;
        // Bucket 0 holds only the sentinel; its pointer may wrap after that
        // single insert and is never read again.
        tails[c] = tails[c].wrapping_sub(1);
    }
}

/// The two induction sweeps: L-type predecessors left-to-right at bucket
/// heads, then S-type predecessors right-to-left at bucket tails.
fn induce(sa: &mut [u32], s: &[u32], types: &[SuffixType], buckets: &Buckets) {
    let n = s.len();

    let mut heads = buckets.heads();
    for i in 0..n {
        let p = sa[i];
        if p != UNSET && p > 0 && types[p as usize - 1] == SuffixType::L {
            let c = s[p as usize - 1] as usize;
            sa[heads[c]] = p - 1;
            heads[c] += 1;
        }
    }

    let mut tails = buckets.tails();
    for i in (0..n).rev() {
        let p = sa[i];
        if p != UNSET && p > 0 && types[p as usize - 1] == SuffixType::S {
            let c = s[p as usize - 1] as usize;
            sa[tails[c]] = p - 1;
            tails[c] -= 1;
        }
    }
}

/// Compare two LMS substrings for exact equality (same length, same
/// symbols). Matching content forces matching internal types, so symbol
/// comparison is sufficient.
fn lms_substring_eq(s: &[u32], lms_end: &[u32], a: u32, b: u32) -> bool {
    let (a, b) = (a as usize, b as usize);
    let (ea, eb) = (lms_end[a] as usize, lms_end[b] as usize);
    if ea - a != eb - b {
        return false;
    }
    s[a..=ea] == s[b..=eb]
}

/// Per-rank occurrence counts with head/tail pointer arrays derived fresh
/// for each sweep, so no sweep observes another's mutation.
struct Buckets {
    counts: Vec<usize>,
}

impl Buckets {
    fn new(s: &[u32], sigma: u32) -> Buckets {
        let mut counts = vec![0usize; sigma as usize];
        for &c in s {
            counts[c as usize] += 1;
        }
        Buckets { counts }
    }

    /// First slot of each bucket (exclusive prefix sums).
    fn heads(&self) -> Vec<usize> {
        let mut heads = Vec::with_capacity(self.counts.len());
        let mut sum = 0usize;
        for &c in &self.counts {
            heads.push(sum);
            sum += c;
        }
        heads
    }

    /// Last slot of each bucket (inclusive prefix sums minus one).
    fn tails(&self) -> Vec<usize> {
        let mut tails = Vec::with_capacity(self.counts.len());
        let mut sum = 0usize;
        for &c in &self.counts {
            sum += c;
            // Wraps only for leading empty buckets, which are never inserted
            // into.
            tails.push(sum.wrapping_sub(1));
        }
        tails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(sa: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        sa.len() == n
            && sa.iter().all(|&p| {
                if p >= n || seen[p] {
                    return false;
                }
                seen[p] = true;
                true
            })
    }

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(
            suffix_array::<u8>(&[]),
            Err(Error::InvalidInput("cannot index an empty sequence"))
        );
    }

    #[test]
    fn test_single_symbol() {
        assert_eq!(suffix_array(b"x").unwrap(), vec![0]);
    }

    #[test]
    fn test_uniform_run() {
        assert_eq!(suffix_array(b"aaaa$").unwrap(), vec![4, 3, 2, 1, 0]);
        assert_eq!(suffix_array(b"aaaaaaaa$").unwrap(), vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reference_text() {
        // Worked SA-IS example; this input forces the recursion (the two
        // "iissi" LMS substrings collide).
        let sa = suffix_array(b"mmiissiissiippii$").unwrap();
        assert_eq!(
            sa,
            vec![16, 15, 14, 10, 6, 2, 11, 7, 3, 1, 0, 13, 12, 9, 5, 8, 4]
        );
    }

    #[test]
    fn test_banana() {
        assert_eq!(suffix_array(b"banana$").unwrap(), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_matches_naive_on_varied_inputs() {
        let cases: &[&[u8]] = &[
            b"ACACGACGTTAT$",
            b"abracadabra",
            b"zyxwv",
            b"abcde",
            b"abababab",
            b"mississippi",
            b"ab",
            b"ba",
        ];
        for text in cases {
            assert_eq!(
                suffix_array(text).unwrap(),
                suffix_array_naive(text),
                "mismatch for {:?}",
                core::str::from_utf8(text)
            );
        }
    }

    #[test]
    fn test_matches_naive_on_generated_dna() {
        // Deterministic pseudo-random DNA, long enough to exercise deep
        // recursion levels.
        let mut state = 0x2545F4914F6CDD1Du64;
        let mut text = Vec::with_capacity(4096);
        for _ in 0..4096 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            text.push(b"ACGT"[(state % 4) as usize]);
        }
        let sa = suffix_array(&text).unwrap();
        assert!(is_permutation(&sa, text.len()));
        assert_eq!(sa, suffix_array_naive(&text));
    }

    #[test]
    fn test_binary_alphabet_periodic() {
        // Highly periodic inputs maximise LMS name collisions.
        let text: Vec<u8> = b"abab".iter().cycle().take(257).copied().collect();
        assert_eq!(suffix_array(&text).unwrap(), suffix_array_naive(&text));
    }

    #[test]
    fn test_generic_symbol_type() {
        let text = [5i64, -3, 12, -3, 0, 5, -3];
        let sa = suffix_array(&text).unwrap();
        assert!(is_permutation(&sa, text.len()));
        assert_eq!(sa, suffix_array_naive(&text));
    }
}
