//! Bijective Burrows-Wheeler transform (BWTS).
//!
//! **Forward**: Lyndon factors -> every cyclic rotation of every factor ->
//! sort -> last column. No sentinel, output length equals input length.
//! **Backward**: stable-sort permutation of the transform, decomposed into
//! disjoint cycles; cycles are emitted in reverse discovery order.
//!
//! Conjugates of different lengths are compared through their infinite
//! periodic expansion, truncated at the full sequence length. Naive finite
//! comparison would mis-order periodic inputs like `"abab"`.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::Error;
use crate::lyndon::factorize;

/// One cyclic rotation of a Lyndon factor, addressed into the input.
#[derive(Debug, Clone, Copy)]
struct Conjugate {
    /// Factor start in the input.
    start: usize,
    /// Factor length.
    len: usize,
    /// Rotation offset within the factor.
    rot: usize,
}

impl Conjugate {
    /// Symbol `k` of the infinite periodic expansion of this rotation.
    #[inline]
    fn sym_at<'a, T>(&self, s: &'a [T], k: usize) -> &'a T {
        &s[self.start + (self.rot + k) % self.len]
    }

    /// Final symbol of the (finite) rotation.
    #[inline]
    fn last<T: Copy>(&self, s: &[T]) -> T {
        s[self.start + (self.rot + self.len - 1) % self.len]
    }
}

fn cmp_expanded<T: Ord>(s: &[T], a: &Conjugate, b: &Conjugate, limit: usize) -> Ordering {
    for k in 0..limit {
        match a.sym_at(s, k).cmp(b.sym_at(s, k)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compute the bijective BWT of `s`.
///
/// # Example
/// ```
/// assert_eq!(wheelhouse::bwts::transform(b"banana").unwrap(), b"annbaa");
/// ```
pub fn transform<T: Ord + Copy>(s: &[T]) -> Result<Vec<T>, Error> {
    if s.is_empty() {
        return Err(Error::InvalidInput("sequence must not be empty"));
    }
    let n = s.len();

    let mut conjugates = Vec::with_capacity(n);
    for f in factorize(s) {
        let len = f.end - f.start;
        for rot in 0..len {
            conjugates.push(Conjugate { start: f.start, len, rot });
        }
    }

    // Rotations that tie over the full expansion are identical words; stable
    // sort keeps them in factorization order.
    conjugates.sort_by(|a, b| cmp_expanded(s, a, b, n));
    Ok(conjugates.iter().map(|c| c.last(s)).collect())
}

/// Invert a bijective BWT.
///
/// Total for any input (cycle decomposition covers every permutation), but
/// only meaningful for strings produced by [`transform`]; that precondition
/// is not checked at runtime.
pub fn inverse<T: Ord + Copy>(t: &[T]) -> Result<Vec<T>, Error> {
    if t.is_empty() {
        return Err(Error::InvalidInput("sequence must not be empty"));
    }
    let n = t.len();

    // sorted_keys[i] = position of the i-th smallest symbol; stable sort
    // breaks ties by original index.
    let mut sorted_keys: Vec<usize> = (0..n).collect();
    sorted_keys.sort_by_key(|&i| t[i]);

    let cycles = find_cycles(&sorted_keys);

    // Last-discovered cycle first, discovery order within each cycle.
    let mut out = Vec::with_capacity(n);
    for cycle in cycles.iter().rev() {
        for &i in cycle {
            out.push(t[i]);
        }
    }
    Ok(out)
}

/// Decompose a permutation into disjoint cycles.
///
/// Starts are drawn from the permutation's own entries in order, matching
/// the reconstruction order the transform expects. Every index lands in
/// exactly one cycle.
fn find_cycles(perm: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; perm.len()];
    let mut cycles = Vec::new();
    for &start in perm {
        if visited[start] {
            continue;
        }
        let mut path = vec![start];
        visited[start] = true;
        let mut j = perm[start];
        while j != start {
            path.push(j);
            visited[j] = true;
            j = perm[j];
        }
        cycles.push(path);
    }
    cycles
}
