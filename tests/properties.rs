//! Randomised properties for both transform variants.
//!
//! Alphabets of size 2, 4 (DNA) and 26, lengths up to 10 000. Inputs never
//! contain the sentinel byte, so sentinel-mode construction always succeeds.

use proptest::collection::vec;
use proptest::prelude::*;

use wheelhouse::{bwt, bwts, lyndon, suffix_array, suffix_array_naive, Sequence};

fn symbol(alphabet: usize) -> impl Strategy<Value = u8> {
    (0..alphabet as u8).prop_map(|c| b'a' + c)
}

fn text(alphabet: usize, max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(symbol(alphabet), 1..=max_len)
}

fn any_text() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![text(2, 10_000), text(4, 10_000), text(26, 2_000)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sentinel_bwt_round_trips(input in any_text()) {
        let seq = Sequence::with_sentinel(input.clone(), b'$').unwrap();
        let t = bwt::transform(&seq).unwrap();
        prop_assert_eq!(t.len(), input.len() + 1);
        let ranks = bwt::rank_table(&t);
        prop_assert_eq!(bwt::inverse(&t, &ranks, &b'$').unwrap(), input);
    }

    #[test]
    fn bijective_bwt_round_trips(input in any_text()) {
        let t = bwts::transform(&input).unwrap();
        prop_assert_eq!(t.len(), input.len());
        prop_assert_eq!(bwts::inverse(&t).unwrap(), input);
    }

    #[test]
    fn induced_sort_matches_naive_reference(input in text(4, 500)) {
        prop_assert_eq!(suffix_array(&input).unwrap(), suffix_array_naive(&input));
    }

    #[test]
    fn suffix_array_is_a_permutation(input in any_text()) {
        let sa = suffix_array(&input).unwrap();
        let n = input.len();
        let mut seen = vec![false; n];
        prop_assert_eq!(sa.len(), n);
        for &p in &sa {
            prop_assert!(p < n);
            prop_assert!(!seen[p]);
            seen[p] = true;
        }
    }

    #[test]
    fn lf_walk_visits_every_row_once(input in text(26, 1_000)) {
        let seq = Sequence::with_sentinel(input, b'$').unwrap();
        let t = bwt::transform(&seq).unwrap();
        let ranks = bwt::rank_table(&t);
        let n = t.len();
        let mut visited = vec![false; n];
        let mut p = 0usize;
        for _ in 0..n {
            prop_assert!(p < n);
            prop_assert!(!visited[p]);
            visited[p] = true;
            p = ranks.lf(&t[p], p);
        }
        prop_assert_eq!(p, 0);
    }

    #[test]
    fn lyndon_factors_tile_the_input(input in any_text()) {
        let factors = lyndon::factorize(&input);
        let mut expected_start = 0;
        for f in &factors {
            prop_assert_eq!(f.start, expected_start);
            expected_start = f.end;
        }
        prop_assert_eq!(expected_start, input.len());
    }

    #[test]
    fn lyndon_factors_are_minimal_rotations(input in text(4, 200)) {
        for f in lyndon::factorize(&input) {
            let w = &input[f];
            for r in 1..w.len() {
                let rotation: Vec<u8> = w[r..].iter().chain(&w[..r]).copied().collect();
                prop_assert!(w < rotation.as_slice());
            }
        }
    }
}
