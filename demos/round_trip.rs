//! Burrows-Wheeler Round-Trip Demo
//!
//! Runs both transform variants forward and backward over a few inputs.
//!
//! ```bash
//! cargo run --example round_trip
//! ```

use wheelhouse::{bwt, bwts, Sequence};

fn main() {
    println!("=== Wheelhouse BWT Demo ===\n");

    let inputs = ["banana", "ACACGACGTTAT", "mmiissiissiippii", "abacabab"];

    println!("--- Sentinel mode ---\n");
    for input in &inputs {
        let seq = Sequence::with_sentinel(input.as_bytes().to_vec(), b'$').unwrap();
        let t = bwt::transform(&seq).unwrap();
        let ranks = bwt::rank_table(&t);
        let back = bwt::inverse(&t, &ranks, &b'$').unwrap();

        println!(
            "  {:18} -> {:20} round trip: {}",
            input,
            String::from_utf8_lossy(&t),
            if back == input.as_bytes() { "ok" } else { "FAILED" }
        );
    }

    println!("\n--- Bijective mode (no sentinel) ---\n");
    for input in &inputs {
        let t = bwts::transform(input.as_bytes()).unwrap();
        let back = bwts::inverse(&t).unwrap();

        println!(
            "  {:18} -> {:20} round trip: {}",
            input,
            String::from_utf8_lossy(&t),
            if back == input.as_bytes() { "ok" } else { "FAILED" }
        );
    }

    println!("\nBoth variants cluster repeated contexts; only one needs a sentinel.");
}
