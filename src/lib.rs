//! # Wheelhouse
//!
//! **Burrows-Wheeler transforms over generic alphabets**
//!
//! > "A transform is only as good as its inverse."
//!
//! ## Architecture
//!
//! - **SA-IS**: linear-space suffix classification + induced sorting, with
//!   full recursion on colliding LMS substrings
//! - **Rank tables**: the shared C-table / LF-mapping machinery that makes
//!   the sentinel-mode transform reversible
//! - **BWTS**: the bijective variant — Lyndon factors, sorted conjugates,
//!   cycle decomposition, no sentinel anywhere
//!
//! ## Paths
//!
//! | Variant | Forward | Backward | Auxiliary state |
//! |---------|---------|----------|-----------------|
//! | Sentinel | suffix array -> last column | LF walk | rank tables |
//! | Bijective | Lyndon conjugates -> last column | cycle decomposition | none |
//!
//! Symbols are any `T: Ord + Copy`: bytes, chars, integers. All operations
//! are pure and single-threaded; concurrent calls on independent inputs need
//! no synchronisation.
//!
//! ## Example
//!
//! ```
//! use wheelhouse::{bwt, bwts, Sequence};
//!
//! // Sentinel mode: auxiliary rank tables drive the inverse.
//! let seq = Sequence::with_sentinel(b"ACACGACGTTAT".to_vec(), b'$').unwrap();
//! let t = bwt::transform(&seq).unwrap();
//! assert_eq!(t, b"T$CGTAAACCATG");
//!
//! let ranks = bwt::rank_table(&t);
//! let back = bwt::inverse(&t, &ranks, &b'$').unwrap();
//! assert_eq!(back, b"ACACGACGTTAT");
//!
//! // Bijective mode: the transform is self-contained.
//! let t = bwts::transform(b"banana").unwrap();
//! assert_eq!(t, b"annbaa");
//! assert_eq!(bwts::inverse(&t).unwrap(), b"banana");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bwt;
pub mod bwts;
pub mod classify;
pub mod error;
pub mod lyndon;
pub mod sais;
pub mod seq;

pub use error::Error;
pub use sais::{suffix_array, suffix_array_naive};
pub use seq::Sequence;

/// Version
pub const VERSION: &str = "0.1.0";
