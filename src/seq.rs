//! Input sequences and the sentinel contract.
//!
//! A [`Sequence`] is an immutable, validated owner of the symbols a transform
//! runs over. Sentinel-mode construction enforces the contract up front so
//! the codecs never have to re-check it: the sentinel is strictly smaller
//! than every other symbol and occurs exactly once, at the end.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;

/// An immutable symbol sequence, optionally terminated by a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    symbols: Vec<T>,
    sentinel: Option<T>,
}

impl<T: Ord + Copy> Sequence<T> {
    /// A plain sequence with no sentinel, as consumed by the bijective path.
    pub fn plain(symbols: Vec<T>) -> Result<Self, Error> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("sequence must not be empty"));
        }
        Ok(Sequence { symbols, sentinel: None })
    }

    /// A sentinel-terminated sequence for the classic (non-bijective) BWT.
    ///
    /// The sentinel may already be present as the final symbol; otherwise it
    /// is appended here. Any other arrangement, or a sentinel that is not
    /// strictly smaller than every other symbol, is an [`Error::InvalidInput`].
    pub fn with_sentinel(mut symbols: Vec<T>, sentinel: T) -> Result<Self, Error> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("sequence must not be empty"));
        }
        let occurrences = symbols.iter().filter(|&&s| s == sentinel).count();
        match occurrences {
            0 => symbols.push(sentinel),
            1 if symbols.last() == Some(&sentinel) => {}
            _ => {
                return Err(Error::InvalidInput(
                    "sentinel must occur exactly once, as the final symbol",
                ))
            }
        }
        let body = &symbols[..symbols.len() - 1];
        if body.iter().any(|s| *s <= sentinel) {
            return Err(Error::InvalidInput(
                "sentinel must be strictly smaller than every other symbol",
            ));
        }
        Ok(Sequence { symbols, sentinel: Some(sentinel) })
    }

    /// All symbols, including the sentinel when one is attached.
    #[inline]
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// The sentinel this sequence was built with, if any.
    #[inline]
    pub fn sentinel(&self) -> Option<&T> {
        self.sentinel.as_ref()
    }

    /// Total length, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
