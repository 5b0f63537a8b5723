//! Statistical uniformity of the low-order bits of a random residue mod p.
//!
//! Reducing a uniformly random L-bit integer mod a prime `p` gives a uniform
//! value in `[0, p)`, but its low `n` bits are biased: writing
//! `p = q*2^n + r`, residues below `r` occur `q+1` times and the rest `q`
//! times. The statistical distance of those bits from uniform is governed by
//! the sizes of `r` and `2^n - r` relative to `p`, which yields the bound
//!
//! ```text
//! n + bitlen(p) - 1 - bitlen(r) - bitlen(2^n - r) >= margin
//! ```
//!
//! Any `n` clearing the bound keeps the statistical distance below
//! `2^-margin`. [`useful_bits`] returns the largest such `n`.

use rug::Integer;
use std::cmp::Ordering;
use thiserror::Error;

/// Default statistical security margin: distance from uniform below 2^-128.
pub const DEFAULT_SECURITY_MARGIN: u32 = 128;

/// Failure modes of the bit-count search.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum BitCountError {
    /// The modulus is zero or negative.
    #[error("modulus must be a positive integer")]
    InvalidModulus,

    /// No bit count clears the margin (only happens for small moduli).
    #[error("no bit count of a {bits}-bit modulus stays within distance 2^-{margin} of uniform")]
    NoQualifyingBitCount { bits: u32, margin: u32 },
}

/// Returns the number of low-order bits of a uniform residue mod `p` whose
/// statistical distance from a uniform bit string stays below `2^-margin`.
///
/// `p` is intended to be prime; primality is not verified. The result is the
/// largest `n` in `[0, bitlen(p) - 1]` satisfying the bound above, so it is
/// always smaller than the bit length of `p`.
pub fn useful_bits(p: &Integer, margin: u32) -> Result<u32, BitCountError> {
    if p.cmp0() != Ordering::Greater {
        return Err(BitCountError::InvalidModulus);
    }

    let bits = p.significant_bits();
    let mut best = None;

    // The bound is not proven monotonic in n, so scan every candidate and
    // keep the true maximum rather than binary-searching or early-exiting.
    for n in 0..bits {
        let block = Integer::from(1u32) << n;
        let r = Integer::from(p % &block);
        let slack = Integer::from(&block - &r);
        let score = i64::from(n) + i64::from(bits)
            - 1
            - i64::from(r.significant_bits())
            - i64::from(slack.significant_bits());
        if score >= i64::from(margin) {
            best = Some(n);
        }
    }

    best.ok_or(BitCountError::NoQualifyingBitCount { bits, margin })
}
