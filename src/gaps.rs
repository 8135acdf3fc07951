//! Gap sequence generation.
//!
//! Every generator returns gaps in the order they are applied: strictly
//! decreasing, each in `1..n`, and ending in exactly one `1`. Inputs with
//! `n <= 1` need no passes and produce an empty sequence.
//!
//! All arithmetic is exact integer arithmetic. Terms that would overflow
//! `usize` are necessarily larger than any slice length, so generation simply
//! stops there.

use crate::core::GapSequence;

/// Returns the gaps a sort of `n` elements applies with the given sequence,
/// largest first.
///
/// # Examples
///
/// ```
/// use gapsort::{gap_sequence, GapSequence};
///
/// assert_eq!(gap_sequence(10, GapSequence::Shell), vec![5, 2, 1]);
/// assert_eq!(gap_sequence(100, GapSequence::Knuth), vec![13, 4, 1]);
/// assert_eq!(gap_sequence(100, GapSequence::Sedgewick), vec![41, 19, 5, 1]);
/// assert!(gap_sequence(1, GapSequence::Sedgewick).is_empty());
/// ```
pub fn gap_sequence(n: usize, kind: GapSequence) -> Vec<usize> {
    match kind {
        GapSequence::Shell => shell_gaps(n),
        GapSequence::Knuth => knuth_gaps(n),
        GapSequence::Sedgewick => sedgewick_gaps(n),
    }
}

/// Shell's original sequence: `n/2`, halved until it reaches zero.
pub fn shell_gaps(n: usize) -> Vec<usize> {
    if n <= 1 {
        return Vec::new();
    }

    let mut gaps = Vec::with_capacity(usize::BITS as usize);
    let mut gap = n / 2;
    while gap > 0 {
        gaps.push(gap);
        gap /= 2;
    }

    terminate_at_one(gaps)
}

/// Knuth's sequence `(3^k - 1) / 2` for `k = 1, 2, ...`, keeping every term
/// no larger than `n / 3`.
///
/// The bound is compared as `3 * gap <= n`, which is the real-valued
/// `gap <= n / 3` without a division.
pub fn knuth_gaps(n: usize) -> Vec<usize> {
    if n <= 1 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    // (3^(k+1) - 1) / 2 == 3 * ((3^k - 1) / 2) + 1
    let mut gap: usize = 1;
    loop {
        match gap.checked_mul(3) {
            Some(scaled) if scaled <= n => gaps.push(gap),
            _ => break,
        }
        match gap.checked_mul(3).and_then(|g| g.checked_add(1)) {
            Some(next) => gap = next,
            None => break,
        }
    }

    gaps.reverse();
    terminate_at_one(gaps)
}

/// Sedgewick's 1986 sequence, indexed by `k = 0, 1, 2, ...`:
///
/// - even `k`: `9 * (2^k - 2^(k/2)) + 1`
/// - odd `k`: `8 * 2^k - 6 * 2^((k+1)/2) + 1`
///
/// Terms are kept while they are strictly below `n`; a gap of `n` or more
/// cannot compare any pair.
pub fn sedgewick_gaps(n: usize) -> Vec<usize> {
    if n <= 1 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    let mut k: u32 = 0;
    while let Some(gap) = sedgewick_term(k) {
        if gap >= n {
            break;
        }
        gaps.push(gap);
        k += 1;
    }

    gaps.reverse();
    terminate_at_one(gaps)
}

/// The `k`-th Sedgewick term, or `None` once it no longer fits in `usize`.
fn sedgewick_term(k: u32) -> Option<usize> {
    if k % 2 == 0 {
        let diff = pow2(k)?.checked_sub(pow2(k / 2)?)?;
        diff.checked_mul(9)?.checked_add(1)
    } else {
        let lead = pow2(k)?.checked_mul(8)?;
        let tail = pow2(k.div_ceil(2))?.checked_mul(6)?;
        lead.checked_sub(tail)?.checked_add(1)
    }
}

#[inline]
fn pow2(exp: u32) -> Option<usize> {
    if exp >= usize::BITS {
        None
    } else {
        Some(1usize << exp)
    }
}

/// Guarantees the sequence ends in a single `1`.
fn terminate_at_one(mut gaps: Vec<usize>) -> Vec<usize> {
    if gaps.last() != Some(&1) {
        gaps.retain(|&gap| gap != 1);
        gaps.push(1);
    }
    gaps
}
