//! Core types for gapsort.
//!
//! This module defines:
//! - [`GapSequence`]: Selects which gap formula drives a sort.
//! - [`Metrics`]: Operation counters collected by metered sorts.
//! - [`Recorder`]: The hook the insertion pass reports its work through.

use crate::error::Error;
use cuneiform::cuneiform;
use std::fmt;
use std::str::FromStr;

/// The gap sequence used to schedule the insertion passes of a Shell sort.
///
/// Each variant maps to one generator in [`crate::gaps`]. The set is closed;
/// the generators are pure functions of the input length.
///
/// # Examples
///
/// ```
/// use gapsort::core::GapSequence;
///
/// let kind: GapSequence = "Knuth".parse().unwrap();
/// assert_eq!(kind, GapSequence::Knuth);
/// assert_eq!(kind.display_name(), "Knuth's");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GapSequence {
    /// Shell's original halving sequence: `n/2, n/4, ..., 1`.
    #[default]
    Shell,
    /// Knuth's `(3^k - 1) / 2` sequence: `1, 4, 13, 40, ...`.
    Knuth,
    /// Sedgewick's 1986 interleaved sequence: `1, 5, 19, 41, 109, ...`.
    Sedgewick,
}

impl GapSequence {
    /// Every gap sequence, in declaration order.
    pub const ALL: [GapSequence; 3] = [
        GapSequence::Shell,
        GapSequence::Knuth,
        GapSequence::Sedgewick,
    ];

    /// Short lowercase identifier, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            GapSequence::Shell => "shell",
            GapSequence::Knuth => "knuth",
            GapSequence::Sedgewick => "sedgewick",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            GapSequence::Shell => "Shell's Original",
            GapSequence::Knuth => "Knuth's",
            GapSequence::Sedgewick => "Sedgewick's",
        }
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GapSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GapSequence::ALL
            .into_iter()
            .find(|kind| {
                trimmed.eq_ignore_ascii_case(kind.name())
                    || trimmed.eq_ignore_ascii_case(kind.display_name())
            })
            .ok_or_else(|| Error::UnknownGapSequence(s.to_string()))
    }
}

/// Receives the work performed by [`crate::algo::gapped_insertion_pass`].
///
/// Every method defaults to a no-op, so an implementation only overrides the
/// counters it cares about and the unmetered path compiles down to nothing.
pub trait Recorder {
    /// One element-pair comparison.
    #[inline(always)]
    fn compare(&mut self) {}

    /// `count` raw reads or writes of the slice.
    #[inline(always)]
    fn access(&mut self, _count: u64) {}

    /// A held value landed in a slot other than the one it was read from.
    #[inline(always)]
    fn relocate(&mut self) {}
}

/// Recorder that discards everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoMetrics;

impl Recorder for NoMetrics {}

/// Counters accumulated by a metered sort.
///
/// The counters are monotonic within one sort call and are reset when the
/// next metered sort starts. Cache-line aligned since every field is bumped
/// from the innermost loop.
///
/// For any completed sort, `relocations <= comparisons` and
/// `accesses >= 2 * comparisons`.
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    comparisons: u64,
    relocations: u64,
    accesses: u64,
}

impl Metrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of element-pair comparisons.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of held values written back to a different slot.
    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    /// Number of raw slice reads plus writes.
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Recorder for Metrics {
    #[inline(always)]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    fn access(&mut self, count: u64) {
        self.accesses += count;
    }

    #[inline(always)]
    fn relocate(&mut self) {
        self.relocations += 1;
    }
}
