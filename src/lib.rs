//! # Gapsort
//!
//! `gapsort` is an in-place [**Shell sort**](https://en.wikipedia.org/wiki/Shellsort) for
//! slices of totally ordered values, with a choice of three classic gap sequences and
//! optional operation counters.
//!
//! Shell sort generalizes insertion sort: it first insertion-sorts elements that are far
//! apart, then progressively closer ones, finishing with a plain insertion pass at gap 1.
//! The earlier passes leave the slice nearly sorted so the final pass is cheap.
//!
//! ## Key Features
//!
//! - **Three gap sequences**: [`GapSequence::Shell`] (`n/2, n/4, ...`), [`GapSequence::Knuth`]
//!   (`(3^k - 1) / 2`) and [`GapSequence::Sedgewick`] (Sedgewick's 1986 sequence), all generated
//!   with exact, overflow-checked integer arithmetic.
//! - **In-Place Mutation**: Sorting borrows the caller's slice mutably and allocates only the
//!   gap list.
//! - **Optional Metrics**: [`shell_sort_with_metrics`] and [`ShellSorter`] count comparisons,
//!   relocations and raw slice accesses; the plain [`shell_sort`] path records nothing.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use gapsort::{shell_sort, GapSequence};
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! shell_sort(&mut data, GapSequence::Shell);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ### Inspecting Gaps
//!
//! ```rust
//! use gapsort::{gap_sequence, GapSequence};
//!
//! assert_eq!(gap_sequence(10, GapSequence::Shell), vec![5, 2, 1]);
//! ```
//!
//! ### Metrics
//!
//! ```rust
//! use gapsort::{GapSequence, ShellSorter};
//!
//! let mut sorter = ShellSorter::new(GapSequence::Knuth);
//! let mut data = vec![4.5, -1.0, 3.25, 0.0];
//! sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![-1.0, 0.0, 3.25, 4.5]);
//! assert!(sorter.accesses() >= 2 * sorter.comparisons());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Shell**: *O*(*n^2*) worst case.
//! - **Knuth**: *O*(*n^(3/2)*) worst case.
//! - **Sedgewick**: *O*(*n^(4/3)*) worst case.
//! - **Memory Overhead**: one `Vec<usize>` of gaps, logarithmic in the slice length.
//!
//! Shell sort is not stable. Values that are not comparable with each other (such as
//! `f64::NAN`) leave the result in an unspecified order but never cause a panic.

pub mod algo;
pub mod core;
pub mod error;
pub mod gaps;
pub use algo::{
    ShellSorter, gapped_insertion_pass, shell_sort, shell_sort_with_metrics, try_shell_sort,
};
pub use crate::core::{GapSequence, Metrics, NoMetrics, Recorder};
pub use error::{Error, Result};
pub use gaps::gap_sequence;

pub mod prelude {
    pub use crate::algo::{ShellSorter, shell_sort, shell_sort_with_metrics, try_shell_sort};
    pub use crate::core::{GapSequence, Metrics};
    pub use crate::gaps::gap_sequence;
}
