//! Shell sort driver and the gapped insertion pass.
//!
//! A sort generates its gap sequence once (see [`crate::gaps`]) and then runs
//! one [`gapped_insertion_pass`] per gap, largest first. Each pass relies on
//! the partial order left by the previous one, so passes never overlap.
//!
//! The main entry points are [`shell_sort`], [`shell_sort_with_metrics`] and
//! the stateful [`ShellSorter`].
//!
//! # Stability
//!
//! A single pass never moves an element past an equal one, but Shell sort as
//! a whole is **not** stable: equal keys in different interleaved
//! subsequences of a large gap can be reordered relative to each other.

use crate::core::{GapSequence, Metrics, NoMetrics, Recorder};
use crate::error::{Error, Result};
use crate::gaps::gap_sequence;
use tracing::{debug, trace};

/// Sorts `data` in place, in ascending order, using the given gap sequence.
///
/// Slices of length 0 or 1 are left untouched.
///
/// # Examples
///
/// ```
/// use gapsort::{shell_sort, GapSequence};
///
/// let mut data = [5, 3, 8, 1, 9, 2];
/// shell_sort(&mut data, GapSequence::Shell);
///
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn shell_sort<T: PartialOrd + Copy>(data: &mut [T], kind: GapSequence) {
    sort_recorded(data, kind, &mut NoMetrics);
}

/// Sorts `data` in place and records the work into `metrics`.
///
/// `metrics` is reset before sorting starts, so it describes this call only.
///
/// # Examples
///
/// ```
/// use gapsort::{shell_sort_with_metrics, GapSequence, Metrics};
///
/// let mut data = [1, 2, 3, 4];
/// let mut metrics = Metrics::new();
/// shell_sort_with_metrics(&mut data, GapSequence::Knuth, &mut metrics);
///
/// assert_eq!(metrics.relocations(), 0);
/// assert_eq!(metrics.comparisons(), 3);
/// ```
pub fn shell_sort_with_metrics<T: PartialOrd + Copy>(
    data: &mut [T],
    kind: GapSequence,
    metrics: &mut Metrics,
) {
    metrics.reset();
    debug!(len = data.len(), sequence = %kind, "shell sort started");
    sort_recorded(data, kind, metrics);
    debug!(
        comparisons = metrics.comparisons(),
        relocations = metrics.relocations(),
        accesses = metrics.accesses(),
        "shell sort finished"
    );
}

/// Sorts an optional slice, failing with [`Error::MissingInput`] when it is absent.
///
/// This is the entry point for callers whose input may legitimately be
/// missing, e.g. an `Option<Vec<_>>` field.
///
/// # Examples
///
/// ```
/// use gapsort::{try_shell_sort, Error, GapSequence};
///
/// let mut data = vec![3, 1, 2];
/// try_shell_sort(Some(&mut data[..]), GapSequence::Sedgewick).unwrap();
/// assert_eq!(data, [1, 2, 3]);
///
/// let missing: Option<&mut [i32]> = None;
/// assert_eq!(try_shell_sort(missing, GapSequence::Shell), Err(Error::MissingInput));
/// ```
pub fn try_shell_sort<T: PartialOrd + Copy>(
    data: Option<&mut [T]>,
    kind: GapSequence,
) -> Result<()> {
    let data = data.ok_or(Error::MissingInput)?;
    shell_sort(data, kind);
    Ok(())
}

/// Insertion-sorts every subsequence of elements `gap` apart in one sweep.
///
/// For each index `i` from `gap` upwards, the value at `i` is held aside,
/// every predecessor at distance `gap` that is strictly greater is shifted
/// one gap forward, and the held value is written into the vacated slot.
/// Equal elements are never shifted past each other.
///
/// A `gap` of zero, or one not smaller than `data.len()`, leaves the slice
/// untouched.
///
/// `recorder` sees one comparison per predecessor test, one access per read
/// or write, and one relocation whenever the held value ends up in a
/// different slot.
pub fn gapped_insertion_pass<T, R>(data: &mut [T], gap: usize, recorder: &mut R)
where
    T: PartialOrd + Copy,
    R: Recorder + ?Sized,
{
    let len = data.len();
    if gap == 0 || gap >= len {
        return;
    }

    for i in gap..len {
        let held = data[i];
        recorder.access(1);

        let mut j = i;
        while j >= gap {
            let prev = data[j - gap];
            recorder.compare();
            recorder.access(2);
            if prev > held {
                data[j] = prev;
                recorder.access(2);
                j -= gap;
            } else {
                break;
            }
        }

        if j != i {
            data[j] = held;
            recorder.access(1);
            recorder.relocate();
        }
    }
}

fn sort_recorded<T, R>(data: &mut [T], kind: GapSequence, recorder: &mut R)
where
    T: PartialOrd + Copy,
    R: Recorder + ?Sized,
{
    let len = data.len();
    if len <= 1 {
        return;
    }

    for gap in gap_sequence(len, kind) {
        trace!(gap, len, "gapped insertion pass");
        gapped_insertion_pass(data, gap, recorder);
    }
}

/// A reusable Shell sorter that keeps the metrics of its most recent sort.
///
/// # Examples
///
/// ```
/// use gapsort::{GapSequence, ShellSorter};
///
/// let mut sorter = ShellSorter::new(GapSequence::Sedgewick);
/// let mut data = vec![2.0, 2.0, 1.0];
/// sorter.sort(&mut data);
///
/// assert_eq!(data, [1.0, 2.0, 2.0]);
/// assert!(sorter.relocations() <= sorter.comparisons());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShellSorter {
    sequence: GapSequence,
    metrics: Metrics,
}

impl ShellSorter {
    pub fn new(sequence: GapSequence) -> Self {
        Self {
            sequence,
            metrics: Metrics::new(),
        }
    }

    /// The gap sequence used by subsequent sorts.
    pub fn sequence(&self) -> GapSequence {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: GapSequence) {
        self.sequence = sequence;
    }

    /// Sorts `data` in place, replacing the stored metrics with this call's.
    pub fn sort<T: PartialOrd + Copy>(&mut self, data: &mut [T]) {
        shell_sort_with_metrics(data, self.sequence, &mut self.metrics);
    }

    /// Like [`ShellSorter::sort`], but rejects an absent input with
    /// [`Error::MissingInput`]. Metrics are left as they were on failure.
    pub fn try_sort<T: PartialOrd + Copy>(&mut self, data: Option<&mut [T]>) -> Result<()> {
        let data = data.ok_or(Error::MissingInput)?;
        self.sort(data);
        Ok(())
    }

    /// Snapshot of the counters from the last sort.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn comparisons(&self) -> u64 {
        self.metrics.comparisons()
    }

    pub fn relocations(&self) -> u64 {
        self.metrics.relocations()
    }

    pub fn accesses(&self) -> u64 {
        self.metrics.accesses()
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_sorts_each_interleaved_subsequence() {
        let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        gapped_insertion_pass(&mut data, 3, &mut NoMetrics);

        for start in 0..3 {
            let chain: Vec<i32> = data.iter().skip(start).step_by(3).copied().collect();
            assert!(chain.windows(2).all(|w| w[0] <= w[1]), "chain {start}: {chain:?}");
        }
        assert_eq!(data, [0, 2, 1, 3, 5, 4, 6, 8, 7, 9]);
    }

    #[test]
    fn pass_with_gap_one_is_insertion_sort() {
        let mut data = [4, 1, 3, 1, 2];
        gapped_insertion_pass(&mut data, 1, &mut NoMetrics);
        assert_eq!(data, [1, 1, 2, 3, 4]);
    }

    #[test]
    fn pass_ignores_out_of_range_gaps() {
        let original = [3, 2, 1];
        for gap in [0, 3, 4, usize::MAX] {
            let mut data = original;
            let mut metrics = Metrics::new();
            gapped_insertion_pass(&mut data, gap, &mut metrics);
            assert_eq!(data, original, "gap={gap}");
            assert_eq!(metrics, Metrics::default(), "gap={gap}");
        }
    }

    #[test]
    fn pass_does_not_move_equal_keys() {
        // Keys compare on the first field only.
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Keyed(u8, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut data = [Keyed(2, 'a'), Keyed(1, 'x'), Keyed(2, 'b'), Keyed(1, 'y')];
        gapped_insertion_pass(&mut data, 1, &mut NoMetrics);
        assert_eq!(
            data,
            [Keyed(1, 'x'), Keyed(1, 'y'), Keyed(2, 'a'), Keyed(2, 'b')]
        );
    }

    #[test]
    fn pass_counts_match_hand_trace() {
        // i=1: held 1, compare with 2 -> shift, j=0, write. i=2: held 3, compare with 2 -> stop.
        let mut data = [2, 1, 3];
        let mut metrics = Metrics::new();
        gapped_insertion_pass(&mut data, 1, &mut metrics);

        assert_eq!(data, [1, 2, 3]);
        assert_eq!(metrics.comparisons(), 2);
        assert_eq!(metrics.relocations(), 1);
        // reads of held values: 2, comparisons: 2 * 2, one shift: 2, one write: 1
        assert_eq!(metrics.accesses(), 2 + 4 + 2 + 1);
    }

    #[test]
    fn metered_sort_resets_between_calls() {
        let mut metrics = Metrics::new();
        let mut data = [5, 4, 3, 2, 1];
        shell_sort_with_metrics(&mut data, GapSequence::Shell, &mut metrics);
        assert!(metrics.comparisons() > 0);

        let mut single = [1];
        shell_sort_with_metrics(&mut single, GapSequence::Shell, &mut metrics);
        assert_eq!(metrics, Metrics::default());
    }

    #[test]
    fn sorter_keeps_configuration_and_last_metrics() {
        let mut sorter = ShellSorter::default();
        assert_eq!(sorter.sequence(), GapSequence::Shell);

        sorter.set_sequence(GapSequence::Knuth);
        let mut data = vec![3, 1, 2];
        sorter.sort(&mut data);
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(sorter.metrics().comparisons(), sorter.comparisons());
        assert!(sorter.relocations() > 0);

        sorter.reset_metrics();
        assert_eq!(sorter.comparisons(), 0);
        assert_eq!(sorter.relocations(), 0);
        assert_eq!(sorter.accesses(), 0);
    }

    #[test]
    fn sorter_rejects_missing_input_without_touching_metrics() {
        let mut sorter = ShellSorter::new(GapSequence::Sedgewick);
        let mut data = [2, 1];
        sorter.sort(&mut data);
        let before = sorter.metrics();

        assert_eq!(sorter.try_sort::<u32>(None), Err(Error::MissingInput));
        assert_eq!(sorter.metrics(), before);
    }
}
