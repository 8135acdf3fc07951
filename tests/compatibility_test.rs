use gapsort::prelude::*;
use gapsort::{Recorder, gapped_insertion_pass};
use std::cmp::Ordering;

// Simulate an external record type ordered by one field.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Reading {
    sensor: u16,
    celsius: f32,
}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.celsius.partial_cmp(&other.celsius)
    }
}

#[test]
fn test_external_type_compatibility() {
    let mut readings = vec![
        Reading { sensor: 1, celsius: 21.5 },
        Reading { sensor: 2, celsius: -3.0 },
        Reading { sensor: 3, celsius: 19.0 },
        Reading { sensor: 4, celsius: 40.25 },
    ];

    shell_sort(&mut readings, GapSequence::Sedgewick);

    let sensors: Vec<u16> = readings.iter().map(|r| r.sensor).collect();
    assert_eq!(sensors, vec![2, 3, 1, 4]);
}

// A recorder defined outside the crate, counting only the cost of shifts.
#[derive(Default)]
struct ShiftCounter {
    relocations: usize,
}

impl Recorder for ShiftCounter {
    fn relocate(&mut self) {
        self.relocations += 1;
    }
}

#[test]
fn test_external_recorder_compatibility() {
    let mut data = [3, 1, 2, 5, 4];
    let mut counter = ShiftCounter::default();

    for gap in gap_sequence(data.len(), GapSequence::Knuth) {
        gapped_insertion_pass(&mut data, gap, &mut counter);
    }

    assert_eq!(data, [1, 2, 3, 4, 5]);
    assert_eq!(counter.relocations, 3);
}

#[test]
fn test_dyn_recorder() {
    let mut data = [2, 1];
    let mut metrics = Metrics::new();
    let recorder: &mut dyn Recorder = &mut metrics;
    gapped_insertion_pass(&mut data, 1, recorder);

    assert_eq!(data, [1, 2]);
    assert_eq!(metrics.relocations(), 1);
}
