use crate::*;

use alloc::vec::Vec;
use pretty_assertions::assert_eq;

use Step::{Complete, Compare, Swap};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + ((self.next_u64() >> 11) % span) as i64
    }

    fn gen_vec(&mut self, len: usize, start: i64, end_exclusive: i64) -> Vec<i64> {
        (0..len)
            .map(|_| self.gen_range_i64(start, end_exclusive))
            .collect()
    }
}

fn collect_steps<T: Element + Send + 'static>(
    input: &[T],
    options: RunOptions,
) -> (Vec<Step>, Vec<T>) {
    let mut run = SortRun::new(input.to_vec(), options);
    let steps = run.by_ref().map(|e| e.step).collect();
    (steps, run.into_sequence())
}

fn inversions<T: Element>(seq: &[T]) -> u64 {
    let mut n = 0;
    for i in 0..seq.len() {
        for j in i + 1..seq.len() {
            if seq[i] > seq[j] {
                n += 1;
            }
        }
    }
    n
}

fn is_sorted<T: Element>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn bubble_trace_matches_definition() {
    let (steps, out) =
        collect_steps(&[5.0, 3.0, 8.0, 1.0], RunOptions::new(Algorithm::Bubble));
    assert_eq!(
        steps,
        vec![
            Compare(0, 1),
            Swap(0, 1),
            Compare(1, 2),
            Compare(2, 3),
            Swap(2, 3),
            Compare(0, 1),
            Compare(1, 2),
            Swap(1, 2),
            Compare(0, 1),
            Swap(0, 1),
            Complete,
        ]
    );
    assert_eq!(out, vec![1.0, 3.0, 5.0, 8.0]);

    let mut run = SortRun::with_algorithm(vec![5.0, 3.0, 8.0, 1.0], Algorithm::Bubble);
    let counters = run.run_to_completion();
    assert_eq!(counters.as_pair(), (6, 4));
}

#[test]
fn quick_trace_for_two_elements() {
    let (steps, out) = collect_steps(&[2.0, 1.0], RunOptions::new(Algorithm::Quick));
    assert_eq!(steps, vec![Compare(0, 1), Swap(0, 1), Complete]);
    assert_eq!(out, vec![1.0, 2.0]);
}

#[test]
fn quick_trace_for_three_elements() {
    let (steps, out) = collect_steps(&[3, 1, 2], RunOptions::new(Algorithm::Quick));
    assert_eq!(
        steps,
        vec![Compare(0, 2), Compare(1, 2), Swap(1, 0), Swap(1, 2), Complete]
    );
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn selection_trace_compares_against_previous_minimum() {
    let (steps, out) = collect_steps(&[3, 1, 2], RunOptions::new(Algorithm::Selection));
    assert_eq!(
        steps,
        vec![
            Compare(1, 0),
            Compare(2, 1),
            Swap(0, 1),
            Compare(2, 1),
            Swap(1, 2),
            Complete,
        ]
    );
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn insertion_trace_pairs_each_compare_with_a_swap() {
    let (steps, out) = collect_steps(&[3, 1, 2], RunOptions::new(Algorithm::Insertion));
    assert_eq!(
        steps,
        vec![Compare(0, 1), Swap(0, 1), Compare(1, 2), Swap(1, 2), Complete]
    );
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn empty_and_singleton_emit_only_complete() {
    for algorithm in Algorithm::ALL {
        for options in [RunOptions::new(algorithm), RunOptions::legacy(algorithm)] {
            for input in [vec![], vec![7.0]] {
                let mut run = SortRun::new(input.clone(), options);
                let events: Vec<_> = run.by_ref().collect();
                assert_eq!(events.len(), 1, "{algorithm} {input:?}");
                assert_eq!(events[0].step, Complete);
                assert_eq!(events[0].counters, Counters::ZERO);
                assert_eq!(run.counters(), Counters::ZERO);
                assert_eq!(run.sequence(), &input[..]);
            }
        }
    }
}

#[test]
fn every_algorithm_sorts_random_inputs() {
    let mut rng = Lcg::new(0x5eed);
    for algorithm in Algorithm::ALL {
        for len in [2usize, 3, 5, 8, 13, 40] {
            // Narrow value range to force duplicates.
            let input = rng.gen_vec(len, -10, 10);
            let mut run = SortRun::with_algorithm(input.clone(), algorithm);
            let events: Vec<_> = run.by_ref().collect();

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(run.sequence(), &expected[..], "{algorithm} {input:?}");

            assert_eq!(events.iter().filter(|e| e.step.is_complete()).count(), 1);
            assert_eq!(events.last().map(|e| e.step), Some(Complete));
            assert_eq!(replay(&input, &events), expected, "{algorithm} replay");
        }
    }
}

#[test]
fn counters_are_monotonic_and_post_incremented() {
    let input = Lcg::new(7).gen_vec(25, 0, 100);
    for algorithm in Algorithm::ALL {
        let mut run = SortRun::new(
            input.clone(),
            RunOptions::new(algorithm).with_generation(42),
        );
        let mut prev = Counters::ZERO;
        let mut seq = 0;
        while let Some(event) = run.next_event() {
            assert_eq!(event.generation, 42);
            assert_eq!(event.seq, seq);
            assert_eq!(event.counters, run.counters());
            match event.step {
                Compare(..) => {
                    assert_eq!(event.counters.comparisons, prev.comparisons + 1);
                    assert_eq!(event.counters.swaps, prev.swaps);
                }
                Swap(..) => {
                    assert_eq!(event.counters.swaps, prev.swaps + 1);
                    assert_eq!(event.counters.comparisons, prev.comparisons);
                }
                Complete => assert_eq!(event.counters, prev),
            }
            if let Some((i, j)) = event.step.operands() {
                assert!(i < input.len() && j < input.len());
            }
            prev = event.counters;
            seq += 1;
        }
        assert!(run.is_finished());
        assert_eq!(run.next_event(), None);
        assert_eq!(run.next_event(), None);
    }
}

#[test]
fn bubble_on_descending_input_does_quadratic_work() {
    for n in [2u64, 5, 10, 31] {
        let input: Vec<u64> = (0..n).rev().collect();
        let mut run = SortRun::with_algorithm(input, Algorithm::Bubble);
        let counters = run.run_to_completion();
        assert_eq!(counters.comparisons, n * (n - 1) / 2);
        assert_eq!(counters.swaps, n * (n - 1) / 2);
    }
}

#[test]
fn sorted_input_keeps_compare_structure_without_swaps() {
    let sorted: Vec<i64> = (0..12).collect();
    let shuffled = Lcg::new(99).gen_vec(12, 0, 1000);

    for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
        let (sorted_steps, _) = collect_steps(&sorted, RunOptions::new(algorithm));
        assert!(sorted_steps.iter().all(|s| !matches!(s, Swap(..))));
        assert_eq!(sorted_steps.iter().filter(|s| s.is_complete()).count(), 1);

        let (shuffled_steps, _) = collect_steps(&shuffled, RunOptions::new(algorithm));
        let compares = |steps: &[Step]| -> Vec<Step> {
            steps
                .iter()
                .copied()
                .filter(|s| matches!(s, Compare(..)))
                .collect()
        };
        if algorithm == Algorithm::Bubble {
            assert_eq!(compares(&sorted_steps), compares(&shuffled_steps));
        } else {
            assert_eq!(
                compares(&sorted_steps).len(),
                compares(&shuffled_steps).len()
            );
        }
    }

    for algorithm in [Algorithm::Quick, Algorithm::Insertion] {
        let mut run = SortRun::with_algorithm(sorted.clone(), algorithm);
        assert_eq!(run.run_to_completion().swaps, 0, "{algorithm}");
    }
}

#[test]
fn insertion_work_equals_inversion_count() {
    let mut rng = Lcg::new(3);
    for len in [4usize, 9, 30] {
        let input = rng.gen_vec(len, 0, 50);
        let inv = inversions(&input);
        let mut run = SortRun::with_algorithm(input, Algorithm::Insertion);
        let counters = run.run_to_completion();
        assert_eq!(counters.comparisons, inv);
        assert_eq!(counters.swaps, inv);
    }
}

#[test]
fn selection_compares_every_pair_once() {
    let input = Lcg::new(11).gen_vec(17, 0, 5);
    let n = input.len() as u64;
    let mut run = SortRun::with_algorithm(input, Algorithm::Selection);
    let counters = run.run_to_completion();
    assert_eq!(counters.comparisons, n * (n - 1) / 2);
    assert!(counters.swaps < n);
}

#[test]
fn insertion_intermediate_states_are_permutations() {
    let input = Lcg::new(21).gen_vec(15, 0, 30);
    let mut expected = input.clone();
    expected.sort();

    let mut run = SortRun::with_algorithm(input, Algorithm::Insertion);
    while run.next_event().is_some() {
        let mut now = run.sequence().to_vec();
        now.sort();
        assert_eq!(now, expected);
    }
}

#[test]
fn legacy_quick_marks_every_partition() {
    let (steps, out) = collect_steps(&[2.0, 1.0], RunOptions::legacy(Algorithm::Quick));
    assert_eq!(steps, vec![Compare(0, 1), Complete, Complete]);
    assert_eq!(out, vec![1.0, 2.0]);

    let (steps, out) = collect_steps(&[3, 1, 2], RunOptions::legacy(Algorithm::Quick));
    // One partition of the whole range, then the two singleton subranges.
    assert_eq!(
        steps,
        vec![
            Compare(0, 2),
            Compare(1, 2),
            Swap(1, 0),
            Complete,
            Complete,
            Complete
        ]
    );
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn legacy_quick_counts_self_exchanges() {
    let mut run = SortRun::new(vec![1, 2, 3], RunOptions::legacy(Algorithm::Quick));
    let steps: Vec<Step> = run.by_ref().map(|e| e.step).collect();
    assert_eq!(
        steps,
        vec![
            Compare(0, 2),
            Swap(0, 0),
            Compare(1, 2),
            Swap(1, 1),
            Complete,
            Compare(0, 1),
            Swap(0, 0),
            Complete,
            Complete,
        ]
    );
    assert_eq!(run.counters().as_pair(), (3, 3));
    assert_eq!(run.sequence(), &[1, 2, 3]);

    // Same input without self-exchanges: nothing is swapped.
    let (steps, _) = collect_steps(
        &[1, 2, 3],
        RunOptions::legacy(Algorithm::Quick).with_count_self_exchanges(false),
    );
    assert_eq!(
        steps,
        vec![Compare(0, 2), Compare(1, 2), Complete, Compare(0, 1), Complete, Complete]
    );
}

/// Plain recursive Lomuto quick sort recording the steps it performs.
fn lomuto_reference<T: Element>(
    seq: &mut [T],
    left: usize,
    right: usize,
    options: &RunOptions,
    out: &mut Vec<Step>,
) {
    if left == right {
        if options.mark_partitions {
            out.push(Complete);
        }
        return;
    }

    let pivot = seq[right];
    let mut store = left;
    for i in left..right {
        out.push(Compare(i, right));
        if seq[i] < pivot {
            if i != store || options.count_self_exchanges {
                out.push(Swap(i, store));
            }
            seq.swap(i, store);
            store += 1;
        }
    }
    seq.swap(store, right);
    if options.announce_pivot_placement && store != right {
        out.push(Swap(store, right));
    }
    if options.mark_partitions {
        out.push(Complete);
    }

    if store > left {
        lomuto_reference(seq, left, store - 1, options, out);
    }
    if store < right {
        lomuto_reference(seq, store + 1, right, options, out);
    }
}

fn quick_reference<T: Element>(input: &[T], options: &RunOptions) -> (Vec<Step>, Vec<T>) {
    let mut seq = input.to_vec();
    let mut out = Vec::new();
    if !seq.is_empty() {
        let right = seq.len() - 1;
        lomuto_reference(&mut seq, 0, right, options, &mut out);
    }
    if out.last() != Some(&Complete) {
        out.push(Complete);
    }
    (out, seq)
}

#[test]
fn quick_matches_recursive_lomuto_reference() {
    let mut rng = Lcg::new(0x5eed_1234);
    let mut inputs: Vec<Vec<i64>> = vec![
        Vec::new(),
        vec![7],
        vec![4, 4],
        vec![3, 3, 3, 3, 3],
        (0..16).collect(),
        (0..16).rev().collect(),
    ];
    for len in [2usize, 3, 5, 8, 13, 24, 40] {
        inputs.push(rng.gen_vec(len, -1_000, 1_000));
        // Few distinct values, lots of duplicates.
        inputs.push(rng.gen_vec(len, 0, 3));
        // Sorted run followed by a random tail.
        let mut mixed: Vec<i64> = (0..len as i64).collect();
        mixed.extend(rng.gen_vec(len / 2 + 1, 0, len as i64));
        inputs.push(mixed);
    }

    let base = RunOptions::new(Algorithm::Quick);
    let mut variants = vec![base, RunOptions::legacy(Algorithm::Quick)];
    for bits in 0..8u8 {
        variants.push(
            base.with_mark_partitions(bits & 1 != 0)
                .with_announce_pivot_placement(bits & 2 != 0)
                .with_count_self_exchanges(bits & 4 != 0),
        );
    }

    for options in &variants {
        for input in &inputs {
            let (expected_steps, expected_seq) = quick_reference(input, options);

            let mut run = SortRun::new(input.clone(), *options);
            let steps: Vec<Step> = run.by_ref().map(|e| e.step).collect();
            assert_eq!(steps, expected_steps, "input {input:?} options {options:?}");
            assert_eq!(run.sequence(), expected_seq.as_slice());

            let comparisons = steps.iter().filter(|s| matches!(s, Compare(..))).count() as u64;
            let swaps = steps.iter().filter(|s| matches!(s, Swap(..))).count() as u64;
            assert_eq!(run.counters().as_pair(), (comparisons, swaps));
        }
    }
}

#[test]
fn legacy_quick_still_sorts_and_ends_with_complete() {
    let mut rng = Lcg::new(0xfeed);
    for len in [2usize, 6, 19, 33] {
        let input = rng.gen_vec(len, -100, 100);
        let mut run = SortRun::new(input.clone(), RunOptions::legacy(Algorithm::Quick));
        let events: Vec<_> = run.by_ref().collect();
        assert!(is_sorted(run.sequence()));
        assert_eq!(events.last().map(|e| e.step), Some(Complete));
        assert!(events.iter().filter(|e| e.step.is_complete()).count() >= 1);
        assert!(run.is_finished());
    }
}

#[test]
fn pivot_announcement_and_partition_marking_compose() {
    let options = RunOptions::new(Algorithm::Quick).with_mark_partitions(true);
    let (steps, _) = collect_steps(&[2.0, 1.0], options);
    assert_eq!(steps, vec![Compare(0, 1), Swap(0, 1), Complete, Complete]);
}

#[test]
fn snapshot_reflects_progress() {
    let mut run = SortRun::new(
        vec![2.0, 1.0],
        RunOptions::new(Algorithm::Bubble).with_generation(3),
    );
    let before = run.snapshot();
    assert_eq!(before.counters, Counters::ZERO);
    assert!(!before.finished);

    run.run_to_completion();
    let after = run.snapshot();
    assert_eq!(after.algorithm, Algorithm::Bubble);
    assert_eq!(after.generation, 3);
    assert_eq!(after.sequence, vec![1.0, 2.0]);
    assert_eq!(after.counters.as_pair(), (1, 1));
    assert!(after.finished);
}

#[test]
fn algorithm_names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name(" Quick "), Some(Algorithm::Quick));
    assert_eq!(Algorithm::from_name("heap"), None);
}

#[test]
fn emitter_counts_before_delivery() {
    let mut emitter = StepEmitter::new(3, 9);
    let e = emitter.emit(Compare(0, 1)).unwrap();
    assert_eq!(e.counters.as_pair(), (1, 0));
    let e = emitter.emit(Swap(1, 2)).unwrap();
    assert_eq!(e.counters.as_pair(), (1, 1));
    assert_eq!(e.seq, 1);
    let e = emitter.finish().unwrap();
    assert_eq!(e.step, Complete);
    assert_eq!(e.generation, 9);
    assert!(emitter.is_sealed());
    assert_eq!(emitter.emitted(), 3);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out-of-bounds operand")]
fn emitter_rejects_out_of_bounds_operands() {
    let mut emitter = StepEmitter::new(2, 0);
    emitter.emit(Compare(1, 2));
}

#[test]
fn custom_machine_is_driven_like_builtins() {
    // Reverses a two-element slice in one swap.
    struct SwapOnce(bool);
    impl SortMachine<i32> for SwapOnce {
        fn next_step(&mut self, seq: &mut [i32]) -> Option<Step> {
            if self.0 {
                return None;
            }
            self.0 = true;
            seq.swap(0, 1);
            Some(Swap(0, 1))
        }
    }

    let mut run = SortRun::with_machine(
        vec![2, 1],
        RunOptions::default(),
        alloc::boxed::Box::new(SwapOnce(false)),
    );
    let steps: Vec<_> = run.by_ref().map(|e| e.step).collect();
    assert_eq!(steps, vec![Swap(0, 1), Complete]);
    assert_eq!(run.into_sequence(), vec![1, 2]);
}
