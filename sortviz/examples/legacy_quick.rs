use sortviz::{Algorithm, RunOptions, SortRun, Step};

fn main() {
    // Example: the original visualizer reported "sorted" after every quick sort partition.
    // `RunOptions::legacy` reproduces that stream; the default reports completion once.
    let input = vec![4, 7, 1, 9, 3, 8, 2];

    for (label, options) in [
        ("default", RunOptions::new(Algorithm::Quick)),
        ("legacy", RunOptions::legacy(Algorithm::Quick)),
    ] {
        let mut run = SortRun::new(input.clone(), options);
        let completes = run.by_ref().filter(|e| e.step == Step::Complete).count();
        println!(
            "{label:<8} completes={completes} counters={:?} result={:?}",
            run.counters(),
            run.sequence()
        );
    }
}
