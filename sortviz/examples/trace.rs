use sortviz::{Algorithm, RunOptions, SortRun, Step};

fn main() {
    // Example: drive a run by hand, the way a renderer would on every animation tick.
    let input = vec![5.0, 3.0, 8.0, 1.0];

    for algorithm in Algorithm::ALL {
        let mut run = SortRun::new(input.clone(), RunOptions::new(algorithm));
        println!("== {algorithm} {input:?}");

        while let Some(event) = run.next_event() {
            let what = match event.step {
                Step::Compare(i, j) => format!("compare {i} <-> {j}"),
                Step::Swap(i, j) => format!("swap    {i} <-> {j}"),
                Step::Complete => "complete".to_string(),
            };
            println!(
                "#{:<3} {what:<18} {:?} (comparisons={}, swaps={})",
                event.seq,
                run.sequence(),
                event.counters.comparisons,
                event.counters.swaps
            );
        }
    }
}
