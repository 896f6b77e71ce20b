//! Terminal front end for sortviz: animates a sort as rows of bars.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use futures_util::StreamExt;
use sortviz::{Algorithm, RunOptions};
use sortviz_adapter::{Bars, Pace, Session, parse_sequence};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Text rendering helpers.
mod render {
    use sortviz::{Step, StepEvent};
    use sortviz_adapter::{Bars, Highlight};
    use std::fmt::Write;

    fn step_label(step: Step) -> String {
        match step {
            Step::Compare(i, j) => format!("compare {i} <-> {j}"),
            Step::Swap(i, j) => format!("swap {i} <-> {j}"),
            Step::Complete => "complete".to_string(),
        }
    }

    fn marker(highlight: Highlight) -> char {
        match highlight {
            Highlight::None => ' ',
            Highlight::Comparing => '?',
            Highlight::Swapping => '~',
            Highlight::Sorted => '=',
        }
    }

    /// Format one frame: a header line followed by one horizontal bar per element.
    pub fn frame(bars: &Bars, event: &StepEvent, width: usize) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = writeln!(
            out,
            "#{:<4} {:<20} comparisons={} swaps={}",
            event.seq,
            step_label(event.step),
            event.counters.comparisons,
            event.counters.swaps
        );

        let tallest = bars.bars().iter().map(|b| b.height).max().unwrap_or(0).max(1);
        for bar in bars.bars() {
            let cols = (bar.height as usize * width).div_ceil(tallest as usize);
            let _ = writeln!(
                out,
                "{:>3} {} {:<width$} {}",
                bar.index,
                marker(bar.highlight),
                "#".repeat(cols),
                bar.value,
            );
        }
        out
    }

    pub fn summary(comparisons: u64, swaps: u64, values: &[f64]) -> String {
        format!("sorted {values:?}\ncomparisons={comparisons} swaps={swaps}\n")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Bubble,
    Quick,
    Selection,
    Insertion,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => Algorithm::Bubble,
            AlgorithmArg::Quick => Algorithm::Quick,
            AlgorithmArg::Selection => Algorithm::Selection,
            AlgorithmArg::Insertion => Algorithm::Insertion,
        }
    }
}

/// Animate a sorting algorithm in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about = "Animate a sorting algorithm step by step")]
struct Args {
    /// Comma-separated numbers to sort, e.g. "5,3,8,1".
    #[arg(value_name = "NUMBERS", allow_hyphen_values = true)]
    numbers: String,

    /// Algorithm to run.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Bubble)]
    algorithm: AlgorithmArg,

    /// Delay between steps in milliseconds (0..=1000).
    #[arg(short, long, default_value_t = Pace::DEFAULT_MS)]
    pace_ms: u64,

    /// Reproduce the original step stream (quick sort marks every partition as sorted).
    #[arg(long)]
    legacy: bool,

    /// Width of the tallest bar in columns.
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Only print the final result.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let values = parse_sequence(&args.numbers).context("failed to parse NUMBERS")?;
    let algorithm = Algorithm::from(args.algorithm);
    let options = if args.legacy {
        RunOptions::legacy(algorithm)
    } else {
        RunOptions::new(algorithm)
    };

    let pace = Pace::new(args.pace_ms);
    if pace.ms() != args.pace_ms {
        info!(requested = args.pace_ms, applied = pace.ms(), "pace clamped");
    }

    let session = Session::new();
    let mut bars = Bars::from_values(&values);
    let mut stream = session.start_run_with(values, options, pace);
    let mut last = Vec::new();

    while let Some(frame) = stream.next().await {
        debug!(seq = frame.event.seq, step = ?frame.event.step, "frame");
        bars.apply(&frame);
        if !args.quiet {
            print!("{}", render::frame(&bars, &frame.event, args.width.max(1)));
            println!();
        }
        last = frame.sequence;
    }

    let counters = session.counters();
    print!(
        "{}",
        render::summary(counters.comparisons, counters.swaps, &last)
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore error if already set.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
