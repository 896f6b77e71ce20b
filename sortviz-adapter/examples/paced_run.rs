use futures_util::StreamExt;
use sortviz_adapter::{Bars, Highlight, Pace, Session, parse_algorithm, parse_sequence};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Example: what a renderer does when the user presses "Sort".
    //
    // 1) parse the text box and the algorithm selector
    // 2) start a run on the session (this cancels any previous one)
    // 3) apply every frame to the bar model and redraw
    let values = match parse_sequence("12, 4, 30, 7, 19, 1") {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let Ok(algorithm) = parse_algorithm("insertion") else {
        return;
    };

    let session = Session::new();
    let pace = Pace::new(20);
    let mut bars = Bars::from_values(&values);
    let mut stream = session.start_run(values, algorithm, pace.clone());

    while let Some(frame) = stream.next().await {
        bars.apply(&frame);
        let row: Vec<String> = bars
            .bars()
            .iter()
            .map(|b| match b.highlight {
                Highlight::Comparing => format!("<{}>", b.value),
                Highlight::Swapping => format!("*{}*", b.value),
                Highlight::Sorted => format!("[{}]", b.value),
                Highlight::None => format!(" {} ", b.value),
            })
            .collect();
        println!("{:<24} {}", format!("{:?}", frame.event.step), row.join(""));

        // The slider can move mid-run; the next pause picks it up.
        if frame.event.seq == 4 {
            pace.set_ms(5);
        }
    }

    let counters = session.counters();
    println!(
        "comparisons={} swaps={}",
        counters.comparisons, counters.swaps
    );
}
