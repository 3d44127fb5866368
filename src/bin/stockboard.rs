//! `stockboard` — minimal terminal dashboard.
//!
//! Fetches one symbol's intraday window once on startup, then renders three
//! text widgets: price over time, volume over time, and the OHLC snapshot
//! breakdown. While the fetch is in flight it shows `Loading...`; on any
//! failure it shows `Error: <message>` and nothing else.

use intraday_sdk::prelude::*;

const CHART_WIDTH: usize = 40;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let client = match IntradayClient::builder().build() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let mut state = ViewState::new();
    println!("Loading...");

    let rx = client.spawn_chart_fetch(Symbol::from(DEFAULT_SYMBOL));
    let outcome = match rx.await {
        Ok(outcome) => outcome,
        Err(_) => Err(SdkError::Other("fetch task dropped".to_string())),
    };
    state.resolve(outcome);

    match state {
        ViewState::Loading => unreachable!("state resolved above"),
        ViewState::Failed(message) => {
            println!("Error: {message}");
            std::process::exit(1);
        }
        ViewState::Ready(charts) => render(&charts),
    }
}

fn render(charts: &ChartData) {
    println!("Stock Data — {DEFAULT_SYMBOL}");

    println!("\nStock Price Over Time");
    draw_series(&charts.price, '*');

    println!("\nVolume Over Time");
    draw_series(&charts.volume, '#');

    println!("\nStock Prices (Snapshot Breakdown)");
    let total: f64 = charts.snapshot.values.iter().sum();
    for (category, value) in charts.snapshot.entries() {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        println!("  {category:<5} {value:>12.4}  ({share:5.1}%)");
    }
}

/// One row per label, value scaled into a fixed-width run of `mark`s.
fn draw_series(series: &ChartSeries, mark: char) {
    let max = series.data.iter().copied().fold(f64::MIN, f64::max);
    for (label, value) in series.labels.iter().zip(&series.data) {
        let width = if max > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(mark).take(width).collect();
        println!("  {label}  {bar} {value}");
    }
}
