//! Rollwin demo
//!
//! Feeds a synthetic sample stream through a moving average and resizes
//! the window mid-stream, logging the running mean along the way.

use anyhow::Result;
use rollwin_stats::MovingAverage;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut average: MovingAverage<f64> = MovingAverage::new(5);
    tracing::info!(period = average.period(), "starting sample feed");

    for tick in 0..30u32 {
        let sample = (f64::from(tick) * 0.4).sin() * 10.0 + f64::from(tick);
        let current = average.add(sample);
        tracing::info!(tick, sample, current, "sample ingested");

        // Simulate a feed slowing down and speeding up again.
        if tick == 12 {
            average.resize(10)?;
            tracing::info!(period = average.period(), "window grown");
        }
        if tick == 24 {
            average.resize(3)?;
            tracing::info!(period = average.period(), "window shrunk");
        }
    }

    tracing::info!(current = average.current(), "feed complete");
    Ok(())
}
