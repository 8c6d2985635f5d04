//! Streaming statistics over resizable windows
//!
//! Currently a single statistic: an arithmetic moving average whose window
//! length can change at runtime without invalidating the running value.
//! The intended use is real time data feeds where the sampling rate, and
//! with it the sensible window length, varies while data keeps arriving.

mod moving_average;

pub use moving_average::{MovingAverage, MovingAverageError};
