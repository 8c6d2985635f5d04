use rollwin_numeric::Float;
use rollwin_ring::{RingBuffer, RingBufferError};
use thiserror::Error;

/// Errors that can occur while changing the period of a moving average.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovingAverageError {
    #[error("invalid period: {0}")]
    InvalidPeriod(#[from] RingBufferError),
}

/// Arithmetic mean over the last `period` samples, with a period that can
/// change while samples keep arriving.
///
/// The mean is maintained incrementally: Welford's update while the window
/// is still filling, and an evict-one/admit-one correction once it is full.
/// Resizing never rescans the window; shrink corrects the mean from the
/// evicted values alone.
pub struct MovingAverage<N: Float> {
    buffer: RingBuffer<N>,
    filled: usize,
    average: N,
}

impl<N: Float> MovingAverage<N> {
    /// Create a moving average over a window of `period` samples.
    ///
    /// `period` must be positive; a zero-period average panics on the
    /// first `add`.
    pub fn new(period: usize) -> Self {
        Self {
            buffer: RingBuffer::new(period),
            filled: 0,
            average: N::zero(),
        }
    }

    /// Ingest one sample and return the updated average.
    pub fn add(&mut self, value: N) -> N {
        if self.filled >= self.buffer.len() {
            self.add_full(value)
        } else {
            self.add_warmup(value)
        }
    }

    // Steady state: every element carries weight 1/capacity, so swapping
    // the evicted sample for the new one shifts the mean by their
    // difference over the capacity.
    fn add_full(&mut self, value: N) -> N {
        let evicted = self.buffer.push(value);
        self.average = self.average + (value - evicted) / N::from_count(self.buffer.len());
        self.average
    }

    // Warm-up: the window is not full yet, so the mean runs over `filled`
    // samples via Welford's incremental update.
    fn add_warmup(&mut self, value: N) -> N {
        self.buffer.push(value);
        self.filled += 1;
        self.average = self.average + (value - self.average) / N::from_count(self.filled);
        self.average
    }

    /// The current running average.
    pub fn current(&self) -> N {
        self.average
    }

    /// The window length in samples.
    pub fn period(&self) -> usize {
        self.buffer.len()
    }

    /// Samples currently counted by the average, capped at the period.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Change the window length. No-op when equal. Fails if the new period
    /// would not be positive, leaving average and fill state unchanged.
    pub fn resize(&mut self, period: usize) -> Result<(), MovingAverageError> {
        tracing::debug!(from = self.buffer.len(), to = period, "resizing moving average window");
        if period > self.buffer.len() {
            self.grow(period - self.buffer.len());
        } else if period < self.buffer.len() {
            self.shrink(self.buffer.len() - period)?;
        }

        Ok(())
    }

    /// Lengthen the window by `amount` samples.
    ///
    /// The added slots are unfilled and carry no weight, so the running
    /// average is unaffected until new samples land in them.
    pub fn grow(&mut self, amount: usize) {
        self.buffer.grow(amount);
    }

    /// Shorten the window by `amount` samples, evicting the oldest ones.
    ///
    /// Fails if the new period would not be positive, leaving average and
    /// fill state unchanged.
    pub fn shrink(&mut self, amount: usize) -> Result<(), MovingAverageError> {
        let prev_filled = self.filled;

        let removed = self.buffer.shrink(amount)?;

        if self.filled > self.buffer.len() {
            self.filled = self.buffer.len();
        }
        self.apply_evictions(&removed, prev_filled);

        Ok(())
    }

    // Reconstructs the surviving mean from the evicted values alone:
    // sum_of_all = average * prev_filled, subtract the removed values,
    // then renormalize to the new count. Evicted slots that were never
    // filled are zero-valued and cancel out.
    fn apply_evictions(&mut self, removed: &[N], prev_filled: usize) {
        if prev_filled == 0 {
            // Nothing was ever counted; keep the zero average rather than
            // dividing by a zero count.
            return;
        }

        for &value in removed {
            self.average = self.average - value / N::from_count(prev_filled);
        }

        self.average = self.average / N::from_count(self.filled) * N::from_count(prev_filled);
    }
}
