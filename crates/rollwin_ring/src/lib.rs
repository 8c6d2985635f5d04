//! Resizable ring buffer
//!
//! A circular container with a single rotating cursor that can grow and
//! shrink in place while preserving the logical (oldest-to-newest) order
//! of its elements. Fill tracking is deliberately left to the consumer;
//! `len()` reports capacity, not how many slots hold real data.

mod ring_buffer;

pub use ring_buffer::{RingBuffer, RingBufferError};
