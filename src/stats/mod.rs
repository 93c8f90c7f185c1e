//! Stats module - frame timing measurement
//!
//! This module provides:
//! - FPS / milliseconds metric selection
//! - Interval sampler that feeds a strip chart

mod sampler;

pub use sampler::{Sample, StatsSampler, StatsType, DEFAULT_UPDATE_RATE};
