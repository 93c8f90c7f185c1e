//! Frame timing sampler
//!
//! Counts rendered frames and, once per update interval, turns the count
//! into a frame rate or a frame time. The result is averaged over the whole
//! interval, so short spikes are smoothed out.
//!
//! The sampler never reads the clock itself: the render loop passes the
//! current [`Instant`] on every frame. This keeps it independent from any
//! particular windowing backend and makes it testable without sleeping.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::chart::StripChart;
use crate::error::ChartError;

/// Default interval between two chart columns
pub const DEFAULT_UPDATE_RATE: Duration = Duration::from_millis(500);

/// Which timing metric is plotted
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsType {
    /// Frames per second
    #[default]
    Fps,
    /// Frame time, in milliseconds
    Milliseconds,
}

impl StatsType {
    /// Get all stats types
    pub fn all() -> &'static [StatsType] {
        &[StatsType::Fps, StatsType::Milliseconds]
    }

    /// Get the display name of this stats type
    pub fn name(&self) -> &'static str {
        match self {
            StatsType::Fps => "FPS",
            StatsType::Milliseconds => "Milliseconds",
        }
    }

    /// Compute the metric for `frames` frames rendered over `elapsed`
    pub fn compute(&self, frames: u32, elapsed: Duration) -> f32 {
        let secs = elapsed.as_secs_f32();
        match self {
            StatsType::Fps => frames as f32 / secs,
            StatsType::Milliseconds => secs * 1000.0 / frames as f32,
        }
    }

    /// Header text for a computed value
    pub fn label(&self, value: f32) -> String {
        match self {
            StatsType::Fps => format!("FPS: {:.1}", value),
            StatsType::Milliseconds => format!("{:.1} milliseconds", value),
        }
    }
}

impl FromStr for StatsType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fps" => Ok(StatsType::Fps),
            "milliseconds" | "ms" => Ok(StatsType::Milliseconds),
            _ => Err(ChartError::UnknownStatsType(s.to_string())),
        }
    }
}

impl fmt::Display for StatsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One averaged measurement
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub value: f32,
    pub text: String,
}

/// Averages frame timings over a fixed interval
#[derive(Clone, Debug)]
pub struct StatsSampler {
    /// Metric to compute
    pub stats_type: StatsType,
    /// Interval over which frames are averaged
    pub update_rate: Duration,

    /// Start of the current interval
    start: Instant,
    /// Frames counted since `start`
    frames: u32,
    /// Last reported sample
    last: Option<Sample>,
}

impl StatsSampler {
    pub fn new(stats_type: StatsType, update_rate: Duration, now: Instant) -> Self {
        Self {
            stats_type,
            update_rate,
            start: now,
            frames: 0,
            last: None,
        }
    }

    /// Restart the interval from `now`, dropping counted frames
    pub fn reset(&mut self, now: Instant) {
        self.start = now;
        self.frames = 0;
    }

    /// Count one rendered frame
    ///
    /// # Returns
    /// A sample once `update_rate` has elapsed since the interval started
    pub fn frame(&mut self, now: Instant) -> Option<Sample> {
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.update_rate || elapsed.is_zero() {
            return None;
        }

        let value = self.stats_type.compute(self.frames, elapsed);
        let sample = Sample {
            value,
            text: self.stats_type.label(value),
        };
        log::trace!("{} frames in {:?}: {}", self.frames, elapsed, sample.text);

        self.reset(now);
        self.last = Some(sample.clone());
        Some(sample)
    }

    /// Count a frame and append the sample to a chart when one is produced
    ///
    /// # Returns
    /// The header text when the chart received a new column
    pub fn frame_into(&mut self, now: Instant, chart: &mut StripChart) -> Option<&str> {
        let sample = self.frame(now)?;
        chart.update(sample.value);
        Some(self.text())
    }

    /// Most recent sample, if any
    pub fn last(&self) -> Option<&Sample> {
        self.last.as_ref()
    }

    /// Header text of the most recent sample, empty before the first one
    pub fn text(&self) -> &str {
        self.last.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_no_sample_before_interval() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Fps, ms(500), t0);

        for i in 1..10 {
            assert!(sampler.frame(t0 + ms(i * 40)).is_none());
        }
        assert_eq!(sampler.text(), "");
    }

    #[test]
    fn test_fps() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Fps, ms(500), t0);

        // 30 frames over half a second
        for i in 1..30 {
            assert!(sampler.frame(t0 + ms(i * 500 / 30)).is_none());
        }
        let sample = sampler.frame(t0 + ms(500)).unwrap();

        assert!((sample.value - 60.0).abs() < 1e-3);
        assert_eq!(sample.text, "FPS: 60.0");
        assert_eq!(sampler.text(), "FPS: 60.0");
    }

    #[test]
    fn test_milliseconds() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Milliseconds, ms(100), t0);

        for i in 1..4 {
            sampler.frame(t0 + ms(i * 25));
        }
        let sample = sampler.frame(t0 + ms(100)).unwrap();

        assert!((sample.value - 25.0).abs() < 1e-3);
        assert_eq!(sample.text, "25.0 milliseconds");
    }

    #[test]
    fn test_counters_reset_after_report() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Fps, ms(1000), t0);

        for i in 1..=10 {
            sampler.frame(t0 + ms(i * 100));
        }
        assert!(sampler.last().is_some());

        // Next interval starts at t0 + 1s with a fresh frame count
        let t1 = t0 + ms(1000);
        for i in 1..4 {
            assert!(sampler.frame(t1 + ms(i * 250)).is_none());
        }
        let sample = sampler.frame(t1 + ms(1000)).unwrap();
        assert!((sample.value - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_drops_frames() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Fps, ms(100), t0);

        sampler.frame(t0 + ms(50));
        sampler.frame(t0 + ms(60));
        sampler.reset(t0 + ms(80));

        let sample = sampler.frame(t0 + ms(180)).unwrap();
        assert!((sample.value - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_into_feeds_chart() {
        let t0 = Instant::now();
        let mut sampler = StatsSampler::new(StatsType::Fps, ms(100), t0);
        let mut chart = StripChart::new(10, 10, 0.0, 20.0, 1).unwrap();

        assert_eq!(sampler.frame_into(t0 + ms(50), &mut chart), None);
        assert_eq!(sampler.frame_into(t0 + ms(100), &mut chart), Some("FPS: 20.0"));

        // 2 frames in 100ms = 20 FPS, a full bar
        let fg = chart.foreground();
        assert!((0..10).all(|y| chart.surface().pixel(9, y) == Some(fg)));
    }

    #[test]
    fn test_stats_type_parse() {
        assert_eq!("fps".parse::<StatsType>().unwrap(), StatsType::Fps);
        assert_eq!("Milliseconds".parse::<StatsType>().unwrap(), StatsType::Milliseconds);
        assert!(matches!(
            "frames".parse::<StatsType>(),
            Err(ChartError::UnknownStatsType(_))
        ));
    }

    #[test]
    fn test_stats_type_serde() {
        let json = serde_json::to_string(&StatsType::Milliseconds).unwrap();
        assert_eq!(json, "\"milliseconds\"");
    }
}
