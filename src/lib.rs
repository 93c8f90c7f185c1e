//! stats-graph - scrolling frame-time graph
//!
//! Samples the frame rate (or frame time) on a fixed interval and draws
//! it as a left-scrolling bar chart on a small raster surface. The surface
//! can be shown as an egui overlay or uploaded as a texture.
//!
//! ```
//! use stats_graph::chart::StripChart;
//!
//! let mut chart = StripChart::new(10, 10, 0.0, 100.0, 1)?;
//! chart.update(50.0);
//! assert_eq!(chart.surface().dimensions(), (10, 10));
//! # Ok::<(), stats_graph::error::ChartError>(())
//! ```

pub mod chart;
pub mod error;
pub mod render;
pub mod settings;
pub mod stats;

pub use chart::{ChartConfig, Color, StripChart, Surface};
pub use error::ChartError;
pub use render::StatsOverlay;
pub use settings::StatsSettings;
pub use stats::{StatsSampler, StatsType};
