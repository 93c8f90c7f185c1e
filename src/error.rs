//! Error types shared by the chart, the sampler and the settings

use thiserror::Error;

/// Errors that can occur while building or exporting a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid surface dimensions {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid column width {0} (must be at least 1)")]
    InvalidColumnWidth(u32),

    #[error("Invalid color '{0}' (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("Unknown stats type '{0}' (expected 'fps' or 'milliseconds')")]
    UnknownStatsType(String),

    #[error("File I/O failed: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
