//! Render module - UI components for showing the chart
//!
//! This module provides:
//! - Texture mirror of a chart surface, for panels or meshes
//! - Stats overlay panel with header text

mod overlay;
mod texture;

pub use overlay::StatsOverlay;
pub use texture::{color_image, to_color32, ChartTexture};
