//! Chart module - the scrolling graph and its raster target
//!
//! This module provides:
//! - Paintable color type
//! - RGBA8 drawing surface
//! - Left-scrolling strip chart

mod color;
mod strip;
mod surface;

pub use color::Color;
pub use strip::{ChartConfig, StripChart};
pub use surface::Surface;
