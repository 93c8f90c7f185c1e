//! Scrolling strip chart
//!
//! Renders a stream of scalar samples as a left-scrolling bar chart on a
//! fixed-size [`Surface`].
//!
//! ## How it works
//!
//! Every call to [`StripChart::update`] appends one column on the right:
//! - The existing content is copied one column to the left, the oldest
//!   column falls off the left edge
//! - The freed column on the right is cleared to the background
//! - A bar is drawn growing up from the bottom edge, its height being the
//!   sample normalized against `[min, max]`
//!
//! Only one column is touched per sample, so drawing cost does not depend
//! on how much history is visible.
//!
//! Reconfiguring the chart (size, range, colors, column width) does not
//! redraw anything. It marks the chart dirty and the next update blanks the
//! surface before drawing, so a burst of option changes costs one clear.

use super::color::Color;
use super::surface::Surface;
use crate::error::ChartError;

/// Chart construction options
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Value drawn as an empty column
    pub min: f32,
    /// Value drawn as a full-height column
    pub max: f32,
    /// Pixels consumed per sample
    pub column_width: u32,
    /// Background color
    pub background: Color,
    /// Bar color
    pub foreground: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            min: 0.0,
            max: 120.0,
            column_width: 1,
            background: Color::BLACK,
            foreground: Color::MAGENTA,
        }
    }
}

/// Left-scrolling bar chart of recent samples
#[derive(Clone, Debug)]
pub struct StripChart {
    surface: Surface,
    background: Color,
    foreground: Color,
    column_width: u32,
    min: f32,
    max: f32,
    /// Surface content is stale and must be cleared before the next draw
    dirty: bool,
}

impl StripChart {
    /// Create a chart with default colors
    ///
    /// # Arguments
    /// * `width`, `height` - Surface size in pixels, both at least 1
    /// * `min`, `max` - Normalization range
    /// * `column_width` - Pixels per sample, at least 1
    pub fn new(width: u32, height: u32, min: f32, max: f32, column_width: u32) -> Result<Self, ChartError> {
        Self::with_config(ChartConfig {
            width,
            height,
            min,
            max,
            column_width,
            ..ChartConfig::default()
        })
    }

    /// Create a chart from a full set of options
    pub fn with_config(config: ChartConfig) -> Result<Self, ChartError> {
        if config.width == 0 || config.height == 0 {
            return Err(ChartError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        if config.column_width == 0 {
            return Err(ChartError::InvalidColumnWidth(config.column_width));
        }

        Ok(Self {
            surface: Surface::new(config.width, config.height, config.background),
            background: config.background,
            foreground: config.foreground,
            column_width: config.column_width,
            min: config.min,
            max: config.max,
            dirty: false,
        })
    }

    /// Append one sample as a new rightmost column
    pub fn update(&mut self, value: f32) {
        if self.dirty {
            self.clear();
        }

        let (width, height) = self.surface.dimensions();
        let (width, height) = (width as i64, height as i64);
        let column = self.column_width as i64;

        // Narrower than one column: keep redrawing column 0
        let shift_width = width - column;
        let x = if shift_width > 0 {
            self.surface.copy_within(column, 0, shift_width, height, 0, 0);
            shift_width
        } else {
            0
        };

        self.surface.fill_rect(x, 0, column, height, self.background);

        // Anything outside [0, H] is clipped by the surface anyway
        let bar_height = (self.normalize(value) * height as f32)
            .round()
            .clamp(0.0, height as f32) as i64;
        self.surface
            .fill_rect(x, height - bar_height, column, bar_height, self.foreground);
    }

    /// Map a value to `[0, 1]` over the range, without clamping
    ///
    /// An empty or non-finite range, or a non-finite value, maps to 0.
    pub fn normalize(&self, value: f32) -> f32 {
        let t = (value - self.min) / (self.max - self.min);
        if t.is_finite() {
            t
        } else {
            0.0
        }
    }

    /// Blank the whole surface immediately
    pub fn clear(&mut self) {
        self.surface.fill(self.background);
        self.dirty = false;
    }

    /// Reallocate the surface, content is dropped on the next update
    ///
    /// Zero dimensions are clamped to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Chart resize to {}x{} clamped to at least 1x1", width, height);
        }
        let (width, height) = (width.max(1), height.max(1));

        log::debug!("Chart resized to {}x{}", width, height);
        self.surface = Surface::new(width, height, self.background);
        self.dirty = true;
    }

    /// Change the normalization range
    pub fn set_range(&mut self, min: f32, max: f32) {
        if max <= min {
            log::debug!("Chart range [{}, {}] is empty or inverted", min, max);
        }
        self.min = min;
        self.max = max;
        self.dirty = true;
    }

    /// Change the colors used for future draws
    pub fn set_colors(&mut self, background: Color, foreground: Color) {
        self.background = background;
        self.foreground = foreground;
        self.dirty = true;
    }

    /// Change how many pixels each sample occupies, clamped to 1
    pub fn set_column_width(&mut self, column_width: u32) {
        self.column_width = column_width.max(1);
        self.dirty = true;
    }

    /// Apply every option at once
    ///
    /// Only options that differ from the current ones are applied, so an
    /// unchanged config keeps the history.
    pub fn configure(&mut self, config: &ChartConfig) {
        if self.surface.dimensions() != (config.width, config.height) {
            self.resize(config.width, config.height);
        }
        if self.range() != (config.min, config.max) {
            self.set_range(config.min, config.max);
        }
        if (self.background, self.foreground) != (config.background, config.foreground) {
            self.set_colors(config.background, config.foreground);
        }
        if self.column_width != config.column_width.max(1) {
            self.set_column_width(config.column_width);
        }
    }

    /// Current raster content
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Normalization range as `(min, max)`
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn column_width(&self) -> u32 {
        self.column_width
    }

    /// Number of samples visible at once
    pub fn capacity(&self) -> u32 {
        (self.width() / self.column_width).max(1)
    }

    /// Whether the next update will blank the surface first
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
