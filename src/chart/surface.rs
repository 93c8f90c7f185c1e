//! Raster drawing surface
//!
//! A fixed-size RGBA8 pixel buffer with the two primitives the strip
//! chart needs: solid rectangle fills and an in-place sub-rectangle copy.
//!
//! ## Coordinate System
//!
//! Origin is the top-left pixel, X grows right and Y grows down.
//! Rectangles are given as `(x, y, w, h)` and are clipped to the surface,
//! so callers may pass rectangles that are partly or fully outside it.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::color::Color;
use crate::error::ChartError;

/// Bytes per RGBA8 pixel
const BPP: usize = 4;

/// Fixed-size RGBA8 raster
#[derive(Clone, Debug)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a surface filled with a single color
    ///
    /// Dimensions must be non-zero, `StripChart` validates them first.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, fill.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get `(width, height)` in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Fill the whole surface with one color
    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_array();
        for px in self.image.chunks_exact_mut(BPP) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the surface
    ///
    /// Rectangles with a non-positive width or height draw nothing.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let (width, height) = (self.width() as i64, self.height() as i64);

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(width);
        let y1 = y.saturating_add(h).min(height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let bytes = color.to_array();
        let stride = width as usize * BPP;
        let buf: &mut [u8] = &mut self.image;

        for row in y0 as usize..y1 as usize {
            let start = row * stride + x0 as usize * BPP;
            let end = row * stride + x1 as usize * BPP;
            for px in buf[start..end].chunks_exact_mut(BPP) {
                px.copy_from_slice(&bytes);
            }
        }
    }

    /// Copy a sub-rectangle of the surface onto another location of itself
    ///
    /// Source and destination may overlap. Parts of either rectangle that
    /// fall outside the surface are skipped.
    pub fn copy_within(&mut self, src_x: i64, src_y: i64, w: i64, h: i64, dst_x: i64, dst_y: i64) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        let (mut sx, mut sy, mut dx, mut dy, mut w, mut h) = (src_x, src_y, dst_x, dst_y, w, h);

        // Trim the leading edges that are off-surface on either side
        let left = (-sx).max(-dx).max(0);
        sx += left;
        dx += left;
        w -= left;
        let top = (-sy).max(-dy).max(0);
        sy += top;
        dy += top;
        h -= top;

        w = w.min(width - sx).min(width - dx);
        h = h.min(height - sy).min(height - dy);
        if w <= 0 || h <= 0 {
            return;
        }

        let stride = width as usize * BPP;
        let row_len = w as usize * BPP;
        let buf: &mut [u8] = &mut self.image;

        let copy_row = |buf: &mut [u8], row: i64| {
            let src = (sy + row) as usize * stride + sx as usize * BPP;
            let dst = (dy + row) as usize * stride + dx as usize * BPP;
            buf.copy_within(src..src + row_len, dst);
        };

        // Walk rows away from the destination so overlapping rows are read
        // before they are overwritten
        if dy > sy {
            for row in (0..h).rev() {
                copy_row(&mut *buf, row);
            }
        } else {
            for row in 0..h {
                copy_row(&mut *buf, row);
            }
        }
    }

    /// Color at a pixel, `None` when outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|px| Color::from(*px))
    }

    /// Raw RGBA8 bytes, row-major, no padding
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the backing image
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the current content as a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();
        self.image.save_with_format(path, ImageFormat::Png)?;
        log::info!("Saved chart surface to {}", path.display());
        Ok(())
    }
}
