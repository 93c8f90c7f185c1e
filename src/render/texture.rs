//! GPU texture mirror of a chart surface
//!
//! The chart draws on the CPU. Anything that wants to show it on screen,
//! either in a panel or mapped onto a mesh, needs a texture holding the
//! same pixels. [`ChartTexture`] owns that texture and re-uploads the whole
//! surface on request.

use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::chart::{Color, StripChart, Surface};

/// Convert a chart color into an egui color
pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

/// Copy a surface into an egui image
pub fn color_image(surface: &Surface) -> ColorImage {
    let (width, height) = surface.dimensions();
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], surface.as_raw())
}

/// Texture that follows a chart's surface
pub struct ChartTexture {
    /// Debug name of the texture
    name: String,
    /// Allocated on the first upload
    handle: Option<TextureHandle>,
}

impl ChartTexture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
        }
    }

    /// Upload the chart's current pixels, allocating the texture if needed
    ///
    /// Size changes are picked up automatically.
    pub fn upload(&mut self, ctx: &egui::Context, chart: &StripChart) {
        let image = color_image(chart.surface());

        // Nearest filtering keeps one-pixel columns crisp
        match &mut self.handle {
            Some(handle) => handle.set(image, TextureOptions::NEAREST),
            None => {
                log::debug!("Allocating chart texture '{}'", self.name);
                self.handle = Some(ctx.load_texture(&self.name, image, TextureOptions::NEAREST));
            }
        }
    }

    /// Texture handle, `None` before the first upload
    pub fn handle(&self) -> Option<&TextureHandle> {
        self.handle.as_ref()
    }

    /// Release the texture
    pub fn free(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_matches_surface() {
        let mut chart = StripChart::new(4, 2, 0.0, 1.0, 1).unwrap();
        chart.update(1.0);

        let image = color_image(chart.surface());
        assert_eq!(image.size, [4, 2]);
        assert_eq!(image.pixels.len(), 8);

        // Row-major, rightmost column of both rows holds the bar
        assert_eq!(image.pixels[3], to_color32(chart.foreground()));
        assert_eq!(image.pixels[7], to_color32(chart.foreground()));
        assert_eq!(image.pixels[0], to_color32(chart.background()));
    }

    #[test]
    fn test_upload_follows_resize() {
        let ctx = egui::Context::default();
        let mut chart = StripChart::new(10, 5, 0.0, 1.0, 1).unwrap();
        let mut texture = ChartTexture::new("chart");
        assert!(texture.handle().is_none());

        texture.upload(&ctx, &chart);
        let id = texture.handle().map(|h| h.id());
        assert_eq!(texture.handle().map(|h| h.size()), Some([10, 5]));

        chart.resize(20, 8);
        texture.upload(&ctx, &chart);
        assert_eq!(texture.handle().map(|h| h.id()), id);
        assert_eq!(texture.handle().map(|h| h.size()), Some([20, 8]));

        texture.free();
        assert!(texture.handle().is_none());
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(Color::MAGENTA), Color32::from_rgb(0xe8, 0x00, 0x8a));
    }
}
