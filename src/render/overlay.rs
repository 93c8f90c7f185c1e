//! Frame stats overlay panel
//!
//! A small panel with a text header (`FPS: 60.0`) above the scrolling
//! chart. It can float in the top-left corner above everything else, or be
//! drawn inline inside any `Ui` the caller provides.
//!
//! ## Frame hook
//!
//! The overlay does not install itself into the render loop. The host
//! calls [`StatsOverlay::on_frame`] once per rendered frame; the overlay
//! counts the frame and, once per update interval, appends a column and
//! re-uploads the texture.

use std::time::Instant;

use eframe::egui::{self, load::SizedTexture, Margin, RichText, Vec2};

use super::texture::{to_color32, ChartTexture};
use crate::chart::StripChart;
use crate::error::ChartError;
use crate::settings::StatsSettings;
use crate::stats::StatsSampler;

/// Stats panel: sampler, chart and its texture
pub struct StatsOverlay {
    /// Options the panel was last configured with
    settings: StatsSettings,
    sampler: StatsSampler,
    chart: StripChart,
    texture: ChartTexture,
    /// Physical pixels per point the chart is allocated for
    scale: f32,
    /// Whether frames are being sampled
    active: bool,
    /// Chart pixels changed since the last upload
    needs_upload: bool,
}

impl StatsOverlay {
    /// Create an inactive overlay at a scale of 1
    pub fn new(settings: StatsSettings, now: Instant) -> Result<Self, ChartError> {
        let chart = StripChart::with_config(settings.chart_config(1.0))?;
        let sampler = StatsSampler::new(settings.stats_type, settings.update_rate(), now);

        Ok(Self {
            settings,
            sampler,
            chart,
            texture: ChartTexture::new("stats_chart"),
            scale: 1.0,
            active: false,
            needs_upload: true,
        })
    }

    /// Start sampling from `now`
    pub fn activate(&mut self, now: Instant) {
        log::debug!("Stats overlay activated ({})", self.settings.stats_type);
        self.sampler.reset(now);
        self.active = true;
    }

    /// Stop sampling and release the texture
    pub fn deactivate(&mut self) {
        log::debug!("Stats overlay deactivated");
        self.active = false;
        self.texture.free();
        self.needs_upload = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply new settings
    ///
    /// The chart is reconfigured lazily: history is blanked on the next
    /// sample, not here.
    pub fn apply_settings(&mut self, settings: &StatsSettings) {
        self.sampler.stats_type = settings.stats_type;
        self.sampler.update_rate = settings.update_rate();
        self.chart.configure(&settings.chart_config(self.scale));
        self.settings = settings.clone();
        self.needs_upload = true;
    }

    /// Per-frame hook, call once for every rendered frame
    ///
    /// # Returns
    /// `true` when a new sample was appended to the chart
    pub fn on_frame(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        if !self.active {
            return false;
        }

        let scale = ctx.pixels_per_point();
        if scale != self.scale {
            log::debug!("Display scale changed from {} to {}", self.scale, scale);
            self.scale = scale;
            self.chart.configure(&self.settings.chart_config(scale));
            self.needs_upload = true;
        }

        let sampled = self.sampler.frame_into(now, &mut self.chart).is_some();
        if sampled || self.needs_upload || self.texture.handle().is_none() {
            self.texture.upload(ctx, &self.chart);
            self.needs_upload = false;
        }
        sampled
    }

    /// Blank the chart immediately
    pub fn clear(&mut self) {
        self.chart.clear();
        self.needs_upload = true;
    }

    /// Show the panel, floating or in a window depending on the settings
    pub fn show(&self, ctx: &egui::Context) {
        if self.settings.floating {
            // Upper-left corner, above everything
            egui::Area::new(egui::Id::new("stats_overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(0.0, 0.0))
                .interactable(false)
                .show(ctx, |ui| self.ui(ui));
        } else {
            egui::Window::new("Stats")
                .resizable(false)
                .show(ctx, |ui| self.ui(ui));
        }
    }

    /// Draw the panel into a caller-provided `Ui`
    pub fn ui(&self, ui: &mut egui::Ui) -> egui::Response {
        let foreground = to_color32(self.chart.foreground());
        let size = Vec2::new(self.settings.width as f32, self.settings.height as f32);

        egui::Frame::none()
            .fill(to_color32(self.chart.background()))
            .outer_margin(Margin::same(4.0))
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                egui::Frame::none().inner_margin(Margin::same(6.0)).show(ui, |ui| {
                    ui.label(RichText::new(self.sampler.text()).monospace().strong().color(foreground));
                });

                match self.texture.handle() {
                    Some(handle) => {
                        ui.add(egui::Image::from_texture(SizedTexture::new(handle.id(), size)));
                    }
                    None => {
                        ui.allocate_space(size);
                    }
                }
            })
            .response
    }

    /// Header text of the latest sample
    pub fn text(&self) -> &str {
        self.sampler.text()
    }

    pub fn chart(&self) -> &StripChart {
        &self.chart
    }

    pub fn texture(&self) -> &ChartTexture {
        &self.texture
    }

    pub fn settings(&self) -> &StatsSettings {
        &self.settings
    }
}
