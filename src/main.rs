//! stats-graph - frame timing overlay demo
//!
//! Runs an egui window with the stats overlay enabled, plus a settings
//! panel to tweak every option live. A simulated per-frame workload makes
//! the graph move.

use std::time::{Duration, Instant};

use eframe::egui;

use stats_graph::chart::Color;
use stats_graph::render::StatsOverlay;
use stats_graph::settings::StatsSettings;
use stats_graph::stats::StatsType;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting stats-graph");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("stats-graph"),
        ..Default::default()
    };

    eframe::run_native(
        "stats-graph",
        options,
        Box::new(|cc| Ok(Box::new(StatsApp::new(cc)?))),
    )
}

/// Color presets as (name, background, foreground)
const PRESETS: &[(&str, Color, Color)] = &[
    ("Magenta", Color::BLACK, Color::MAGENTA),
    ("Green", Color::rgb(10, 20, 10), Color::rgb(100, 255, 100)),
    ("Amber", Color::rgb(20, 15, 5), Color::rgb(255, 176, 0)),
    ("Blue", Color::rgb(10, 10, 20), Color::rgb(100, 150, 255)),
];

/// Main application state
struct StatsApp {
    overlay: StatsOverlay,
    settings: StatsSettings,
    settings_changed: bool,

    /// Extra time spent per frame to simulate load
    workload_ms: f32,
    /// Last export status line
    status: String,
}

impl StatsApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, stats_graph::ChartError> {
        let settings = StatsSettings::load();
        let now = Instant::now();

        let mut overlay = StatsOverlay::new(settings.clone(), now)?;
        overlay.activate(now);

        Ok(Self {
            overlay,
            settings,
            settings_changed: false,
            workload_ms: 0.0,
            status: String::new(),
        })
    }

    fn export_png(&mut self) {
        let path = std::env::temp_dir().join("stats-graph.png");
        self.status = match self.overlay.chart().surface().save_png(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                log::warn!("Export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        let settings = &mut self.settings;
        let mut changed = false;

        ui.heading("Stats");
        ui.separator();

        egui::ComboBox::from_label("Type")
            .selected_text(settings.stats_type.name())
            .show_ui(ui, |ui| {
                for stats_type in StatsType::all() {
                    changed |= ui
                        .selectable_value(&mut settings.stats_type, *stats_type, stats_type.name())
                        .clicked();
                }
            });

        changed |= ui
            .add(egui::Slider::new(&mut settings.update_rate_ms, 50.0..=2000.0).text("Update rate (ms)"))
            .changed();

        ui.collapsing("Range", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut settings.min_y, 0.0..=200.0).text("Min"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.max_y, 1.0..=240.0).text("Max"))
                .changed();
        });

        ui.collapsing("Layout", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut settings.width, 16..=400).text("Width"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.height, 16..=200).text("Height"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.column_width, 1..=8).text("Column width"))
                .changed();
            changed |= ui.checkbox(&mut settings.floating, "Float in corner").changed();
        });

        ui.collapsing("Color", |ui| {
            ui.horizontal(|ui| {
                for (name, background, foreground) in PRESETS {
                    if ui.button(*name).clicked() {
                        settings.background = *background;
                        settings.foreground = *foreground;
                        changed = true;
                    }
                }
            });
        });

        ui.separator();

        ui.add(egui::Slider::new(&mut self.workload_ms, 0.0..=50.0).text("Simulated load (ms)"));

        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.overlay.clear();
            }
            if ui.button("Export PNG").clicked() {
                self.export_png();
            }
            if ui.button("Save settings").clicked() {
                self.settings.save();
            }
        });

        if !self.status.is_empty() {
            ui.small(&self.status);
        }

        self.settings_changed |= changed;
    }
}

impl eframe::App for StatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if self.workload_ms > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(self.workload_ms / 1000.0));
        }

        if self.settings_changed {
            self.overlay.apply_settings(&self.settings);
            self.settings_changed = false;
        }

        self.overlay.on_frame(ctx, Instant::now());

        egui::SidePanel::right("settings_panel")
            .min_width(220.0)
            .show(ctx, |ui| self.settings_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.small(format!(
                    "{} | {}x{} px",
                    self.overlay.settings().stats_type,
                    self.overlay.chart().width(),
                    self.overlay.chart().height(),
                ));
            });
        });

        self.overlay.show(ctx);
    }
}

impl Drop for StatsApp {
    fn drop(&mut self) {
        self.overlay.deactivate();
        self.settings.save();
    }
}
