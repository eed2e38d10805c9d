//! Interactive random walk viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`WalkGenerator`] built from
//! the current [`WalkConfig`], the most recent walk and ensemble, and the
//! camera used to draw them. It implements [`eframe::App`] to render and
//! control everything through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::Rng;
use walk_core::{
    Walk, WalkGenerator,
    config::{PolicyKind, WalkConfig},
    ensemble::Ensemble,
};

/// Pan/zoom mapping between plot space and screen space.
///
/// Plot coordinates are scaled by `zoom`, offset by `pan`, and centered in
/// the drawing rectangle. The y-axis points up in plot space.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Camera {
    zoom: f32,
    pan: egui::Vec2,
}

impl Camera {
    const DEFAULT: Camera = Camera {
        zoom: 3.0,
        pan: egui::Vec2::ZERO,
    };

    fn to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let c = rect.center();
        egui::pos2(
            c.x + p.x * self.zoom + self.pan.x,
            c.y - p.y * self.zoom + self.pan.y,
        )
    }

    fn to_plot(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let c = rect.center();
        Vec2::new(
            (p.x - c.x - self.pan.x) / self.zoom,
            (c.y - p.y + self.pan.y) / self.zoom,
        )
    }

    /// Zooms by `factor` while keeping the plot point under `anchor` fixed.
    fn zoom_about(&mut self, anchor: egui::Pos2, factor: f32, rect: egui::Rect) {
        let plot = self.to_plot(anchor, rect);
        self.zoom = (self.zoom * factor).clamp(0.01, 50.0);
        let moved = self.to_screen(plot, rect);
        self.pan += anchor - moved;
    }

    /// Centers the box `[min, max]` in `rect` with a small margin.
    fn frame(&mut self, min: Vec2, max: Vec2, rect: egui::Rect) {
        let size = (max - min).max(Vec2::ONE);
        let zoom = 0.9 * (rect.width() / size.x).min(rect.height() / size.y);
        self.zoom = zoom.clamp(0.01, 50.0);

        let mid = (min + max) * 0.5;
        self.pan = egui::vec2(-mid.x * self.zoom, mid.y * self.zoom);
    }
}

/// Plot-space location of walk position `index`.
///
/// Walks with two or more dimensions are projected onto their first two
/// axes. 1-D walks are drawn as position against step index.
fn plot_point(pos: &[f64], index: usize) -> Vec2 {
    match pos {
        [] => Vec2::ZERO,
        [x] => Vec2::new(index as f32, *x as f32),
        [x, y, ..] => Vec2::new(*x as f32, *y as f32),
    }
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `cfg` - Walk settings edited in the side panel.
/// - `dimension` / `use_seed` / `seed` - Editable forms of the optional
///   config fields, folded back into `cfg` by [`Viewer::apply_settings`].
/// - `generator` - Generator for the applied settings, `None` if they were
///   rejected (the reason is kept in `error`).
/// - `walk` - Last generated walk; only the first `revealed` positions are drawn.
/// - `ensemble` - Last sampled ensemble of endpoints.
/// - `running` - Whether the walk is being revealed step by step.
/// - `camera` - Pan and zoom of the central plot.
pub struct Viewer {
    cfg: WalkConfig,
    dimension: usize,
    use_seed: bool,
    seed: u64,

    generator: Option<WalkGenerator>,
    error: Option<String>,

    walk: Option<Walk>,
    ensemble: Option<Ensemble>,
    revealed: usize,

    running: bool,
    reveal_per_tick: usize,
    step_interval: f64,
    last_step_time: f64,

    camera: Camera,
    needs_framing: bool,
}

impl Viewer {
    /// Creates a viewer for `cfg` and builds its generator.
    ///
    /// Without a configured seed a random one is drawn, so that the seed
    /// shown in the side panel always reproduces the current run.
    pub fn new(cfg: WalkConfig) -> Self {
        let dimension = cfg.resolved_dimension();
        let use_seed = cfg.seed.is_some();
        let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());

        let mut viewer = Self {
            cfg,
            dimension,
            use_seed,
            seed,
            generator: None,
            error: None,
            walk: None,
            ensemble: None,
            revealed: 0,
            running: false,
            reveal_per_tick: 10,
            step_interval: 0.02,
            last_step_time: 0.0,
            camera: Camera::DEFAULT,
            needs_framing: false,
        };
        viewer.apply_settings();
        viewer
    }

    /// Rebuilds the generator from the edited settings.
    ///
    /// Fixed-dimension policies override the edited dimension. Any previous
    /// walk and ensemble are discarded.
    fn apply_settings(&mut self) {
        if let Some(fixed) = self.cfg.step_policy().fixed_dimension() {
            self.dimension = fixed;
        }
        self.cfg.dimension = Some(self.dimension);
        self.cfg.seed = self.use_seed.then_some(self.seed);

        match WalkGenerator::from_config(&self.cfg) {
            Ok(g) => {
                self.generator = Some(g);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected walk settings");
                self.generator = None;
                self.error = Some(e.to_string());
            }
        }

        self.walk = None;
        self.ensemble = None;
        self.revealed = 0;
        self.running = false;
    }

    /// Draws a new walk and shows all of it.
    fn generate_walk(&mut self) {
        let Some(g) = self.generator.as_mut() else {
            return;
        };
        let walk = g.get_walk(self.cfg.steps);
        self.revealed = walk.len();
        self.walk = Some(walk);
        self.running = false;
        self.needs_framing = true;
    }

    /// Draws a new walk and starts revealing it from the origin.
    fn start_animation(&mut self) {
        self.generate_walk();
        if self.walk.is_some() {
            self.revealed = 1;
            self.running = true;
        }
    }

    /// Reveals the next `reveal_per_tick` positions of the current walk.
    fn advance(&mut self) {
        let Some(walk) = &self.walk else {
            self.running = false;
            return;
        };
        self.revealed = (self.revealed + self.reveal_per_tick).min(walk.len());
        if self.revealed == walk.len() {
            self.running = false;
        }
    }

    fn sample_ensemble(&mut self) {
        let Some(g) = self.generator.as_mut() else {
            return;
        };
        self.ensemble = Some(Ensemble::sample(g, self.cfg.trials, self.cfg.steps));
        self.needs_framing = true;
    }

    /// Clears the plot and restores the default camera, keeping the settings.
    fn reset(&mut self) {
        self.walk = None;
        self.ensemble = None;
        self.revealed = 0;
        self.running = false;
        self.camera = Camera::DEFAULT;
        self.needs_framing = false;
    }

    /// Bounding box of everything currently drawn, in plot space.
    fn plot_bounds(&self) -> Option<(Vec2, Vec2)> {
        let walk_points = self
            .walk
            .iter()
            .flat_map(|w| w.positions().iter().take(self.revealed).enumerate())
            .map(|(i, p)| plot_point(p, i));
        let endpoint_points = self.ensemble.iter().flat_map(|ens| {
            ens.endpoints
                .iter()
                .map(move |e| plot_point(e, ens.steps))
        });

        walk_points
            .chain(endpoint_points)
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel (walk, animation, ensemble and view controls).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let ready = self.generator.is_some();

                if ui.add_enabled(ready, egui::Button::new("Walk")).clicked() {
                    self.generate_walk();
                }

                let animate_label = if self.running { "⏸ Pause" } else { "▶ Animate" };
                if ui.add_enabled(ready, egui::Button::new(animate_label)).clicked() {
                    if self.running {
                        self.running = false;
                    } else {
                        self.start_animation();
                    }
                }

                if ui.add_enabled(ready, egui::Button::new("Ensemble")).clicked() {
                    self.sample_ensemble();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                if ui.button("Fit view").clicked() {
                    self.needs_framing = true;
                }
                ui.add(
                    egui::Slider::new(&mut self.camera.zoom, 0.01..=50.0)
                        .logarithmic(true)
                        .text("Zoom"),
                );
            });
        });
    }

    /// Builds the bottom status bar (policy, progress, displacement statistics).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(ens) = &self.ensemble {
                    if let (Some(mean), Some(rms)) = (ens.mean_distance(), ens.rms_distance()) {
                        let root_n = (ens.steps as f64).sqrt();
                        ui.label(format!("rms/√N = {:.3}", rms / root_n.max(1.0)));
                        ui.label(format!("rms = {rms:.3}"));
                        ui.label(format!("mean distance = {mean:.3}"));
                    }
                    ui.label(format!("trials = {}", ens.len()));
                    ui.separator();
                }
                if let Some(walk) = &self.walk {
                    ui.label(format!("distance = {:.3}", walk.distance()));
                    ui.label(format!("shown = {}/{}", self.revealed, walk.len()));
                    ui.separator();
                }
                ui.label(format!(
                    "{} walk, D = {}",
                    self.cfg.policy.label(),
                    self.dimension
                ));
            });
        });
    }

    /// Builds the right-hand panel for walk settings.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Walk");

                ui.separator();
                egui::ComboBox::from_label("policy")
                    .selected_text(self.cfg.policy.label())
                    .show_ui(ui, |ui| {
                        for kind in PolicyKind::ALL {
                            ui.selectable_value(&mut self.cfg.policy, kind, kind.label());
                        }
                    });

                let fixed = self.cfg.step_policy().fixed_dimension().is_some();
                ui.add_enabled_ui(!fixed, |ui| {
                    Self::labeled_drag_usize(ui, "dimension:", &mut self.dimension, 1..=16, 0.1);
                });

                if self.cfg.policy == PolicyKind::Pareto {
                    ui.horizontal(|ui| {
                        ui.label("nu:");
                        ui.add(
                            egui::DragValue::new(&mut self.cfg.nu)
                                .range(0.05..=10.0)
                                .speed(0.01),
                        );
                    });
                }

                ui.separator();
                ui.label("Sampling");
                Self::labeled_drag_usize(ui, "steps:", &mut self.cfg.steps, 0..=100_000, 10.0);
                Self::labeled_drag_usize(ui, "trials:", &mut self.cfg.trials, 1..=20_000, 10.0);
                Self::labeled_drag_usize(
                    ui,
                    "reveal/tick:",
                    &mut self.reveal_per_tick,
                    1..=1000,
                    1.0,
                );

                ui.separator();
                ui.checkbox(&mut self.use_seed, "fixed seed");
                ui.add_enabled_ui(self.use_seed, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("seed:");
                        ui.add(egui::DragValue::new(&mut self.seed));
                    });
                });

                ui.separator();
                if ui.button("Apply").clicked() {
                    self.apply_settings();
                }
                if ui.button("Reset settings to default").clicked() {
                    self.cfg = WalkConfig::default();
                    self.dimension = self.cfg.resolved_dimension();
                    self.apply_settings();
                }

                if let Some(err) = &self.error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
    }

    /// Builds the central panel where the walk and ensemble are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            if response.dragged() {
                self.camera.pan += response.drag_delta();
            }

            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let anchor = response.hover_pos().unwrap_or(rect.center());
                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.camera.zoom_about(anchor, factor, rect);
            }

            if self.needs_framing {
                if let Some((lo, hi)) = self.plot_bounds() {
                    self.camera.frame(lo, hi, rect);
                }
                self.needs_framing = false;
            }

            let camera = self.camera;

            // Axes through the origin.
            let axis = egui::Stroke::new(1.0, egui::Color32::from_gray(70));
            let origin = camera.to_screen(Vec2::ZERO, rect);
            painter.hline(rect.x_range(), origin.y, axis);
            painter.vline(origin.x, rect.y_range(), axis);

            // Ensemble endpoints.
            if let Some(ens) = &self.ensemble {
                for e in &ens.endpoints {
                    let p = camera.to_screen(plot_point(e, ens.steps), rect);
                    painter.circle_filled(p, 1.5, egui::Color32::LIGHT_RED);
                }
            }

            // Trajectory up to the revealed position.
            if let Some(walk) = &self.walk {
                let points: Vec<egui::Pos2> = walk
                    .positions()
                    .iter()
                    .take(self.revealed)
                    .enumerate()
                    .map(|(i, p)| camera.to_screen(plot_point(p, i), rect))
                    .collect();

                if let Some(&head) = points.last() {
                    painter.add(egui::Shape::line(
                        points,
                        egui::Stroke::new(1.0, egui::Color32::LIGHT_GREEN),
                    ));
                    painter.circle_filled(head, 3.0, egui::Color32::YELLOW);
                }
                painter.circle_filled(origin, 3.0, egui::Color32::LIGHT_BLUE);
            }

            if self.running {
                let now = ctx.input(|i| i.time);
                if now - self.last_step_time >= self.step_interval {
                    self.advance();
                    self.last_step_time = now;
                }
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
