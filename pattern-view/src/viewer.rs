//! Interactive triangle pattern viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the animation state
//! (live triangles, configuration, RNG) and implements [`eframe::App`]
//! to run the per-frame simulation pass and handle click spawning.

use eframe::App;
use glam::Vec2;
use pattern_core::{config::Config, connect, field::TriangleField};
use rand::rng;

/// Stroke width for triangle outlines and connection lines alike.
const STROKE_WIDTH: f32 = 1.0;

/// Converts a surface-space position to screen-space.
///
/// Surface coordinates have their origin at the top-left corner of the
/// drawing rect; there is no scaling, only the panel offset.
fn surface_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// Converts a screen-space position back to surface-space.
///
/// This is the exact inverse of [`surface_to_screen`].
fn screen_to_surface(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
}

/// The blue stroke color at the given opacity.
///
/// Opacity can sit slightly below zero for one frame between fading and
/// cleanup; the alpha clamps to fully transparent there.
fn stroke_color(alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(0, 0, 255, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The animation core: [`TriangleField`] and [`Config`].
/// - eframe/egui callbacks for drawing and click input.
///
/// The per-frame update is:
/// 1. Spawn a triangle if the surface was clicked (evicting the oldest
///    at the population cap).
/// 2. Run [`Viewer::frame_pass`]: per triangle, in collection order,
///    move, fade, draw the outline, then draw connection lines to every
///    later triangle; finally sweep out fully faded triangles.
/// 3. Request the next repaint, unconditionally.
///
/// ### Fields
/// - `field` - The live triangle collection.
/// - `cfg` - Animation constants (side length, cap, fade timing).
/// - `rng` - Random number generator used for spawn velocities.
pub struct Viewer {
    field: TriangleField,
    cfg: Config,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a new viewer with an empty triangle field and the default
    /// animation constants.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to `eframe::run_native`.
    pub fn new() -> Self {
        Self {
            field: TriangleField::new(),
            cfg: Config::default(),
            rng: rng(),
        }
    }

    /// Handles a click at the given surface position by spawning a triangle.
    ///
    /// Population capping and the fast-fade flag are decided by
    /// [`TriangleField::spawn`]; any position is accepted, including one
    /// outside the current surface bounds.
    fn handle_click(&mut self, pos: Vec2, now_ms: f64) {
        self.field.spawn(pos, now_ms, &self.cfg, &mut self.rng);
        log::debug!(
            "spawned triangle at ({:.1}, {:.1}), live = {}",
            pos.x,
            pos.y,
            self.field.triangles.len()
        );
    }

    /// Runs one simulation frame over the live collection and draws it.
    ///
    /// Each triangle is processed fully before the next one: it moves,
    /// fades, gets its outline stroked, and is connected to every later
    /// triangle in collection order. Connection lines therefore see the
    /// later triangle's position and opacity from before its own update
    /// this frame. After the pass, fully faded triangles are swept out.
    fn frame_pass(&mut self, painter: &egui::Painter, rect: egui::Rect, now_ms: f64) {
        let bounds = Vec2::new(rect.width(), rect.height());
        let count = self.field.triangles.len();

        for i in 0..count {
            self.field.triangles[i].advance(bounds);
            self.field.triangles[i].update_opacity(now_ms, &self.cfg);

            let tri = self.field.triangles[i];
            let outline: Vec<egui::Pos2> = tri
                .vertices()
                .iter()
                .map(|&v| surface_to_screen(v, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                outline,
                egui::Stroke::new(STROKE_WIDTH, stroke_color(tri.opacity)),
            ));

            // Each unordered pair is connected exactly once per frame.
            for j in (i + 1)..count {
                for seg in connect::segments(&tri, &self.field.triangles[j]) {
                    painter.line_segment(
                        [
                            surface_to_screen(seg.from, rect),
                            surface_to_screen(seg.to, rect),
                        ],
                        egui::Stroke::new(STROKE_WIDTH, stroke_color(seg.alpha)),
                    );
                }
            }
        }

        self.field.sweep_faded();
    }

    /// Builds the bottom status bar (live count, fast-fading count).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "fast-fading = {}",
                    self.field.triangles.iter().filter(|t| t.fast_fade).count()
                ));
                ui.label(format!("triangles = {}", self.field.triangles.len()));
            });
        });
    }

    /// Builds the central panel where the animation is drawn and clicked.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let now_ms = ctx.input(|i| i.time) * 1000.0;

                // Handle click-based spawning.
                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    self.handle_click(screen_to_surface(pointer, rect), now_ms);
                }

                self.frame_pass(&painter, rect, now_ms);

                // Keep animating for the life of the window.
                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
