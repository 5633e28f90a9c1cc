//! Field painting (CPU path) and the corner overlay

use eframe::egui;
use glam::Vec2;

use super::FieldApp;
use crate::core::{FrameInput, PointerState};
use crate::theme::{colors, link_color, node_color};

/// Node radius in pixels at the origin's depth
const NODE_RADIUS: f32 = 1.5;

#[inline]
fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

impl FieldApp {
    /// Step the field for this frame and draw it into the remaining space.
    pub(crate) fn render_field(&mut self, ui: &mut egui::Ui, pointer: Option<PointerState>) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
        let rect = response.rect;

        // Zero-sized until the canvas has been laid out
        let surface_ready = rect.width() > 0.0 && rect.height() > 0.0;
        if !self.field.update(&FrameInput { pointer, surface_ready }) {
            return;
        }

        let rotation = self.field.rotation();
        let origin = Vec2::new(rect.min.x, rect.min.y);
        let size = Vec2::new(rect.width(), rect.height());

        let link_stroke = egui::Stroke::new(1.0, link_color());
        for segment in self.field.segments() {
            let start = self.projection.project(segment.start(), rotation, origin, size);
            let end = self.projection.project(segment.end(), rotation, origin, size);
            if let (Some(a), Some(b)) = (start, end) {
                painter.line_segment([to_pos2(a.pos), to_pos2(b.pos)], link_stroke);
            }
        }

        for &point in self.field.points() {
            if let Some(p) = self.projection.project(point, rotation, origin, size) {
                painter.circle_filled(
                    to_pos2(p.pos),
                    (NODE_RADIUS * p.scale).max(0.5),
                    node_color(p.scale),
                );
            }
        }
    }

    /// FPS readout and settings toggle, top-right.
    pub(crate) fn render_overlay(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("overlay"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{:.0} fps  {} nodes  {} links",
                            self.fps_counter.fps(),
                            self.field.points().len(),
                            self.field.edges().len()
                        ))
                        .color(colors::TEXT_MUTED)
                        .small(),
                    );
                    let label = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
                    if ui.small_button(label).clicked() {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
    }
}
