//! Settings window: field constants and variant flags
//!
//! Constants are fixed per field, so edits go into a draft and take effect
//! on "Rebuild".

use eframe::egui;
use crate::core::{Distribution, FieldConfig, RotationMode};
use crate::theme::colors;
use super::FieldApp;

impl FieldApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        let mut open = true;
        egui::Window::new("Field")
            .open(&mut open)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 32.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Preset:").color(colors::TEXT_MUTED));
                    if ui.button("Default").clicked() {
                        self.draft = FieldConfig::default();
                    }
                    if ui.button("Classic").clicked() {
                        self.draft = FieldConfig::classic();
                    }
                });

                ui.separator();
                let draft = &mut self.draft;
                ui.add(egui::Slider::new(&mut draft.point_count, 10..=1500).text("points"));
                ui.add(egui::Slider::new(&mut draft.threshold, 0.1..=5.0).text("link distance"));
                ui.add(egui::Slider::new(&mut draft.amplitude, 0.0..=0.05).text("oscillation"));
                ui.add(egui::Slider::new(&mut draft.capture_radius, 0.1..=5.0).text("capture radius"));
                ui.add(egui::Slider::new(&mut draft.influence, 0.0..=1.0).text("influence"));
                ui.add(egui::Slider::new(&mut draft.damping, 0.01..=1.0).text("damping"));

                ui.separator();
                ui.checkbox(&mut draft.oscillation, "Oscillate");
                ui.checkbox(&mut draft.pointer_influence, "Pointer attraction");

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Shape:").color(colors::TEXT_MUTED));
                    let is_sphere = draft.distribution == Distribution::Sphere;
                    if ui.selectable_label(is_sphere, "Sphere").clicked() {
                        draft.distribution = Distribution::Sphere;
                    }
                    if ui.selectable_label(!is_sphere, "Cube").clicked() {
                        draft.distribution = Distribution::Cube { extent: draft.radius * 2.0 };
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Rotation:").color(colors::TEXT_MUTED));
                    let mode = draft.rotation;
                    if ui.selectable_label(mode == RotationMode::Pointer, "Pointer").clicked() {
                        draft.rotation = RotationMode::Pointer;
                    }
                    if ui
                        .selectable_label(matches!(mode, RotationMode::Drift { .. }), "Drift")
                        .clicked()
                    {
                        draft.rotation = RotationMode::Drift { rate: 0.001 };
                    }
                    if ui.selectable_label(mode == RotationMode::Fixed, "Fixed").clicked() {
                        draft.rotation = RotationMode::Fixed;
                    }
                });

                ui.separator();
                if ui.button("Rebuild").clicked() {
                    self.rebuild();
                }
            });
        if !open {
            self.show_settings = false;
        }
    }
}
