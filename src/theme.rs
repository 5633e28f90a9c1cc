//! Neon-on-black palette for the neural background

use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);           // #000000
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(12, 12, 12);       // #0C0C0C

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);

    // === Field ===
    pub const NODE: Color32 = Color32::from_rgb(0, 246, 255);             // #00f6ff - cyber blue
    pub const NODE_ALPHA: f32 = 0.6;
    pub const LINK: Color32 = Color32::from_rgb(176, 38, 255);            // #b026ff - cyber purple
    pub const LINK_ALPHA: f32 = 0.3;
}

/// Node color at the given depth scale (farther = dimmer).
pub fn node_color(scale: f32) -> Color32 {
    colors::NODE.gamma_multiply((colors::NODE_ALPHA * scale).clamp(0.05, 1.0))
}

pub fn link_color() -> Color32 {
    colors::LINK.gamma_multiply(colors::LINK_ALPHA)
}

/// Dark egui visuals matching the background
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);

    visuals.selection.bg_fill = LINK.gamma_multiply(0.5);
    visuals.selection.stroke = egui::Stroke::new(1.0, NODE);
    visuals.hyperlink_color = NODE;

    // No shadows - flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
