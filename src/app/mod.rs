//! Neural background viewer
//!
//! egui app that drives a `ParticleField` from the display refresh callback
//! and paints it with the CPU painter. Runs in the browser; the native build
//! reads the pointer from egui instead of a DOM listener.

mod canvas;
mod settings;

use eframe::egui;
use tracing::{info, warn};

use crate::core::{FieldConfig, ParticleField, PointerCell, Projection};
use crate::theme::minimal_visuals;
use crate::time::{now_seconds, FpsCounter};

#[cfg(target_arch = "wasm32")]
use crate::core::PointerSubscription;
#[cfg(target_arch = "wasm32")]
use crate::web::DomPointerSource;

/// Seconds between stats log lines
const STATS_INTERVAL: f64 = 5.0;

pub struct FieldApp {
    pub(crate) field: ParticleField,
    /// Latest pointer position, written by the input listener
    pointer: PointerCell,
    /// DOM `pointermove` registration, removed when the app is dropped
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    subscription: Option<PointerSubscription<DomPointerSource>>,
    pub(crate) projection: Projection,
    pub(crate) fps_counter: FpsCounter,
    /// Config being edited in the settings window (applied on rebuild)
    pub(crate) draft: FieldConfig,
    pub(crate) show_settings: bool,
    last_stats: f64,
}

impl FieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FieldConfig) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        let field = build_field(config.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid field config, using defaults");
            fallback_field()
        });

        let pointer = PointerCell::new();

        #[cfg(target_arch = "wasm32")]
        let subscription = DomPointerSource::from_window()
            .and_then(|source| PointerSubscription::attach(source, &pointer))
            .map_err(|e| warn!(error = %e, "Pointer tracking unavailable"))
            .ok();

        Self {
            draft: field.config().clone(),
            field,
            pointer,
            #[cfg(target_arch = "wasm32")]
            subscription,
            projection: Projection::default(),
            fps_counter: FpsCounter::new(),
            show_settings: false,
            last_stats: now_seconds(),
        }
    }

    /// Replace the field with one built from the settings draft.
    pub(crate) fn rebuild(&mut self) {
        match build_field(self.draft.clone()) {
            Ok(field) => {
                info!(
                    points = field.points().len(),
                    edges = field.edges().len(),
                    "Field rebuilt"
                );
                self.field = field;
            }
            Err(e) => warn!(error = %e, "Rejected field config"),
        }
    }

    /// Native only: feed egui's hover position into the pointer cell.
    #[cfg(not(target_arch = "wasm32"))]
    fn track_egui_pointer(&self, ctx: &egui::Context) {
        use crate::core::PointerState;

        let screen = ctx.screen_rect();
        match ctx.input(|i| i.pointer.hover_pos()) {
            Some(pos) => {
                if let Some(state) = PointerState::from_pixels(
                    pos.x - screen.min.x,
                    pos.y - screen.min.y,
                    screen.width(),
                    screen.height(),
                ) {
                    self.pointer.set(state);
                }
            }
            None => self.pointer.clear(),
        }
    }

    fn log_stats(&mut self) {
        let now = now_seconds();
        if now - self.last_stats < STATS_INTERVAL {
            return;
        }
        self.last_stats = now;
        info!(
            fps = format!("{:.1}", self.fps_counter.fps()),
            frame = self.field.frame(),
            points = self.field.points().len(),
            edges = self.field.edges().len(),
            "stats"
        );
    }
}

fn build_field(config: FieldConfig) -> Result<ParticleField, crate::core::ConfigError> {
    ParticleField::new(config, &mut rand::thread_rng())
}

fn fallback_field() -> ParticleField {
    // The default config always validates
    match build_field(FieldConfig::default()) {
        Ok(field) => field,
        Err(e) => unreachable!("default config rejected: {e}"),
    }
}

impl eframe::App for FieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Animate continuously at display refresh rate
        ctx.request_repaint();
        self.fps_counter.tick();

        #[cfg(not(target_arch = "wasm32"))]
        self.track_egui_pointer(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(crate::theme::colors::BG_PRIMARY))
            .show(ctx, |ui| {
                let pointer = self.pointer.get();
                self.render_field(ui, pointer);
            });

        self.render_overlay(ctx);
        if self.show_settings {
            self.render_settings(ctx);
        }

        self.log_stats();
    }
}
