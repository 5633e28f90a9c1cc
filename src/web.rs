//! Browser entry point and DOM pointer source

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PointerEvent, Window};

use crate::app::FieldApp;
use crate::core::{FieldConfig, ListenerError, PointerSink, PointerSource, PointerState};

/// Canvas element id the viewer mounts into
const CANVAS_ID: &str = "canvas";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    // Optional preset override, e.g. `window.__neural_preset = "classic"`
    let preset = js_sys::eval("window.__neural_preset")
        .ok()
        .and_then(|v| v.as_string());
    let config = preset
        .as_deref()
        .and_then(FieldConfig::preset)
        .unwrap_or_default();
    info!(preset = ?preset, points = config.point_count, "Starting neural background");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            // Page without a background canvas: nothing to animate
            warn!(id = CANVAS_ID, "No canvas element, background disabled");
            return;
        };

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(FieldApp::new(cc, config)))),
            )
            .await
        {
            warn!(error = ?e, "Failed to start eframe");
        }
    });
}

/// `pointermove` listener on the window, normalized by the window size.
pub struct DomPointerSource {
    window: Window,
}

impl DomPointerSource {
    pub fn from_window() -> Result<Self, ListenerError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| ListenerError::Host("no window".into()))
    }
}

fn window_size(window: &Window) -> (f32, f32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

impl PointerSource for DomPointerSource {
    type Token = Closure<dyn FnMut(PointerEvent)>;

    fn subscribe(&mut self, mut sink: PointerSink) -> Result<Self::Token, ListenerError> {
        let window = self.window.clone();
        let on_move = Closure::wrap(Box::new(move |e: PointerEvent| {
            let (width, height) = window_size(&window);
            if let Some(state) =
                PointerState::from_pixels(e.client_x() as f32, e.client_y() as f32, width, height)
            {
                sink(state);
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        self.window
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
            .map_err(|e| ListenerError::Host(format!("{e:?}")))?;
        Ok(on_move)
    }

    fn unsubscribe(&mut self, token: Self::Token) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("pointermove", token.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "Failed to remove pointer listener");
        }
        // Dropping the closure frees the JS-side function
        drop(token);
    }
}
