//! Browser-host boundary for executing reducer effects.
//!
//! DOM access stays behind this module so the state core compiles and tests
//! natively; on non-wasm targets every host operation is inert.

use crate::model::WindowId;
use crate::reducer::RuntimeEffect;

/// Host handle for running reducer-emitted effects against the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`].
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowContent(window_id) => focus_window_frame(window_id),
        }
    }
}

/// DOM id of a window's frame element; the shell stamps it, the host queries
/// it when moving focus.
pub fn window_frame_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

#[cfg(target_arch = "wasm32")]
fn focus_window_frame(window_id: WindowId) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&window_frame_dom_id(window_id)) else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = element.focus();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_window_frame(_: WindowId) {}
