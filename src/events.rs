//! DOM event bridge: lets the cosmetic page scripts react to shell-side
//! state changes without reaching into the session.

use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};

pub const THEME_EVENT: &str = "portfolio-theme";

/// Announce a theme switch as a CustomEvent on window (detail = theme
/// name). Failure here is cosmetic only, so it logs and moves on.
pub fn emit_theme_event(theme: &str) {
    let Some(win) = window() else {
        web_sys::console::warn_1(&"[shell] no window object, skipping theme event".into());
        return;
    };

    let mut init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&JsValue::from_str(theme));

    match CustomEvent::new_with_event_init_dict(THEME_EVENT, &init) {
        Ok(event) => {
            if let Err(e) = win.dispatch_event(&event) {
                web_sys::console::error_2(&"[shell] theme event dispatch failed:".into(), &e);
            }
        }
        Err(e) => {
            web_sys::console::error_2(&"[shell] could not build theme event:".into(), &e);
        }
    }
}
