// terminal portfolio engine
// a fake shell over a read-only file system, rendered by the page
pub mod command;
pub mod commands;
pub mod content;
pub mod context;
pub mod dom;
pub mod error;
pub mod events;
pub mod history;
pub mod markdown;
pub mod render;
pub mod schedule;
pub mod session;
pub mod suggest;
pub mod theme;
pub mod vfs;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{D3Graph, DomNavigator, DomSink, DomThemeSurface};
use crate::render::GraphRenderer;
use crate::session::{SessionPhase, ShellSession};
use crate::suggest::Completion;

// better errors in browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The page-facing handle: one `Terminal` per page load, wrapping one
/// `ShellSession`. Shared behind Rc so the timer driver can reach the
/// session after this call stack unwinds.
#[wasm_bindgen]
pub struct Terminal {
    session: Rc<RefCell<ShellSession>>,
}

#[wasm_bindgen]
impl Terminal {
    /// Wire the session to `#output` / `#terminal`, restore the persisted
    /// theme, and probe for the optional d3 collaborator.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Terminal, JsValue> {
        let sink = DomSink::attach("output", "terminal")?;
        let display = DomThemeSurface::new()?;
        let graph = D3Graph::detect().map(|g| Box::new(g) as Box<dyn GraphRenderer>);
        if graph.is_none() {
            web_sys::console::log_1(&"[shell] no graph collaborator, list fallback active".into());
        }

        let mut session = ShellSession::new(
            Box::new(sink),
            Box::new(display),
            Box::new(DomNavigator),
            graph,
        );
        if let Some(theme) = DomThemeSurface::stored_theme() {
            session.restore_theme(theme);
        }

        Ok(Terminal {
            session: Rc::new(RefCell::new(session)),
        })
    }

    /// Begin the boot sequence. Idempotent.
    pub fn start(&self) {
        self.session.borrow_mut().start();
        drive(self.session.clone());
    }

    /// Submit one command line (Enter).
    pub fn submit(&self, line: &str) {
        self.session.borrow_mut().submit(line);
        // exit/website schedule a delayed navigation step
        drive(self.session.clone());
    }

    /// Candidates for the live dropdown, as a JS string array.
    pub fn live_suggestions(&self, input: &str) -> JsValue {
        let matches = self.session.borrow().live_suggestions(input);
        serde_wasm_bindgen::to_value(&matches).unwrap_or(JsValue::NULL)
    }

    /// Tab completion. Returns `{fill}` for an unambiguous match,
    /// `{heading, candidates}` for several, null for none.
    pub fn complete(&self, input: &str) -> JsValue {
        let response = match self.session.borrow().complete(input) {
            Completion::None => return JsValue::NULL,
            Completion::Fill(text) => serde_json::json!({ "fill": text }),
            Completion::Candidates { heading, items } => {
                serde_json::json!({ "heading": heading, "candidates": items })
            }
        };
        serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
    }

    /// Arrow-key history navigation: -1 older, +1 newer. Returns the text
    /// the input box should show, or None when there is no history.
    pub fn history_recall(&self, direction: i32) -> Option<String> {
        self.session.borrow_mut().recall(direction)
    }

    /// Ctrl-C: echo `^C` without touching anything else.
    pub fn interrupt(&self) {
        self.session.borrow_mut().interrupt();
    }

    pub fn current_theme(&self) -> String {
        self.session.borrow().theme().name().to_string()
    }

    pub fn is_ready(&self) -> bool {
        self.session.borrow().phase() == SessionPhase::Ready
    }

    /// Cancel all pending timers and stop accepting input. Call before
    /// tearing the terminal markup down.
    pub fn dispose(&self) {
        self.session.borrow_mut().close();
    }
}

/// Pump scheduled steps through real browser timers. Each step is armed
/// exactly once; a step whose session was closed in the meantime claims
/// nothing when it fires.
fn drive(session: Rc<RefCell<ShellSession>>) {
    spawn_local(async move {
        loop {
            let step = session.borrow_mut().next_armed();
            match step {
                Some((handle, delay_ms)) => {
                    TimeoutFuture::new(delay_ms).await;
                    session.borrow_mut().fire(handle);
                }
                None => break,
            }
        }
    });
}
