//! Browser smoke test for the wasm glue. Runs under wasm-pack /
//! wasm-bindgen-test only; the core is covered by native unit tests.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use terminal_portfolio::Terminal;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_terminal_markup() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    for id in ["terminal", "output"] {
        if document.get_element_by_id(id).is_none() {
            let el = document.create_element("div").unwrap();
            el.set_id(id);
            body.append_child(&el).unwrap();
        }
    }
}

#[wasm_bindgen_test]
fn terminal_attaches_to_the_page() {
    mount_terminal_markup();
    let terminal = Terminal::new().expect("terminal should construct");
    assert!(!terminal.is_ready(), "ready only after the boot sequence");
    assert_eq!(terminal.current_theme(), "mocha");
}

#[wasm_bindgen_test]
fn suggestions_come_back_as_an_array() {
    mount_terminal_markup();
    let terminal = Terminal::new().unwrap();
    let value = terminal.live_suggestions("he");
    let matches: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(matches.contains(&"help".to_string()));
}
