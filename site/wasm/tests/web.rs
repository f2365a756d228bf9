//! Browser tests: `wasm-pack test --headless --firefox site/wasm`

#![cfg(target_arch = "wasm32")]

use digitech_wasm::{mount, ui_state, unmount};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r##"
<button id="menu-toggle" type="button" aria-expanded="false"></button>
<div id="mobile-menu" hidden><a href="#faq" data-close-menu="">FAQ</a></div>
<section id="faq" data-reveal="">FAQ</section>
<button id="back-to-top" type="button" hidden></button>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn setup() -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(MARKUP);
    mount().unwrap();
    document
}

fn click(document: &Document, selector: &str) {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn toggle_opens_and_link_closes_menu() {
    let document = setup();
    let menu = document.get_element_by_id("mobile-menu").unwrap();
    let toggle = document.get_element_by_id("menu-toggle").unwrap();

    click(&document, "#menu-toggle");
    assert!(!menu.has_attribute("hidden"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    click(&document, "[data-close-menu]");
    assert!(menu.has_attribute("hidden"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    unmount();
}

#[wasm_bindgen_test]
fn unmount_detaches_listeners() {
    let document = setup();
    let menu = document.get_element_by_id("mobile-menu").unwrap();
    let root = document.document_element().unwrap();
    assert!(root.class_list().contains("reveal-ready"));

    unmount();
    assert!(!root.class_list().contains("reveal-ready"));
    assert!(ui_state().is_none());

    click(&document, "#menu-toggle");
    assert!(menu.has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn state_is_exposed_as_json() {
    let _document = setup();
    let json = ui_state().unwrap();
    assert!(json.contains("\"menu_open\":false"));
    unmount();
}
