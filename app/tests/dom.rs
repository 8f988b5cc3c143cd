#![cfg(target_arch = "wasm32")]

//! Browser checks for the DOM-backed page surfaces.

use querypad_app::page::{DomPage, Surfaces};
use querypad_app::{ErrorCode, ErrorInfo, Phase};
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build the element ids the page shell normally provides.
fn install_fixture(document: &Document) {
    let body = document.body().unwrap();
    for (tag, id) in [
        ("textarea", "commands"),
        ("button", "execute"),
        ("div", "output"),
        ("div", "error"),
    ] {
        if document.get_element_by_id(id).is_none() {
            let el = document.create_element(tag).unwrap();
            el.set_id(id);
            body.append_child(&el).unwrap();
        }
    }
}

#[wasm_bindgen_test]
fn locate_fails_without_the_page_regions() {
    let document = document();
    for id in ["commands", "execute", "output", "error"] {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }
    assert!(DomPage::locate(&document).is_err());
}

#[wasm_bindgen_test]
fn phase_gates_the_execute_control() {
    let document = document();
    install_fixture(&document);
    let page = DomPage::locate(&document).unwrap();

    page.set_phase(Phase::Loading);
    let button = page.execute_button();
    assert!(button.disabled());

    page.set_phase(Phase::Ready);
    assert!(!button.disabled());

    page.set_phase(Phase::Failed);
    assert!(button.disabled());
}

#[wasm_bindgen_test]
fn error_region_toggles_between_hidden_and_visible() {
    let document = document();
    install_fixture(&document);
    let page = DomPage::locate(&document).unwrap();
    let region = document.get_element_by_id("error").unwrap();

    page.show_error(&ErrorInfo::new(ErrorCode::InvalidQuery, "syntax error"));
    assert_eq!(region.text_content().unwrap(), "syntax error");

    // Latest call wins
    page.show_error(&ErrorInfo::new(ErrorCode::Unknown, "another error"));
    assert_eq!(region.text_content().unwrap(), "another error");

    page.clear_error();
    assert_eq!(region.text_content().unwrap(), "another error");
}

#[wasm_bindgen_test]
fn output_appends_and_clears_whole_tables() {
    let document = document();
    install_fixture(&document);
    let page = DomPage::locate(&document).unwrap();
    let region = document.get_element_by_id("output").unwrap();

    page.clear_output();
    page.append_table("<table class=\"table\"><thead><th>x</th></thead><tbody></tbody></table>");
    page.append_table("<table class=\"table\"><thead><th>y</th></thead><tbody></tbody></table>");
    assert_eq!(region.child_element_count(), 2);

    page.clear_output();
    assert_eq!(region.child_element_count(), 0);
    assert_eq!(region.inner_html(), "");
}
