//! Browser-side tests for the DOM surface. Run with `wasm-pack test`.
#![cfg(target_arch = "wasm32")]

use checkout_types::{Banner, FieldId, Outcome};
use checkout_wasm::DomSurface;
use validation_engine::FormValidator;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Builds the checkout markup the surface mounts against: one form-control
/// block per field with the input nested two levels down, plus the submit
/// control.
fn build_fixture(document: &Document) -> Element {
    let body = document.body().unwrap();
    let form = document.create_element("form").unwrap();
    form.set_id("form");

    for field in FieldId::ALL {
        let control = document.create_element("div").unwrap();
        control.set_class_name("form-control");
        let wrapper = document.create_element("div").unwrap();
        let input = document.create_element("input").unwrap();
        input.set_id(field.dom_id());
        wrapper.append_child(&input).unwrap();
        control.append_child(&wrapper).unwrap();
        form.append_child(&control).unwrap();
    }

    let submit = document.create_element("div").unwrap();
    submit.set_class_name("submit_button");
    form.append_child(&submit).unwrap();
    body.append_child(&form).unwrap();
    form
}

fn set_value(document: &Document, field: FieldId, value: &str) {
    let input: HtmlInputElement = document
        .get_element_by_id(field.dom_id())
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value(value);
}

fn fill_valid(document: &Document) {
    set_value(document, FieldId::FirstName, "Alice");
    set_value(document, FieldId::LastName, "Smith");
    set_value(document, FieldId::Email, "a@b.com");
    set_value(document, FieldId::Country, "US");
    set_value(document, FieldId::PostalCode, "12345");
    set_value(document, FieldId::PhoneNumber, "123456789");
    set_value(document, FieldId::CreditCard, "1234-5678-9012-3456");
    set_value(document, FieldId::SecurityCode, "123");
    set_value(document, FieldId::ExpirationDate, "12/25");
}

#[wasm_bindgen_test]
fn empty_submit_annotates_every_field() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let form = build_fixture(&document);

    let surface = DomSurface::mount(&window, &document).unwrap();
    let mut validator = FormValidator::new(surface);

    assert_eq!(validator.submit(), Outcome::Rejected { invalid: 9 });

    let annotations = document.query_selector_all(".error-text").unwrap();
    assert_eq!(annotations.length(), 9);
    let banner = document.query_selector(".alert").unwrap().unwrap();
    assert_eq!(banner.class_name(), Banner::Danger.css_class());

    form.remove();
}

#[wasm_bindgen_test]
fn valid_submit_shows_success_banner_and_resets() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let form = build_fixture(&document);
    fill_valid(&document);

    let surface = DomSurface::mount(&window, &document).unwrap();
    let mut validator = FormValidator::new(surface);

    assert_eq!(validator.submit(), Outcome::Accepted);

    assert!(document.query_selector(".error-text").unwrap().is_none());
    let banner = document.query_selector(".alert").unwrap().unwrap();
    assert_eq!(banner.class_name(), Banner::Success.css_class());

    let first_name: HtmlInputElement = document
        .get_element_by_id(FieldId::FirstName.dom_id())
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(first_name.value(), "");

    form.remove();
}

#[wasm_bindgen_test]
fn correcting_a_field_clears_its_annotation() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let form = build_fixture(&document);
    fill_valid(&document);
    set_value(&document, FieldId::Email, "not-an-email");

    let surface = DomSurface::mount(&window, &document).unwrap();
    let mut validator = FormValidator::new(surface);

    validator.submit();
    assert_eq!(
        document.query_selector_all(".error-text").unwrap().length(),
        1
    );

    fill_valid(&document);
    assert_eq!(validator.submit(), Outcome::Accepted);
    assert!(document.query_selector(".error-text").unwrap().is_none());

    form.remove();
}
