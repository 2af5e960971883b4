//! Checkout form validation, compiled to WebAssembly.
//!
//! Pure validation lives in `validation-engine`; this crate binds it to the
//! page: it reads the inputs, renders error annotations and the outcome
//! banner, and wires the form's submit listener.

use std::cell::RefCell;
use std::rc::Rc;

use checkout_types::{FieldId, Outcome};
use validation_engine::FormValidator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod dom;

pub use dom::{DomSurface, MountError};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Checkout WASM initialized".into());
}

/// Checkout form bound to the live document.
#[wasm_bindgen]
pub struct CheckoutForm {
    validator: Rc<RefCell<FormValidator<DomSurface>>>,
}

#[wasm_bindgen]
impl CheckoutForm {
    /// Mounts against `#form` and attaches the submit listener. The listener
    /// prevents the browser's default submission and runs a validation pass
    /// instead.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CheckoutForm, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let surface = DomSurface::mount(&window, &document)?;
        let validator = Rc::new(RefCell::new(FormValidator::new(surface)));

        let handler = Rc::clone(&validator);
        let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            handler.borrow_mut().submit();
        }) as Box<dyn FnMut(web_sys::Event)>);
        validator
            .borrow()
            .surface()
            .form()
            .add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
        // The form outlives this object; the listener leaks with the page.
        listener.forget();

        Ok(CheckoutForm { validator })
    }

    /// Runs a validation pass; returns true when every field passed.
    #[wasm_bindgen(js_name = submit)]
    pub fn submit(&self) -> bool {
        matches!(self.validator.borrow_mut().submit(), Outcome::Accepted)
    }

    #[wasm_bindgen(js_name = invalidCount)]
    pub fn invalid_count(&self) -> u32 {
        self.validator.borrow().invalid_count() as u32
    }

    /// Per-field reports of the last pass, serialized for the hosting page.
    #[wasm_bindgen(js_name = getReportsJson)]
    pub fn get_reports_json(&self) -> String {
        let validator = self.validator.borrow();
        let reports: Vec<_> = validator.reports().collect();
        serde_json::to_string(&reports).unwrap_or_default()
    }

    /// Failure message for one field by its element id, if the last pass
    /// flagged it.
    #[wasm_bindgen(js_name = fieldMessage)]
    pub fn field_message(&self, dom_id: &str) -> Option<String> {
        let field = FieldId::from_dom_id(dom_id)?;
        self.validator
            .borrow()
            .report(field)
            .and_then(|report| report.message.clone())
    }
}
