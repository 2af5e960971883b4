//! DOM-backed implementation of the validation [`Surface`].

use std::collections::BTreeMap;

use checkout_types::{Banner, FieldId};
use validation_engine::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

/// Class carried by per-field error annotations.
pub const ERROR_CLASS: &str = "error-text";
/// Selector matching whichever outcome banner is on screen.
pub const BANNER_SELECTOR: &str = ".alert";

pub const FORM_ID: &str = "form";
pub const SUBMIT_SELECTOR: &str = ".submit_button";

const ERROR_FONT_SIZE: &str = "1.1rem";
const BANNER_MARGIN: &str = "60px 0";

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("element #{0} is not a text input")]
    NotAnInput(&'static str),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// A pending `setTimeout` for banner dismissal: the timer id plus the closure
/// backing it. The closure must stay alive until the timer fires or is
/// cleared; dropping the handle after either point is safe.
pub struct DismissHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Binds the validator to the live checkout form.
pub struct DomSurface {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    submit_control: Element,
    inputs: BTreeMap<FieldId, HtmlInputElement>,
}

impl DomSurface {
    /// Looks up the form, the submit control, and all nine field inputs by
    /// their stable ids.
    pub fn mount(window: &Window, document: &Document) -> Result<Self, MountError> {
        let form = document
            .get_element_by_id(FORM_ID)
            .ok_or_else(|| MountError::MissingElement(format!("#{FORM_ID}")))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| MountError::MissingElement(format!("#{FORM_ID}")))?;

        let submit_control = document
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .ok_or_else(|| MountError::MissingElement(SUBMIT_SELECTOR.to_string()))?;

        let mut inputs = BTreeMap::new();
        for field in FieldId::ALL {
            let element = document
                .get_element_by_id(field.dom_id())
                .ok_or_else(|| MountError::MissingElement(format!("#{}", field.dom_id())))?;
            let input = element
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| MountError::NotAnInput(field.dom_id()))?;
            inputs.insert(field, input);
        }

        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            form,
            submit_control,
            inputs,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The wrapper the annotation is appended to: the input's grandparent,
    /// which in the page markup is the field's form-control block.
    fn container_of(&self, field: FieldId) -> Option<Element> {
        let input = self.inputs.get(&field)?;
        input.parent_element()?.parent_element()
    }

    fn error_node(&self, field: FieldId) -> Option<Element> {
        self.container_of(field)?
            .query_selector(&format!(".{ERROR_CLASS}"))
            .ok()
            .flatten()
    }
}

impl Surface for DomSurface {
    type Dismiss = DismissHandle;

    fn field_value(&self, field: FieldId) -> String {
        self.inputs
            .get(&field)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_error(&mut self, field: FieldId, message: &str) {
        // Repeated failures update the existing annotation in place so the
        // field never carries more than one.
        if let Some(existing) = self.error_node(field) {
            if let Some(el) = existing.dyn_ref::<HtmlElement>() {
                el.set_inner_text(message);
            }
            return;
        }

        let Some(container) = self.container_of(field) else {
            return;
        };
        let Ok(node) = self.document.create_element("div") else {
            return;
        };
        node.set_class_name(ERROR_CLASS);
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            el.set_inner_text(message);
            let _ = el.style().set_property("font-size", ERROR_FONT_SIZE);
        }
        let _ = container.append_child(&node);
    }

    fn clear_error(&mut self, field: FieldId) {
        if let Some(node) = self.error_node(field) {
            node.remove();
        }
    }

    fn show_banner(&mut self, banner: Banner) {
        let Ok(node) = self.document.create_element("div") else {
            return;
        };
        node.set_class_name(banner.css_class());
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            el.set_inner_text(banner.message());
            let _ = el.style().set_property("margin", BANNER_MARGIN);
        }
        let _ = self.submit_control.append_child(&node);
    }

    fn clear_banner(&mut self) {
        if let Ok(Some(node)) = self.document.query_selector(BANNER_SELECTOR) {
            node.remove();
        }
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }

    fn schedule_banner_dismiss(&mut self, after_ms: u32) -> DismissHandle {
        let document = self.document.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(Some(node)) = document.query_selector(BANNER_SELECTOR) {
                node.remove();
            }
        }) as Box<dyn FnMut()>);

        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                after_ms as i32,
            )
            .unwrap_or(-1);

        DismissHandle {
            id,
            _callback: callback,
        }
    }

    fn cancel_banner_dismiss(&mut self, handle: DismissHandle) {
        if handle.id >= 0 {
            self.window.clear_timeout_with_handle(handle.id);
        }
    }
}
