use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from talking to the browser DOM.
///
/// None of these are shown to the visitor. Callers log them and carry on,
/// the page has to keep working when a cosmetic effect can't run.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}
