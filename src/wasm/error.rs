//! Error types for DOM access.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding to the host document.
#[derive(Error, Debug)]
pub enum DomError {
    /// `window` is not available (not running in a browser)
    #[error("No window object available")]
    NoWindow,

    /// `window.document` is not available
    #[error("No document available")]
    NoDocument,

    /// A required element is missing from the page
    #[error("Missing element #{id}")]
    MissingElement {
        /// Id that was looked up
        id: String,
    },

    /// An element has an unexpected type
    #[error("Element #{id} is not a {expected}")]
    WrongElementType {
        /// Id of the element
        id: String,
        /// Expected element interface
        expected: &'static str,
    },

    /// A DOM call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl DomError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
