// Errors raised while wiring the effects into the page. Everything here is
// a missing or unexpected piece of the host environment; the simulation
// itself has no failure modes.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlowError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("canvas does not provide a 2d rendering context")]
    ContextUnavailable,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GlowError {
    fn from(value: JsValue) -> Self {
        GlowError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<GlowError> for JsValue {
    fn from(err: GlowError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
