//! Error types for host setup and configuration.
//!
//! The simulation and renderer cannot fail; everything here comes from the
//! environment the animation is mounted into.

/// Main error type for the chase animation.
#[derive(thiserror::Error, Debug)]
pub enum ChaseError {
    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Canvas element not found: #{0}")]
    CanvasNotFound(String),

    #[error("Element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("Canvas has no 2d rendering context")]
    NoContext2d,

    #[error("JS error: {0}")]
    Js(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ChaseError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ChaseError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, ChaseError>;
