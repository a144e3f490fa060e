//! Structured error types for docpage.
//!
//! Page behaviors never fail; errors only come from configuration, JSON and
//! acquiring the browser document.

/// All errors that can occur while configuring or installing page behavior,
/// or writing generated pages.
#[derive(Debug, thiserror::Error)]
pub enum DocPageError {
    /// A `PageConfig` field failed validation.
    #[error("Invalid page config: {0}")]
    Config(String),

    /// Config JSON could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The window or document is not reachable.
    #[error("DOM unavailable: {0}")]
    Dom(String),

    /// Writing a generated page failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocPageError>;

#[cfg(target_arch = "wasm32")]
impl From<DocPageError> for wasm_bindgen::JsValue {
    fn from(e: DocPageError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
