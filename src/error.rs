//! Structured error types for fixedtable.
//!
//! The geometry core never fails; these errors only surface at the outer
//! surfaces (strict column validation, prop decoding, DOM setup).

/// All errors that can occur outside the geometry core.
#[derive(Debug, thiserror::Error)]
pub enum FixedTableError {
    /// Props JSON could not be parsed.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixed column has no explicit `colKey`.
    #[error("Fixed column {0} is missing colKey; colKey is required for fixed columns")]
    MissingFixedKey(String),

    /// Two columns share the same key.
    #[error("Duplicate column key: {0}")]
    DuplicateKey(String),

    /// Props could not be decoded at the WASM boundary.
    #[error("Invalid props: {0}")]
    Props(String),

    /// Required DOM node or API is unavailable.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixedTableError>;

#[cfg(target_arch = "wasm32")]
impl From<FixedTableError> for wasm_bindgen::JsValue {
    fn from(e: FixedTableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
