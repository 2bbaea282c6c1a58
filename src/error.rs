//! Structured error types for gridscene.
//!
//! Only the API boundary is fallible. The transform math itself signals
//! nothing: inverting a singular matrix yields non-finite components rather
//! than an error, so the hot per-frame path never branches on a `Result`.

/// All errors that can occur at the gridscene API boundary.
#[derive(Debug, thiserror::Error)]
pub enum GridsceneError {
    /// A matrix was built from a slice that does not hold exactly 6 numbers.
    #[error("expected 6 matrix elements, got {0}")]
    ElementCount(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridsceneError>;

#[cfg(target_arch = "wasm32")]
impl From<GridsceneError> for wasm_bindgen::JsValue {
    fn from(e: GridsceneError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
