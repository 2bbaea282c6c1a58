//! gridscene - 2D affine transform core for the data-grid charting overlay
//!
//! Maintains the composable coordinate transforms behind a Canvas 2D chart
//! scene:
//! - Column-major 6-component affine matrices, one per drawn node or group
//! - In-place and allocating composition (post- and pre-multiply)
//! - Exact-order inversion for hit-testing and pointer coordinate mapping
//! - Direct emission into `CanvasRenderingContext2d::transform`
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SceneMatrix } from 'gridscene';
//! await init();
//! const group = new SceneMatrix();
//! group.multiply_self(SceneMatrix.from_elements([2, 0, 0, 2, 0, 0]));
//! group.apply_to(ctx);
//! ```

pub mod bindings;
pub mod error;
pub mod matrix;
pub mod render;

use wasm_bindgen::prelude::*;

// Re-export the main types
pub use bindings::SceneMatrix;
pub use error::{GridsceneError, Result};
pub use matrix::Matrix;
pub use render::TransformSurface;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
