//! WASM-exported scene transform - the JS-facing entry point.
//!
//! JavaScript drives the chart overlay's frame loop: it holds one
//! `SceneMatrix` handle per node or group, composes them on the way down
//! the scene tree, and pushes the result into the canvas context right
//! before drawing. All arithmetic stays on the Rust side so per-frame
//! updates never touch the JS heap.

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::matrix::Matrix;

/// A chart-scene transform handle exported to JavaScript.
#[wasm_bindgen]
pub struct SceneMatrix {
    inner: Matrix,
}

impl Default for SceneMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SceneMatrix {
    /// Create an identity transform.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> SceneMatrix {
        console_error_panic_hook::set_once();
        SceneMatrix {
            inner: Matrix::new(),
        }
    }

    /// Create a transform from a 6-element array `[a, b, c, d, e, f]`.
    ///
    /// # Errors
    /// Returns an error if the array does not hold exactly 6 numbers.
    pub fn from_elements(elements: &[f64]) -> Result<SceneMatrix, JsValue> {
        console_error_panic_hook::set_once();
        let inner =
            Matrix::try_from(elements).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SceneMatrix { inner })
    }

    /// Deserialize a transform from a JS value holding `[a, b, c, d, e, f]`.
    ///
    /// # Errors
    /// Returns an error if the value is not an array of 6 numbers.
    pub fn from_value(value: JsValue) -> Result<SceneMatrix, JsValue> {
        let inner: Matrix = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SceneMatrix { inner })
    }

    /// Serialize this transform as a JS array of 6 numbers.
    ///
    /// # Errors
    /// Returns an error if serialization to the JS heap fails.
    pub fn to_value(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Overwrite all six components from `[a, b, c, d, e, f]`.
    ///
    /// # Errors
    /// Returns an error if the array does not hold exactly 6 numbers.
    pub fn set_elements(&mut self, elements: &[f64]) -> Result<(), JsValue> {
        let parsed =
            Matrix::try_from(elements).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_elements(parsed.elements());
        Ok(())
    }

    /// The six components as a `Float64Array`, in `[a, b, c, d, e, f]` order.
    #[must_use]
    pub fn elements(&self) -> Float64Array {
        Float64Array::from(&self.inner.elements()[..])
    }

    /// A copy of this transform, for callers that need to share one across
    /// logical tasks (transforms are never aliased).
    #[must_use]
    pub fn duplicate(&self) -> SceneMatrix {
        SceneMatrix { inner: self.inner }
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn a(&self) -> f64 {
        self.inner.a()
    }

    #[wasm_bindgen(setter)]
    pub fn set_a(&mut self, value: f64) {
        self.inner.set_a(value);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn b(&self) -> f64 {
        self.inner.b()
    }

    #[wasm_bindgen(setter)]
    pub fn set_b(&mut self, value: f64) {
        self.inner.set_b(value);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn c(&self) -> f64 {
        self.inner.c()
    }

    #[wasm_bindgen(setter)]
    pub fn set_c(&mut self, value: f64) {
        self.inner.set_c(value);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn d(&self) -> f64 {
        self.inner.d()
    }

    #[wasm_bindgen(setter)]
    pub fn set_d(&mut self, value: f64) {
        self.inner.set_d(value);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn e(&self) -> f64 {
        self.inner.e()
    }

    #[wasm_bindgen(setter)]
    pub fn set_e(&mut self, value: f64) {
        self.inner.set_e(value);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn f(&self) -> f64 {
        self.inner.f()
    }

    #[wasm_bindgen(setter)]
    pub fn set_f(&mut self, value: f64) {
        self.inner.set_f(value);
    }

    /// `a·d − b·c`. Check for zero before inverting if the caller cannot
    /// tolerate non-finite components.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.inner.determinant()
    }

    /// Post-multiply `other` into this transform in place.
    pub fn multiply_self(&mut self, other: &SceneMatrix) {
        self.inner.multiply_self(&other.inner);
    }

    /// Post-multiply `other`, returning the product as a new transform.
    #[must_use]
    pub fn multiply(&self, other: &SceneMatrix) -> SceneMatrix {
        SceneMatrix {
            inner: self.inner.multiply(&other.inner),
        }
    }

    /// Pre-multiply `other` into this transform in place.
    pub fn pre_multiply_self(&mut self, other: &SceneMatrix) {
        self.inner.pre_multiply_self(&other.inner);
    }

    /// The inverse map as a new transform.
    #[must_use]
    pub fn inverse(&self) -> SceneMatrix {
        SceneMatrix {
            inner: self.inner.inverse(),
        }
    }

    /// Write the inverse of this transform into `target`.
    pub fn inverse_to(&self, target: &mut SceneMatrix) {
        self.inner.inverse_to(&mut target.inner);
    }

    /// Invert this transform in place.
    pub fn invert_self(&mut self) {
        self.inner.invert_self();
    }

    /// Forward-map a point, returning `[x', y']`. Run on [`Self::inverse`]
    /// to take pointer coordinates into a node's local space.
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64) -> Vec<f64> {
        let (tx, ty) = self.inner.transform_point(x, y);
        vec![tx, ty]
    }

    /// Push this transform into the canvas context.
    pub fn apply_to(&self, ctx: &CanvasRenderingContext2d) {
        self.inner.apply_to(ctx);
    }
}
