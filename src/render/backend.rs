//! Transform surface trait for pluggable drawing targets.
//!
//! Implementations handle the actual `transform(a, b, c, d, e, f)` call for
//! different rendering technologies (Canvas 2D in production, recording
//! surfaces in tests).

use web_sys::CanvasRenderingContext2d;

/// A drawing surface that accepts a 2D affine transform.
pub trait TransformSurface {
    /// Multiply the surface's current transform by the given components,
    /// in `[a, b, c, d, e, f]` column-major order.
    fn transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
}

impl TransformSurface for CanvasRenderingContext2d {
    fn transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        // The context call only fails on a detached canvas; nothing useful
        // to do about that mid-frame.
        let _ = CanvasRenderingContext2d::transform(self, a, b, c, d, e, f);
    }
}
