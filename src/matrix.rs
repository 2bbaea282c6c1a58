//! Affine transform state for the chart scene.
//!
//! Canvas 2D contexts let us *set* a transform but give us no portable way
//! to read the current one back, so the scene keeps track of it here: one
//! [`Matrix`] per drawn node or group, composed parent-into-child on the way
//! down the scene tree and inverted when pointer coordinates have to be
//! mapped back into a node's local space for hit-testing.

use serde::{Deserialize, Serialize};

use crate::error::GridsceneError;
use crate::render::TransformSurface;

/// The identity transform `[1, 0, 0, 1, 0, 0]`.
pub const IDENTITY: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// A 2D affine transform mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
///
/// The six components are stored column-major in a single buffer: `a, b` are
/// the first basis column, `c, d` the second, and `e, f` the translation.
/// In identifiers such as `m12`, `1` is the column and `2` the row.
///
/// Inversion of a singular matrix produces non-finite components rather
/// than an error; callers that need to guard check [`Matrix::determinant`]
/// first. No method here signals failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    elements: [f64; 6],
}

/// `A·B` in column-major affine form.
///
/// Reads all twelve inputs up front, so the result may overwrite either
/// operand's storage.
fn compose(a: &[f64; 6], b: &[f64; 6]) -> [f64; 6] {
    let [m11, m12, m21, m22, m31, m32] = *a;
    let [o11, o12, o21, o22, o31, o32] = *b;

    [
        m11 * o11 + m21 * o12,
        m12 * o11 + m22 * o12,
        m11 * o21 + m21 * o22,
        m12 * o21 + m22 * o22,
        m11 * o31 + m21 * o32 + m31,
        m12 * o31 + m22 * o32 + m32,
    ]
}

/// Inverse of `m`.
///
/// `a..d` are scaled by the reciprocal determinant before the translation
/// row is derived from them; keep that order, float arithmetic is not
/// associative and downstream hit-testing expects bit-stable results.
fn invert(m: &[f64; 6]) -> [f64; 6] {
    let [mut a, mut b, mut c, mut d, e, f] = *m;
    // reciprocal of determinant; a singular input propagates non-finite
    // components instead of signaling
    let rd = 1.0 / (a * d - b * c);

    a *= rd;
    b *= rd;
    c *= rd;
    d *= rd;

    [d, -b, -c, a, c * f - d * e, b * e - a * f]
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Matrix {
    /// Create an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: IDENTITY }
    }

    /// Create a transform from six components `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn from_elements(elements: [f64; 6]) -> Self {
        Self { elements }
    }

    /// Translation by `(tx, ty)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::from_elements([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    /// Scale by `(sx, sy)` about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_elements([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// Counter-clockwise rotation about the origin, in radians.
    #[must_use]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_elements([cos, sin, -sin, cos, 0.0, 0.0])
    }

    /// Reflection across the vertical axis (negates x).
    #[must_use]
    pub fn flip_x() -> Self {
        Self::from_elements([-1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    /// Reflection across the horizontal axis (negates y).
    #[must_use]
    pub fn flip_y() -> Self {
        Self::from_elements([1.0, 0.0, 0.0, -1.0, 0.0, 0.0])
    }

    /// Overwrite all six components, returning `self` for chaining.
    ///
    /// The components are copied out of `elements`; the caller's array is
    /// not retained and can be reused freely afterwards.
    pub fn set_elements(&mut self, elements: &[f64; 6]) -> &mut Self {
        self.elements = *elements;
        self
    }

    /// The six components in `[a, b, c, d, e, f]` order.
    #[must_use]
    pub fn elements(&self) -> &[f64; 6] {
        &self.elements
    }

    /// `true` iff the six components exactly equal the identity transform.
    ///
    /// The comparison is exact by contract: a transform that is merely
    /// close to identity still has to be pushed to the context.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.elements == IDENTITY
    }

    /// Horizontal scale component.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.elements[0]
    }

    /// Vertical shear component.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.elements[1]
    }

    /// Horizontal shear component.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.elements[2]
    }

    /// Vertical scale component.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.elements[3]
    }

    /// Horizontal translation component.
    #[must_use]
    pub fn e(&self) -> f64 {
        self.elements[4]
    }

    /// Vertical translation component.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.elements[5]
    }

    pub fn set_a(&mut self, value: f64) {
        self.elements[0] = value;
    }

    pub fn set_b(&mut self, value: f64) {
        self.elements[1] = value;
    }

    pub fn set_c(&mut self, value: f64) {
        self.elements[2] = value;
    }

    pub fn set_d(&mut self, value: f64) {
        self.elements[3] = value;
    }

    pub fn set_e(&mut self, value: f64) {
        self.elements[4] = value;
    }

    pub fn set_f(&mut self, value: f64) {
        self.elements[5] = value;
    }

    /// `a·d − b·c`.
    ///
    /// Callers that cannot tolerate a non-finite inverse check this for
    /// zero before calling the inverse family; the inverse itself does not.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [a, b, c, d, ..] = self.elements;
        a * d - b * c
    }

    /// Post-multiply `other` into this matrix in place: the combined
    /// transform applies `other`'s map first, then the original `self`'s.
    /// Returns `self` for chaining.
    pub fn multiply_self(&mut self, other: &Matrix) -> &mut Self {
        self.elements = compose(&self.elements, &other.elements);
        self
    }

    /// Post-multiply `other`, returning the product as a new matrix.
    /// Neither operand is modified.
    #[must_use]
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            elements: compose(&self.elements, &other.elements),
        }
    }

    /// Pre-multiply `other` into this matrix in place (`self := other·self`).
    /// Returns `self` for chaining.
    pub fn pre_multiply_self(&mut self, other: &Matrix) -> &mut Self {
        self.elements = compose(&other.elements, &self.elements);
        self
    }

    /// The inverse map as a new matrix. `self` is unmodified.
    #[must_use]
    pub fn inverse(&self) -> Matrix {
        Matrix {
            elements: invert(&self.elements),
        }
    }

    /// Write the inverse of this matrix into `target`.
    ///
    /// Only `target`'s elements change; returns `self` (not `target`) so a
    /// scene pass can keep chaining off the source transform.
    pub fn inverse_to<'a>(&'a self, target: &mut Matrix) -> &'a Self {
        target.elements = invert(&self.elements);
        self
    }

    /// Invert this matrix in place. Returns `self` for chaining.
    pub fn invert_self(&mut self) -> &mut Self {
        self.elements = invert(&self.elements);
        self
    }

    /// Forward-map a point through this transform.
    ///
    /// Hit-testing runs this on [`Matrix::inverse`] to take pointer
    /// coordinates into a node's local space.
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, c, d, e, f] = self.elements;
        (a * x + c * y + e, b * x + d * y + f)
    }

    /// Push the six components, in `[a, b, c, d, e, f]` order, as the
    /// surface's current transform. No internal state changes.
    pub fn apply_to<S: TransformSurface + ?Sized>(&self, surface: &S) {
        let [a, b, c, d, e, f] = self.elements;
        surface.transform(a, b, c, d, e, f);
    }
}

impl TryFrom<&[f64]> for Matrix {
    type Error = GridsceneError;

    /// Fallible construction from an untrusted slice (the JS boundary hands
    /// over arrays of arbitrary length).
    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        let elements: [f64; 6] = slice
            .try_into()
            .map_err(|_| GridsceneError::ElementCount(slice.len()))?;
        Ok(Self { elements })
    }
}
