//! Common test utilities and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridscene::Matrix;

/// Tolerance for floating comparisons of composed/inverted transforms.
pub const EPS: f64 = 1e-12;

/// Assert every component of `m` is within `EPS` of `want`.
pub fn assert_matrix_near(m: &Matrix, want: [f64; 6]) {
    for (i, (got, want)) in m.elements().iter().zip(want.iter()).enumerate() {
        assert!(
            (got - want).abs() < EPS,
            "component {i}: got {got}, want {want}, full matrix {m:?}"
        );
    }
}

/// Assert exact component equality.
pub fn assert_matrix_eq(m: &Matrix, want: [f64; 6]) {
    assert_eq!(m.elements(), &want);
}

/// An invertible transform with no special structure (shear, scale, and
/// translation all present).
pub fn skewed() -> Matrix {
    Matrix::from_elements([2.0, 1.0, -1.5, 3.0, 10.0, -20.0])
}
