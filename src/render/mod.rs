//! Rendering sink for scene transforms.
//!
//! The scene owns its transforms; a drawing surface only ever receives
//! them. [`TransformSurface`] is the seam between the two, so the math
//! stays testable off-browser while the production target is a Canvas 2D
//! context.

pub mod backend;

pub use backend::TransformSurface;
