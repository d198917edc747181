//! Parametric space curves (circle, ellipse, helix) whose tangents are
//! computed by forward-mode automatic differentiation.

pub mod autodiff;
pub mod error;
pub mod geometry;
pub mod math;
pub mod store;

pub use error::{CurvesError, Result, StoreError};
pub use geometry::{Circle, Curve, CurveKind, Ellipse, Helix, ParametricCurve};
pub use math::{Number, Point3, Vector3};
pub use store::{CurveId, CurveStore};

/// Returns the library's package name.
#[must_use]
pub fn name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
