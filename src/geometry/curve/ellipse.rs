use nalgebra::ComplexField;

use crate::autodiff;
use crate::math::{Number, Point3, Vector3};

use super::{CurveKind, ParametricCurve};

/// An axis-aligned ellipse centered at the origin in the XY plane.
///
/// `P(t) = (a cos t, b sin t, 0)` with `a = x_radius`, `b = y_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse<T> {
    x_radius: T,
    y_radius: T,
}

impl<T: Number> Ellipse<T> {
    /// Creates a new ellipse from its radii along the X and Y axes.
    #[must_use]
    pub fn new(x_radius: T, y_radius: T) -> Self {
        Self { x_radius, y_radius }
    }

    /// Returns the radius along the X axis.
    #[must_use]
    pub fn x_radius(&self) -> T {
        self.x_radius
    }

    /// Returns the radius along the Y axis.
    #[must_use]
    pub fn y_radius(&self) -> T {
        self.y_radius
    }
}

impl<T: Number> ParametricCurve<T> for Ellipse<T> {
    fn evaluate(&self, t: T) -> Point3<T> {
        let (a, b) = (self.x_radius.to_real(), self.y_radius.to_real());
        let (sin, cos) = t.to_real().sin_cos();
        Point3::new(T::from_real(a * cos), T::from_real(b * sin), T::zero())
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        let (a, b) = (self.x_radius.to_real(), self.y_radius.to_real());
        let t = t.to_real();
        let dx = autodiff::derivative(|s| s.cos().scale(a), t);
        let dy = autodiff::derivative(|s| s.sin().scale(b), t);
        Vector3::new(T::from_real(dx), T::from_real(dy), T::zero())
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn radii_sum(&self) -> T {
        self.x_radius + self.y_radius
    }
}
