use nalgebra::ComplexField;

use crate::autodiff;
use crate::math::{Number, Point3, Vector3};

use super::{CurveKind, ParametricCurve};

/// A circular helix around the Z axis.
///
/// `P(t) = (r cos t, r sin t, s t)` where `s` is the rise per radian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix<T> {
    radius: T,
    step: T,
}

impl<T: Number> Helix<T> {
    /// Creates a new helix from its radius and step.
    #[must_use]
    pub fn new(radius: T, step: T) -> Self {
        Self { radius, step }
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Returns the step (Z rise per unit of parameter).
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Number> ParametricCurve<T> for Helix<T> {
    fn evaluate(&self, t: T) -> Point3<T> {
        let r = self.radius.to_real();
        let (sin, cos) = t.to_real().sin_cos();
        Point3::new(T::from_real(r * cos), T::from_real(r * sin), self.step * t)
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        let (r, step, t) = (self.radius.to_real(), self.step.to_real(), t.to_real());
        let dx = autodiff::derivative(|s| s.cos().scale(r), t);
        let dy = autodiff::derivative(|s| s.sin().scale(r), t);
        let dz = autodiff::derivative(|s| s.scale(step), t);
        Vector3::new(T::from_real(dx), T::from_real(dy), T::from_real(dz))
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }

    fn radii_sum(&self) -> T {
        self.radius
    }
}
