use nalgebra::ComplexField;

use crate::autodiff;
use crate::math::{Number, Point3, Vector3};

use super::{CurveKind, ParametricCurve};

/// A circle of the given radius centered at the origin in the XY plane.
///
/// `P(t) = (r cos t, r sin t, 0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T> {
    radius: T,
}

impl<T: Number> Circle<T> {
    /// Creates a new circle. Any radius is accepted, including negative or
    /// non-finite values.
    #[must_use]
    pub fn new(radius: T) -> Self {
        Self { radius }
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Number> ParametricCurve<T> for Circle<T> {
    fn evaluate(&self, t: T) -> Point3<T> {
        let r = self.radius.to_real();
        let (sin, cos) = t.to_real().sin_cos();
        Point3::new(T::from_real(r * cos), T::from_real(r * sin), T::zero())
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        let (r, t) = (self.radius.to_real(), t.to_real());
        let dx = autodiff::derivative(|s| s.cos().scale(r), t);
        let dy = autodiff::derivative(|s| s.sin().scale(r), t);
        Vector3::new(T::from_real(dx), T::from_real(dy), T::zero())
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn radii_sum(&self) -> T {
        self.radius
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn evaluate_at_zero() {
        let c = Circle::new(2.0);
        assert_relative_eq!(c.evaluate(0.0), Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(c.derivative(0.0), Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn evaluate_at_pi_over_2() {
        let c = Circle::new(3.0);
        let p = c.evaluate(FRAC_PI_2);
        assert!((p - Point3::new(0.0, 3.0, 0.0)).norm() < 1e-9);
        let d = c.derivative(FRAC_PI_2);
        assert!((d - Vector3::new(-3.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn matches_closed_form() {
        let r = 1.75;
        let c = Circle::new(r);
        for i in 0..32 {
            let t = -PI + f64::from(i) * TAU / 32.0;
            let p = c.evaluate(t);
            let d = c.derivative(t);
            assert_relative_eq!(
                p,
                Point3::new(r * t.cos(), r * t.sin(), 0.0),
                epsilon = TOLERANCE
            );
            assert_relative_eq!(
                d,
                Vector3::new(-r * t.sin(), r * t.cos(), 0.0),
                epsilon = TOLERANCE
            );
        }
    }

    #[test]
    fn tangent_is_orthogonal_to_radius() {
        let c = Circle::new(4.0);
        let p = c.evaluate(1.1);
        let d = c.derivative(1.1);
        assert!(p.coords.dot(&d).abs() < 1e-9);
        assert_relative_eq!(d.norm(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn radii_sum_is_radius() {
        assert_eq!(Circle::new(2.5).radii_sum(), 2.5);
        assert_eq!(Circle::new(2.5).radius(), 2.5);
    }

    #[test]
    fn kind_is_stable() {
        let c = Circle::new(1.0);
        assert_eq!(c.kind(), CurveKind::Circle);
        assert_eq!(c.kind(), c.kind());
    }

    #[test]
    fn single_precision() {
        let c = Circle::new(2.0_f32);
        assert_relative_eq!(c.evaluate(0.0), Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(c.derivative(0.0), Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn integer_circle_truncates() {
        let c = Circle::<i32>::new(2);
        assert_eq!(c.evaluate(0), Point3::new(2, 0, 0));
        assert_eq!(c.derivative(0), Vector3::new(0, 2, 0));
        // 2 cos 1 = 1.08, 2 sin 1 = 1.68
        assert_eq!(c.evaluate(1), Point3::new(1, 1, 0));
        assert_eq!(c.derivative(1), Vector3::new(-1, 1, 0));
        assert_eq!(c.radii_sum(), 2);
    }

    #[test]
    fn nan_radius_propagates() {
        let c = Circle::new(f64::NAN);
        assert!(c.evaluate(0.5).x.is_nan());
        assert!(c.derivative(0.5).y.is_nan());
        assert_eq!(c.evaluate(0.5).z, 0.0);
    }
}
