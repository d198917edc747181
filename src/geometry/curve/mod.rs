mod circle;
mod ellipse;
mod helix;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use std::fmt;

use crate::math::{Number, Point3, Real, Vector3};

/// The closed set of supported curve kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Helix => "helix",
        };
        f.write_str(name)
    }
}

/// Trait for parametric curves in 3D space.
///
/// All methods are pure reads of immutable state and are total over the
/// parameter domain; non-finite inputs propagate as NaN or infinity.
pub trait ParametricCurve<T: Number>: Send + Sync {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: T) -> Point3<T>;

    /// Computes the first derivative `dP/dt` at parameter `t` by forward-mode
    /// automatic differentiation. The result is not normalized.
    fn derivative(&self, t: T) -> Vector3<T>;

    /// Returns which kind of curve this is.
    fn kind(&self) -> CurveKind;

    /// Returns the defining radius, or the sum of both radii for an ellipse.
    fn radii_sum(&self) -> T;

    /// Checks [`derivative`](Self::derivative) against a central difference of
    /// [`evaluate`](Self::evaluate) at `t`, relative to `eps`.
    fn is_consistent_at(&self, t: T, eps: T) -> bool
    where
        T: Real,
    {
        let h = T::default_epsilon().cbrt();
        let two = T::one() + T::one();
        let numeric = (self.evaluate(t + h) - self.evaluate(t - h)) / (two * h);
        let exact = self.derivative(t);
        (exact - numeric).norm() <= eps * (T::one() + exact.norm())
    }
}

/// A curve of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve<T> {
    Circle(Circle<T>),
    Ellipse(Ellipse<T>),
    Helix(Helix<T>),
}

impl<T: Number> Curve<T> {
    /// Returns the circle, if this is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle<T>> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the ellipse, if this is one.
    #[must_use]
    pub fn as_ellipse(&self) -> Option<&Ellipse<T>> {
        match self {
            Self::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the helix, if this is one.
    #[must_use]
    pub fn as_helix(&self) -> Option<&Helix<T>> {
        match self {
            Self::Helix(h) => Some(h),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn ParametricCurve<T> {
        match self {
            Self::Circle(c) => c,
            Self::Ellipse(e) => e,
            Self::Helix(h) => h,
        }
    }
}

impl<T: Number> ParametricCurve<T> for Curve<T> {
    fn evaluate(&self, t: T) -> Point3<T> {
        self.inner().evaluate(t)
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        self.inner().derivative(t)
    }

    fn kind(&self) -> CurveKind {
        self.inner().kind()
    }

    fn radii_sum(&self) -> T {
        self.inner().radii_sum()
    }
}

impl<T> From<Circle<T>> for Curve<T> {
    fn from(c: Circle<T>) -> Self {
        Self::Circle(c)
    }
}

impl<T> From<Ellipse<T>> for Curve<T> {
    fn from(e: Ellipse<T>) -> Self {
        Self::Ellipse(e)
    }
}

impl<T> From<Helix<T>> for Curve<T> {
    fn from(h: Helix<T>) -> Self {
        Self::Helix(h)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, TAU};

    fn sample() -> Vec<Curve<f64>> {
        vec![
            Circle::new(2.0).into(),
            Ellipse::new(3.0, 1.0).into(),
            Helix::new(1.0, 2.0).into(),
        ]
    }

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn curves_are_shareable() {
        assert_send_sync::<Curve<f64>>();
        assert_send_sync::<Box<dyn ParametricCurve<f32>>>();
    }

    #[test]
    fn kind_matches_variant() {
        let kinds: Vec<_> = sample().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix]
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(CurveKind::Circle.to_string(), "circle");
        assert_eq!(CurveKind::Ellipse.to_string(), "ellipse");
        assert_eq!(CurveKind::Helix.to_string(), "helix");
    }

    #[test]
    fn enum_delegates_to_variant() {
        let circle = Circle::new(2.0);
        let curve = Curve::from(circle);
        assert_eq!(curve.evaluate(FRAC_PI_4), circle.evaluate(FRAC_PI_4));
        assert_eq!(curve.derivative(FRAC_PI_4), circle.derivative(FRAC_PI_4));
        assert_eq!(curve.radii_sum(), circle.radii_sum());
    }

    #[test]
    fn variant_accessors() {
        let curves = sample();
        assert!(curves[0].as_circle().is_some());
        assert!(curves[0].as_ellipse().is_none());
        assert!(curves[1].as_ellipse().is_some());
        assert!(curves[2].as_helix().is_some());
        assert!(curves[2].as_circle().is_none());
    }

    #[test]
    fn derivative_consistent_with_point() {
        for curve in sample() {
            for i in 0..24 {
                let t = -TAU + f64::from(i) * TAU / 12.0;
                assert!(curve.is_consistent_at(t, 1e-8), "{} at t = {t}", curve.kind());
            }
        }
    }

    #[test]
    fn periodic_in_plane() {
        for curve in sample() {
            for i in 0..8 {
                let t = f64::from(i) * 0.4;
                let a = curve.evaluate(t);
                let b = curve.evaluate(t + TAU);
                assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
                assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn integer_curves_dispatch() {
        let curves: [Curve<i32>; 3] = [
            Circle::new(2).into(),
            Ellipse::new(3, 1).into(),
            Helix::new(1, 2).into(),
        ];
        let derivatives: Vec<_> = curves.iter().map(|c| c.derivative(0)).collect();
        assert_eq!(
            derivatives,
            [
                Vector3::new(0, 2, 0),
                Vector3::new(0, 1, 0),
                Vector3::new(0, 1, 2)
            ]
        );
        let total: i32 = curves.iter().map(|c| c.radii_sum()).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn polymorphic_through_trait_objects() {
        let curves: Vec<Box<dyn ParametricCurve<f64>>> = vec![
            Box::new(Circle::new(1.0)),
            Box::new(Ellipse::new(1.0, 2.0)),
            Box::new(Helix::new(0.5, 1.0)),
        ];
        let total: f64 = curves.iter().map(|c| c.radii_sum()).sum();
        assert_relative_eq!(total, 4.5);
    }
}
