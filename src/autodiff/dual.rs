use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::math::Real;

/// A dual number `value + derivative * ε` with `ε² = 0`.
///
/// Arithmetic on duals applies the sum, product, and chain rules to the
/// derivative component alongside the ordinary computation of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    value: T,
    derivative: T,
}

impl<T: Real> Dual<T> {
    /// Creates a dual from an explicit value and derivative.
    #[must_use]
    pub fn new(value: T, derivative: T) -> Self {
        Self { value, derivative }
    }

    /// A constant: derivative zero.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// The independent variable: derivative one.
    #[must_use]
    pub fn variable(value: T) -> Self {
        Self::new(value, T::one())
    }

    /// Returns the value component `f(t)`.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the derivative component `f'(t)`.
    #[must_use]
    pub fn derivative(&self) -> T {
        self.derivative
    }

    /// Multiplies by a constant: `(k f)' = k f'`.
    #[must_use]
    pub fn scale(self, k: T) -> Self {
        Self::new(self.value * k, self.derivative * k)
    }

    /// `(sin f)' = cos f * f'`
    #[must_use]
    pub fn sin(self) -> Self {
        let (s, c) = self.value.sin_cos();
        Self::new(s, c * self.derivative)
    }

    /// `(cos f)' = -sin f * f'`
    #[must_use]
    pub fn cos(self) -> Self {
        let (s, c) = self.value.sin_cos();
        Self::new(c, -s * self.derivative)
    }

    /// Sine and cosine sharing one evaluation of the underlying trig pair.
    #[must_use]
    pub fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.value.sin_cos();
        (
            Self::new(s, c * self.derivative),
            Self::new(c, -s * self.derivative),
        )
    }
}

impl<T: Real> Add for Dual<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<T: Real> Sub for Dual<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl<T: Real> Mul for Dual<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.derivative * rhs.value + self.value * rhs.derivative,
        )
    }
}

impl<T: Real> Neg for Dual<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl<T: Real> From<T> for Dual<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.derivative)
    }
}
