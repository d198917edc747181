use std::ops::{Add, Mul};

use nalgebra::RealField;

/// Floating-point type that trigonometry and differentiation run in.
///
/// Blanket-implemented for every copyable real field (`f32`, `f64`).
pub trait Real: RealField + Copy + Send + Sync {}

impl<T: RealField + Copy + Send + Sync> Real for T {}

/// Element type shared by curve constants, parameters, and coordinates.
///
/// Floats compute in themselves. Integers are promoted to `f64` for the
/// trigonometric work and converted back by truncation toward zero, with
/// saturation at the type bounds and NaN mapping to zero.
pub trait Number:
    nalgebra::Scalar + Copy + Send + Sync + PartialOrd + Add<Output = Self> + Mul<Output = Self>
{
    /// The float type this element is evaluated in.
    type Real: Real;

    /// Promotes to the evaluation type.
    fn to_real(self) -> Self::Real;

    /// Converts an evaluation result back to the element type.
    fn from_real(value: Self::Real) -> Self;

    /// Additive identity.
    #[must_use]
    fn zero() -> Self {
        Self::from_real(nalgebra::zero())
    }

    /// Returns `true` for values that are unordered with themselves.
    fn is_nan(self) -> bool {
        self.partial_cmp(&self).is_none()
    }
}

macro_rules! impl_float_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                type Real = $t;

                fn to_real(self) -> $t {
                    self
                }

                fn from_real(value: $t) -> $t {
                    value
                }
            }
        )*
    };
}

macro_rules! impl_integer_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                type Real = f64;

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_real(value: f64) -> $t {
                    value as $t
                }
            }
        )*
    };
}

impl_float_number!(f32, f64);
impl_integer_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// 3D point type.
pub type Point3<T = f64> = nalgebra::Point3<T>;

/// 3D vector type.
pub type Vector3<T = f64> = nalgebra::Vector3<T>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
