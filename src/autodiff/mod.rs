//! Forward-mode automatic differentiation.
//!
//! A [`Dual`] carries a value together with its first derivative. Seeding the
//! parameter with [`Dual::variable`] and evaluating an expression over duals
//! yields `f(t)` and `f'(t)` in a single pass, exact up to rounding.
//!
//! ```
//! use curves::autodiff::{differentiate, Dual};
//!
//! // f(t) = 3 sin(t)
//! let d = differentiate(|t: Dual<f64>| t.sin().scale(3.0), 0.0);
//! assert_eq!(d.value(), 0.0);
//! assert_eq!(d.derivative(), 3.0);
//! ```

mod dual;

pub use dual::Dual;

use crate::math::Real;

/// Evaluates `f` at `t` with `t` seeded as the independent variable.
///
/// Returns the dual result holding both `f(t)` and `f'(t)`.
pub fn differentiate<T, F>(f: F, t: T) -> Dual<T>
where
    T: Real,
    F: FnOnce(Dual<T>) -> Dual<T>,
{
    f(Dual::variable(t))
}

/// Returns only `f'(t)`.
pub fn derivative<T, F>(f: F, t: T) -> T
where
    T: Real,
    F: FnOnce(Dual<T>) -> Dual<T>,
{
    differentiate(f, t).derivative()
}
