//! Interval arithmetic over floating-point bounds
//!
//! An [`Interval`] represents an unknown real value by a closed range
//! `[lower, upper]` that is guaranteed to contain it.  Arithmetic and
//! transcendental functions propagate that enclosure, so the result of a
//! calculation carries its own error bound.
//!
//! ```
//! use interval::{ApproxEq, Interval};
//!
//! // 1.0, give or take one unit in the last place
//! let x = Interval::from_value(1.0);
//! assert_eq!(x.lower(), 1.0 - f64::EPSILON);
//! assert_eq!(x.upper(), 1.0 + f64::EPSILON);
//!
//! // Errors accumulate, but the true value stays inside
//! let y = x - x;
//! assert_eq!(y, Interval::with_margin(0.0, 2.0 * f64::EPSILON));
//!
//! // Exact equality is too strict for comparing results; use overlap instead
//! assert!(x.sqrt().square().approx_eq(&1.0));
//! let z = Interval::with_margin(0.5, 1e-9);
//! assert!(z.sin().asin().approx_eq(&0.5));
//! ```
//!
//! # Construction
//! - [`Interval::new`] takes explicit bounds, in either order
//! - [`Interval::with_margin`] (or [`PlusMinus::pm`]) builds `mid ± margin`
//! - [`Interval::with_epsilon`] builds an interval with a relative tolerance
//! - [`Interval::from_value`] uses the bound type's
//!   [machine epsilon](Bound::EPSILON) as the relative tolerance
//! - [`Interval::exact`] (and `From<T>`) builds a zero-width interval
//!
//! The `try_` variants return an [`Error`] instead of panicking when given a
//! negative margin or tolerance.
//!
//! # Degenerate results
//! Operations never fail.  Division by an interval whose bounds have
//! different signs returns `[-inf, +inf]`; evaluating a function outside its
//! domain returns `[NaN, NaN]`.
//!
//! ```
//! use interval::Interval;
//!
//! let q = Interval::from_value(1.0) / Interval::from_value(0.0);
//! assert_eq!(q, Interval::new(f64::NEG_INFINITY, f64::INFINITY));
//! assert!(Interval::new(-1.0, 1.0).sqrt().is_nan());
//! ```
#![warn(missing_docs)]

mod bound;
mod error;
mod interval;
mod math;
mod ops;

pub use bound::Bound;
pub use error::Error;
pub use interval::Interval;
pub use ops::{ApproxEq, PlusMinus};

static_assertions::assert_impl_all!(Interval<f32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Interval<f64>: Copy, Send, Sync);
