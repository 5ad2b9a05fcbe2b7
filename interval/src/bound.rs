//! Scalar types that can be used as interval bounds
use num_traits::Float;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A floating-point type usable as the lower / upper bound of an
/// [`Interval`](crate::Interval)
///
/// Ordering, arithmetic, remainder, negation, `abs`, the sign / `NaN` /
/// infinity predicates, and the transcendental catalog (`exp`, `ln`,
/// `log2`, `log10`, `ln_1p`, `exp_m1`, `sqrt`, `cbrt`, trigonometric and
/// hyperbolic functions with their inverses, `atan2`, `powf`, `hypot`) all
/// come from [`num_traits::Float`].  This trait adds the constants used by
/// interval construction and angle reduction.
///
/// It is implemented for `f32` and `f64`.
pub trait Bound:
    Float
    + FromStr<Err = ParseFloatError>
    + std::fmt::Debug
    + std::fmt::Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Smallest value such that `1 + EPSILON != 1`
    ///
    /// This is the relative tolerance used by
    /// [`Interval::from_value`](crate::Interval::from_value).
    const EPSILON: Self;

    /// Archimedes' constant (π)
    const PI: Self;
    /// π / 2
    const FRAC_PI_2: Self;
    /// 2π, the period of `sin` and `cos`
    const TAU: Self;

    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Two, for midpoints and radii
    const TWO: Self;

    /// Positive infinity
    const INFINITY: Self;
    /// Negative infinity
    const NEG_INFINITY: Self;
    /// Not a number
    const NAN: Self;
}

macro_rules! impl_bound {
    ($t:ident) => {
        impl Bound for $t {
            const EPSILON: Self = $t::EPSILON;

            const PI: Self = std::$t::consts::PI;
            const FRAC_PI_2: Self = std::$t::consts::FRAC_PI_2;
            const TAU: Self = std::$t::consts::TAU;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;
            const NAN: Self = $t::NAN;
        }
    };
}

impl_bound!(f32);
impl_bound!(f64);
