//! Arithmetic operators and approximate comparison for [`Interval`]
use crate::{Bound, Interval};

impl<T: Bound> std::ops::Add<Interval<T>> for Interval<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Interval::new(self.lower() + rhs.lower(), self.upper() + rhs.upper())
    }
}

impl<T: Bound> std::ops::Sub<Interval<T>> for Interval<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Interval::new(self.lower() - rhs.upper(), self.upper() - rhs.lower())
    }
}

impl<T: Bound> std::ops::Mul<Interval<T>> for Interval<T> {
    type Output = Self;
    /// Multiplies using the four corner products
    ///
    /// A `0 * inf` corner is skipped, since the other corners already bound
    /// the product of a zero with a large finite value.
    fn mul(self, rhs: Self) -> Self {
        self.map_corners_skip_nan(rhs, |a, b| a * b)
    }
}

impl<T: Bound> std::ops::Div<Interval<T>> for Interval<T> {
    type Output = Self;
    /// Divides by multiplying with the reciprocal
    ///
    /// If the divisor's bounds have different signs, the result is
    /// `[-inf, +inf]`.
    fn div(self, rhs: Self) -> Self {
        if self.is_nan() {
            return Interval::nan();
        }
        self * rhs.recip()
    }
}

impl<T: Bound> std::ops::Neg for Interval<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Interval::new(-self.upper(), -self.lower())
    }
}

impl<T: Bound> std::ops::Add<T> for Interval<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        self + Interval::exact(rhs)
    }
}

impl<T: Bound> std::ops::Sub<T> for Interval<T> {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        self - Interval::exact(rhs)
    }
}

impl<T: Bound> std::ops::Mul<T> for Interval<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self * Interval::exact(rhs)
    }
}

impl<T: Bound> std::ops::Div<T> for Interval<T> {
    type Output = Self;
    /// Divides each bound by a (nonzero) scalar
    fn div(self, rhs: T) -> Self {
        Interval::new(self.lower() / rhs, self.upper() / rhs)
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl<T: Bound> std::ops::$trait<Interval<T>> for Interval<T> {
            fn $fn(&mut self, rhs: Interval<T>) {
                *self = *self $op rhs;
            }
        }
        impl<T: Bound> std::ops::$trait<T> for Interval<T> {
            fn $fn(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

/// Scalar-on-the-left operators, which must be written per concrete type
macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl std::ops::Add<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn add(self, rhs: Interval<$t>) -> Interval<$t> {
                rhs + self
            }
        }
        impl std::ops::Sub<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn sub(self, rhs: Interval<$t>) -> Interval<$t> {
                Interval::exact(self) - rhs
            }
        }
        impl std::ops::Mul<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn mul(self, rhs: Interval<$t>) -> Interval<$t> {
                rhs * self
            }
        }
        impl std::ops::Div<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn div(self, rhs: Interval<$t>) -> Interval<$t> {
                Interval::exact(self) / rhs
            }
        }
        impl ApproxEq<Interval<$t>> for $t {
            fn approx_eq(&self, rhs: &Interval<$t>) -> bool {
                rhs.contains(*self)
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

/// Approximate overlap between intervals and scalars
///
/// Two intervals are approximately equal when one of them contains both
/// endpoints of the other.  An interval and a scalar are approximately equal
/// when the interval contains the scalar.
///
/// This is the comparison to use when checking interval results against a
/// reference value, since exact bounds depend on accumulated margins.
///
/// ```
/// use interval::{ApproxEq, PlusMinus};
///
/// assert!(1.0_f64.pm(0.1).approx_eq(&1.0_f64.pm(0.2)));
/// assert!(1.0_f64.pm(0.1).approx_eq(&0.95_f64.pm(0.04)));
/// assert!(1.0_f64.pm(0.1).approx_ne(&2.0_f64.pm(0.1)));
/// assert!(1.0_f64.pm(0.1).approx_eq(&1.05_f64));
/// ```
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Checks for approximate overlap
    fn approx_eq(&self, rhs: &Rhs) -> bool;

    /// Negation of [`approx_eq`](ApproxEq::approx_eq)
    fn approx_ne(&self, rhs: &Rhs) -> bool {
        !self.approx_eq(rhs)
    }
}

impl<T: Bound> ApproxEq for Interval<T> {
    fn approx_eq(&self, rhs: &Self) -> bool {
        (self.contains(rhs.lower()) && self.contains(rhs.upper()))
            || (rhs.contains(self.lower()) && rhs.contains(self.upper()))
    }
}

impl<T: Bound> ApproxEq<T> for Interval<T> {
    fn approx_eq(&self, rhs: &T) -> bool {
        self.contains(*rhs)
    }
}

/// Builds `value ± margin` intervals from a bare scalar
pub trait PlusMinus: Bound {
    /// Returns `[self - margin, self + margin]`
    ///
    /// # Panics
    /// If `margin` is negative
    fn pm(self, margin: Self) -> Interval<Self> {
        Interval::with_margin(self, margin)
    }
}

impl<T: Bound> PlusMinus for T {}
