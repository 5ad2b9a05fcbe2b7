use crate::{Bound, Error};

/// Stores a range, with conservative calculations to guarantee that it always
/// contains the actual value.
///
/// There are two kinds of valid interval:
/// - `[lower, upper]` where `lower <= upper`
/// - `[NaN, NaN]`, produced whenever either bound would be `NaN`
///
/// Intervals are plain values; every operation builds a new one.
///
/// # Warning
/// This implementation does not set rounding modes, so it may not be _perfect_.
#[derive(Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

impl<T: Bound> std::fmt::Debug for Interval<T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        f.debug_tuple("")
            .field(&self.lower)
            .field(&self.upper)
            .finish()
    }
}

impl<T: Bound> Interval<T> {
    /// Builds a new interval from its two bounds
    ///
    /// The bounds may be given in either order; if `lower > upper`, they are
    /// swapped.  If either bound is `NaN`, the result is the `NaN` interval.
    ///
    /// ```
    /// # use interval::Interval;
    /// let a = Interval::new(3.0, 1.0);
    /// assert_eq!(a.lower(), 1.0);
    /// assert_eq!(a.upper(), 3.0);
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        if lower.is_nan() || upper.is_nan() {
            Self::nan()
        } else if lower > upper {
            Self {
                lower: upper,
                upper: lower,
            }
        } else {
            Self { lower, upper }
        }
    }

    /// Builds a zero-width interval `[v, v]`
    #[inline]
    pub fn exact(v: T) -> Self {
        Self::new(v, v)
    }

    /// Builds the interval `[mid - margin, mid + margin]`
    ///
    /// Returns [`Error::InvalidMargin`] if `margin` is negative.
    pub fn try_with_margin(mid: T, margin: T) -> Result<Self, Error> {
        if margin < T::ZERO {
            return Err(Error::InvalidMargin(margin.to_string()));
        }
        Ok(Self::new(mid - margin, mid + margin))
    }

    /// Builds the interval `[mid - margin, mid + margin]`
    ///
    /// # Panics
    /// If `margin` is negative
    pub fn with_margin(mid: T, margin: T) -> Self {
        match Self::try_with_margin(mid, margin) {
            Ok(i) => i,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds an interval around `x` with a relative tolerance `epsilon`
    ///
    /// The result is `[x * (1 - epsilon), x * (1 + epsilon)]` in magnitude,
    /// whatever the sign of `x`.  At `x == 0`, a relative tolerance is
    /// meaningless, so `epsilon` is used as an absolute margin instead.
    ///
    /// Returns [`Error::InvalidEpsilon`] if `epsilon` is negative.
    ///
    /// ```
    /// # use interval::Interval;
    /// let a = Interval::try_with_epsilon(-2.0, 0.5)?;
    /// assert_eq!(a, Interval::new(-3.0, -1.0));
    /// # Ok::<(), interval::Error>(())
    /// ```
    pub fn try_with_epsilon(x: T, epsilon: T) -> Result<Self, Error> {
        if epsilon < T::ZERO {
            return Err(Error::InvalidEpsilon(epsilon.to_string()));
        }
        Ok(Self::relative(x, epsilon))
    }

    /// Builds an interval around `x` with a relative tolerance `epsilon`
    ///
    /// See [`Interval::try_with_epsilon`] for details.
    ///
    /// # Panics
    /// If `epsilon` is negative
    pub fn with_epsilon(x: T, epsilon: T) -> Self {
        match Self::try_with_epsilon(x, epsilon) {
            Ok(i) => i,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds an interval around `x` using the bound type's machine epsilon
    ///
    /// ```
    /// # use interval::Interval;
    /// let a = Interval::from_value(1.0f64);
    /// assert_eq!(a.lower(), 1.0 - f64::EPSILON);
    /// assert_eq!(a.upper(), 1.0 + f64::EPSILON);
    /// ```
    #[inline]
    pub fn from_value(x: T) -> Self {
        Self::relative(x, T::EPSILON)
    }

    /// Relative-tolerance constructor; `epsilon` is known to be non-negative
    fn relative(x: T, epsilon: T) -> Self {
        if x == T::ZERO {
            Self::new(x - epsilon, x + epsilon)
        } else {
            let margin = epsilon * x;
            if x.is_sign_negative() {
                Self::new(x + margin, x - margin)
            } else {
                Self::new(x - margin, x + margin)
            }
        }
    }

    /// Returns the `[NaN, NaN]` interval
    #[inline]
    pub fn nan() -> Self {
        Self {
            lower: T::NAN,
            upper: T::NAN,
        }
    }

    /// Returns the unbounded interval `[-inf, +inf]`
    #[inline]
    pub fn entire() -> Self {
        Self {
            lower: T::NEG_INFINITY,
            upper: T::INFINITY,
        }
    }

    /// Returns an interval enclosing π
    pub fn pi() -> Self {
        Self::from_value(T::PI)
    }

    /// Returns the lower bound of the interval
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound of the interval
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Alias for [`Interval::lower`]
    #[inline]
    pub fn lo(&self) -> T {
        self.lower
    }

    /// Alias for [`Interval::upper`]
    #[inline]
    pub fn hi(&self) -> T {
        self.upper
    }

    /// Returns the midpoint of the interval
    pub fn mid(&self) -> T {
        (self.lower + self.upper) / T::TWO
    }

    /// Returns the radius of the interval, i.e. half its width
    pub fn margin(&self) -> T {
        (self.upper - self.lower).abs() / T::TWO
    }

    /// Returns the relative half-width, `|margin / mid|`
    ///
    /// This is infinite (or `NaN`) when the midpoint is zero.
    pub fn epsilon(&self) -> T {
        (self.margin() / self.mid()).abs()
    }

    /// Calculates the width of the interval
    ///
    /// ```
    /// # use interval::Interval;
    /// let a = Interval::new(2.0, 3.0);
    /// assert_eq!(a.width(), 1.0);
    /// let b = Interval::new(2.0, 5.0);
    /// assert_eq!(b.width(), 3.0);
    /// ```
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Checks whether the given value is contained in the interval
    ///
    /// Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, v: T) -> bool {
        v >= self.lower && v <= self.upper
    }

    /// Returns `true` if either bound of the interval is `NaN`
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }

    /// Returns `true` if either bound of the interval is infinite
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.lower.is_infinite() || self.upper.is_infinite()
    }

    /// Returns `true` if both bounds are zero (of either sign)
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.lower == T::ZERO && self.upper == T::ZERO
    }

    /// Returns `true` if every value in the interval is strictly positive
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.lower > T::ZERO
    }

    /// Returns `true` if every value in the interval is strictly negative
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.upper < T::ZERO
    }

    /// Returns the sign bit of the upper bound
    ///
    /// For intervals that do not straddle zero, this is the sign of every
    /// value in the interval (including signed zeros).
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.upper.is_sign_negative()
    }

    /// Splits the interval at the midpoint
    ///
    /// ```
    /// # use interval::Interval;
    /// let a = Interval::new(0.0, 1.0);
    /// let (lo, hi) = a.split();
    /// assert_eq!(lo, Interval::new(0.0, 0.5));
    /// assert_eq!(hi, Interval::new(0.5, 1.0));
    /// ```
    pub fn split(self) -> (Self, Self) {
        let mid = self.mid();
        (
            Interval::new(self.lower, mid),
            Interval::new(mid, self.upper),
        )
    }

    /// Calculates the absolute value of the interval
    pub fn abs(self) -> Self {
        if self.lower < T::ZERO {
            if self.upper > T::ZERO {
                Interval::new(T::ZERO, self.upper.max(-self.lower))
            } else {
                Interval::new(-self.upper, -self.lower)
            }
        } else {
            self
        }
    }

    /// Squares the interval
    ///
    /// Note that this has tighter bounds than multiplication, because we know
    /// that both sides of the multiplication are the same value.
    pub fn square(self) -> Self {
        if self.upper < T::ZERO {
            Interval::new(self.upper.powi(2), self.lower.powi(2))
        } else if self.lower > T::ZERO {
            Interval::new(self.lower.powi(2), self.upper.powi(2))
        } else if self.is_nan() {
            Self::nan()
        } else {
            let m = self.lower.abs().max(self.upper.abs());
            Interval::new(T::ZERO, m.powi(2))
        }
    }

    /// Calculates the reciprocal of the interval
    ///
    /// If the bounds have different signs, the reciprocal cannot be bounded
    /// and the result is `[-inf, +inf]`.
    ///
    /// ```
    /// # use interval::Interval;
    /// assert_eq!(Interval::new(2.0, 4.0).recip(), Interval::new(0.25, 0.5));
    /// assert_eq!(Interval::new(-1.0, 1.0).recip(), Interval::entire());
    /// ```
    pub fn recip(self) -> Self {
        if self.is_nan() {
            Self::nan()
        } else if self.lower.is_sign_negative() != self.upper.is_sign_negative()
        {
            Self::entire()
        } else {
            Interval::new(T::ONE / self.upper, T::ONE / self.lower)
        }
    }

    /// Applies a monotonic function to both bounds
    ///
    /// Works for increasing and decreasing functions alike, since
    /// [`Interval::new`] sorts its arguments.
    #[inline]
    pub(crate) fn map_bounds(self, f: impl Fn(T) -> T) -> Self {
        if self.is_nan() {
            Self::nan()
        } else {
            Interval::new(f(self.lower), f(self.upper))
        }
    }

    /// Evaluates `f` at the four corners of `self × rhs`, returning the
    /// smallest interval containing all of them
    ///
    /// If any corner is `NaN`, the result is the `NaN` interval.
    pub(crate) fn map_corners(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let out = self.corners(rhs, f);
        if out.iter().any(|v| v.is_nan()) {
            return Self::nan();
        }
        Self::hull(out)
    }

    /// Like [`map_corners`](Self::map_corners), but skips `NaN` corners
    /// (e.g. `0 * inf`) unless every corner is `NaN`
    pub(crate) fn map_corners_skip_nan(
        self,
        rhs: Self,
        f: impl Fn(T, T) -> T,
    ) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::nan();
        }
        Self::hull(self.corners(rhs, f))
    }

    fn corners(self, rhs: Self, f: impl Fn(T, T) -> T) -> [T; 4] {
        [
            f(self.lower, rhs.lower),
            f(self.lower, rhs.upper),
            f(self.upper, rhs.lower),
            f(self.upper, rhs.upper),
        ]
    }

    /// Smallest interval containing every non-`NaN` value
    pub(crate) fn hull<const N: usize>(values: [T; N]) -> Self {
        let mut lower = T::NAN;
        let mut upper = T::NAN;
        for v in values {
            lower = lower.min(v);
            upper = upper.max(v);
        }
        Interval::new(lower, upper)
    }
}

impl<T: Bound> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T: Bound> From<[T; 2]> for Interval<T> {
    fn from(i: [T; 2]) -> Interval<T> {
        Interval::new(i[0], i[1])
    }
}

impl<T: Bound> From<T> for Interval<T> {
    fn from(f: T) -> Self {
        Interval::exact(f)
    }
}

/// Parses `"[lo, hi]"`, `"mid±margin"` / `"mid+-margin"`, or a bare number
///
/// A bare number `x` becomes [`Interval::from_value(x)`](Interval::from_value).
impl<T: Bound> std::str::FromStr for Interval<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) =
            s.strip_prefix('[').and_then(|s| s.strip_suffix(']'))
        {
            let (lo, hi) = inner
                .split_once(',')
                .ok_or_else(|| Error::ParseError(s.to_owned()))?;
            Ok(Interval::new(lo.trim().parse()?, hi.trim().parse()?))
        } else if let Some((mid, margin)) =
            s.split_once('±').or_else(|| s.split_once("+-"))
        {
            let mid = mid.trim().parse()?;
            Interval::try_with_margin(mid, margin.trim().parse()?)
        } else if s.is_empty() {
            Err(Error::ParseError(s.to_owned()))
        } else {
            Ok(Interval::from_value(s.parse()?))
        }
    }
}
