//! Transcendental functions over intervals
//!
//! Functions which are monotonic over their domain are evaluated at both
//! bounds.  The others (`cosh`, `cos`, `sin`, `tan`, `atan2`) also check
//! whether the interval contains one of their critical points, and widen the
//! result to the extremum reached there.  Binary functions (`hypot`, `powf`,
//! and parts of `atan2`) are evaluated at the four corners of their inputs.
//!
//! Inputs outside a function's domain (e.g. `sqrt` of a negative bound)
//! produce the `NaN` interval, following the scalar convention.
use crate::{Bound, Interval};

impl<T: Bound> Interval<T> {
    /// Calculates the square root of the interval
    pub fn sqrt(self) -> Self {
        self.map_bounds(T::sqrt)
    }

    /// Calculates the cube root of the interval
    pub fn cbrt(self) -> Self {
        self.map_bounds(T::cbrt)
    }

    /// Computes the exponent function applied to the interval
    pub fn exp(self) -> Self {
        self.map_bounds(T::exp)
    }

    /// Computes `exp(x) - 1`, accurate for intervals near zero
    pub fn exp_m1(self) -> Self {
        self.map_bounds(T::exp_m1)
    }

    /// Computes the natural log of the interval
    pub fn ln(self) -> Self {
        self.map_bounds(T::ln)
    }

    /// Computes the base-2 log of the interval
    pub fn log2(self) -> Self {
        self.map_bounds(T::log2)
    }

    /// Computes the base-10 log of the interval
    pub fn log10(self) -> Self {
        self.map_bounds(T::log10)
    }

    /// Computes `ln(1 + x)`, accurate for intervals near zero
    pub fn ln_1p(self) -> Self {
        self.map_bounds(T::ln_1p)
    }

    /// Computes the hyperbolic sine of the interval
    pub fn sinh(self) -> Self {
        self.map_bounds(T::sinh)
    }

    /// Computes the hyperbolic tangent of the interval
    pub fn tanh(self) -> Self {
        self.map_bounds(T::tanh)
    }

    /// Computes the arcsine of the interval
    pub fn asin(self) -> Self {
        self.map_bounds(T::asin)
    }

    /// Computes the arccosine of the interval
    ///
    /// `acos` is decreasing, so the upper bound maps to the lower one.
    pub fn acos(self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        Interval::new(self.upper().acos(), self.lower().acos())
    }

    /// Computes the arctangent of the interval
    pub fn atan(self) -> Self {
        self.map_bounds(T::atan)
    }

    /// Computes the inverse hyperbolic sine of the interval
    pub fn asinh(self) -> Self {
        self.map_bounds(T::asinh)
    }

    /// Computes the inverse hyperbolic cosine of the interval
    pub fn acosh(self) -> Self {
        self.map_bounds(T::acosh)
    }

    /// Computes the inverse hyperbolic tangent of the interval
    pub fn atanh(self) -> Self {
        self.map_bounds(T::atanh)
    }

    /// Computes the hyperbolic cosine of the interval
    ///
    /// `cosh` has its minimum of 1 at 0.
    ///
    /// ```
    /// # use interval::Interval;
    /// let c = Interval::new(-1.0, 2.0).cosh();
    /// assert_eq!(c, Interval::new(1.0, 2.0f64.cosh()));
    /// ```
    pub fn cosh(self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        let a = self.lower().cosh();
        let b = self.upper().cosh();
        let lower = if self.contains(T::ZERO) { T::ONE } else { a.min(b) };
        Interval::new(lower, a.max(b))
    }

    /// Shifts an angle interval by a multiple of 2π
    ///
    /// Intervals within `[-π, π]` are returned unchanged.  Otherwise, the
    /// result has the same width and its lower bound in `[-π, π]`; the upper
    /// bound may exceed π.
    ///
    /// Intervals with an infinite bound cannot be shifted and are returned
    /// unchanged.
    ///
    /// The shift uses the rounded value of 2π, so the reduced bounds drift
    /// from the exact reduction by about one ulp of 2π per period.  Narrow
    /// intervals millions of periods from the origin may therefore miss an
    /// extremum that lies within that drift of a bound.
    pub fn normalize_angle(self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return self;
        }
        if self.lower() >= -T::PI && self.upper() <= T::PI {
            return self;
        }
        let mut r = self.lower() % T::TAU;
        if r < -T::PI {
            r = r + T::TAU;
        } else if r > T::PI {
            r = r - T::TAU;
        }
        Interval::new(r, r + self.width())
    }

    /// Computes the cosine of the interval
    ///
    /// The maxima of `cos` are at even multiples of π and its minima at odd
    /// multiples.  Intervals at least 2π wide return `[-1, 1]`.
    ///
    /// ```
    /// # use interval::Interval;
    /// let c = Interval::new(2.0, 4.0).cos();
    /// assert_eq!(c, Interval::new(-1.0, 2.0f64.cos()));
    /// ```
    pub fn cos(self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        if self.width() >= T::TAU {
            return Interval::new(-T::ONE, T::ONE);
        }
        // After normalization, lower is in [-π, π] and upper is below 3π
        let n = self.normalize_angle();
        let a = n.lower().cos();
        let b = n.upper().cos();
        let mut lower = a.min(b);
        let mut upper = a.max(b);
        if n.contains(T::ZERO) || n.contains(T::TAU) {
            upper = T::ONE;
        }
        if n.contains(-T::PI) || n.contains(T::PI) {
            lower = -T::ONE;
        }
        Interval::new(lower, upper)
    }

    /// Computes the sine of the interval
    ///
    /// The maxima of `sin` are at `π/2 + 2kπ` and its minima at
    /// `-π/2 + 2kπ`.  Intervals at least 2π wide return `[-1, 1]`.
    pub fn sin(self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        if self.width() >= T::TAU {
            return Interval::new(-T::ONE, T::ONE);
        }
        let n = self.normalize_angle();
        let a = n.lower().sin();
        let b = n.upper().sin();
        let mut lower = a.min(b);
        let mut upper = a.max(b);
        let half = T::FRAC_PI_2;
        if n.contains(half) || n.contains(half + T::TAU) {
            upper = T::ONE;
        }
        if n.contains(-half) || n.contains(half + T::PI) {
            lower = -T::ONE;
        }
        Interval::new(lower, upper)
    }

    /// Computes the tangent of the interval
    ///
    /// `tan` is increasing between its asymptotes at `π/2 + kπ`.  If the
    /// interval is at least π wide or contains an asymptote, the result is
    /// `[-inf, +inf]`.
    pub fn tan(self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        if self.width() >= T::PI {
            return Self::entire();
        }
        // After normalization, lower is in [-π, π] and upper is below 2π
        let n = self.normalize_angle();
        let half = T::FRAC_PI_2;
        if n.contains(-half) || n.contains(half) || n.contains(half + T::PI) {
            return Self::entire();
        }
        Interval::new(n.lower().tan(), n.upper().tan())
    }

    /// Computes the four-quadrant arctangent of `self` (the `y` coordinate)
    /// and `x`
    ///
    /// If the `(x, y)` box crosses the branch cut along the negative `x`
    /// axis, the result is `[-π, π]`.
    ///
    /// ```
    /// # use interval::{ApproxEq, Interval};
    /// let y = Interval::exact(1.0);
    /// let a = y.atan2(-1.0);
    /// assert!(a.approx_eq(&(3.0 * std::f64::consts::FRAC_PI_4)));
    /// ```
    pub fn atan2(self, x: impl Into<Self>) -> Self {
        let y = self;
        let x = x.into();
        if x.is_nan() || y.is_nan() {
            return Self::nan();
        }
        // x reaches the negative axis, with y on both sides of it
        if x.lower().is_sign_negative()
            && y.lower().is_sign_negative()
            && !y.upper().is_sign_negative()
        {
            return Interval::new(-T::PI, T::PI);
        }

        let ysgn = if y.is_sign_negative() { -T::ONE } else { T::ONE };
        let xsgn = if x.is_sign_negative() { -T::ONE } else { T::ONE };
        let infinite_point =
            |i: Self| i.lower().is_infinite() && i.lower() == i.upper();

        let y_x = if infinite_point(x) && infinite_point(y) {
            // ±inf / ±inf would be NaN
            Interval::exact(ysgn * xsgn)
        } else if x.is_infinite() || y.is_infinite() {
            // The quotient loses the angle of corners at infinity, but the
            // box avoids the cut, so the scalar atan2 at its corners bounds it
            return y.map_corners(x, T::atan2);
        } else {
            y / x
        };

        if x.is_positive() {
            y_x.atan()
        } else if x.is_negative() {
            (Self::pi() - y_x.abs().atan()) * ysgn
        } else {
            // x touches zero, but the box avoids the cut, so the extrema
            // are at its corners
            y.map_corners(x, T::atan2)
        }
    }

    /// Computes `sqrt(self² + y²)` without intermediate overflow
    ///
    /// Evaluated at the corners of `|self| × |y|`, where `hypot` is
    /// increasing in both arguments.
    ///
    /// ```
    /// # use interval::Interval;
    /// let h = Interval::new(-3.0, 3.0).hypot(4.0);
    /// assert_eq!(h, Interval::new(4.0, 5.0));
    /// ```
    pub fn hypot(self, y: impl Into<Self>) -> Self {
        self.abs().map_corners(y.into().abs(), T::hypot)
    }

    /// Raises the interval to an interval power
    ///
    /// Evaluated at the four corners, which is exact for a positive base.  A
    /// base that reaches zero also contributes `(±0)^n`, since `x^n` is not
    /// monotonic in `x` across zero.
    ///
    /// A negative base is only defined for a single integer exponent;
    /// otherwise, the result is the `NaN` interval.
    ///
    /// ```
    /// # use interval::Interval;
    /// assert_eq!(Interval::new(-2.0, 2.0).powf(2.0), Interval::new(0.0, 4.0));
    /// assert!(Interval::new(-8.0, 8.0).powf(1.0 / 3.0).is_nan());
    /// ```
    pub fn powf(self, n: impl Into<Self>) -> Self {
        let n = n.into();
        if self.is_nan() || n.is_nan() {
            return Self::nan();
        }
        let integer = n.lower() == n.upper() && n.lower().fract() == T::ZERO;
        if self.lower() < T::ZERO && !integer {
            return Self::nan();
        }
        let out = self.map_corners(n, T::powf);
        if out.is_nan() || !self.contains(T::ZERO) {
            return out;
        }
        let z = if self.lower() < T::ZERO { -T::ZERO } else { T::ZERO };
        Self::hull([
            out.lower(),
            out.upper(),
            T::ZERO.powf(n.lower()),
            T::ZERO.powf(n.upper()),
            z.powf(n.lower()),
            z.powf(n.upper()),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ApproxEq;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[test]
    fn test_i_sqrt() {
        assert_eq!(Interval::new(0.0, 1.0).sqrt(), Interval::new(0.0, 1.0));
        assert_eq!(Interval::new(4.0, 9.0).sqrt(), Interval::new(2.0, 3.0));
        assert!(Interval::new(-2.0, 4.0).sqrt().is_nan());
        assert!(Interval::<f32>::nan().sqrt().is_nan());
        let c = Interval::new(-8.0, 27.0).cbrt();
        assert_relative_eq!(c.lower(), -2.0);
        assert_relative_eq!(c.upper(), 3.0);
    }

    #[test]
    fn test_i_exp_ln() {
        let e = Interval::new(0.0, 1.0).exp();
        assert_eq!(e, Interval::new(1.0, 1.0f64.exp()));
        let l = Interval::new(1.0, 100.0).log10();
        assert_relative_eq!(l.lower(), 0.0);
        assert_relative_eq!(l.upper(), 2.0);
        let l = Interval::new(0.25, 8.0).log2();
        assert_eq!(l, Interval::new(-2.0, 3.0));
        assert!(Interval::new(-1.0, 1.0).ln().is_nan());
        assert_eq!(Interval::new(0.0, 1.0).ln().lower(), f64::NEG_INFINITY);

        let tiny = Interval::new(-1e-20, 1e-20);
        assert_eq!(tiny.exp_m1(), tiny);
        assert_eq!(tiny.ln_1p(), tiny);
    }

    #[test]
    fn test_i_inverse_trig() {
        assert_eq!(Interval::new(-1.0, 1.0).acos(), Interval::new(0.0, PI));
        assert_eq!(
            Interval::new(-1.0, 1.0).asin(),
            Interval::new(-FRAC_PI_2, FRAC_PI_2)
        );
        assert_eq!(
            Interval::new(0.5, 1.0).acos(),
            Interval::new(0.0, 0.5f64.acos())
        );
        assert!(Interval::new(0.0, 2.0).asin().is_nan());
        assert!(Interval::new(-2.0, 0.0).acos().is_nan());
        assert_eq!(
            Interval::new(f64::NEG_INFINITY, f64::INFINITY).atan(),
            Interval::new(-FRAC_PI_2, FRAC_PI_2)
        );
    }

    #[test]
    fn test_i_hyperbolic() {
        assert_eq!(
            Interval::new(-1.0, 2.0).sinh(),
            Interval::new((-1.0f64).sinh(), 2.0f64.sinh())
        );
        assert_eq!(
            Interval::new(-1.0, 2.0).tanh(),
            Interval::new((-1.0f64).tanh(), 2.0f64.tanh())
        );
        assert_eq!(
            Interval::new(1.0, 2.0).acosh(),
            Interval::new(0.0, 2.0f64.acosh())
        );
        assert!(Interval::new(0.0, 2.0).acosh().is_nan());
        assert_eq!(
            Interval::new(-0.5, 0.5).atanh(),
            Interval::new((-0.5f64).atanh(), 0.5f64.atanh())
        );
        assert_eq!(Interval::new(0.0, 0.0).asinh(), Interval::exact(0.0));
    }

    #[test]
    fn test_i_cosh() {
        let c = Interval::new(-1.0, 2.0).cosh();
        assert_eq!(c, Interval::new(1.0, 2.0f64.cosh()));
        let c = Interval::new(1.0, 2.0).cosh();
        assert_eq!(c, Interval::new(1.0f64.cosh(), 2.0f64.cosh()));
        let c = Interval::new(-2.0, -1.0).cosh();
        assert_eq!(c, Interval::new(1.0f64.cosh(), 2.0f64.cosh()));
    }

    #[test]
    fn test_normalize_angle() {
        let a = Interval::new(-1.0, 2.0);
        assert_eq!(a.normalize_angle(), a);

        let b = Interval::new(7.0, 8.0).normalize_angle();
        assert_relative_eq!(b.lower(), 7.0 - TAU, epsilon = 1e-12);
        assert_relative_eq!(b.upper(), 8.0 - TAU, epsilon = 1e-12);

        let c = Interval::new(-10.0, -9.0).normalize_angle();
        assert_relative_eq!(c.lower(), -10.0 + 2.0 * TAU, epsilon = 1e-12);
        assert_relative_eq!(c.width(), 1.0, epsilon = 1e-12);

        // Upper bound past π is allowed; the lower bound stays put
        let d = Interval::new(3.0, 3.5).normalize_angle();
        assert_eq!(d, Interval::new(3.0, 3.5));

        let e = Interval::new(f64::NEG_INFINITY, 0.0);
        assert_eq!(e.normalize_angle(), e);
    }

    #[test]
    fn test_i_cos() {
        assert_eq!(Interval::new(0.0, 7.0).cos(), Interval::new(-1.0, 1.0));
        assert_eq!(
            Interval::new(f64::NEG_INFINITY, 0.0).cos(),
            Interval::new(-1.0, 1.0)
        );

        let c = Interval::new(-0.5, 0.5).cos();
        assert_eq!(c, Interval::new(0.5f64.cos(), 1.0));

        let c = Interval::new(2.0, 4.0).cos();
        assert_eq!(c, Interval::new(-1.0, 2.0f64.cos()));

        // Normalized from [6, 7], which contains 2π
        let c = Interval::new(6.0, 7.0).cos();
        assert_relative_eq!(c.lower(), 7.0f64.cos(), epsilon = 1e-12);
        assert_eq!(c.upper(), 1.0);

        // Monotonic region
        let c = Interval::new(0.5, 1.5).cos();
        assert_eq!(c, Interval::new(1.5f64.cos(), 0.5f64.cos()));

        assert!(Interval::<f64>::nan().cos().is_nan());
    }

    #[test]
    fn test_i_sin() {
        assert_eq!(Interval::new(-4.0, 3.0).sin(), Interval::new(-1.0, 1.0));

        let s = Interval::new(1.0, 2.0).sin();
        assert_eq!(s, Interval::new(1.0f64.sin(), 1.0));

        // Normalized to [4 - 2π, 5 - 2π], which contains -π/2
        let s = Interval::new(4.0, 5.0).sin();
        assert_eq!(s.lower(), -1.0);
        assert_relative_eq!(s.upper(), 4.0f64.sin(), epsilon = 1e-12);

        // No extrema in [-10, -9]
        let s = Interval::new(-10.0, -9.0).sin();
        assert_relative_eq!(s.lower(), (-9.0f64).sin(), epsilon = 1e-12);
        assert_relative_eq!(s.upper(), (-10.0f64).sin(), epsilon = 1e-12);

        let s = Interval::new(-0.5, 0.5).sin();
        assert_eq!(s, Interval::new((-0.5f64).sin(), 0.5f64.sin()));
    }

    #[test]
    fn test_i_tan() {
        let t = Interval::new(0.0, 1.0).tan();
        assert_eq!(t, Interval::new(0.0, 1.0f64.tan()));

        assert_eq!(Interval::new(0.0, 4.0).tan(), Interval::entire());
        assert_eq!(Interval::new(1.0, 2.0).tan(), Interval::entire());
        assert_eq!(Interval::new(-2.0, -1.0).tan(), Interval::entire());
        assert_eq!(Interval::new(4.5, 5.0).tan(), Interval::entire());

        let t = Interval::new(3.0, 3.5).tan();
        assert_eq!(t, Interval::new(3.0f64.tan(), 3.5f64.tan()));

        // One period over
        let t = Interval::new(PI + 0.1, PI + 0.2).tan();
        assert_relative_eq!(t.lower(), 0.1f64.tan(), epsilon = 1e-12);
        assert_relative_eq!(t.upper(), 0.2f64.tan(), epsilon = 1e-12);
    }

    #[test]
    fn test_i_atan2() {
        let one = Interval::exact(1.0);
        assert_relative_eq!(one.atan2(one).lower(), FRAC_PI_4);
        assert_relative_eq!(one.atan2(one).upper(), FRAC_PI_4);

        assert!(one.atan2(-1.0).approx_eq(&(3.0 * FRAC_PI_4)));
        assert!((-one).atan2(-1.0).approx_eq(&(-3.0 * FRAC_PI_4)));

        assert_eq!(one.atan2(0.0), Interval::exact(FRAC_PI_2));
        assert_eq!((-one).atan2(0.0), Interval::exact(-FRAC_PI_2));

        // y = +0 on the negative x axis
        assert!(Interval::exact(0.0).atan2(-1.0).approx_eq(&PI));
        assert!(Interval::exact(-0.0).atan2(-1.0).approx_eq(&-PI));

        // y straddles zero with x negative: the box crosses the cut
        let y = Interval::from_value(0.0);
        assert_eq!(y.atan2(-1.0), Interval::new(-PI, PI));

        // y straddles zero with x positive: no cut
        let a = Interval::new(-1.0, 1.0).atan2(1.0);
        assert_relative_eq!(a.lower(), -FRAC_PI_4);
        assert_relative_eq!(a.upper(), FRAC_PI_4);

        // x straddles zero, y positive
        let a = Interval::new(1.0, 2.0).atan2(Interval::new(-1.0, 1.0));
        assert_relative_eq!(a.lower(), FRAC_PI_4);
        assert_relative_eq!(a.upper(), 3.0 * FRAC_PI_4);

        // y = 0, x straddles zero
        let a = Interval::exact(0.0).atan2(Interval::new(-1.0, 1.0));
        assert_eq!(a, Interval::new(0.0, PI));

        let inf = Interval::exact(f64::INFINITY);
        assert!(inf.atan2(inf).approx_eq(&FRAC_PI_4));
        assert!(inf.atan2(-inf).approx_eq(&(3.0 * FRAC_PI_4)));

        assert!(Interval::nan().atan2(one).is_nan());
        assert!(one.atan2(Interval::nan()).is_nan());

        // x starts at +0, so the box stays off the negative axis
        let a = Interval::new(-1.0, 1.0).atan2(Interval::new(0.0, 1.0));
        assert_eq!(a, Interval::new(-FRAC_PI_2, FRAC_PI_2));
        let a = Interval::new(-1.0, 1.0).atan2(Interval::new(-0.0, 1.0));
        assert_eq!(a, Interval::new(-PI, PI));
    }

    #[test]
    fn test_i_atan2_unbounded() {
        let inf = f64::INFINITY;
        let big = 1e300f64;
        let cases = [
            (
                (1.0, inf),
                (1.0, inf),
                [(big, 1.0), (1.0, big), (2.0, 2.0)],
            ),
            (
                (1.0, inf),
                (-inf, -1.0),
                [(1.0, -big), (big, -1.0), (1.0, -1.0)],
            ),
            (
                (-inf, -1.0),
                (1.0, inf),
                [(-big, 1.0), (-1.0, big), (-3.0, 2.0)],
            ),
            (
                (-inf, inf),
                (1.0, 2.0),
                [(-big, 1.0), (big, 2.0), (0.0, 1.5)],
            ),
            (
                (1.0, 2.0),
                (-inf, inf),
                [(1.0, -big), (2.0, big), (1.5, 0.0)],
            ),
            ((inf, inf), (1.0, inf), [(big, 1.0), (big, big), (big, 2.0)]),
        ];
        for ((ylo, yhi), (xlo, xhi), points) in cases {
            let y = Interval::new(ylo, yhi);
            let x = Interval::new(xlo, xhi);
            let a = y.atan2(x);
            for (py, px) in points {
                let v = py.atan2(px);
                assert!(
                    a.lower() - 1e-12 <= v && v <= a.upper() + 1e-12,
                    "atan2({py}, {px}) = {v} is outside of {a:?}"
                );
            }
        }

        let a = Interval::new(1.0, inf).atan2(Interval::new(1.0, inf));
        assert_eq!(a, Interval::new(0.0, FRAC_PI_2));
        let a = Interval::new(1.0, inf).atan2(Interval::new(-inf, -1.0));
        assert_eq!(a, Interval::new(FRAC_PI_2, PI));
    }

    #[test]
    fn test_i_hypot() {
        let h = Interval::exact(3.0).hypot(4.0);
        assert_eq!(h, Interval::exact(5.0));
        let h = Interval::new(-3.0, 3.0).hypot(Interval::new(-4.0, 4.0));
        assert_eq!(h, Interval::new(0.0, 5.0));
        let h = Interval::new(3.0, 6.0).hypot(Interval::new(-8.0, -4.0));
        assert_eq!(h, Interval::new(5.0, 10.0));
    }

    #[test]
    fn test_i_powf() {
        let p = Interval::new(2.0, 3.0).powf(2.0);
        assert_eq!(p, Interval::new(4.0, 9.0));
        let p = Interval::new(0.5, 2.0).powf(Interval::new(-1.0, 1.0));
        assert_eq!(p, Interval::new(0.5, 2.0));
        let p = Interval::new(4.0, 9.0).powf(0.5);
        assert_eq!(p, Interval::new(2.0, 3.0));
        assert!(Interval::exact(-8.0).powf(1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_i_powf_negative_base() {
        // Fractional exponents are undefined for any negative value
        assert!(Interval::new(-8.0, 8.0).powf(1.0 / 3.0).is_nan());
        assert!(Interval::new(-2.0, 2.0).powf(0.5).is_nan());
        let n = Interval::new(1.0, 2.0);
        assert!(Interval::new(-2.0, -1.0).powf(n).is_nan());
        assert!(Interval::new(-2.0, 2.0).sqrt().is_nan());

        // Integer exponents are fine, including across zero
        let p = Interval::new(-3.0, -1.0).powf(3.0);
        assert_eq!(p, Interval::new(-27.0, -1.0));
        let p = Interval::new(-3.0, -1.0).powf(2.0);
        assert_eq!(p, Interval::new(1.0, 9.0));
        let p = Interval::new(-2.0, 3.0).powf(2.0);
        assert_eq!(p, Interval::new(0.0, 9.0));
        let p = Interval::new(-2.0, 3.0).powf(3.0);
        assert_eq!(p, Interval::new(-8.0, 27.0));
        let p = Interval::new(-1.0, 1.0).powf(-1.0);
        assert_eq!(p, Interval::entire());
        let p = Interval::new(-1.0, 1.0).powf(0.0);
        assert_eq!(p, Interval::exact(1.0));

        // A base touching zero from above includes 0^n
        let p = Interval::new(0.0, 4.0).powf(0.5);
        assert_eq!(p, Interval::new(0.0, 2.0));
        let p = Interval::new(0.0, 4.0).powf(-0.5);
        assert_eq!(p, Interval::new(0.5, f64::INFINITY));
    }

    #[test]
    fn test_f32() {
        let c = Interval::new(0.0f32, 7.0).cos();
        assert_eq!(c, Interval::new(-1.0, 1.0));
        let s = Interval::from_value(std::f32::consts::FRAC_PI_2).sin();
        assert!(s.approx_eq(&1.0f32));
        let t = Interval::new(1.0f32, 2.0).tan();
        assert_eq!(t, Interval::entire());
    }
}
