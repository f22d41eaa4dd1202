//! Approximate equality for floating-point values and everything built from them.
//!
//! Exact `==` on computed floats is rarely what a test wants. [`ApproxEq`] offers absolute,
//! relative and ULP-based comparisons, and the [`assert_approx_eq!`][crate::assert_approx_eq] /
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros wrap them in assertions.
//!
//! Background reading:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Vectors, matrices and complex numbers compare equal when every pair of corresponding components
/// does.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The tolerance type for absolute and relative comparisons, typically [`f32`] or [`f64`].
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if `|self - other|` does not exceed `rel_tolerance` times the larger
    /// magnitude of the two values.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other` (counting [*units in the last place*]).
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always do, other values of opposite sign
    /// never do.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;

    /// The comparison [`assert_approx_eq!`][crate::assert_approx_eq] performs when no tolerance
    /// is configured: an absolute *or* relative comparison with the default tolerances.
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Tolerance::DEFAULT_ABS_TOLERANCE)
            || self.rel_diff_eq(other, Self::Tolerance::DEFAULT_REL_TOLERANCE)
    }
}

/// Default tolerances of a [`ApproxEq::Tolerance`] type.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = f32::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f32::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = f64::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f64::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Deferred assertion returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the `Asserter` is dropped, which lets the caller pick tolerances first:
///
/// - [`Asserter::abs`] enables an absolute comparison ([`ApproxEq::abs_diff_eq`]).
/// - [`Asserter::rel`] enables a relative comparison ([`ApproxEq::rel_diff_eq`]).
/// - [`Asserter::ulps`] enables a ULP comparison ([`ApproxEq::ulps_diff_eq`]).
///
/// With several enabled, the values are equal if any comparison says so. With none enabled,
/// [`ApproxEq::approx_eq`] decides.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works best for values near zero, possibly of opposite sign.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against `rel` times the larger magnitude.
    ///
    /// Works best away from zero: any non-zero value only equals `0.0` with `rel >= 1.0`.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Counts the representable values between the two values and compares the count to `ulps`.
    ///
    /// This follows the uneven density of floats, but values of opposite sign near zero are
    /// billions of ULPs apart.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let (left, right) = (self.left, self.right);
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            return T::approx_eq(left, right);
        }

        self.abs.map_or(false, |abs| T::abs_diff_eq(left, right, abs))
            || self.rel.map_or(false, |rel| T::rel_diff_eq(left, right, rel))
            || self.ulps.map_or(false, |ulps| T::ulps_diff_eq(left, right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        let expected = self.kind == AssertionKind::Eq;
        if self.equal() != expected {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // `#[track_caller]` has no effect on `Drop::drop`, so the assertion site is printed explicitly.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Behaves like [`assert_eq!`], but returns an [`Asserter`](crate::approx::Asserter) that selects the
/// comparison and tolerance. The check happens at the end of the statement.
///
/// # Examples
///
/// ```
/// # use vecta_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(vec2(100.0, 1.0), vec2(99.0, 1.5)).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use vecta_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Complex::new(1.0, 0.0), Complex::new(1.0, 0.1));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
