//! Scalar helpers shared by the vector, matrix and complex types.
//!
//! Constants live on the numeric traits: use `T::PI`, `T::E` ([`Arithmetic`]) and `T::EPSILON`
//! ([`Float`]).

use num_traits::AsPrimitive;

use crate::{Arithmetic, Float, IsZero, Vector};

/// Returns the absolute value of `x`.
///
/// Floats have their sign bit cleared (so `-0.0` becomes `0.0` and `-inf` becomes `inf`), signed
/// integers are negated when negative, unsigned integers are returned unchanged.
///
/// # Examples
///
/// ```
/// # use vecta_linalg::math;
/// assert_eq!(math::abs(-3.5f32), 3.5);
/// assert_eq!(math::abs(-4i8), 4);
/// assert_eq!(math::abs(i8::MIN), i8::MIN);
/// ```
#[inline]
pub fn abs<T: Arithmetic>(x: T) -> T {
    x.abs()
}

/// Returns `x * x`.
#[inline]
pub fn square<T: Arithmetic>(x: T) -> T {
    x * x
}

/// Returns whether `value` is zero, using an [`Float::EPSILON`] threshold for floats.
///
/// # Examples
///
/// ```
/// # use vecta_linalg::{math, vec2};
/// assert!(math::is_zero(&0.0000001f32));
/// assert!(!math::is_zero(&0.01f32));
/// assert!(math::is_zero(&vec2(0, 0)));
/// ```
#[inline]
pub fn is_zero<Z: IsZero + ?Sized>(value: &Z) -> bool {
    value.is_zero()
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_rad<T: Float>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn to_deg<T: Float>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Returns the smaller of `a` and `b`, preferring `a` when they compare equal or are unordered.
#[inline]
pub fn min<T: Arithmetic>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of `a` and `b`, preferring `a` when they compare equal or are unordered.
#[inline]
pub fn max<T: Arithmetic>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

#[doc(hidden)]
#[inline]
pub fn arithmetic<T: Arithmetic>(x: T) -> T {
    x
}

/// Returns the smallest of one or more [`Arithmetic`] values.
///
/// Arguments are compared pairwise from left to right.
///
/// ```
/// # use vecta_linalg::min;
/// assert_eq!(min!(3, 1, 2), 1);
/// assert_eq!(min!(4.5), 4.5);
/// ```
#[macro_export]
macro_rules! min {
    ($x:expr $(,)?) => {
        $crate::math::arithmetic($x)
    };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!($crate::math::min($x, $y) $(, $rest)*)
    };
}

/// Returns the largest of one or more [`Arithmetic`] values.
///
/// Arguments are compared pairwise from left to right.
///
/// ```
/// # use vecta_linalg::max;
/// assert_eq!(max!(3, 1, 2), 3);
/// assert_eq!(max!(-1.0, -7.5), -1.0);
/// ```
#[macro_export]
macro_rules! max {
    ($x:expr $(,)?) => {
        $crate::math::arithmetic($x)
    };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!($crate::math::max($x, $y) $(, $rest)*)
    };
}

/// Approximates `1 / sqrt(x)` with the classic bit-level seed and two Newton-Raphson passes.
///
/// The relative error is below `5e-6` for positive normal inputs. Use [`f32::sqrt`] where
/// precision matters; [`Vector::length`] always does.
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    const THREE_HALFS: f32 = 1.5;

    let half = x * 0.5;
    let mut y = f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1));
    y *= THREE_HALFS - half * y * y;
    y *= THREE_HALFS - half * y * y;
    y
}

/// Approximates `sqrt(x)` as `x * fast_inv_sqrt(x)`.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    x * fast_inv_sqrt(x)
}

/// Linearly interpolates between the scalars `a` and `b`.
#[inline]
pub fn lerp_scalar<F: Float>(a: F, b: F, t: F) -> F {
    a * (F::ONE - t) + b * t
}

/// Linearly interpolates between two vectors, computing `a * (1 - t) + b * t` per component.
///
/// Both inputs are converted to the float type of `t` first, so interpolating integer vectors
/// yields float vectors.
///
/// # Examples
///
/// ```
/// # use vecta_linalg::{math, vec2};
/// let mid = math::lerp(vec2(0, 10), vec2(10u8, 20u8), 0.5f32);
/// assert_eq!(mid, vec2(5.0, 15.0));
/// ```
pub fn lerp<T, U, F, const N: usize>(a: Vector<T, N>, b: Vector<U, N>, t: F) -> Vector<F, N>
where
    T: Arithmetic + AsPrimitive<F>,
    U: Arithmetic + AsPrimitive<F>,
    F: Float,
{
    let (a, b) = (a.cast::<F>(), b.cast::<F>());
    a.zip(b).map(|(a, b)| lerp_scalar(a, b, t))
}
