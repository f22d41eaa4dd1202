//! The numeric trait layer that element types of [`Vector`], [`Mat4`] and [`Complex`] must satisfy.
//!
//! [`Vector`]: crate::Vector
//! [`Mat4`]: crate::Mat4
//! [`Complex`]: crate::Complex

use std::{fmt, ops};

use num_traits::AsPrimitive;

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Computes sine and cosine of `self` at once, returning `(sin, cos)`.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] ([`f64::min`]
/// and [`f64::max`] respectively), so a NaN operand loses against a number. Built-in integer types
/// implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that can tell whether they are (approximately) zero.
///
/// Integers are zero when they compare equal to `0`. Floats are zero when their magnitude does not
/// exceed [`Float::EPSILON`]. Vectors, matrices and complex numbers are zero when all of their
/// components are.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

/// The family of primitive numbers an [`Arithmetic`] type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Unsigned,
    Signed,
    Float,
}

/// Primitive numeric types usable as vector, matrix and complex components.
///
/// This is implemented for all built-in integer and floating-point types and nothing else, so
/// `Vector<bool, 3>` or `Vector<String, 2>` will not get any arithmetic.
///
/// Operations that combine two element types (`Vec3<f32> + Vec3<u8>`) cast the right-hand value to
/// the left-hand type via [`AsPrimitive`] before computing, so results always have the left
/// operand's type.
pub trait Arithmetic:
    Zero
    + One
    + IsZero
    + Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + AsPrimitive<Self>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + 'static
{
    const KIND: NumberKind;

    /// π, converted from the `f64` value with `as` (integer types get `3`).
    const PI: Self;

    /// Euler's number, converted from the `f64` value with `as` (integer types get `2`).
    const E: Self;

    /// Returns the absolute value of `self`.
    ///
    /// For signed integers, `MIN.abs()` wraps around to `MIN` instead of overflowing.
    fn abs(self) -> Self;

    /// Computes the square root of `self`.
    ///
    /// Integers are routed through [`f64`] and truncated.
    fn sqrt(self) -> Self;

    /// Converts an `f64` to `Self` using `as` semantics.
    fn from_f64(value: f64) -> Self;
}

/// Floating-point [`Arithmetic`] types.
pub trait Float: Arithmetic + Trig + ops::Neg<Output = Self> {
    /// Unsigned integer type with the same bit width as `Self`.
    type Bits: Copy + ops::BitAnd<Output = Self::Bits>;

    /// Magnitude at or below which a value is considered zero by [`IsZero`].
    ///
    /// This is `1e-6` for [`f32`] and `1e-15` for [`f64`]. It is *not* the machine epsilon.
    const EPSILON: Self;

    /// Bit mask that clears the sign bit when ANDed with the bit pattern of a value.
    const SIGN_MASK: Self::Bits;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
}

/// Signed primitive integer types.
pub trait SignedInteger: Arithmetic + ops::Neg<Output = Self> {}

/// Unsigned primitive integer types.
pub trait Unsigned: Arithmetic {}

/// Compile-time type equality: `T: SameAs<U>` holds exactly when `T` and `U` are the same type.
pub trait SameAs<T> {}

impl<T> SameAs<T> for T {}

/// Returns whether `T` is a floating-point type.
pub const fn is_float<T: Arithmetic>() -> bool {
    matches!(T::KIND, NumberKind::Float)
}

/// Returns whether `T` is a signed integer type.
pub const fn is_signed_integer<T: Arithmetic>() -> bool {
    matches!(T::KIND, NumberKind::Signed)
}

/// Returns whether `T` is an unsigned integer type.
pub const fn is_unsigned<T: Arithmetic>() -> bool {
    matches!(T::KIND, NumberKind::Unsigned)
}

const PI_F64: f64 = 3.141_592_653_589_793;
const E_F64: f64 = 2.718_281_828_459_045;

macro_rules! integers {
    ($kind:ident, $marker:ident: $($t:ty),+; abs = |$this:ident| $abs:expr) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }

            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Arithmetic for $t {
                const KIND: NumberKind = NumberKind::$kind;
                const PI: Self = PI_F64 as $t;
                const E: Self = E_F64 as $t;

                #[inline]
                fn abs(self) -> Self {
                    let $this = self;
                    $abs
                }

                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }

            impl $marker for $t {}
        )+
    };
}

integers!(Unsigned, Unsigned: u8, u16, u32, u64, u128, usize; abs = |x| x);
integers!(Signed, SignedInteger: i8, i16, i32, i64, i128, isize; abs = |x| if x < 0 { x.wrapping_neg() } else { x });

macro_rules! floats {
    ($($t:ident: bits = $bits:ty, epsilon = $eps:literal, sign_mask = $mask:literal;)+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }

            impl One for $t {
                const ONE: Self = 1.0;
            }

            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    Arithmetic::abs(*self) <= <$t as Float>::EPSILON
                }
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                fn tan(self) -> Self {
                    <$t>::tan(self)
                }

                fn asin(self) -> Self {
                    <$t>::asin(self)
                }

                fn acos(self) -> Self {
                    <$t>::acos(self)
                }

                fn atan(self) -> Self {
                    <$t>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$t>::sin_cos(self)
                }
            }

            impl Arithmetic for $t {
                const KIND: NumberKind = NumberKind::Float;
                const PI: Self = PI_F64 as $t;
                const E: Self = E_F64 as $t;

                #[inline]
                fn abs(self) -> Self {
                    <$t as Float>::from_bits(<$t as Float>::to_bits(self) & <$t as Float>::SIGN_MASK)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }

            impl Float for $t {
                type Bits = $bits;

                const EPSILON: Self = $eps;
                const SIGN_MASK: $bits = $mask;

                #[inline]
                fn to_bits(self) -> $bits {
                    <$t>::to_bits(self)
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    <$t>::from_bits(bits)
                }
            }
        )+
    };
}

floats! {
    f32: bits = u32, epsilon = 1e-6, sign_mask = 0x7FFF_FFFF;
    f64: bits = u64, epsilon = 1e-15, sign_mask = 0x7FFF_FFFF_FFFF_FFFF;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same<T: SameAs<U>, U>() {}

    #[test]
    fn kinds() {
        assert!(is_float::<f32>());
        assert!(is_float::<f64>());
        assert!(!is_float::<i32>());
        assert!(is_signed_integer::<i8>());
        assert!(is_signed_integer::<isize>());
        assert!(!is_signed_integer::<u8>());
        assert!(is_unsigned::<u128>());
        assert!(!is_unsigned::<f64>());

        const FLOAT: bool = is_float::<f32>();
        assert!(FLOAT);
    }

    #[test]
    fn same_as() {
        assert_same::<f32, f32>();
        assert_same::<Vec<u8>, Vec<u8>>();
    }

    #[test]
    fn constants() {
        assert_eq!(<i32 as Arithmetic>::PI, 3);
        assert_eq!(<u8 as Arithmetic>::E, 2);
        assert_eq!(<f64 as Arithmetic>::PI, std::f64::consts::PI);
        assert_eq!(<f32 as Arithmetic>::PI, std::f32::consts::PI);
        assert_eq!(<f32 as Float>::EPSILON, 1e-6);
        assert_eq!(<f64 as Float>::EPSILON, 1e-15);
    }

    #[test]
    fn abs() {
        assert_eq!(Arithmetic::abs(-2.5f32), 2.5);
        assert_eq!(Arithmetic::abs(-0.0f64).to_bits(), 0.0f64.to_bits());
        assert_eq!(Arithmetic::abs(f32::NEG_INFINITY), f32::INFINITY);
        assert_eq!(Arithmetic::abs(-7i16), 7);
        assert_eq!(Arithmetic::abs(i32::MIN), i32::MIN);
        assert_eq!(Arithmetic::abs(200u8), 200);
    }

    #[test]
    fn sqrt() {
        assert_eq!(Arithmetic::sqrt(16.0f32), 4.0);
        assert_eq!(Arithmetic::sqrt(17u32), 4);
        assert_eq!(Arithmetic::sqrt(-4i32), 0);
    }

    #[test]
    fn is_zero() {
        assert!(0u8.is_zero());
        assert!(!1i64.is_zero());
        assert!(1e-7f32.is_zero());
        assert!((-1e-7f32).is_zero());
        assert!(!1e-5f32.is_zero());
        assert!(1e-16f64.is_zero());
        assert!(!1e-14f64.is_zero());
        assert!(!f64::NAN.is_zero());
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3, 1), 1);
        assert_eq!(MinMax::max(3.0, f64::NAN), 3.0);
        assert_eq!(MinMax::clamp(12u8, 0, 10), 10);
    }

    #[test]
    fn sin_cos() {
        let (s, c) = Trig::sin_cos(0.0f32);
        assert_eq!((s, c), (0.0, 1.0));
    }
}
