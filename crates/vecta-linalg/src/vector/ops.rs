//! Implementations of `std::ops`.
//!
//! Binary operators accept a right-hand side with any [`Arithmetic`] element type `U`. Its
//! elements are converted to `T` first, so the result has the element type of the left operand.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::{approx::ApproxEq, Arithmetic};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, U, const N: usize> Add<Vector<U, N>> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn add(self, rhs: Vector<U, N>) -> Self {
        self.zip(rhs).map(|(l, r)| l + AsPrimitive::<T>::as_(r))
    }
}

/// Element-wise addition.
impl<T, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn sub(self, rhs: Vector<U, N>) -> Self {
        self.zip(rhs).map(|(l, r)| l - AsPrimitive::<T>::as_(r))
    }
}

/// Element-wise subtraction.
impl<T, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        *self = *self - rhs;
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, U, const N: usize> Mul<U> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn mul(self, rhs: U) -> Self {
        let rhs = AsPrimitive::<T>::as_(rhs);
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, U, const N: usize> MulAssign<U> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn mul_assign(&mut self, rhs: U) {
        *self = *self * rhs;
    }
}

/// Vector-Scalar division.
///
/// `rhs` is converted to the element type first, so `vec2(4, 8) / 0.5` divides by `0`. Dividing by
/// a value that [is zero](crate::IsZero) after that conversion is a contract violation, checked
/// with a debug assertion. [`Vector::checked_div`] is the non-panicking alternative.
impl<T, U, const N: usize> Div<U> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    #[track_caller]
    fn div(self, rhs: U) -> Self {
        let divisor = AsPrimitive::<T>::as_(rhs);
        debug_assert!(!divisor.is_zero(), "attempt to divide {self:?} by zero ({rhs:?})");
        self.map(|elem| elem / divisor)
    }
}

/// Vector-Scalar division.
impl<T, U, const N: usize> DivAssign<U> for Vector<T, N>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    #[track_caller]
    fn div_assign(&mut self, rhs: U) {
        *self = *self / rhs;
    }
}

// NB: there is deliberately no element-wise `Vector * Vector`; `Mul<U>` for every arithmetic `U`
// would overlap with it.

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec3f, Vector};

    #[test]
    fn add_sub() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(vec3(1, 2, 3) - vec3(10, 20, 30), vec3(-9, -18, -27));
        assert_eq!(vec2(0.5f32, 1.0) + vec2(2u8, 3), vec2(2.5, 4.0));
        assert_eq!(vec2(10u8, 20) - vec2(2.9f64, 3.9), vec2(8, 17));

        let mut v = vec4(1.0, 1.0, 1.0, 1.0);
        v += vec4(1i32, 2, 3, 4);
        v -= Vector::splat(0.5f32);
        assert_eq!(v, vec4(1.5, 2.5, 3.5, 4.5));
    }

    #[test]
    fn scale() {
        assert_eq!(vec3(1.0, -2.0, 3.0) * 2, vec3(2.0, -4.0, 6.0));
        assert_eq!(vec3(1.0, -2.0, 3.0) / 2u8, vec3(0.5, -1.0, 1.5));
        assert_eq!(vec2(7, 9) / 2.0f32, vec2(3, 4));
        assert_eq!(vec2(7, 9) * 1.9f64, vec2(7, 9));

        let mut v = vec2(3.0f32, 6.0);
        v *= 2.0f64;
        v /= 3u16;
        assert_eq!(v, vec2(2.0, 4.0));
    }

    #[test]
    fn neg() {
        assert_eq!(-vec3(1, -2, 0), vec3(-1, 2, 0));
        assert_eq!(-Vec3f::X, vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn mixed_precision_rhs_is_cast_first() {
        let big = vec2(1.0e20f64, -1.0e20);
        assert_eq!(vec2(0i32, 0) + big, vec2(i32::MAX, i32::MIN));
        assert_eq!(vec2(1u8, 1) + vec2(300u16, 2), vec2(45, 3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "by zero")]
    fn divide_by_zero() {
        let _ = vec2(1.0, 2.0) / 0.0;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "by zero")]
    fn divide_by_tiny_float() {
        // The divisor is checked against the threshold of the element type.
        let mut v = vec3(1.0f32, 2.0, 3.0);
        v /= 1e-9f64;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "by zero (0.5)")]
    fn divisor_truncated_to_zero() {
        let _ = vec2(4i32, 8) / 0.5f32;
    }

    #[test]
    fn compare_with_arrays() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_ne!(vec2(1.0, 2.0), [1.0, 2.5]);
    }
}
