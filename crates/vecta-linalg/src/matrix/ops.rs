//! Implementations of `std::ops`.
//!
//! Like the vector operators, every binary operator converts its right-hand side to the element
//! type `T` of the left operand before doing any arithmetic.

use std::{
    array,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use num_traits::AsPrimitive;

use crate::{approx::ApproxEq, Arithmetic, Vec4, Vector};

use super::Mat4;

/// Row access.
impl<T> Index<usize> for Mat4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T> IndexMut<usize> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

/// Element access by `(row, column)`.
impl<T> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Mat4<U>> for Mat4<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Mat4<U>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T> Eq for Mat4<T> where T: Eq {}

impl<T> ApproxEq for Mat4<T>
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

impl<T> Neg for Mat4<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Mat4(self.0.map(|row| -row))
    }
}

/// Element-wise addition.
impl<T, U> Add<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn add(self, rhs: Mat4<U>) -> Self {
        Mat4(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<T, U> AddAssign<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn add_assign(&mut self, rhs: Mat4<U>) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, U> Sub<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn sub(self, rhs: Mat4<U>) -> Self {
        Mat4(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<T, U> SubAssign<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn sub_assign(&mut self, rhs: Mat4<U>) {
        *self = *self - rhs;
    }
}

/// Adds a scalar to every element.
impl<T, U> Add<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn add(self, rhs: U) -> Self {
        let rhs = AsPrimitive::<T>::as_(rhs);
        self.map(|elem| elem + rhs)
    }
}

impl<T, U> AddAssign<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn add_assign(&mut self, rhs: U) {
        *self = *self + rhs;
    }
}

/// Subtracts a scalar from every element.
impl<T, U> Sub<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn sub(self, rhs: U) -> Self {
        let rhs = AsPrimitive::<T>::as_(rhs);
        self.map(|elem| elem - rhs)
    }
}

impl<T, U> SubAssign<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn sub_assign(&mut self, rhs: U) {
        *self = *self - rhs;
    }
}

/// Matrix * Scalar.
impl<T, U> Mul<U> for Mat4<T>
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

impl<T, U> MulAssign<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn mul_assign(&mut self, rhs: U) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
///
/// `rhs` is converted to the element type first. Dividing by a value that [is zero](crate::IsZero)
/// after that conversion is a contract violation, checked with a debug assertion.
impl<T, U> Div<U> for Mat4<T>
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

impl<T, U> DivAssign<U> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    #[track_caller]
    fn div_assign(&mut self, rhs: U) {
        *self = *self / rhs;
    }
}

/// Matrix * Column Vector.
impl<T, U> Mul<Vec4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Vec4<T>;

    fn mul(self, rhs: Vec4<U>) -> Vec4<T> {
        Vector::from_fn(|row| self.0[row].dot(rhs))
    }
}

/// Matrix * Matrix.
impl<T, U> Mul<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn mul(self, rhs: Mat4<U>) -> Self {
        let rhs = rhs.cast::<T>();
        Mat4::from_fn(|i, j| (0..4).fold(T::ZERO, |acc, k| acc + self.0[i][k] * rhs.0[k][j]))
    }
}

impl<T, U> MulAssign<Mat4<U>> for Mat4<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    fn mul_assign(&mut self, rhs: Mat4<U>) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec4, Mat4, Mat4d, Mat4f};

    fn counting() -> Mat4<i32> {
        Mat4::from_fn(|row, col| (row * 4 + col + 1) as i32)
    }

    #[test]
    fn identity_is_neutral() {
        let m = counting();
        assert_eq!(m * Mat4::<i32>::IDENTITY, m);
        assert_eq!(Mat4::<i32>::IDENTITY * m, m);
        assert_eq!(Mat4::<i32>::IDENTITY * vec4(3, -1, 4, 1), vec4(3, -1, 4, 1));
    }

    #[test]
    fn mat_vec() {
        let m = counting();
        assert_eq!(m * vec4(1, 0, 0, 0), m.column(0));
        assert_eq!(m * vec4(1, 1, 1, 1), vec4(10, 26, 42, 58));
        assert_eq!(m * vec4(0.5f32, 0.5, 0.5, 0.5), vec4(0, 0, 0, 0));
    }

    #[test]
    fn mat_mat() {
        let m = counting();
        let sq = m * m;
        assert_eq!(sq.row(0), vec4(90, 100, 110, 120));
        assert_eq!(sq.row(3), vec4(426, 484, 542, 600));
        assert_eq!((m * m.transpose()).transpose(), m * m.transpose());

        let mut acc = Mat4f::IDENTITY;
        acc *= Mat4::from_diagonal([2u8, 2, 2, 1]);
        acc *= Mat4::from_diagonal([0.5f64, 0.5, 0.5, 1.0]);
        assert_eq!(acc, Mat4f::IDENTITY);
    }

    #[test]
    fn elementwise() {
        let m = counting();
        assert_eq!((m + m)[(1, 1)], 12);
        assert_eq!(m - m, Mat4::ZERO);
        assert_eq!((m * 2)[(3, 3)], 32);
        assert_eq!((m + 1)[(0, 0)], 2);
        assert_eq!((m - 1)[(0, 0)], 0);
        assert_eq!((m / 2)[(0, 2)], 1);
        assert_eq!(-m + m, Mat4::ZERO);

        let mut f = Mat4d::IDENTITY;
        f += Mat4f::IDENTITY;
        f -= 0.5f32;
        f *= 4u8;
        f /= 2.0;
        assert_eq!(f[(0, 0)], 3.0);
        assert_eq!(f[(0, 1)], -1.0);
    }

    #[test]
    fn compare_across_types() {
        assert_eq!(Mat4::<i32>::IDENTITY, Mat4::<i32>::IDENTITY);
        assert_ne!(Mat4f::IDENTITY, Mat4f::ZERO);
        assert_approx_eq!(Mat4f::IDENTITY * 0.1 * 10.0, Mat4f::IDENTITY);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "by zero")]
    fn divide_by_zero() {
        let _ = Mat4d::IDENTITY / 0u32;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "by zero (0.25)")]
    fn divisor_truncated_to_zero() {
        let _ = Mat4::<i32>::IDENTITY / 0.25f64;
    }
}
