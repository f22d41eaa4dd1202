use std::{array, fmt, mem};

use num_traits::AsPrimitive;

use crate::{Arithmetic, IsZero, One, Vec4, Vector, Zero};

mod ops;
mod transform;

/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major 4x4 matrix with element type `T`, stored as four row [`Vec4`]s.
///
/// Vectors are treated as columns and multiplied on the right (`m * v`), so transforms compose
/// right to left: `projection * view * model` applies `model` first. Affine transforms keep their
/// translation in the last column and `(0, 0, 0, 1)` in the last row.
///
/// # Construction
///
/// - [`Mat4::from_rows`] and [`Mat4::from_columns`] take four rows or columns (arrays or
///   vectors).
/// - [`Mat4::from_fn`] invokes a closure with the row and column of each element.
/// - [`Mat4::from_diagonal`] fills the diagonal and zeroes everything else.
/// - [`Mat4::ZERO`], [`Mat4::IDENTITY`] (or [`Mat4::identity`]) and [`Default`] (zero).
/// - The transform builders [`Mat4::translate`], [`Mat4::scale`], [`Mat4::rotate_x`],
///   [`Mat4::view`], [`Mat4::projection`] and friends.
///
/// # Element Access
///
/// `m[row]` yields a row vector and `m[(row, col)]` a single element. Both panic when out of
/// bounds; [`Mat4::get`] and [`Mat4::get_mut`] return [`Option`]s instead.
///
/// ```
/// # use vecta_linalg::*;
/// let mut m = Mat4::<i32>::IDENTITY;
/// m[2][3] = 7;
/// m[(0, 1)] = 5;
/// assert_eq!(m.row(0), vec4(1, 5, 0, 0));
/// assert_eq!(m.column(3), vec4(0, 0, 7, 1));
/// assert_eq!(m.get(4, 0), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Mat4<T>([Vec4<T>; 4]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T: Zero> Mat4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; 4]);
}

impl<T: Zero + One> Mat4<T> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = Self([Vec4::X, Vec4::Y, Vec4::Z, Vec4::W]);

    /// Returns a copy of [`Mat4::IDENTITY`].
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T> Mat4<T> {
    /// Creates a [`Mat4`] from its four rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4::from_rows([
    ///     [1, 2, 3, 4],
    ///     [5, 6, 7, 8],
    ///     [9, 10, 11, 12],
    ///     [13, 14, 15, 16],
    /// ]);
    /// assert_eq!(m[(1, 2)], 7);
    /// assert_eq!(m[3], vec4(13, 14, 15, 16));
    /// ```
    pub fn from_rows<R: Into<Vec4<T>>>(rows: [R; 4]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Mat4`] from its four columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let rows = Mat4::from_rows([
    ///     [1, 2, 0, 0],
    ///     [3, 4, 0, 0],
    ///     [0, 0, 1, 0],
    ///     [0, 0, 0, 1],
    /// ]);
    /// let columns = Mat4::from_columns([
    ///     vec4(1, 3, 0, 0),
    ///     vec4(2, 4, 0, 0),
    ///     Vec4::Z,
    ///     Vec4::W,
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<C: Into<Vec4<T>>>(columns: [C; 4]) -> Self
    where
        T: Copy,
    {
        Self::from_rows(columns).transpose()
    }

    /// Creates a [`Mat4`] by invoking a closure with the row and column of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(m[(2, 1)], 21);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with the given diagonal and zero everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4::from_diagonal([2, 3, 4, 1]);
    /// assert_eq!(m * vec4(1, 1, 1, 1), vec4(2, 3, 4, 1));
    /// ```
    pub fn from_diagonal<D: Into<Vec4<T>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Converts every element to `U` with `as` semantics.
    pub fn cast<U>(self) -> Mat4<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Mat4(self.0.map(Vector::cast))
    }

    /// Overwrites all four rows, converting their elements to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let mut m = Mat4f::ZERO;
    /// m.set_rows([[1u8, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]);
    /// assert_eq!(m, Mat4f::IDENTITY);
    /// ```
    pub fn set_rows<R, U>(&mut self, rows: [R; 4]) -> &mut Self
    where
        R: Into<Vec4<U>>,
        U: AsPrimitive<T>,
        T: Copy + 'static,
    {
        *self = Mat4::from_rows(rows).cast();
        self
    }

    /// Returns a copy of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4<T>
    where
        T: Copy,
    {
        self.0[index]
    }

    /// Returns a copy of column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    #[inline]
    pub fn column(&self, index: usize) -> Vec4<T>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns the elements on the diagonal.
    #[inline]
    pub fn diagonal(&self) -> Vec4<T>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns a reference to the four rows.
    #[inline]
    pub fn rows(&self) -> &[Vec4<T>; 4] {
        &self.0
    }

    /// Converts this matrix into its four rows.
    #[inline]
    pub fn into_rows(self) -> [Vec4<T>; 4] {
        self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Mat4<U>
    where
        F: FnMut(T) -> U,
    {
        Mat4(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4::from_fn(|row, col| row * 4 + col);
    /// assert_eq!(m.transpose()[(3, 0)], 3);
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns the sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Arithmetic,
    {
        self.0
            .iter()
            .enumerate()
            .fold(T::ZERO, |acc, (i, row)| acc + row[i])
    }

    /// Moves the value out of `self`, leaving the zero matrix in its place.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        T: Zero,
    {
        mem::replace(self, Self::ZERO)
    }
}

impl<T: IsZero> IsZero for Mat4<T> {
    fn is_zero(&self) -> bool {
        self.0.iter().all(Vector::is_zero)
    }
}

impl<T: Zero> Default for Mat4<T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> From<[[T; 4]; 4]> for Mat4<T> {
    /// Interprets the outer array as rows.
    #[inline]
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> From<Mat4<T>> for [[T; 4]; 4] {
    #[inline]
    fn from(m: Mat4<T>) -> Self {
        m.0.map(Vector::into_array)
    }
}

impl<T: fmt::Debug> fmt::Debug for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a Vec4<T>);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.as_slice().iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(FormatRow))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{math, vec4, Mat4f};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Mat4f::default(), Mat4f::ZERO);
        assert_eq!(Mat4::<i32>::identity(), Mat4::IDENTITY);
        assert_eq!(Mat4::<u8>::IDENTITY.diagonal(), vec4(1, 1, 1, 1));
        assert_eq!(Mat4::<u8>::IDENTITY.trace(), 4);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(Mat4f::IDENTITY[(row, col)], expected);
            }
        }
    }

    #[test]
    fn rows_and_columns() {
        let m = Mat4::from_fn(|row, col| (row * 4 + col) as i32);
        assert_eq!(m.row(1), vec4(4, 5, 6, 7));
        assert_eq!(m.column(1), vec4(1, 5, 9, 13));
        assert_eq!(m.diagonal(), vec4(0, 5, 10, 15));
        assert_eq!(m.trace(), 30);
        assert_eq!(m.transpose().row(1), m.column(1));
        assert_eq!(Mat4::from_columns(m.into_rows()), m.transpose());
        assert_eq!(<[[i32; 4]; 4]>::from(m)[2], [8, 9, 10, 11]);
        assert_eq!(Mat4::from(<[[i32; 4]; 4]>::from(m)), m);
    }

    #[test]
    fn checked_access() {
        let mut m = Mat4::<i64>::IDENTITY;
        assert_eq!(m.get(3, 3), Some(&1));
        assert_eq!(m.get(0, 4), None);
        assert_eq!(m.get(4, 0), None);
        if let Some(elem) = m.get_mut(0, 3) {
            *elem = -4;
        }
        assert_eq!(m.get_mut(9, 9), None);
        assert_eq!(m[0], vec4(1, 0, 0, -4));
    }

    #[test]
    #[should_panic]
    fn row_out_of_range() {
        let m = Mat4f::IDENTITY;
        let i = m.rows().len();
        let _ = m[i];
    }

    #[test]
    #[should_panic]
    fn element_out_of_range() {
        let m = Mat4f::IDENTITY;
        let col = m.rows().len();
        let _ = m[(0, col)];
    }

    #[test]
    fn cast_and_set() {
        let m = Mat4::from_diagonal([1.9f64, -2.5, 3.0, 1.0]);
        assert_eq!(m.cast::<i32>(), Mat4::from_diagonal([1, -2, 3, 1]));

        let mut n = Mat4::<i16>::ZERO;
        n.set_rows([vec4(0.5f32, 1.5, 2.5, 3.5); 4]);
        assert_eq!(n.row(3), vec4(0, 1, 2, 3));
    }

    #[test]
    fn map() {
        let m = Mat4f::IDENTITY.map(|e| e * 3.0 + 1.0);
        assert_eq!(m.diagonal(), vec4(4.0, 4.0, 4.0, 4.0));
        assert_eq!(m[(0, 1)], 1.0);
    }

    #[test]
    fn take() {
        let mut a = Mat4d::IDENTITY;
        let b = a.take();
        assert_eq!(b, Mat4d::IDENTITY);
        assert_eq!(a, Mat4d::ZERO);
        assert!(math::is_zero(&a));
        assert!(!math::is_zero(&b));
    }

    #[test]
    fn fmt() {
        let m = Mat4::from_diagonal([1, 2, 3, 4]);
        assert_eq!(
            format!("{m:?}"),
            "[[1, 0, 0, 0], [0, 2, 0, 0], [0, 0, 3, 0], [0, 0, 0, 4]]"
        );
    }

    #[test]
    fn pod() {
        let m = Mat4f::IDENTITY;
        let flat: &[f32; 16] = bytemuck::cast_ref(&m);
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[4], 0.0);
        assert_eq!(flat[5], 1.0);
        assert_eq!(flat[15], 1.0);
    }
}
