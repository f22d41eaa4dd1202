use std::{array, fmt, mem};

use num_traits::AsPrimitive;

use crate::{math, Arithmetic, Float, IsZero, MinMax, One, Zero};

mod components;
mod ops;
mod view;

pub use components::Components;
pub use view::*;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - [`vec2`], [`vec3`] and [`vec4`] create vectors from their elements.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] calls a closure with the index of each element.
/// - [`Vector::from_components`] takes a tuple of up to `N` values of *any* arithmetic types,
///   converts each to `T` and zero-fills the rest.
/// - [`Vector::cast`] converts every element to another arithmetic type.
/// - [`Default`] and [`Vector::ZERO`] produce the zero vector.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit vectors along each axis.
///
/// # Element Access
///
/// - Fields `x`, `y`, `z` and `w` (as far as the dimension allows).
/// - Alias fields sharing the same storage: `s`/`t` for 2-dimensional vectors, `r`/`g`/`b` for
///   3-dimensional vectors, `r`/`g`/`b`/`a` for 4-dimensional vectors.
/// - [`Index`] and [`IndexMut`], which panic on out-of-range indices like arrays do;
///   [`Vector::get`] and [`Vector::get_mut`] return [`None`] instead.
/// - [`Vector::as_array`], [`Vector::as_slice`], [`Vector::into_array`] and the [`AsRef`] and
///   [`AsMut`] impls.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] when `T` implements them.
///
/// # Arithmetic
///
/// Vectors can be added to and subtracted from vectors of the same dimension, and multiplied or
/// divided by scalars. The right-hand side may use a different element type: it is converted to
/// `T` before the operation, and the result always has the element type of the left-hand side.
///
/// ```
/// # use vecta_linalg::*;
/// let v = vec3(1.5f32, 2.0, 2.5) + vec3(1u8, 1, 1);
/// assert_eq!(v, vec3(2.5, 3.0, 3.5));
///
/// let w = vec2(10, 20) * 0.5f64; // 0.5 becomes 0i32 before multiplying
/// assert_eq!(w, vec2(0, 0));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a tuple of up to `N` values, each converted to `T`.
    ///
    /// Elements not covered by the tuple are zero. Supplying more than `N` values does not
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = Vec4f::from_components((1u8, 2.5f64, -3i16));
    /// assert_eq!(v, vec4(1.0, 2.5, -3.0, 0.0));
    ///
    /// let w = Vec3::<u8>::from_components((7.9f32,));
    /// assert_eq!(w, vec3(7, 0, 0));
    /// ```
    #[inline]
    pub fn from_components<C>(components: C) -> Self
    where
        T: Zero,
        C: Components<T, N>,
    {
        let mut this = Self::ZERO;
        components.write_to(&mut this.0);
        this
    }

    /// Overwrites the leading elements with the values of a tuple, converting each to `T`.
    ///
    /// Elements not covered by the tuple keep their value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let mut v = vec4(1, 2, 3, 4);
    /// v.set((9.0f32, 8u64));
    /// assert_eq!(v, vec4(9, 8, 3, 4));
    /// ```
    #[inline]
    pub fn set<C>(&mut self, components: C) -> &mut Self
    where
        C: Components<T, N>,
    {
        components.write_to(&mut self.0);
        self
    }

    /// Converts every element to `U` with `as` semantics (truncating, saturating and rounding
    /// where the target type demands it).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec3(1.9f32, -0.5, 300.0).cast::<u8>(), vec3(1, 0, 255));
    /// assert_eq!(vec2(3u16, 4).cast::<f64>(), vec2(3.0, 4.0));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(T::as_)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(v, vec2((1, 'a'), (2, 'b')));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= N`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Moves the value out of `self`, leaving the zero vector in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let mut a = vec3(1, 2, 3);
    /// let b = a.take();
    /// assert_eq!(b, vec3(1, 2, 3));
    /// assert_eq!(a, Vec3::ZERO);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self
    where
        T: Zero,
    {
        mem::replace(self, Self::ZERO)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// Elements of `other` are converted to `T` first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(vec2(0.5f32, 1.0).dot(vec2(2u8, 3)), 4.0);
    /// ```
    pub fn dot<U>(self, other: Vector<U, N>) -> T
    where
        T: Arithmetic,
        U: Arithmetic + AsPrimitive<T>,
    {
        self.zip(other)
            .into_array()
            .into_iter()
            .fold(T::ZERO, |acc, (a, b)| acc + a * AsPrimitive::<T>::as_(b))
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec2(3, 4).length_squared(), 25);
    /// ```
    #[inline]
    pub fn length_squared(self) -> T
    where
        T: Arithmetic,
    {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// Always uses a precise square root; integer vectors get a truncated length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(vec2(1, 1).length(), 1);
    /// ```
    #[inline]
    pub fn length(self) -> T
    where
        T: Arithmetic,
    {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction. Normalizing it is a contract violation that trips a
    /// debug assertion; use [`Vector::try_normalize`] when the input may be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn normalize(self) -> Self
    where
        T: Arithmetic,
    {
        self / self.length()
    }

    /// Normalizes this vector, or returns [`None`] if its length [is zero](IsZero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(vec2(0.0, -1.0)));
    /// assert_eq!(Vec3f::ZERO.try_normalize(), None);
    /// assert_eq!(vec2(1e-16f64, 0.0).try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self>
    where
        T: Arithmetic,
    {
        let length = self.length();
        if length.is_zero() {
            None
        } else {
            Some(self / length)
        }
    }

    /// Divides each element by `rhs`, or returns [`None`] if `rhs` [is zero](IsZero) once converted
    /// to the element type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec2(4, 8).checked_div(2.0f32), Some(vec2(2, 4)));
    /// assert_eq!(vec2(4.0, 8.0).checked_div(0u8), None);
    /// assert_eq!(vec2(4, 8).checked_div(0.5f32), None);
    /// ```
    pub fn checked_div<U>(self, rhs: U) -> Option<Self>
    where
        T: Arithmetic,
        U: Arithmetic + AsPrimitive<T>,
    {
        let rhs = AsPrimitive::<T>::as_(rhs);
        if rhs.is_zero() {
            None
        } else {
            Some(self.map(|elem| elem / rhs))
        }
    }

    /// Linearly interpolates between `self` and `other` (see [`math::lerp`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(vec2(0, 0).lerp(vec2(4, 8), 0.25f32), vec2(1.0, 2.0));
    /// ```
    #[inline]
    pub fn lerp<U, F>(self, other: Vector<U, N>, t: F) -> Vector<F, N>
    where
        T: Arithmetic + AsPrimitive<F>,
        U: Arithmetic + AsPrimitive<F>,
        F: Float,
    {
        math::lerp(self, other, t)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Element-wise clamp of `self` into the range `min..=max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec3(-5, 5, 50).clamp(Vector::splat(0), Vector::splat(10));
    /// assert_eq!(v, vec3(0, 5, 10));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        vec3(x, y, value)
    }

    /// Computes the 2D cross product (also known as the *perpendicular dot product*).
    ///
    /// This is the Z coordinate of the 3D cross product of both vectors extended with `z = 0`,
    /// which is the only non-zero coordinate of that product. It is positive when `other` lies
    /// counterclockwise of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.cross(Vec2f::X), -1.0);
    /// assert_eq!(vec2(2, 3).cross(vec2(4u8, 5)), -2);
    /// ```
    pub fn cross<U>(self, other: Vector<U, 2>) -> T
    where
        T: Arithmetic,
        U: Arithmetic + AsPrimitive<T>,
    {
        let [a1, a2] = self.into_array();
        let [b1, b2] = other.cast::<T>().into_array();
        a1 * b2 - a2 * b1
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        vec4(x, y, z, value)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the operands negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(vec3(1.0f32, 0.0, 0.0).cross(vec3(0u8, 1, 0)), z);
    /// ```
    pub fn cross<U>(self, other: Vector<U, 3>) -> Self
    where
        T: Arithmetic,
        U: Arithmetic + AsPrimitive<T>,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.cast::<T>().into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        vec3(x, y, z)
    }
}

impl<T: IsZero, const N: usize> IsZero for Vector<T, N> {
    fn is_zero(&self) -> bool {
        self.0.iter().all(T::is_zero)
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
