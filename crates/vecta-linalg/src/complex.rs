mod ops;

use std::{fmt, mem};

use num_traits::AsPrimitive;

use crate::{math, Arithmetic, Float, IsZero, One, Zero};

/// A complex number `re + im·i` with real and imaginary parts of type `T`.
///
/// # Examples
///
/// ```
/// # use vecta_linalg::*;
/// let z = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
/// assert_eq!(z, Complex::new(-5.0, 10.0));
/// assert_eq!(z.to_string(), "-5+10i");
/// assert_eq!(Complex::<i32>::I * Complex::<i32>::I, Complex::new(-1, 0));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(C)]
pub struct Complex<T> {
    re: T,
    im: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> Complex<T> {
    /// `0 + 0i`.
    pub const ZERO: Self = Self {
        re: T::ZERO,
        im: T::ZERO,
    };
}

impl<T: Zero + One> Complex<T> {
    /// The imaginary unit, `0 + 1i`.
    pub const I: Self = Self {
        re: T::ZERO,
        im: T::ONE,
    };
}

impl<T> Complex<T> {
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Returns the real part.
    #[inline]
    pub fn real(&self) -> T
    where
        T: Copy,
    {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub fn imaginary(&self) -> T
    where
        T: Copy,
    {
        self.im
    }

    #[inline]
    pub fn set_real(&mut self, re: T) -> &mut Self {
        self.re = re;
        self
    }

    #[inline]
    pub fn set_imaginary(&mut self, im: T) -> &mut Self {
        self.im = im;
        self
    }

    /// Converts both parts to `U` with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// assert_eq!(Complex::new(2.9f32, -1.5).cast::<i8>(), Complex::new(2, -1));
    /// ```
    pub fn cast<U>(self) -> Complex<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Complex {
            re: self.re.as_(),
            im: self.im.as_(),
        }
    }

    /// Returns the complex conjugate `re - im·i`.
    pub fn conjugate(self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Returns the squared magnitude `re² + im²`.
    pub fn norm_sqr(&self) -> T
    where
        T: Arithmetic,
    {
        math::square(self.re) + math::square(self.im)
    }

    /// Returns the magnitude (absolute value) of this complex number.
    #[doc(alias = "abs")]
    pub fn norm(&self) -> T
    where
        T: Float,
    {
        self.norm_sqr().sqrt()
    }

    /// Moves the value out of `self`, leaving zero in its place.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        T: Zero,
    {
        mem::replace(self, Self::ZERO)
    }
}

impl<T: IsZero> IsZero for Complex<T> {
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Zero> Default for Complex<T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self { re, im }
    }
}

impl<T> From<Complex<T>> for (T, T) {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        (z.re, z.im)
    }
}

impl<T: fmt::Debug> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Complex")
            .field(&self.re)
            .field(&self.im)
            .finish()
    }
}

/// Formats as `a+bi` or `a-bi`.
impl<T: Arithmetic> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0.0` has to print as `a-0i`, so the sign is read from the `f64` value.
        if AsPrimitive::<f64>::as_(self.im).is_sign_negative() {
            write!(f, "{}-{}i", self.re, math::abs(self.im))
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math;

    use super::*;

    #[test]
    fn accessors() {
        let mut z = Complex::new(1, 2);
        assert_eq!((z.real(), z.imaginary()), (1, 2));
        z.set_real(-3).set_imaginary(4);
        assert_eq!(z, Complex::new(-3, 4));
        assert_eq!(<(i32, i32)>::from(z), (-3, 4));
        assert_eq!(Complex::from((0.5, 0.25)), Complex::new(0.5, 0.25));
        assert_eq!(Complex::<f32>::default(), Complex::ZERO);
    }

    #[test]
    fn conjugate_and_norm() {
        let z = Complex::new(3.0f64, 4.0);
        assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
        assert_eq!(z.norm_sqr(), 25.0);
        assert_eq!(z.norm(), 5.0);
        assert_eq!(Complex::new(3u8, 4).norm_sqr(), 25);
    }

    #[test]
    fn take() {
        let mut z = Complex::new(1.5f32, -2.0);
        let moved = z.take();
        assert_eq!(moved, Complex::new(1.5, -2.0));
        assert_eq!(z, Complex::ZERO);
        assert!(math::is_zero(&z));
    }

    #[test]
    fn is_zero() {
        assert!(Complex::new(1e-7f32, -1e-7).is_zero());
        assert!(!Complex::new(1e-7f64, 0.0).is_zero());
        assert!(!Complex::new(0, 1).is_zero());
        assert!(Complex::<u64>::ZERO.is_zero());
    }

    #[test]
    fn fmt() {
        assert_eq!(Complex::new(3, 4).to_string(), "3+4i");
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5-2i");
        assert_eq!(Complex::new(0u8, 0).to_string(), "0+0i");
        assert_eq!(Complex::new(1.0f32, -0.0).to_string(), "1-0i");
        assert_eq!(Complex::new(-2i64, -7).to_string(), "-2-7i");
        assert_eq!(format!("{:?}", Complex::new(1, -1)), "Complex(1, -1)");
    }

    #[test]
    fn pod() {
        let parts: [f32; 4] = bytemuck::cast([Complex::new(1.0f32, 2.0), Complex::I]);
        assert_eq!(parts, [1.0, 2.0, 0.0, 1.0]);
    }
}
