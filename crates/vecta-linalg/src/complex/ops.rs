use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::{approx::ApproxEq, Arithmetic};

use super::Complex;

impl<T, U> PartialEq<Complex<U>> for Complex<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Complex<U>) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl<T> Eq for Complex<T> where T: Eq {}

impl<T> ApproxEq for Complex<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.re.abs_diff_eq(&other.re, abs_tolerance)
            && self.im.abs_diff_eq(&other.im, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.re.rel_diff_eq(&other.re, rel_tolerance)
            && self.im.rel_diff_eq(&other.im, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.re.ulps_diff_eq(&other.re, ulps_tolerance)
            && self.im.ulps_diff_eq(&other.im, ulps_tolerance)
    }
}

impl<T> Neg for Complex<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T, U> Add<Complex<U>> for Complex<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn add(self, rhs: Complex<U>) -> Self {
        let rhs = rhs.cast::<T>();
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T, U> Sub<Complex<U>> for Complex<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn sub(self, rhs: Complex<U>) -> Self {
        let rhs = rhs.cast::<T>();
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T, U> Mul<Complex<U>> for Complex<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn mul(self, rhs: Complex<U>) -> Self {
        let (a, b) = (self.re, self.im);
        let Complex { re: c, im: d } = rhs.cast::<T>();
        Complex {
            re: a * c - b * d,
            im: a * d + b * c,
        }
    }
}

/// Complex division.
///
/// The divisor is not checked: dividing by zero yields infinities or NaN for floating-point parts
/// and panics for integer parts, just like the primitive division does.
impl<T, U> Div<Complex<U>> for Complex<T>
where
    T: Arithmetic,
    U: Arithmetic + AsPrimitive<T>,
{
    type Output = Self;

    fn div(self, rhs: Complex<U>) -> Self {
        let (a, b) = (self.re, self.im);
        let rhs = rhs.cast::<T>();
        let (c, d) = (rhs.re, rhs.im);
        let denom = rhs.norm_sqr();
        Complex {
            re: (a * c + b * d) / denom,
            im: (b * c - a * d) / denom,
        }
    }
}

macro_rules! assign_ops {
    ($($trait:ident :: $method:ident => $op:tt;)+) => {
        $(
            impl<T, U> $trait<Complex<U>> for Complex<T>
            where
                T: Arithmetic,
                U: Arithmetic + AsPrimitive<T>,
            {
                fn $method(&mut self, rhs: Complex<U>) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

assign_ops! {
    AddAssign::add_assign => +;
    SubAssign::sub_assign => -;
    MulAssign::mul_assign => *;
    DivAssign::div_assign => /;
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Complex};

    #[test]
    fn arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(-2.0, -2.0));
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
        assert_eq!((a * b) / b, a);
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(Complex::<f64>::I * Complex::<f64>::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(Complex::new(10, 5) / Complex::new(1, 2), Complex::new(4, -3));
        assert_eq!(Complex::new(7, 0) / Complex::new(2, 0), Complex::new(3, 0));
    }

    #[test]
    fn mixed_types() {
        assert_eq!(Complex::new(1.0f64, 1.0) + Complex::new(2i32, 3), Complex::new(3.0, 4.0));
        assert_eq!(Complex::new(5u8, 5) - Complex::new(1.9f32, 0.5), Complex::new(4, 5));
        assert_eq!(Complex::new(2i64, 0) * Complex::new(0.5f64, 1.0), Complex::new(0, 2));
    }

    #[test]
    fn compound_assignment() {
        let mut z = Complex::new(1.0f32, 1.0);
        z += Complex::new(1u8, 0);
        z *= Complex::new(0.0f64, 1.0);
        assert_eq!(z, Complex::new(-1.0, 2.0));
        z -= Complex::new(-1, 2);
        assert_eq!(z, Complex::ZERO);
        z = Complex::new(4.0, 2.0);
        z /= Complex::new(2.0, 0.0);
        assert_approx_eq!(z, Complex::new(2.0, 1.0));
    }

    #[test]
    fn float_division_by_zero_is_unguarded() {
        let z = Complex::new(1.0f64, 1.0) / Complex::new(0.0, 0.0);
        assert!(z.real().is_nan());
        assert!(z.imaginary().is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let _ = Complex::new(1, 1) / Complex::<i32>::ZERO;
    }
}
