use num_traits::AsPrimitive;

use crate::Arithmetic;

/// A tuple of 1 to `N` arithmetic values that can be written into the leading components of an
/// `N`-element vector.
///
/// Each tuple element may have its own type; it is converted to `T` with `as` semantics. This is
/// what [`Vector::from_components`] and [`Vector::set`] accept.
///
/// Tuples with more than `N` elements do not implement `Components<T, N>`, so supplying too many
/// values is a compile-time error:
///
/// ```compile_fail
/// # use vecta_linalg::*;
/// let v = Vec2f::from_components((1, 2, 3));
/// ```
///
/// [`Vector::from_components`]: crate::Vector::from_components
/// [`Vector::set`]: crate::Vector::set
pub trait Components<T, const N: usize> {
    /// Overwrites the first `k` elements of `dest` with the `k` tuple values.
    fn write_to(self, dest: &mut [T; N]);
}

macro_rules! components {
    ($n:literal: $( ($($u:ident $idx:tt),+) )+) => {
        $(
            impl<T, $($u),+> Components<T, $n> for ($($u,)+)
            where
                T: Arithmetic,
                $( $u: Arithmetic + AsPrimitive<T>, )+
            {
                #[inline]
                fn write_to(self, dest: &mut [T; $n]) {
                    $( dest[$idx] = AsPrimitive::<T>::as_(self.$idx); )+
                }
            }
        )+
    };
}

components!(2: (A 0) (A 0, B 1));
components!(3: (A 0) (A 0, B 1) (A 0, B 1, C 2));
components!(4: (A 0) (A 0, B 1) (A 0, B 1, C 2) (A 0, B 1, C 2, D 3));
