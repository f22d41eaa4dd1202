//! Named component access (`v.x`, `v.s`, `v.r`, ...) through `Deref` to `#[repr(C)]` views.
//!
//! Every view has exactly the layout of `[T; N]`, so the alias fields share storage with the
//! vector's elements: writing `v.r` changes `v.x` and `v[0]`.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! views {
    ($($name:ident { $($field:ident),+ })+) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }
        )+
    };
}

views! {
    XY { x, y }
    XYZ { x, y, z }
    XYZW { x, y, z, w }
    ST { s, t }
    RGB { r, g, b }
    RGBA { r, g, b, a }
}

macro_rules! deref_view {
    ($($from:ty => $to:ident;)+) => {
        $(
            impl<T> Deref for $from {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &$to<T> {
                    // SAFETY: both types are `repr(C)`/`repr(transparent)` sequences of the same
                    // number of `T`s (plus a trailing ZST).
                    unsafe { &*(self as *const Self).cast::<$to<T>>() }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut $to<T> {
                    // SAFETY: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$to<T>>() }
                }
            }
        )+
    };
}

deref_view! {
    Vector<T, 2> => XY;
    Vector<T, 3> => XYZ;
    Vector<T, 4> => XYZW;
    XY<T> => ST;
    XYZ<T> => RGB;
    XYZW<T> => RGBA;
}
