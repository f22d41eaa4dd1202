//! Small, fixed-size linear algebra over any primitive number type.
//!
//! This crate provides 2-, 3- and 4-dimensional vectors ([`Vector`]), a row-major 4x4 matrix
//! ([`Mat4`]) with the usual transform builders, and [`Complex`] numbers. All of them are generic
//! over an [`Arithmetic`] element type: the primitive integers and floats.
//!
//! # Mixed element types
//!
//! Binary operators accept right-hand operands with a *different* arithmetic element type. The
//! right-hand side is converted to the element type of the left-hand side first (with `as`
//! semantics), and the result has the left-hand element type:
//!
//! ```
//! # use vecta_linalg::*;
//! let v = vec3(1.0f32, 2.0, 3.0) + vec3(1u8, 1, 1);
//! assert_eq!(v, vec3(2.0f32, 3.0, 4.0));
//!
//! let w = vec2(10u8, 20) - vec2(2.9f64, 3.9);
//! assert_eq!(w, vec2(8u8, 17));
//! ```
//!
//! Types that aren't arithmetic are rejected at compile time:
//!
//! ```compile_fail
//! # use vecta_linalg::*;
//! let v = vec2("a", "b") + vec2(1, 2);
//! ```
//!
//! # Contracts
//!
//! Out-of-bounds indexing always panics. Dividing a vector or matrix by a scalar that
//! [is zero](IsZero) is checked with a debug assertion. Wherever a caller might want to handle
//! these cases, a checked method returning [`Option`] exists ([`Vector::get`],
//! [`Vector::checked_div`], [`Vector::try_normalize`], [`Mat4::get`]).
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are fixed at compile time, with const generics for vectors.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD paths, no decompositions or inversion, no serialization.

pub mod approx;
mod complex;
pub mod math;
mod matrix;
mod traits;
mod vector;

pub use complex::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
