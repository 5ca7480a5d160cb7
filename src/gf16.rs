// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar GF(2^4) arithmetic as a degree-2 extension of GF(2^2).
//!
//! An element is a pair of GF(2^2) coordinates over the normal basis
//! {alpha^8, alpha^2} of GF(2^4)/GF(2^2): bits `[3:2]` hold the high
//! coordinate and bits `[1:0]` the low one.

use crate::gf4;
use crate::packing::{join_gf16, split_gf16};

/// The multiplicative identity.
pub const ONE: u8 = 0xf;
/// The tower constant nu = N^2 * alpha^2 that scales GF(2^4) squares one
/// level up.
pub const NU: u8 = 0x1;

/// Scaled cross term N * (a+b)(c+d) of the tower product.
///
/// On its own this is not a product of `x` and `y`; [`multiply`] folds it
/// into both output coordinates.
#[inline]
pub const fn cross_term(x: u8, y: u8) -> u8 {
    let (a, b) = split_gf16(x);
    let (c, d) = split_gf16(y);
    gf4::scale_by_n(gf4::multiply(a ^ b, c ^ d))
}

/// Multiply two GF(2^4) elements.
#[inline]
pub const fn multiply(x: u8, y: u8) -> u8 {
    let (a, b) = split_gf16(x);
    let (c, d) = split_gf16(y);
    let e = cross_term(x, y);
    let p = gf4::multiply(a, c) ^ e;
    let q = gf4::multiply(b, d) ^ e;
    join_gf16(p, q)
}

/// Square a GF(2^4) element and scale the result by [`NU`].
#[inline]
pub const fn square_and_scale(x: u8) -> u8 {
    let (a, b) = split_gf16(x);
    let p = gf4::square(a ^ b);
    let q = gf4::scale_by_n_squared(gf4::square(b));
    join_gf16(p, q)
}

/// Compute the multiplicative inverse of a GF(2^4) element.
///
/// Zero maps to zero.
#[inline]
pub const fn invert(x: u8) -> u8 {
    let (a, b) = split_gf16(x);
    let c = gf4::scale_by_n(gf4::square(a ^ b));
    let d = gf4::multiply(a, b);
    // Norm inverse; squaring inverts in GF(2^2)
    let e = gf4::square(c ^ d);
    let p = gf4::multiply(e, b);
    let q = gf4::multiply(e, a);
    join_gf16(p, q)
}
