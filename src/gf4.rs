// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar GF(2^2) arithmetic in the normal basis {N, N^2}, with N^2 = N + 1.
//!
//! Bit 1 holds the N coordinate and bit 0 the N^2 coordinate, so the
//! multiplicative identity N + N^2 packs as `0b11`.

use crate::packing::{join_gf4, split_gf4};

/// The multiplicative identity.
pub const ONE: u8 = 0b11;
/// The normal-basis generator N.
pub const N: u8 = 0b10;
/// N^2, which is also N^-1.
pub const N_SQUARED: u8 = 0b01;

/// Multiply two GF(2^2) elements.
#[inline]
pub const fn multiply(x: u8, y: u8) -> u8 {
    let (a, b) = split_gf4(x);
    let (c, d) = split_gf4(y);
    // Shared cross term (a+b)(c+d)
    let e = (a ^ b) & (c ^ d);
    join_gf4((a & c) ^ e, (b & d) ^ e)
}

/// Multiply a GF(2^2) element by N.
#[inline]
pub const fn scale_by_n(x: u8) -> u8 {
    let (a, b) = split_gf4(x);
    join_gf4(b, a ^ b)
}

/// Multiply a GF(2^2) element by N^2.
#[inline]
pub const fn scale_by_n_squared(x: u8) -> u8 {
    let (a, b) = split_gf4(x);
    join_gf4(a ^ b, a)
}

/// Square a GF(2^2) element.
///
/// Frobenius is a cyclic shift of normal-basis coordinates, so this is a
/// swap of the two bits. In GF(2^2) it also computes the inverse of any
/// nonzero element, since x^2 = x^-1 when x^3 = 1.
#[inline]
pub const fn square(x: u8) -> u8 {
    let (a, b) = split_gf4(x);
    join_gf4(b, a)
}
