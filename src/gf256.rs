// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar GF(2^8) arithmetic as a degree-2 extension of GF(2^4).
//!
//! An element is a pair of GF(2^4) coordinates over the normal basis
//! {d^16, d} of GF(2^8)/GF(2^4): the high nibble holds the d^16
//! coordinate and the low nibble the d coordinate.

use crate::gf16;
use crate::packing::{join_gf256, split_gf256};

/// The multiplicative identity.
pub const ONE: u8 = 0xff;

/// Multiply two GF(2^8) elements.
#[inline]
pub const fn multiply(x: u8, y: u8) -> u8 {
    let (a, b) = split_gf256(x);
    let (c, d) = split_gf256(y);
    let e = gf16::multiply(gf16::multiply(a ^ b, c ^ d), gf16::NU);
    let p = gf16::multiply(a, c) ^ e;
    let q = gf16::multiply(b, d) ^ e;
    join_gf256(p, q)
}

/// Square a GF(2^8) element.
#[inline]
pub const fn square(x: u8) -> u8 {
    multiply(x, x)
}

/// Compute the multiplicative inverse of a GF(2^8) element.
///
/// The inverse is reduced to one GF(2^4) inversion of the norm
/// `nu * (a+b)^2 + a*b`. Zero maps to zero, which is the usual S-box
/// convention. No branches and no table lookups.
#[inline]
pub const fn invert(x: u8) -> u8 {
    let (a, b) = split_gf256(x);
    let c = gf16::square_and_scale(a ^ b);
    let d = gf16::multiply(a, b);
    let e = gf16::invert(c ^ d);
    let p = gf16::multiply(e, b);
    let q = gf16::multiply(e, a);
    join_gf256(p, q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_nonzero() {
        for x in 1..=255u8 {
            assert_eq!(multiply(x, invert(x)), ONE, "x = {x:#04x}");
        }
    }

    #[test]
    fn only_zero_and_one_are_self_inverse() {
        let fixed: Vec<u8> = (0..=255u8).filter(|&x| invert(x) == x).collect();
        assert_eq!(fixed, vec![0, ONE]);
    }

    #[test]
    fn square_is_additive() {
        for x in 0..=255u8 {
            for y in (0..=255u8).step_by(17) {
                assert_eq!(square(x ^ y), square(x) ^ square(y));
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(invert(0x01), 0x60);
        assert_eq!(invert(0x02), 0xd0);
        assert_eq!(invert(0x53), 0x35);
        assert_eq!(invert(0xca), 0xe1);
        assert_eq!(multiply(0x53, 0xca), 0xac);
        assert_eq!(multiply(0x53, 0x10), 0xdf);
    }
}
