// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bit positions of packed tower elements.
//!
//! A GF(2^2) element sits in bits `[1:0]`, a GF(2^4) element in bits `[3:0]`
//! with its high GF(2^2) half in `[3:2]`, and a GF(2^8) element in bits
//! `[7:0]` with its high GF(2^4) half in `[7:4]`.

/// Width of a GF(2^2) element in bits.
pub const GF4_BITS: u32 = 2;
/// Width of a GF(2^4) element in bits.
pub const GF16_BITS: u32 = 4;
/// Width of a GF(2^8) element in bits.
pub const GF256_BITS: u32 = 8;

/// Mask selecting a single normal-basis coordinate over GF(2).
pub const GF2_MASK: u8 = 0x1;
/// Mask selecting a GF(2^2) element.
pub const GF4_MASK: u8 = 0x3;
/// Mask selecting a GF(2^4) element.
pub const GF16_MASK: u8 = 0xf;
/// Mask selecting a GF(2^8) element.
pub const GF256_MASK: u8 = 0xff;

/// Split a GF(2^2) element into its coordinate pair `(a, b)`.
#[inline]
pub const fn split_gf4(x: u8) -> (u8, u8) {
    let x = x & GF4_MASK;
    (x >> 1, x & GF2_MASK)
}

/// Pack a coordinate pair back into a GF(2^2) element.
#[inline]
pub const fn join_gf4(a: u8, b: u8) -> u8 {
    ((a & GF2_MASK) << 1) | (b & GF2_MASK)
}

/// Split a GF(2^4) element into its high and low GF(2^2) halves.
#[inline]
pub const fn split_gf16(x: u8) -> (u8, u8) {
    let x = x & GF16_MASK;
    (x >> GF4_BITS, x & GF4_MASK)
}

/// Pack two GF(2^2) halves into a GF(2^4) element.
#[inline]
pub const fn join_gf16(hi: u8, lo: u8) -> u8 {
    ((hi & GF4_MASK) << GF4_BITS) | (lo & GF4_MASK)
}

/// Split a GF(2^8) element into its high and low GF(2^4) halves.
#[inline]
pub const fn split_gf256(x: u8) -> (u8, u8) {
    (x >> GF16_BITS, x & GF16_MASK)
}

/// Pack two GF(2^4) halves into a GF(2^8) element.
#[inline]
pub const fn join_gf256(hi: u8, lo: u8) -> u8 {
    ((hi & GF16_MASK) << GF16_BITS) | (lo & GF16_MASK)
}
