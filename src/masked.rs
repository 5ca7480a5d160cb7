// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share-based evaluation of the tower inversion.
//!
//! A secret element is split into `S` Boolean shares whose XOR is the
//! element, giving masking of order `S - 1`. Every tower operation other than
//! the AND inside [`gf4::multiply`](crate::gf4::multiply) is GF(2)-linear, so
//! it is applied to each share independently. The AND is replaced by a
//! domain-oriented masking (DOM) gadget that draws fresh randomness for every
//! pair of share domains.
//!
//! # Example
//!
//! ```
//! use tower_gf::gf256_invert;
//! use tower_gf::masked::{self, Shares};
//!
//! let mut rng = rand::rng();
//! let x = Shares::<3>::share(0x53, &mut rng);
//! let inv = masked::gf256_invert(&x, &mut rng);
//! assert_eq!(inv.recombine(), gf256_invert(0x53));
//! ```

use core::ops::BitXor;

use rand::CryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::packing::{join_gf4, join_gf16, join_gf256, split_gf4, split_gf16, split_gf256};
use crate::{gf4, gf16};

/// A packed tower element held as `S` Boolean shares.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Shares<const S: usize>([u8; S]);

impl<const S: usize> core::fmt::Debug for Shares<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shares")
            .field("count", &S)
            .field("shares", &"**FILTERED**")
            .finish()
    }
}

impl<const S: usize> Shares<S> {
    /// Masking order, one less than the number of shares.
    pub const ORDER: usize = S - 1;

    /// Split `value` into `S` fresh shares.
    pub fn share(value: u8, rng: &mut impl CryptoRng) -> Self {
        const { assert!(S > 0, "at least one share is required") };
        let mut shares = [0u8; S];
        rng.fill_bytes(&mut shares[..S - 1]);
        shares[S - 1] = shares[..S - 1].iter().fold(value, |acc, s| acc ^ s);
        Self(shares)
    }

    /// Wrap an existing sharing.
    pub const fn from_shares(shares: [u8; S]) -> Self {
        Self(shares)
    }

    /// The individual shares.
    pub fn shares(&self) -> &[u8; S] {
        &self.0
    }

    /// XOR the shares back together.
    pub fn recombine(&self) -> u8 {
        self.0.iter().fold(0, |acc, s| acc ^ s)
    }

    /// Apply a GF(2)-linear map to every share.
    fn map(&self, f: impl Fn(u8) -> u8) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i])))
    }

    /// Split every share into high and low halves.
    fn split(&self, f: impl Fn(u8) -> (u8, u8)) -> (Self, Self) {
        (self.map(|s| f(s).0), self.map(|s| f(s).1))
    }

    /// Join high and low halves share by share.
    fn join(hi: &Self, lo: &Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self(core::array::from_fn(|i| f(hi.0[i], lo.0[i])))
    }
}

impl<const S: usize> BitXor for &Shares<S> {
    type Output = Shares<S>;

    fn bitxor(self, rhs: Self) -> Shares<S> {
        Shares(core::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

/// Masked bitwise AND of two sharings (DOM-independent gadget).
///
/// Cross-domain products `x_i & y_j` and `x_j & y_i` are blinded by the same
/// fresh byte before entering domains `i` and `j`, so `S * (S - 1) / 2`
/// random bytes are consumed.
pub fn dom_and<const S: usize>(
    x: &Shares<S>,
    y: &Shares<S>,
    rng: &mut impl CryptoRng,
) -> Shares<S> {
    let mut out = [0u8; S];
    for i in 0..S {
        out[i] ^= x.0[i] & y.0[i];
        for j in i + 1..S {
            let mut r = [0u8; 1];
            rng.fill_bytes(&mut r);
            out[i] ^= (x.0[i] & y.0[j]) ^ r[0];
            out[j] ^= (x.0[j] & y.0[i]) ^ r[0];
        }
    }
    Shares(out)
}

/// Masked GF(2^2) multiplication.
pub fn gf4_multiply<const S: usize>(
    x: &Shares<S>,
    y: &Shares<S>,
    rng: &mut impl CryptoRng,
) -> Shares<S> {
    let (a, b) = x.split(split_gf4);
    let (c, d) = y.split(split_gf4);
    let e = dom_and(&(&a ^ &b), &(&c ^ &d), rng);
    let p = &dom_and(&a, &c, rng) ^ &e;
    let q = &dom_and(&b, &d, rng) ^ &e;
    Shares::join(&p, &q, join_gf4)
}

/// Masked GF(2^4) multiplication.
pub fn gf16_multiply<const S: usize>(
    x: &Shares<S>,
    y: &Shares<S>,
    rng: &mut impl CryptoRng,
) -> Shares<S> {
    let (a, b) = x.split(split_gf16);
    let (c, d) = y.split(split_gf16);
    let e = gf4_multiply(&(&a ^ &b), &(&c ^ &d), rng).map(gf4::scale_by_n);
    let p = &gf4_multiply(&a, &c, rng) ^ &e;
    let q = &gf4_multiply(&b, &d, rng) ^ &e;
    Shares::join(&p, &q, join_gf16)
}

/// Masked GF(2^4) square-and-scale. Linear, so no randomness is needed.
pub fn gf16_square_and_scale<const S: usize>(x: &Shares<S>) -> Shares<S> {
    x.map(gf16::square_and_scale)
}

/// Masked GF(2^4) inversion, with zero mapped to zero.
pub fn gf16_invert<const S: usize>(x: &Shares<S>, rng: &mut impl CryptoRng) -> Shares<S> {
    let (a, b) = x.split(split_gf16);
    let c = (&a ^ &b).map(|s| gf4::scale_by_n(gf4::square(s)));
    let d = gf4_multiply(&a, &b, rng);
    let e = (&c ^ &d).map(gf4::square);
    let p = gf4_multiply(&e, &b, rng);
    let q = gf4_multiply(&e, &a, rng);
    Shares::join(&p, &q, join_gf16)
}

/// Masked GF(2^8) inversion, with zero mapped to zero.
pub fn gf256_invert<const S: usize>(x: &Shares<S>, rng: &mut impl CryptoRng) -> Shares<S> {
    let (a, b) = x.split(split_gf256);
    let c = gf16_square_and_scale(&(&a ^ &b));
    let d = gf16_multiply(&a, &b, rng);
    let e = gf16_invert(&(&c ^ &d), rng);
    let p = gf16_multiply(&e, &b, rng);
    let q = gf16_multiply(&e, &a, rng);
    Shares::join(&p, &q, join_gf256)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf256;

    #[test]
    fn share_recombines() {
        let mut rng = rand::rng();
        for v in 0..=255u8 {
            assert_eq!(Shares::<1>::share(v, &mut rng).recombine(), v);
            assert_eq!(Shares::<4>::share(v, &mut rng).recombine(), v);
        }
        assert_eq!(Shares::<1>::share(0x53, &mut rng).shares(), &[0x53]);
        assert_eq!(Shares::<3>::ORDER, 2);
    }

    #[test]
    fn shares_are_fresh() {
        let mut rng = rand::rng();
        let first: Vec<u8> = (0..64)
            .map(|_| Shares::<2>::share(0x53, &mut rng).shares()[0])
            .collect();
        assert!(first.iter().any(|&s| s != first[0]));
    }

    #[test]
    fn dom_and_matches_and() {
        let mut rng = rand::rng();
        for x in (0..=255u8).step_by(7) {
            for y in (0..=255u8).step_by(11) {
                let xs = Shares::<3>::share(x, &mut rng);
                let ys = Shares::<3>::share(y, &mut rng);
                assert_eq!(dom_and(&xs, &ys, &mut rng).recombine(), x & y);
            }
        }
    }

    #[test]
    fn gf4_multiply_matches_unmasked() {
        let mut rng = rand::rng();
        for x in 0..4 {
            for y in 0..4 {
                let xs = Shares::<2>::share(x, &mut rng);
                let ys = Shares::<2>::share(y, &mut rng);
                assert_eq!(
                    gf4_multiply(&xs, &ys, &mut rng).recombine(),
                    gf4::multiply(x, y)
                );
            }
        }
    }

    #[test]
    fn gf16_ops_match_unmasked() {
        let mut rng = rand::rng();
        for x in 0..16 {
            let xs = Shares::<3>::share(x, &mut rng);
            assert_eq!(gf16_invert(&xs, &mut rng).recombine(), gf16::invert(x));
            assert_eq!(
                gf16_square_and_scale(&xs).recombine(),
                gf16::square_and_scale(x)
            );
            for y in 0..16 {
                let ys = Shares::<3>::share(y, &mut rng);
                assert_eq!(
                    gf16_multiply(&xs, &ys, &mut rng).recombine(),
                    gf16::multiply(x, y)
                );
            }
        }
    }

    #[test]
    fn gf256_invert_matches_unmasked() {
        let mut rng = rand::rng();
        for x in 0..=255u8 {
            let xs = Shares::<2>::share(x, &mut rng);
            assert_eq!(gf256_invert(&xs, &mut rng).recombine(), gf256::invert(x));
        }
    }

    #[test]
    fn debug_hides_shares() {
        let xs = Shares::from_shares([0xaa, 0x55]);
        let printed = format!("{xs:?}");
        assert!(!printed.contains("170"));
        assert!(printed.contains("FILTERED"));
    }
}
