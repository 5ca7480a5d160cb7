// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed tower-field elements.
//!
//! [`Gf4`], [`Gf16`] and [`Gf256`] wrap the packed `u8` representation used by
//! the free functions in [`gf4`](crate::gf4), [`gf16`](crate::gf16) and
//! [`gf256`](crate::gf256), and guarantee the upper bits are clear.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{Error, Result};
use crate::packing::{
    GF4_BITS, GF4_MASK, GF16_BITS, GF16_MASK, GF256_BITS, GF256_MASK, join_gf16, join_gf256,
    split_gf16, split_gf256,
};
use crate::{gf4, gf16, gf256};

macro_rules! define_tower_element {
    (
        $name:ident, $display:expr,
        bits = $bits:expr, mask = $mask:expr, one = $one:expr,
        multiply = $mul:path, square = $square:path, invert = $invert:path
    ) => {
        #[doc = concat!("An element of ", $display, " in normal-basis coordinates.")]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "u8", into = "u8")
        )]
        pub struct $name(u8);

        impl $name {
            /// Width of the packed representation in bits.
            pub const BITS: u32 = $bits;
            /// The additive identity.
            pub const ZERO: Self = Self(0);
            /// The multiplicative identity.
            pub const ONE: Self = Self($one);

            /// Create an element from its packed value.
            ///
            /// Fails if `value` has bits set above [`Self::BITS`].
            pub const fn new(value: u8) -> Result<Self> {
                if (value as u32) >> $bits != 0 {
                    return Err(Error::OutOfRange {
                        bits: $bits,
                        value,
                    });
                }
                Ok(Self(value))
            }

            /// Create an element from the low bits of `value`, discarding the rest.
            pub const fn from_masked(value: u8) -> Self {
                Self(value & $mask)
            }

            /// The packed value.
            pub const fn value(self) -> u8 {
                self.0
            }

            /// Whether this is the additive identity.
            pub fn is_zero(self) -> Choice {
                self.ct_eq(&Self::ZERO)
            }

            /// Square this element.
            pub fn square(self) -> Self {
                Self($square(self.0))
            }

            /// The multiplicative inverse, with zero mapped to zero.
            pub fn invert_or_zero(self) -> Self {
                Self($invert(self.0))
            }

            /// The multiplicative inverse, or none for zero.
            pub fn invert(self) -> CtOption<Self> {
                let inv = self.invert_or_zero();
                CtOption::new(inv, !self.is_zero())
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(x: $name) -> u8 {
                x.0
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        #[allow(clippy::suspicious_op_assign_impl)]
        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        #[allow(clippy::suspicious_op_assign_impl)]
        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self($mul(self.0, rhs.0))
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self(u8::conditional_select(&a.0, &b.0, choice))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#04x}", self.0)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }
    };
}

define_tower_element!(
    Gf4, "GF(2^2)",
    bits = GF4_BITS, mask = GF4_MASK, one = gf4::ONE,
    multiply = gf4::multiply, square = gf4::square, invert = gf4::square
);

define_tower_element!(
    Gf16, "GF(2^4)",
    bits = GF16_BITS, mask = GF16_MASK, one = gf16::ONE,
    multiply = gf16::multiply, square = gf16_square, invert = gf16::invert
);

define_tower_element!(
    Gf256, "GF(2^8)",
    bits = GF256_BITS, mask = GF256_MASK, one = gf256::ONE,
    multiply = gf256::multiply, square = gf256::square, invert = gf256::invert
);

const fn gf16_square(x: u8) -> u8 {
    gf16::multiply(x, x)
}

impl Gf4 {
    /// The normal-basis generator N.
    pub const N: Self = Self(gf4::N);

    /// Multiply by N.
    pub fn scale_by_n(self) -> Self {
        Self(gf4::scale_by_n(self.0))
    }

    /// Multiply by N^2.
    pub fn scale_by_n_squared(self) -> Self {
        Self(gf4::scale_by_n_squared(self.0))
    }
}

impl Gf16 {
    /// The tower constant used one level up.
    pub const NU: Self = Self(gf16::NU);

    /// Build an element from its high and low GF(2^2) coordinates.
    pub const fn from_halves(hi: Gf4, lo: Gf4) -> Self {
        Self(join_gf16(hi.0, lo.0))
    }

    /// The high and low GF(2^2) coordinates.
    pub const fn halves(self) -> (Gf4, Gf4) {
        let (hi, lo) = split_gf16(self.0);
        (Gf4(hi), Gf4(lo))
    }

    /// Compute `NU * self^2`.
    pub fn square_and_scale(self) -> Self {
        Self(gf16::square_and_scale(self.0))
    }
}

impl Gf256 {
    /// Build an element from its high and low GF(2^4) coordinates.
    pub const fn from_halves(hi: Gf16, lo: Gf16) -> Self {
        Self(join_gf256(hi.0, lo.0))
    }

    /// The high and low GF(2^4) coordinates.
    pub const fn halves(self) -> (Gf16, Gf16) {
        let (hi, lo) = split_gf256(self.0);
        (Gf16(hi), Gf16(lo))
    }
}
