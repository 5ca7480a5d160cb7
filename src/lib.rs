// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GF(2^8) inversion through a normal-basis tower of subfields.
//!
//! GF(2^8) is built as a degree-2 extension of GF(2^4), which is in turn a
//! degree-2 extension of GF(2^2). Each level uses a normal basis, so squaring
//! is a coordinate permutation and inversion at one level reduces to a
//! single inversion one level down. The whole computation is a fixed
//! sequence of ANDs and XORs, with no branches and no table lookups, which
//! makes it the usual building block for compact AES-style S-boxes.
//!
//! # Packing
//!
//! Elements are packed into the low bits of a `u8`:
//!
//! - GF(2^2): bits `[1:0]`
//! - GF(2^4): high GF(2^2) coordinate in `[3:2]`, low in `[1:0]`
//! - GF(2^8): high GF(2^4) coordinate in `[7:4]`, low in `[3:0]`
//!
//! Every operation masks its inputs to the declared width. In this basis
//! the multiplicative identity is the all-ones value at each level
//! (`0b11`, `0xf`, `0xff`), not the integer `1`.
//!
//! # Example
//!
//! ```
//! use tower_gf::{Gf256, gf256_invert, gf256};
//!
//! let x = 0x53;
//! let inv = gf256_invert(x);
//! assert_eq!(gf256::multiply(x, inv), gf256::ONE);
//!
//! let y = Gf256::new(0x53).expect("fits in a byte");
//! assert_eq!(y * y.invert_or_zero(), Gf256::ONE);
//! assert!(bool::from(Gf256::ZERO.invert().is_none()));
//! ```
//!
//! # Masking
//!
//! The [`masked`] module evaluates the same inversion on Boolean shares,
//! replacing each AND with a DOM gadget fed by a [`rand::CryptoRng`].

pub mod element;
pub mod error;
pub mod gf16;
pub mod gf256;
pub mod gf4;
pub mod masked;
pub mod packing;

pub use element::{Gf4, Gf16, Gf256};
pub use error::{Error, Result};

pub use gf4::multiply as gf4_multiply;
pub use gf4::scale_by_n as gf4_scale_by_n;
pub use gf4::scale_by_n_squared as gf4_scale_by_n_squared;
pub use gf4::square as gf4_square;
pub use gf16::invert as gf16_invert;
pub use gf16::multiply as gf16_multiply;
pub use gf16::square_and_scale as gf16_square_and_scale;
pub use gf256::invert as gf256_invert;
