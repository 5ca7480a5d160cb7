// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for typed tower-field elements.

/// Errors that can occur when constructing field elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Value does not fit in the field's packed width.
    #[error("value {value:#04x} does not fit in a {bits}-bit field element")]
    OutOfRange {
        /// Width of the target field in bits.
        bits: u32,
        /// Rejected value.
        value: u8,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
