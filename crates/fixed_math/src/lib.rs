#![forbid(unsafe_code)]

//! Fixed-point exponential, logarithm and power functions.
//!
//! Every value is a [`ScaledReal`]: a signed big integer whose real value is
//! the integer divided by 2^64. The algorithms reproduce, bit for bit, the
//! script implementations run by the on-chain verifier, so oracle results
//! computed here can be checked on-chain without divergence. That rules out
//! floating point anywhere in the arithmetic: each shift, truncating
//! division and magic constant is part of the contract.
//!
//! [`exp2`] and [`log2`] are the two primitives; everything else composes
//! them with the rounding constants in [`constants`].

/// Highest-set-bit search used by the logarithm.
pub mod bits;
pub mod constants;
pub mod convert;
pub mod error;
pub mod exp;
pub mod log;
pub mod power;

/// A real number represented as `integer / 2^64`.
pub type ScaledReal = num_bigint::BigInt;

pub use bits::most_significant_bit;
pub use constants::{E, LN10, LN2, LOG2E, LOG2_MAX_INPUT, PRECISION, SCALE};
pub use convert::{from_f64, from_int, to_f64};
pub use error::{DomainError, Result};
pub use exp::{exp, exp2};
pub use log::{log, log10, log2};
pub use power::{pow, root, sqrt};
