//! Conversions between [`ScaledReal`] values and plain numbers.
//!
//! These helpers sit at the boundary where oracle feeders build inputs and
//! render outputs. None of the numeric algorithms go through `f64`.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::constants::{PRECISION, SCALE_F64};
use crate::ScaledReal;

/// Scales an integer by 2^64.
pub fn from_int(value: impl Into<BigInt>) -> ScaledReal {
    let value: BigInt = value.into();
    value << PRECISION
}

/// Scales a double by 2^64, truncating toward zero.
///
/// Returns `None` for NaN and infinities.
pub fn from_f64(value: f64) -> Option<ScaledReal> {
    BigInt::from_f64(value * SCALE_F64)
}

/// Nearest double to the represented real value.
pub fn to_f64(value: &ScaledReal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN) / SCALE_F64
}

/// Floor of the represented real value, `value >> 64`.
pub fn integer_part(value: &ScaledReal) -> BigInt {
    value >> PRECISION
}

/// The 64 fractional bits of `value` in two's complement, so that
/// `value == (integer_part(value) << 64) + fractional_bits(value)`.
pub fn fractional_bits(value: &ScaledReal) -> u64 {
    let remainder = value - (integer_part(value) << PRECISION);
    remainder.to_u64().unwrap_or_default()
}
