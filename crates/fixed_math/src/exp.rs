//! Binary and natural exponentials.

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::constants::{
    EXP2_MAX_INPUT, EXP2_MIN_INPUT, EXP_MAX_INPUT, EXP_MIN_INPUT, LOG2E, PRECISION,
};
use crate::convert::{fractional_bits, integer_part};
use crate::error::{DomainError, Result};
use crate::ScaledReal;

/// `round(2^64 * 2^(2^-i))` for i = 1..=64.
///
/// Entry `i - 1` is applied when fractional bit `64 - i` of the exponent is
/// set, so the table walks from the 2^-1 bit down to the 2^-64 bit. Every
/// factor is below 2^65.
const EXP2_FACTORS: [u128; 64] = [
    0x16A09E667F3BCC909, 0x1306FE0A31B7152DF, 0x1172B83C7D517ADCE,
    0x10B5586CF9890F62A, 0x1059B0D31585743AE, 0x102C9A3E778060EE7,
    0x10163DA9FB33356D8, 0x100B1AFA5ABCBED61, 0x10058C86DA1C09EA2,
    0x1002C605E2E8CEC50, 0x100162F3904051FA1, 0x1000B175EFFDC76BA,
    0x100058BA01FB9F96D, 0x10002C5CC37DA9492, 0x1000162E525EE0547,
    0x10000B17255775C04, 0x1000058B91B5BC9AE, 0x100002C5C89D5EC6D,
    0x10000162E43F4F831, 0x100000B1721BCFC9A, 0x10000058B90CF1E6E,
    0x1000002C5C863B73F, 0x100000162E430E5A2, 0x1000000B172183551,
    0x100000058B90C0B49, 0x10000002C5C8601CC, 0x1000000162E42FFF0,
    0x10000000B17217FBB, 0x1000000058B90BFCE, 0x100000002C5C85FE3,
    0x10000000162E42FF1, 0x100000000B17217F8, 0x10000000058B90BFC,
    0x1000000002C5C85FE, 0x100000000162E42FF, 0x1000000000B17217F,
    0x100000000058B90C0, 0x10000000002C5C860, 0x1000000000162E430,
    0x10000000000B17218, 0x1000000000058B90C, 0x100000000002C5C86,
    0x10000000000162E43, 0x100000000000B1721, 0x10000000000058B91,
    0x1000000000002C5C8, 0x100000000000162E4, 0x1000000000000B172,
    0x100000000000058B9, 0x10000000000002C5D, 0x1000000000000162E,
    0x10000000000000B17, 0x1000000000000058C, 0x100000000000002C6,
    0x10000000000000163, 0x100000000000000B1, 0x10000000000000059,
    0x1000000000000002C, 0x10000000000000016, 0x1000000000000000B,
    0x10000000000000006, 0x10000000000000003, 0x10000000000000001,
    0x10000000000000001,
];

/// Accumulator start value: 0.5 in 192.64-bit fixed point.
const HALF_EXTENDED_SHIFT: u32 = 191;

/// Calculates 2^x using the binary fraction method.
///
/// Accepts and returns values scaled by 2^64. The input must lie between
/// `EXP2_MIN_INPUT` and `EXP2_MAX_INPUT` inclusive; the error names the
/// bound that was crossed.
pub fn exp2(x: &ScaledReal) -> Result<ScaledReal> {
    if *x > BigInt::from(EXP2_MAX_INPUT) {
        debug!(target: "fixed_math", input = %x, "exp2 input above max value");
        return Err(DomainError::Exp2AboveMax(x.clone()));
    }
    if *x < BigInt::from(EXP2_MIN_INPUT) {
        debug!(target: "fixed_math", input = %x, "exp2 input below min value");
        return Err(DomainError::Exp2BelowMin(x.clone()));
    }

    let fraction = fractional_bits(x);
    let mut result = BigInt::from(1u8) << HALF_EXTENDED_SHIFT;
    for (position, factor) in EXP2_FACTORS.iter().copied().enumerate() {
        let bit = 1u64 << (PRECISION as usize - 1 - position);
        if fraction & bit != 0 {
            result = (result * factor) >> PRECISION;
        }
    }

    // Shifting by 191 rather than 192 undoes the initial 0.5 while applying
    // 2^integer and dropping back to 64 fractional bits.
    let integer = integer_part(x);
    trace!(target: "fixed_math", integer = %integer, fraction, "exp2 split");
    result <<= PRECISION;
    let shift = BigInt::from(HALF_EXTENDED_SHIFT) - integer;
    Ok(shift_right_signed(result, &shift))
}

/// Calculates e^x by converting the exponent to base 2 and calling [`exp2`].
///
/// Accepts and returns values scaled by 2^64.
pub fn exp(x: &ScaledReal) -> Result<ScaledReal> {
    if *x > BigInt::from(EXP_MAX_INPUT) {
        debug!(target: "fixed_math", input = %x, "exp input above max value");
        return Err(DomainError::ExpAboveMax(x.clone()));
    }
    if *x < BigInt::from(EXP_MIN_INPUT) {
        debug!(target: "fixed_math", input = %x, "exp input below min value");
        return Err(DomainError::ExpBelowMin(x.clone()));
    }

    exp2(&((x * &*LOG2E) >> PRECISION))
}

// A negative shift amount shifts left. Only the exact upper bound (integer
// part 192) reaches that branch.
fn shift_right_signed(value: BigInt, shift: &BigInt) -> BigInt {
    match u32::try_from(shift) {
        Ok(bits) => value >> bits,
        Err(_) => {
            let bits = u32::try_from(-shift).unwrap_or(0);
            value << bits
        }
    }
}
