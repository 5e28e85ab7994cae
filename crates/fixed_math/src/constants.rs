//! Scale and rounding constants shared by every function in the crate.
//!
//! The rounding constants are derived with the same IEEE-754 double
//! expressions the on-chain verifier was generated from. Only correctly
//! rounded literals from `core::f64::consts` are involved, so the derivation
//! is identical on every platform.

use core::f64::consts::{E as E_F64, LN_10, LOG2_10, LOG2_E};

use num_bigint::BigInt;
use once_cell::sync::Lazy;

/// Number of fractional bits in a [`ScaledReal`](crate::ScaledReal).
pub const PRECISION: u32 = 64;

/// Largest raw input accepted by [`exp2`](crate::exp2) (192.0).
pub const EXP2_MAX_INPUT: i128 = 3_541_774_862_152_233_910_272;
/// Smallest raw input accepted by [`exp2`](crate::exp2) (about -59.7947).
pub const EXP2_MIN_INPUT: i128 = -1_103_017_633_157_748_883_456;
/// Largest raw input accepted by [`exp`](crate::exp) (about 133.0843).
pub const EXP_MAX_INPUT: i128 = 2_454_971_259_878_909_673_472;
/// Smallest raw input accepted by [`exp`](crate::exp) (about -41.4465).
pub const EXP_MIN_INPUT: i128 = -764_553_562_531_197_616_128;

pub(crate) const SCALE_F64: f64 = 18_446_744_073_709_551_616.0;

/// Largest raw input accepted by [`log2`](crate::log2), 2^320 (real value
/// 2^256). Past it the highest-set-bit search saturates and the squaring
/// loop no longer stays bounded.
pub static LOG2_MAX_INPUT: Lazy<BigInt> = Lazy::new(|| BigInt::from(1u8) << 320u32);

/// 2^64, the fixed-point representation of 1.0.
pub static SCALE: Lazy<BigInt> = Lazy::new(|| BigInt::from(1u8) << PRECISION);

/// ln(2) scaled by 2^64.
pub static LN2: Lazy<BigInt> = Lazy::new(|| rounded(LN_10 * SCALE_F64 / LOG2_10));

/// ln(10) scaled by 2^64.
pub static LN10: Lazy<BigInt> = Lazy::new(|| rounded(SCALE_F64 / LOG2_10));

/// log2(e) scaled by 2^64.
pub static LOG2E: Lazy<BigInt> = Lazy::new(|| rounded(LOG2_E * SCALE_F64));

/// Euler's number scaled by 2^64.
pub static E: Lazy<BigInt> = Lazy::new(|| rounded(E_F64 * SCALE_F64));

// Doubles above 2^53 are already integral; `round` only matters for the
// general case and the cast is exact below 2^128.
fn rounded(value: f64) -> BigInt {
    BigInt::from(value.round() as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_two_to_the_sixty_four() {
        assert_eq!(*SCALE, BigInt::from(u64::MAX) + 1u32);
        assert_eq!(SCALE_F64, 2f64.powi(64));
    }

    #[test]
    fn rounding_constants_match_verifier_literals() {
        assert_eq!(*LN2, BigInt::from(12_786_308_645_202_657_280u128));
        assert_eq!(*LN10, BigInt::from(5_553_023_288_523_357_184u128));
        assert_eq!(*LOG2E, BigInt::from(26_613_026_195_688_644_608u128));
        assert_eq!(*E, BigInt::from(50_143_449_209_799_254_016u128));
    }

    #[test]
    fn domain_bounds_are_ordered() {
        assert!(EXP2_MIN_INPUT < 0 && EXP2_MAX_INPUT > 0);
        assert!(EXP_MIN_INPUT > EXP2_MIN_INPUT);
        assert!(EXP_MAX_INPUT < EXP2_MAX_INPUT);
        assert_eq!(EXP2_MAX_INPUT, 192i128 << PRECISION);
    }
}
