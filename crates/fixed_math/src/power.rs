//! Roots and powers composed from [`exp2`] and [`log2`].
//!
//! The logarithm is taken first, so a [`DomainError`] from `log2` wins over
//! one from `exp2`. No combined domain is checked up front.

use num_traits::Zero;

use crate::constants::PRECISION;
use crate::error::{DomainError, Result};
use crate::exp::exp2;
use crate::log::log2;
use crate::ScaledReal;

/// Square root, `exp2(log2(x) / 2)`.
pub fn sqrt(x: &ScaledReal) -> Result<ScaledReal> {
    exp2(&(log2(x)? / 2u32))
}

/// `base`-th root of `x`, `exp2((log2(x) << 64) / base)`.
///
/// The division truncates toward zero. A zero `base` is rejected after the
/// logarithm has been taken.
pub fn root(x: &ScaledReal, base: &ScaledReal) -> Result<ScaledReal> {
    let exponent = log2(x)? << PRECISION;
    if base.is_zero() {
        return Err(DomainError::ZeroRootBase);
    }
    exp2(&(exponent / base))
}

/// `base` raised to `exponent`, `exp2((exponent * log2(base)) >> 64)`.
pub fn pow(base: &ScaledReal, exponent: &ScaledReal) -> Result<ScaledReal> {
    exp2(&((exponent * log2(base)?) >> PRECISION))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::constants::{EXP2_MAX_INPUT, SCALE};
    use crate::convert::from_int;

    fn raw(value: u128) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn square_roots() {
        assert_eq!(sqrt(&SCALE).unwrap(), *SCALE);
        assert_eq!(sqrt(&from_int(4)).unwrap(), from_int(2));
        assert_eq!(sqrt(&from_int(2)).unwrap(), raw(26_087_635_650_665_564_425));
    }

    #[test]
    fn integer_roots_and_powers() {
        assert_eq!(root(&from_int(8), &from_int(3)).unwrap(), from_int(2));
        assert_eq!(
            pow(&from_int(2), &from_int(10)).unwrap(),
            raw(18_889_465_931_478_580_854_784)
        );
    }

    #[test]
    fn negative_exponents() {
        let minus_half = -(BigInt::from(1u8) << 63u32);
        assert_eq!(pow(&from_int(4), &minus_half).unwrap(), BigInt::from(1u8) << 63u32);
        let minus_two_and_half = -(BigInt::from(5u8) << 63u32);
        assert_eq!(
            pow(&from_int(3), &minus_two_and_half).unwrap(),
            raw(1_183_359_184_069_815_933)
        );
        assert_eq!(
            root(&from_int(27), &from_int(-3)).unwrap(),
            raw(6_148_914_691_236_517_205)
        );
    }

    #[test]
    fn log2_failure_comes_first() {
        let half = BigInt::from(1u8) << 63u32;
        assert_eq!(sqrt(&half), Err(DomainError::Log2BelowOne(half.clone())));
        assert_eq!(
            root(&half, &BigInt::from(0)),
            Err(DomainError::Log2BelowOne(half.clone()))
        );
        assert_eq!(
            pow(&half, &from_int(1000)),
            Err(DomainError::Log2BelowOne(half.clone()))
        );
    }

    #[test]
    fn exp2_failure_surfaces_unchanged() {
        // 2^193 overflows the exp2 domain.
        let err = pow(&from_int(2), &from_int(193)).unwrap_err();
        assert_eq!(err, DomainError::Exp2AboveMax(from_int(193)));
        assert!(BigInt::from(EXP2_MAX_INPUT) < from_int(193));
    }

    #[test]
    fn zero_root_base_is_rejected() {
        assert_eq!(
            root(&from_int(8), &BigInt::from(0)),
            Err(DomainError::ZeroRootBase)
        );
    }
}
