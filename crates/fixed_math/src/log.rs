//! Binary, natural and base-10 logarithms.

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::bits::most_significant_bit;
use crate::constants::{LN10, LN2, LOG2_MAX_INPUT, PRECISION, SCALE};
use crate::error::{DomainError, Result};
use crate::ScaledReal;

/// Calculates log2(x) by iterative squaring.
///
/// Accepts and returns values scaled by 2^64. Only defined for inputs
/// representing a real value of at least 1 and at most 2^256.
pub fn log2(x: &ScaledReal) -> Result<ScaledReal> {
    let scale = &*SCALE;
    if x < scale {
        debug!(target: "fixed_math", input = %x, "log2 input below one");
        return Err(DomainError::Log2BelowOne(x.clone()));
    }
    if *x > *LOG2_MAX_INPUT {
        debug!(target: "fixed_math", input = %x, "log2 input above max value");
        return Err(DomainError::Log2AboveMax(x.clone()));
    }

    let n = most_significant_bit(&(x / scale));
    let mut result = BigInt::from(n) * scale;

    // y = x * 2^-n lies in [1, 2); only LOG2_MAX_INPUT leaves it at exactly 2.
    let mut y = x >> n;
    trace!(target: "fixed_math", integer = n, "log2 split");
    if y == *scale {
        return Ok(result);
    }

    let two = scale << 1u32;
    for i in 1..=PRECISION {
        y = (&y * &y) / scale;
        // y^2 in [2, 4) contributes the 2^-i bit.
        if y >= two {
            result += scale >> i;
            y >>= 1u32;
        }
    }
    Ok(result)
}

/// Natural logarithm, `log2(x) * ln2 / 2^64`.
pub fn log(x: &ScaledReal) -> Result<ScaledReal> {
    Ok(log2(x)? * &*LN2 / &*SCALE)
}

/// Base-10 logarithm, `log2(x) * ln10 / 2^64`.
pub fn log10(x: &ScaledReal) -> Result<ScaledReal> {
    Ok(log2(x)? * &*LN10 / &*SCALE)
}
