use num_bigint::{BigInt, Sign};

/// Range tests applied in order; each hit shifts the input down by that many
/// bits.
const STEPS: [u32; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Zero-based index of the highest set bit of `x` (1 -> 0, 2 -> 1, 4 -> 2).
///
/// `x` must be strictly positive. The precondition is debug-asserted; release
/// builds return 0 for zero and negative inputs. The binary search covers bit
/// indices up to 255, larger inputs saturate there exactly as the on-chain
/// version does.
pub fn most_significant_bit(x: &BigInt) -> u32 {
    debug_assert!(
        x.sign() == Sign::Plus,
        "most_significant_bit requires a positive input"
    );
    let mut x = x.clone();
    let mut msb = 0;
    for step in STEPS {
        if x >= BigInt::from(1u8) << step {
            x >>= step;
            msb += step;
        }
    }
    msb
}
