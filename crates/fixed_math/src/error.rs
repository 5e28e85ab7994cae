use num_bigint::BigInt;
use thiserror::Error;

/// Raised when an input lies outside the range a function is defined on.
///
/// Every variant carries the rejected raw (scaled) input. Composed functions
/// return whichever error their underlying `exp2`/`log2` call produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("exp2 above max value: {0}")]
    Exp2AboveMax(BigInt),
    #[error("exp2 below min value: {0}")]
    Exp2BelowMin(BigInt),
    #[error("exp above max value: {0}")]
    ExpAboveMax(BigInt),
    #[error("exp below min value: {0}")]
    ExpBelowMin(BigInt),
    #[error("log2 input below one: {0}")]
    Log2BelowOne(BigInt),
    #[error("log2 above max value: {0}")]
    Log2AboveMax(BigInt),
    #[error("root base must be non-zero")]
    ZeroRootBase,
}

pub type Result<T> = std::result::Result<T, DomainError>;
