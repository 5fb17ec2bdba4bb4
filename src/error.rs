use num_bigint::BigInt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("argument of integer logarithm must be positive")]
    NonPositiveLogArgument,
    #[error("logarithm base {0} must round to an integer of at least 2")]
    InvalidLogBase(f64),
    #[error("empty range: max {max} must be greater than min {min}")]
    EmptyRange { min: BigInt, max: BigInt },
    #[error("range {0} is too wide for a 64-bit float")]
    RangeTooWide(BigInt),
    #[error("entropy source {name} failed: {reason}")]
    Entropy { name: &'static str, reason: String },
    #[error("no secure random source available")]
    NoSecureSource,
}

pub type Result<T> = core::result::Result<T, Error>;
