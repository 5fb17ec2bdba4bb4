//! Random integers in a half-open range `[min, max)`.
//!
//! [`random`] scales a uniform `f64` and stops being uniform once
//! `max - min` exceeds 2^52. [`secure_random`] scales one secure `u64` with
//! exact integer arithmetic and stops being uniform once `max - min` exceeds
//! 2^64.

mod fast;
mod secure;
mod source;

pub use self::fast::{random, random_with};
pub use self::secure::{
    secure_random, secure_random_u64, secure_random_u64_with, secure_random_with,
};
pub use self::source::{
    GetrandomSource, OsRngSource, SecureRandom, SecureRandomSource, SourceKind,
};

use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::{Error, Result};

// max - min, which must be positive.
fn range_width(max: &BigInt, min: &BigInt) -> Result<BigInt> {
    let width = max - min;
    if !width.is_positive() {
        return Err(Error::EmptyRange { min: min.clone(), max: max.clone() });
    }
    Ok(width)
}
