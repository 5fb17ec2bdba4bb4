use num_bigint::BigInt;

use super::range_width;
use super::source::SecureRandom;
use crate::error::Result;

/// Uniform `u64` from the process-wide secure chain.
pub fn secure_random_u64() -> Result<u64> { secure_random_u64_with(SecureRandom::global()) }

pub fn secure_random_u64_with(chain: &SecureRandom) -> Result<u64> { chain.next_u64() }

/// Random integer in `[min, max)` from the process-wide secure chain.
/// See [`secure_random_with`].
pub fn secure_random(max: &BigInt, min: &BigInt) -> Result<BigInt> {
    secure_random_with(SecureRandom::global(), max, min)
}

/// Random integer in `[min, max)` computed as `min + r * (max - min) / 2^64`
/// for one secure `u64` `r`, with truncating integer division.
///
/// Only 2^64 outcomes exist, so wider ranges leave gaps.
pub fn secure_random_with(chain: &SecureRandom, max: &BigInt, min: &BigInt) -> Result<BigInt> {
    let width = range_width(max, min)?;
    let r = BigInt::from(chain.next_u64()?);
    Ok(min + ((r * width) >> 64))
}
