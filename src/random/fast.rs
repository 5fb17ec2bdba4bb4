use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive};
use rand::Rng;

use super::range_width;
use crate::error::{Error, Result};

/// Random integer in `[min, max)` from the thread-local non-cryptographic
/// generator. See [`random_with`].
pub fn random(max: &BigInt, min: &BigInt) -> Result<BigInt> {
    random_with(&mut rand::thread_rng(), max, min)
}

/// Random integer in `[min, max)` drawn as `floor(u * (max - min)) + min`
/// for a uniform `u` in `[0, 1)`.
///
/// The width goes through an `f64`, so only about 2^52 distinct offsets are
/// reachable and wider ranges are sampled unevenly.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, max: &BigInt, min: &BigInt) -> Result<BigInt> {
    let width = range_width(max, min)?;
    let scale = width
        .to_f64()
        .filter(|s| s.is_finite())
        .ok_or_else(|| Error::RangeTooWide(width.clone()))?;

    let unit: f64 = rng.gen();
    let offset = BigInt::from_f64((unit * scale).floor())
        .ok_or_else(|| Error::RangeTooWide(width.clone()))?;

    // unit * scale can round up to the width itself
    let last = &width - BigInt::one();
    Ok(min + offset.min(last))
}
