use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use tracing::trace;

use crate::error::{Error, Result};

/// Largest radix whose digits fit the `0-9a-z` alphabet. Bases up to this
/// value take the digit-count path, larger ones the repeated division path.
pub const MAX_DIGIT_RADIX: u32 = 36;

/// Base of an integer logarithm.
///
/// Real bases are rounded to the nearest integer with [`f64::round`] (half
/// away from zero) and the result must be at least 2.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogBase {
    radix: BigUint,
}

impl LogBase {
    pub fn new(base: f64) -> Result<Self> {
        let rounded = base.round();
        if !rounded.is_finite() || rounded < 2.0 {
            return Err(Error::InvalidLogBase(base));
        }
        let radix = BigUint::from_f64(rounded).ok_or(Error::InvalidLogBase(base))?;
        Ok(Self { radix })
    }

    pub fn from_radix(radix: u64) -> Result<Self> {
        if radix < 2 {
            return Err(Error::InvalidLogBase(radix as f64));
        }
        Ok(Self { radix: BigUint::from(radix) })
    }

    /// Euler's number, which rounds to 3.
    pub fn e() -> Self { Self { radix: BigUint::from(3u32) } }

    pub fn two() -> Self { Self { radix: BigUint::from(2u32) } }

    pub fn ten() -> Self { Self { radix: BigUint::from(10u32) } }

    pub fn radix(&self) -> &BigUint { &self.radix }

    // Some only when the digit-count path applies.
    fn digit_radix(&self) -> Option<u32> {
        self.radix.to_u32().filter(|r| *r <= MAX_DIGIT_RADIX)
    }
}

impl Default for LogBase {
    fn default() -> Self { Self::e() }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.radix) }
}

impl TryFrom<f64> for LogBase {
    type Error = Error;

    fn try_from(base: f64) -> Result<Self> { Self::new(base) }
}

impl TryFrom<u64> for LogBase {
    type Error = Error;

    fn try_from(radix: u64) -> Result<Self> { Self::from_radix(radix) }
}

/// `floor(log_base(x))`, or `None` when `x <= 0`.
pub fn checked_log(x: &BigInt, base: &LogBase) -> Option<BigInt> {
    if !x.is_positive() {
        return None;
    }
    let x = x.magnitude();

    let n = match base.digit_radix() {
        Some(radix) => {
            trace!(radix, "integer log by digit count");
            digit_count(x, radix) - 1
        }
        None => {
            trace!(radix = %base.radix, "integer log by repeated division");
            division_count(x, &base.radix)
        }
    };
    Some(BigInt::from(n))
}

/// Like [`checked_log`], but a non-positive `x` is an error.
pub fn log(x: &BigInt, base: &LogBase) -> Result<BigInt> {
    checked_log(x, base).ok_or(Error::NonPositiveLogArgument)
}

pub fn checked_ln(x: &BigInt) -> Option<BigInt> { checked_log(x, &LogBase::e()) }

pub fn ln(x: &BigInt) -> Result<BigInt> { log(x, &LogBase::e()) }

/// Integer log of `x + 1` in base e. Nothing is gained in precision over
/// `checked_ln(x + 1)`; the name only mirrors the real-valued function.
pub fn checked_log1p(x: &BigInt) -> Option<BigInt> { checked_ln(&(x + BigInt::one())) }

pub fn log1p(x: &BigInt) -> Result<BigInt> { ln(&(x + BigInt::one())) }

pub fn checked_log10(x: &BigInt) -> Option<BigInt> { checked_log(x, &LogBase::ten()) }

pub fn log10(x: &BigInt) -> Result<BigInt> { log(x, &LogBase::ten()) }

pub fn checked_log2(x: &BigInt) -> Option<BigInt> { checked_log(x, &LogBase::two()) }

pub fn log2(x: &BigInt) -> Result<BigInt> { log(x, &LogBase::two()) }

fn digit_count(x: &BigUint, radix: u32) -> u64 { x.to_radix_le(radix).len() as u64 }

fn division_count(x: &BigUint, radix: &BigUint) -> u64 {
    debug_assert!(!radix.is_zero());
    let mut x = x.clone();
    let mut n = 0;
    while x >= *radix {
        x /= radix;
        n += 1;
    }
    n
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::RandomBits;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_branches_agree() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);

        for radix in 2..=MAX_DIGIT_RADIX {
            let big_radix = BigUint::from(radix);
            for _ in 0..20 {
                let bits = prng.gen_range(1..400);
                let x: BigUint = prng.sample(RandomBits::new(bits));
                if x.is_zero() {
                    continue;
                }
                assert_eq!(digit_count(&x, radix) - 1, division_count(&x, &big_radix));
            }
        }
    }

    #[test]
    fn test_base_rounding() {
        assert_eq!(LogBase::new(core::f64::consts::E).unwrap(), LogBase::e());
        assert_eq!(LogBase::new(2.5).unwrap().radix(), &BigUint::from(3u32));
        assert_eq!(LogBase::new(2.49).unwrap().radix(), &BigUint::from(2u32));
        assert_eq!(LogBase::new(1.5).unwrap().radix(), &BigUint::from(2u32));
        assert_eq!(LogBase::new(1e30).unwrap().radix(), &BigUint::from_f64(1e30).unwrap());
        assert_eq!(LogBase::try_from(10u64).unwrap(), LogBase::ten());
        assert_eq!(LogBase::default(), LogBase::e());
        assert_eq!(LogBase::ten().to_string(), "10");
    }

    #[test]
    fn test_invalid_base() {
        for base in [1.49, 1.0, 0.0, -0.4, -3.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(LogBase::new(base), Err(Error::InvalidLogBase(_))));
        }
        assert!(matches!(LogBase::from_radix(0), Err(Error::InvalidLogBase(_))));
        assert!(matches!(LogBase::from_radix(1), Err(Error::InvalidLogBase(_))));
    }

    #[test]
    fn test_fixed_values() {
        let n = |v: i64| BigInt::from(v);

        assert_eq!(log2(&n(1)).unwrap(), n(0));
        assert_eq!(log2(&n(8)).unwrap(), n(3));
        assert_eq!(log2(&n(9)).unwrap(), n(3));
        assert_eq!(log10(&n(999)).unwrap(), n(2));
        assert_eq!(log10(&n(1000)).unwrap(), n(3));
        assert_eq!(ln(&n(8)).unwrap(), n(1));
        assert_eq!(ln(&n(9)).unwrap(), n(2));
        assert_eq!(log1p(&n(8)).unwrap(), n(2));
        assert_eq!(log(&n(1_000_000), &LogBase::from_radix(1000).unwrap()).unwrap(), n(2));
        assert_eq!(log(&n(999_999), &LogBase::from_radix(1000).unwrap()).unwrap(), n(1));
    }

    #[test]
    fn test_non_positive() {
        for v in [0i64, -1, -1000] {
            let x = BigInt::from(v);
            assert_eq!(checked_ln(&x), None);
            assert_eq!(checked_log2(&x), None);
            assert_eq!(checked_log10(&x), None);
            assert_eq!(checked_log(&x, &LogBase::from_radix(100).unwrap()), None);
            assert!(matches!(ln(&x), Err(Error::NonPositiveLogArgument)));
            assert!(matches!(log2(&x), Err(Error::NonPositiveLogArgument)));
            assert!(matches!(log10(&x), Err(Error::NonPositiveLogArgument)));
        }
        // x + 1 is still positive for x == 0
        assert_eq!(checked_log1p(&BigInt::from(0)), Some(BigInt::from(0)));
        assert_eq!(checked_log1p(&BigInt::from(-1)), None);
        assert_eq!(
            log1p(&BigInt::from(-1)).unwrap_err().to_string(),
            "argument of integer logarithm must be positive"
        );
    }
}
