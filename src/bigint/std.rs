use num_bigint::BigInt;
use num_traits::Signed;

pub fn abs(x: &BigInt) -> BigInt { x.abs() }

/// Returns -1, 0 or 1 according to the sign of `x`.
pub fn sign(x: &BigInt) -> BigInt { x.signum() }
