//! Stateless helpers over arbitrary-precision integers.
//!
//! - [`bigint`]: abs, sign, min, max and the floor logarithm family.
//! - [`random`]: bounded random integers from a fast source and from a
//!   secure entropy chain.

pub mod bigint;
pub mod error;
pub mod random;

pub use error::{Error, Result};
