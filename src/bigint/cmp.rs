use num_bigint::BigInt;

// Ties keep the earliest value.
pub fn min<'a, I>(first: &'a BigInt, rest: I) -> &'a BigInt
where
    I: IntoIterator<Item = &'a BigInt>,
{
    rest.into_iter().fold(first, |m, x| if m > x { x } else { m })
}

pub fn max<'a, I>(first: &'a BigInt, rest: I) -> &'a BigInt
where
    I: IntoIterator<Item = &'a BigInt>,
{
    rest.into_iter().fold(first, |m, x| if m < x { x } else { m })
}

/// Smallest of one or more `BigInt` expressions.
///
/// `bigint_min!(a, b, c)` borrows every argument and returns `&BigInt`.
#[macro_export]
macro_rules! bigint_min {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::bigint::min(&$first, [$(&$rest),*])
    };
}

/// Largest of one or more `BigInt` expressions.
#[macro_export]
macro_rules! bigint_max {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::bigint::max(&$first, [$(&$rest),*])
    };
}
