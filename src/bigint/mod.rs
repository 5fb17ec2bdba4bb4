mod cmp;
mod log;
mod std;

pub use self::cmp::{max, min};
pub use self::log::{
    checked_ln, checked_log, checked_log10, checked_log1p, checked_log2, ln, log, log10, log1p,
    log2, LogBase, MAX_DIGIT_RADIX,
};
pub use self::std::{abs, sign};
