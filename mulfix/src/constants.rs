//! Build-time defaults for fixed-base multiplication.

use crate::method::Method;

/// Window width used when none is given.
///
/// Four is the usual balance between table size and additions for scalars
/// of 160 to 240 bits: 16 comb entries, 4 odd multiples for the NAF methods.
pub const DEFAULT_DEPTH: usize = 4;

/// Smallest window width accepted by the methods that use windows at all.
pub const MIN_DEPTH: usize = 1;

/// Smallest window width of the width-w NAF and tau-NAF methods.
///
/// Width two already means digits in {-1, 0, 1} and a single table entry.
pub const MIN_NAF_DEPTH: usize = 2;

/// Largest window width accepted by any method.
///
/// Bounded so signed digits fit in an `i8` and comb tables stay addressable
/// with a `usize` column index on every target.
pub const MAX_DEPTH: usize = 8;

/// Method selected at build time through the crate features.
///
/// When several method features are enabled the first one in declaration
/// order wins. Without any of them the width-w NAF method is used, the same
/// as enabling `lwnaf`.
pub const DEFAULT_METHOD: Method = if cfg!(feature = "binary") {
    Method::Binary
} else if cfg!(feature = "yao") {
    Method::Yao
} else if cfg!(feature = "naf-window") {
    Method::NafWindow
} else if cfg!(feature = "comb") {
    Method::Comb
} else if cfg!(feature = "comb-double") {
    Method::CombDouble
} else if cfg!(feature = "lwnaf") {
    Method::Lwnaf
} else {
    Method::Lwnaf
};
