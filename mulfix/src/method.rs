//! The precomputation methods and the table shapes they produce.

use core::fmt;
use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DEPTH, MIN_DEPTH, MIN_NAF_DEPTH};
use crate::errors::MulFixError;

/// Fixed-base multiplication method.
///
/// Every method pairs a table builder with a multiplication routine; a table
/// built by one method is only meaningful to the same method at the same
/// window width and bit-length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// One doubling of the base per scalar bit; additions only.
    Binary,
    /// Yao's windowing over `2^(i*w) * P`.
    Yao,
    /// Yao's scheme driven by grouped NAF digits, which permits subtraction.
    NafWindow,
    /// Single comb (Lim-Lee) with `2^w` entries.
    Comb,
    /// Comb with a second table shifted by half the teeth spacing.
    CombDouble,
    /// Width-w NAF over odd multiples; uses tau-adic digits on Koblitz curves.
    Lwnaf,
    /// Width-w tau-NAF over Frobenius-expanded representatives. Koblitz
    /// curves only.
    Koblitz,
}

impl Method {
    /// Every method, in the order they are usually benchmarked.
    pub const ALL: [Method; 7] = [
        Method::Binary,
        Method::Yao,
        Method::NafWindow,
        Method::Comb,
        Method::CombDouble,
        Method::Lwnaf,
        Method::Koblitz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Binary => "binary",
            Method::Yao => "yao",
            Method::NafWindow => "naf-window",
            Method::Comb => "comb",
            Method::CombDouble => "comb-double",
            Method::Lwnaf => "lwnaf",
            Method::Koblitz => "koblitz",
        }
    }

    /// Window widths the method accepts. The binary method ignores the width
    /// but still stores it.
    pub fn depth_range(self) -> RangeInclusive<usize> {
        match self {
            Method::Lwnaf | Method::Koblitz => MIN_NAF_DEPTH..=MAX_DEPTH,
            _ => MIN_DEPTH..=MAX_DEPTH,
        }
    }

    pub fn check_depth(self, depth: usize) -> Result<(), MulFixError> {
        if self.depth_range().contains(&depth) {
            Ok(())
        } else {
            Err(MulFixError::InvalidWindow {
                method: self,
                depth,
            })
        }
    }

    /// Number of points in a table for scalars of `bits` bits.
    ///
    /// `depth` must already be accepted by [`Method::check_depth`].
    pub fn table_len(self, bits: usize, depth: usize) -> usize {
        match self {
            Method::Binary => bits,
            Method::Yao => bits.div_ceil(depth),
            Method::NafWindow => (bits + 1).div_ceil(depth),
            Method::Comb => 1 << depth,
            Method::CombDouble => 1 << (depth + 1),
            Method::Lwnaf | Method::Koblitz => 1 << (depth - 2),
        }
    }

    /// Largest scalar bit-length a table can serve, or `None` when the
    /// method recodes scalars of any size.
    pub fn scalar_capacity(self, bits: usize, depth: usize) -> Option<usize> {
        match self {
            Method::Binary => Some(bits),
            Method::Yao => Some(bits.div_ceil(depth) * depth),
            // the NAF of a b-bit scalar may carry one extra digit
            Method::NafWindow => Some((bits + 1).div_ceil(depth) * depth - 1),
            Method::Comb | Method::CombDouble => Some(bits.div_ceil(depth) * depth),
            Method::Lwnaf | Method::Koblitz => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_len() {
        assert_eq!(Method::Binary.table_len(163, 4), 163);
        assert_eq!(Method::Yao.table_len(163, 4), 41);
        assert_eq!(Method::NafWindow.table_len(163, 4), 41);
        assert_eq!(Method::NafWindow.table_len(163, 5), 33);
        assert_eq!(Method::Comb.table_len(163, 4), 16);
        assert_eq!(Method::CombDouble.table_len(163, 4), 32);
        assert_eq!(Method::Lwnaf.table_len(163, 4), 4);
        assert_eq!(Method::Koblitz.table_len(232, 5), 8);
    }

    #[test]
    fn test_depth_range() {
        assert!(Method::Comb.check_depth(1).is_ok());
        assert!(Method::Comb.check_depth(MAX_DEPTH).is_ok());
        assert_eq!(
            Method::Comb.check_depth(0),
            Err(MulFixError::InvalidWindow {
                method: Method::Comb,
                depth: 0
            })
        );
        assert!(Method::Lwnaf.check_depth(1).is_err());
        assert!(Method::Koblitz.check_depth(MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn test_scalar_capacity() {
        assert_eq!(Method::Binary.scalar_capacity(163, 4), Some(163));
        assert_eq!(Method::Yao.scalar_capacity(163, 4), Some(164));
        assert_eq!(Method::NafWindow.scalar_capacity(163, 4), Some(163));
        assert_eq!(Method::Comb.scalar_capacity(163, 5), Some(165));
        assert_eq!(Method::Lwnaf.scalar_capacity(163, 4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::CombDouble.to_string(), "comb-double");
        assert_eq!(Method::ALL.len(), 7);
    }
}
