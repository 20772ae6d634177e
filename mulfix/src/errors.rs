//! Error types for table precomputation and fixed-base multiplication.

use core::fmt;

use crate::method::Method;

/// Errors that can occur while building a table or multiplying with one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MulFixError {
    /// Storage for a table, a recoded scalar or a temporary could not be
    /// reserved.
    ///
    /// Nothing is partially written when this is returned: tables are only
    /// handed out once every entry has been computed.
    Allocation {
        /// Number of elements the failed reservation asked for.
        requested: usize,
    },
    /// The window width is outside the range supported by the method.
    InvalidWindow { method: Method, depth: usize },
    /// A table does not have the length its method, width and bit-length
    /// call for. Only reachable with tables assembled from parts.
    TableMismatch {
        method: Method,
        expected: usize,
        found: usize,
    },
    /// The scalar has more bits than the table was built for.
    ///
    /// Methods that consume the scalar in fixed positions (binary, Yao,
    /// NAF windows and both comb variants) cannot address bits beyond the
    /// bit-length chosen at precomputation.
    ScalarTooLarge { bits: usize, capacity: usize },
    /// The Koblitz method was requested on a curve without a Frobenius
    /// shortcut.
    NotKoblitz,
}

impl fmt::Display for MulFixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MulFixError::Allocation { requested } => {
                write!(f, "could not reserve storage for {requested} elements")
            }
            MulFixError::InvalidWindow { method, depth } => {
                let range = method.depth_range();
                write!(
                    f,
                    "window width {depth} is not supported by the {method} method (expected {}..={})",
                    range.start(),
                    range.end()
                )
            }
            MulFixError::TableMismatch {
                method,
                expected,
                found,
            } => write!(
                f,
                "{method} table holds {found} points, expected {expected}"
            ),
            MulFixError::ScalarTooLarge { bits, capacity } => write!(
                f,
                "scalar has {bits} bits but the table covers at most {capacity}"
            ),
            MulFixError::NotKoblitz => {
                write!(f, "the Koblitz method needs a curve with a = 0 or a = 1 and b = 1")
            }
        }
    }
}

impl std::error::Error for MulFixError {}

/// Reserves an empty vector for exactly `capacity` elements, reporting
/// failure instead of aborting.
pub(crate) fn try_vec<T>(capacity: usize) -> Result<Vec<T>, MulFixError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| MulFixError::Allocation {
            requested: capacity,
        })?;
    Ok(buffer)
}
