use curve::{Affine, CurveParams};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEPTH, DEFAULT_METHOD};
use crate::errors::MulFixError;
use crate::method::Method;
use crate::{basic, comb, combd, koblitz, lwnaf, nafwi, yao};

/// Precomputed multiples of a fixed base point.
///
/// A table records the method, window width and scalar bit-length it was
/// built for, and [`FixedBaseTable::mul`] dispatches on them, so a table can
/// never be consumed by the wrong routine. Tables are immutable once built
/// and may be shared between threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FixedBaseTable<C: CurveParams> {
    method: Method,
    depth: usize,
    bits: usize,
    points: Vec<Affine<C>>,
}

impl<C: CurveParams> FixedBaseTable<C> {
    /// Builds a table for scalars up to the bit-length of the curve order.
    ///
    /// # Arguments
    ///
    /// * `base` - The fixed point every product is a multiple of
    /// * `method` - Precomputation method
    /// * `depth` - Window width, see [`Method::depth_range`]
    ///
    /// # Returns
    ///
    /// * `Ok(table)` - The finished table
    /// * `Err(MulFixError)` - The width is out of range, the Koblitz method
    ///   was asked for on a general curve, or storage ran out
    pub fn new(base: &Affine<C>, method: Method, depth: usize) -> Result<Self, MulFixError> {
        Self::with_bits(base, method, depth, C::order_bits())
    }

    /// Builds a table for scalars of at most `bits` bits.
    ///
    /// Smaller tables and shorter loops for short scalars; the bounded
    /// methods reject longer scalars with [`MulFixError::ScalarTooLarge`].
    /// A bit-length of zero is treated as one.
    pub fn with_bits(
        base: &Affine<C>,
        method: Method,
        depth: usize,
        bits: usize,
    ) -> Result<Self, MulFixError> {
        method.check_depth(depth)?;
        let bits = bits.max(1);

        let points = match method {
            Method::Binary => basic::precompute(base, bits)?,
            Method::Yao => yao::precompute(base, method.table_len(bits, depth), depth)?,
            Method::NafWindow => nafwi::precompute(base, bits, depth)?,
            Method::Comb => comb::precompute(base, bits, depth)?,
            Method::CombDouble => combd::precompute(base, bits, depth)?,
            Method::Lwnaf if C::KOBLITZ => koblitz::precompute(base, depth)?,
            Method::Lwnaf => lwnaf::precompute(base, depth)?,
            Method::Koblitz => koblitz::precompute(base, depth)?,
        };

        log::debug!(
            "precomputed {} table on {}: depth {}, {} bits, {} points",
            method,
            C::NAME,
            depth,
            bits,
            points.len()
        );

        Ok(FixedBaseTable {
            method,
            depth,
            bits,
            points,
        })
    }

    /// Builds a table with the build-time [`DEFAULT_METHOD`] and
    /// [`DEFAULT_DEPTH`].
    pub fn with_defaults(base: &Affine<C>) -> Result<Self, MulFixError> {
        Self::new(base, DEFAULT_METHOD, DEFAULT_DEPTH)
    }

    /// Builds a table for the curve generator.
    pub fn generator(method: Method, depth: usize) -> Result<Self, MulFixError> {
        Self::new(&Affine::generator(), method, depth)
    }

    /// Reassembles a table from stored points.
    ///
    /// The points must be exactly what [`FixedBaseTable::with_bits`]
    /// produced for the same parameters; only the shape can be checked here.
    pub fn from_parts(
        method: Method,
        depth: usize,
        bits: usize,
        points: Vec<Affine<C>>,
    ) -> Result<Self, MulFixError> {
        let table = FixedBaseTable {
            method,
            depth,
            bits,
            points,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Scalar bit-length the table was built for.
    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn points(&self) -> &[Affine<C>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn validate(&self) -> Result<(), MulFixError> {
        self.method.check_depth(self.depth)?;
        if self.method == Method::Koblitz && !C::KOBLITZ {
            return Err(MulFixError::NotKoblitz);
        }
        let expected = self.method.table_len(self.bits, self.depth);
        if self.bits == 0 || self.points.len() != expected {
            return Err(MulFixError::TableMismatch {
                method: self.method,
                expected,
                found: self.points.len(),
            });
        }
        Ok(())
    }

    /// Computes `k * base`.
    ///
    /// Negative scalars multiply by `|k|` and negate the result; zero gives
    /// the point at infinity. The scalar is used as given, without reduction
    /// modulo the group order.
    ///
    /// # Returns
    ///
    /// * `Ok(point)` - The product in affine coordinates
    /// * `Err(MulFixError)` - The scalar is longer than a bounded table
    ///   covers, the table is malformed, or recoding storage ran out
    pub fn mul(&self, k: &BigInt) -> Result<Affine<C>, MulFixError> {
        self.validate()?;
        if k.is_zero() {
            return Ok(Affine::INFINITY);
        }

        let magnitude = k.magnitude();
        let table = self.points.as_slice();
        let (bits, depth) = (self.bits, self.depth);

        let r = match self.method {
            Method::Binary => basic::mul(table, magnitude)?,
            Method::Yao => yao::mul(table, magnitude, depth)?,
            Method::NafWindow => nafwi::mul(table, magnitude, depth)?,
            Method::Comb => comb::mul(table, magnitude, bits, depth)?,
            Method::CombDouble => combd::mul(table, magnitude, bits, depth)?,
            Method::Lwnaf if C::KOBLITZ => koblitz::mul(table, magnitude, depth)?,
            Method::Lwnaf => lwnaf::mul(table, magnitude, depth)?,
            Method::Koblitz => koblitz::mul(table, magnitude, depth)?,
        };

        let r = r.to_affine();
        if k.sign() == Sign::Minus {
            Ok(r.negate())
        } else {
            Ok(r)
        }
    }
}

/// Builds a table for `base` with the build-time default method and width.
pub fn precompute<C: CurveParams>(base: &Affine<C>) -> Result<FixedBaseTable<C>, MulFixError> {
    FixedBaseTable::with_defaults(base)
}

/// Builds a table for `base` with an explicit method and width.
pub fn precompute_with<C: CurveParams>(
    base: &Affine<C>,
    method: Method,
    depth: usize,
) -> Result<FixedBaseTable<C>, MulFixError> {
    FixedBaseTable::new(base, method, depth)
}

/// Computes `k * base` from a table built for `base`.
pub fn mul_fix<C: CurveParams>(
    table: &FixedBaseTable<C>,
    k: &BigInt,
) -> Result<Affine<C>, MulFixError> {
    table.mul(k)
}

/// Computes `k * G` for the curve generator, building a default table on
/// every call. Keep a [`FixedBaseTable::generator`] around for repeated use.
pub fn mul_gen<C: CurveParams>(k: &BigInt) -> Result<Affine<C>, MulFixError> {
    FixedBaseTable::<C>::generator(DEFAULT_METHOD, DEFAULT_DEPTH)?.mul(k)
}
