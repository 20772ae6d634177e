//! Binary method: one stored doubling per scalar bit.

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::errors::{MulFixError, try_vec};

/// `table[i] = 2^i * base` for `i < bits`.
pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    bits: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let mut table = try_vec(bits)?;
    let mut point = Projective::from_affine(base);
    for i in 0..bits {
        if i > 0 {
            point = point.double();
        }
        table.push(point);
    }
    Ok(Projective::batch_normalize(&table))
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
) -> Result<Projective<C>, MulFixError> {
    let bits = k.bits() as usize;
    if bits > table.len() {
        return Err(MulFixError::ScalarTooLarge {
            bits,
            capacity: table.len(),
        });
    }

    let mut r = Projective::INFINITY;
    for (i, point) in table.iter().enumerate().take(bits) {
        if k.bit(i as u64) {
            r += *point;
        }
    }
    Ok(r)
}
