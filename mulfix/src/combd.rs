//! Comb method with two tables.
//!
//! The second half of the table holds every comb combination multiplied by
//! `2^e`, `e = ceil(d / 2)`, so each step consumes two columns of the scalar
//! matrix and the doublings drop from `d - 1` to `e - 1`.

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::comb::{self, column};
use crate::errors::{MulFixError, try_vec};

/// `table[c]` is the comb combination `c`, `table[2^depth + c]` is the same
/// combination times `2^e`. Both slots for `c = 0` are the point at infinity.
pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    bits: usize,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let d = bits.div_ceil(depth);
    let e = d.div_ceil(2);
    let half = 1 << depth;

    let mut table = try_vec(2 * half)?;
    comb::combinations(base, d, depth, &mut table);
    table.push(Projective::INFINITY);
    for j in 1..half {
        let mut point = table[j];
        for _ in 0..e {
            point = point.double();
        }
        table.push(point);
    }
    Ok(Projective::batch_normalize(&table))
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    bits: usize,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let d = bits.div_ceil(depth);
    let e = d.div_ceil(2);
    let half = 1 << depth;
    comb::check_capacity(k, d * depth)?;

    let mut r = Projective::INFINITY;
    for i in (0..e).rev() {
        r = r.double();
        let low = column(k, i, d, depth);
        if low > 0 {
            r += table[low];
        }
        // the upper half of an odd d has one column fewer
        if i + e < d {
            let high = column(k, i + e, d, depth);
            if high > 0 {
                r += table[half + high];
            }
        }
    }
    Ok(r)
}
