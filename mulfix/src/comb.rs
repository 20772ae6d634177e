//! Single-table comb method.
//!
//! The scalar is laid out as a `w x d` bit matrix, `d = ceil(bits / w)`,
//! with row `j` holding bits `j*d .. (j+1)*d`. Column `i` selects one of the
//! `2^w` sums `sum_j c_j * 2^(j*d) * P`, so the whole product costs `d - 1`
//! doublings and at most `d` additions.

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::errors::{MulFixError, try_vec};

/// Bits `start + j*spacing` of `k` for `j = depth - 1` down to `0`, most
/// significant first. Bits past the top of `k` read as zero.
#[inline]
pub(crate) fn column(k: &BigUint, start: usize, spacing: usize, depth: usize) -> usize {
    (0..depth)
        .rev()
        .fold(0, |acc, j| (acc << 1) | usize::from(k.bit((start + j * spacing) as u64)))
}

/// Appends the `2^depth` comb combinations of `base` with teeth `spacing`
/// bits apart: entry `c` is `sum_j c_j * 2^(j*spacing) * base`.
pub(crate) fn combinations<C: CurveParams>(
    base: &Affine<C>,
    spacing: usize,
    depth: usize,
    table: &mut Vec<Projective<C>>,
) {
    let offset = table.len();
    table.push(Projective::INFINITY);
    table.push(Projective::from_affine(base));
    for j in 1..depth {
        let mut tooth = table[offset + (1 << (j - 1))];
        for _ in 0..spacing {
            tooth = tooth.double();
        }
        table.push(tooth);
        for i in 1..1 << j {
            let sum = table[offset + i] + tooth;
            table.push(sum);
        }
    }
}

pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    bits: usize,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let mut table = try_vec(1 << depth)?;
    combinations(base, bits.div_ceil(depth), depth, &mut table);
    Ok(Projective::batch_normalize(&table))
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    bits: usize,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let d = bits.div_ceil(depth);
    check_capacity(k, d * depth)?;

    let mut r = Projective::from_affine(&table[column(k, d - 1, d, depth)]);
    for i in (0..d - 1).rev() {
        r = r.double();
        let c = column(k, i, d, depth);
        if c > 0 {
            r += table[c];
        }
    }
    Ok(r)
}

pub(crate) fn check_capacity(k: &BigUint, capacity: usize) -> Result<(), MulFixError> {
    let bits = k.bits() as usize;
    if bits > capacity {
        Err(MulFixError::ScalarTooLarge { bits, capacity })
    } else {
        Ok(())
    }
}
