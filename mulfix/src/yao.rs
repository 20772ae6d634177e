//! Yao's windowing method.
//!
//! With `k = sum k_i * 2^(i*w)` and `P_i = 2^(i*w) * P`,
//! `k*P = sum_{j=1}^{2^w-1} j * (sum_{k_i = j} P_i)`. The outer sum is
//! evaluated with the running-sum trick: walking `j` downwards, an
//! accumulator collects the `P_i` of the current digit value and is added
//! to the result once per `j`.

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::errors::{MulFixError, try_vec};
use crate::recode;

/// `table[i] = 2^(i*depth) * base`.
pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    len: usize,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let mut table = try_vec(len)?;
    let mut point = Projective::from_affine(base);
    for i in 0..len {
        if i > 0 {
            for _ in 0..depth {
                point = point.double();
            }
        }
        table.push(point);
    }
    Ok(Projective::batch_normalize(&table))
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let windows = recode::windows(k, depth)?;
    if windows.len() > table.len() {
        return Err(MulFixError::ScalarTooLarge {
            bits: k.bits() as usize,
            capacity: table.len() * depth,
        });
    }
    log::trace!("yao: {} windows of {} bits", windows.len(), depth);

    let mut r = Projective::INFINITY;
    let mut a = Projective::INFINITY;
    for j in (1..1u16 << depth).rev() {
        for (&window, point) in windows.iter().zip(table) {
            if u16::from(window) == j {
                a += *point;
            }
        }
        r += a;
    }
    Ok(r)
}
