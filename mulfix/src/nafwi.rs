//! Yao's method over grouped NAF digits.
//!
//! The width-2 NAF of `k` is cut into groups of `w` digits, each read as a
//! signed binary number. Group values are bounded by
//! [`recode::naf_window_bound`], which is about two thirds of the `2^w - 1`
//! Yao has to walk, and negative groups are served by subtraction.

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::errors::MulFixError;
use crate::{recode, yao};

/// Same shape as the Yao table, one entry longer when `bits` is a multiple
/// of `depth` to hold the extra NAF digit.
pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    bits: usize,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    yao::precompute(base, recode::group_len(bits, depth), depth)
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let naf = recode::naf(k, 2)?;
    let groups = recode::group_naf(&naf, depth)?;
    if groups.len() > table.len() {
        return Err(MulFixError::ScalarTooLarge {
            bits: k.bits() as usize,
            capacity: table.len() * depth - 1,
        });
    }
    log::trace!("naf-window: {} digits in {} groups", naf.len(), groups.len());

    let mut r = Projective::INFINITY;
    let mut a = Projective::INFINITY;
    for j in (1..=recode::naf_window_bound(depth)).rev() {
        for (&group, point) in groups.iter().zip(table) {
            if group == j {
                a += *point;
            } else if group == -j {
                a -= *point;
            }
        }
        r += a;
    }
    Ok(r)
}
