//! Width-w NAF over a table of odd multiples.

use core::cmp::Ordering;

use curve::{Affine, CurveParams, Projective};
use num_bigint::BigUint;

use crate::errors::{MulFixError, try_vec};
use crate::recode;

/// `table[i] = (2i + 1) * base` for `i < 2^(depth-2)`.
pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let len = 1 << (depth - 2);
    let mut table = try_vec(len)?;
    let point = Projective::from_affine(base);
    let twice = point.double();
    table.push(point);
    for i in 1..len {
        let next = table[i - 1] + twice;
        table.push(next);
    }
    Ok(Projective::batch_normalize(&table))
}

/// Adds the table entry a signed odd digit stands for; entry `|d| / 2`
/// holds the positive multiple.
#[inline]
pub(crate) fn add_digit<C: CurveParams>(r: &mut Projective<C>, table: &[Affine<C>], digit: i8) {
    let index = usize::from(digit.unsigned_abs()) / 2;
    match digit.cmp(&0) {
        Ordering::Greater => *r += table[index],
        Ordering::Less => *r -= table[index],
        Ordering::Equal => {}
    }
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let naf = recode::naf(k, depth)?;
    log::trace!("lwnaf: {} digits", naf.len());

    let mut digits = naf.iter().rev();
    let mut r = Projective::INFINITY;
    if let Some(&top) = digits.next() {
        add_digit(&mut r, table, top);
    }
    for &digit in digits {
        r = r.double();
        add_digit(&mut r, table, digit);
    }
    Ok(r)
}
