//! Width-w tau-NAF on Koblitz curves.
//!
//! Same table size and loop shape as the width-w NAF, with the doubling
//! replaced by the Frobenius map. The table holds `alpha_u * P` for the odd
//! residues `u`, where `alpha_u = beta + gamma*tau` evaluates to
//! `beta*P + gamma*tau(P)`.

use curve::{Affine, CurveParams, Group, Projective};
use num_bigint::BigUint;

use crate::errors::{MulFixError, try_vec};
use crate::lwnaf::add_digit;
use crate::recode;
use crate::tau::{self, Mu};

pub(crate) fn precompute<C: CurveParams>(
    base: &Affine<C>,
    depth: usize,
) -> Result<Vec<Affine<C>>, MulFixError> {
    let mu = Mu::of::<C>()?;
    let alphas = tau::alphas(mu, depth);
    let mut table = try_vec(alphas.len())?;

    let point = Projective::from_affine(base);
    let image = point.frobenius();
    for &(beta, gamma) in &alphas {
        table.push(point.mul_i64(beta) + image.mul_i64(gamma));
    }
    Ok(Projective::batch_normalize(&table))
}

pub(crate) fn mul<C: CurveParams>(
    table: &[Affine<C>],
    k: &BigUint,
    depth: usize,
) -> Result<Projective<C>, MulFixError> {
    let mu = Mu::of::<C>()?;
    let tnaf = recode::tnaf(k, mu, depth)?;
    log::trace!("koblitz: {} tau-adic digits", tnaf.len());

    let mut digits = tnaf.iter().rev();
    let mut r = Projective::INFINITY;
    if let Some(&top) = digits.next() {
        add_digit(&mut r, table, top);
    }
    for &digit in digits {
        r = r.frobenius();
        add_digit(&mut r, table, digit);
    }
    Ok(r)
}
