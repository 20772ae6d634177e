//! Arithmetic in Z[tau] for Koblitz curves.
//!
//! On a Koblitz curve the Frobenius map `tau: (x, y) -> (x^2, y^2)` satisfies
//! `tau^2 - mu*tau + 2 = 0`, so an element `r0 + r1*tau` of Z[tau] acts on
//! points as `r0*P + r1*tau(P)`. Scalars recoded into powers of `tau` replace
//! doublings with three field squarings each.

use curve::{Coefficient, CurveParams};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::errors::MulFixError;

/// Trace of the Frobenius map, `mu = (-1)^(1 - a)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mu {
    /// `a = 1`
    Plus,
    /// `a = 0`
    Minus,
}

impl Mu {
    /// Frobenius trace of the curve `C`, or [`MulFixError::NotKoblitz`].
    pub fn of<C: CurveParams>() -> Result<Self, MulFixError> {
        if !C::KOBLITZ {
            return Err(MulFixError::NotKoblitz);
        }
        match C::a_class() {
            Coefficient::One => Ok(Mu::Plus),
            Coefficient::Zero => Ok(Mu::Minus),
            Coefficient::General => Err(MulFixError::NotKoblitz),
        }
    }

    #[inline]
    pub fn value(self) -> i64 {
        match self {
            Mu::Plus => 1,
            Mu::Minus => -1,
        }
    }
}

/// Lucas sequence `U_0 = 0, U_1 = 1, U_{k+1} = mu*U_k - 2*U_{k-1}`, up to
/// and including `U_w`.
pub fn lucas(mu: Mu, w: usize) -> Vec<i64> {
    let mut u = vec![0i64, 1];
    for k in 2..=w {
        u.push(mu.value() * u[k - 1] - 2 * u[k - 2]);
    }
    u.truncate(w + 1);
    u
}

/// `tau^w = -2*U_{w-1} + U_w*tau`.
pub fn tau_pow(mu: Mu, w: usize) -> (i64, i64) {
    let u = lucas(mu, w);
    (-2 * u[w - 1], u[w])
}

/// The integer `t_w` with `tau = t_w (mod tau^w)`, i.e.
/// `2*U_{w-1}*U_w^(-1) mod 2^w`.
pub fn tw(mu: Mu, w: usize) -> i64 {
    let u = lucas(mu, w);
    let modulus = 1i64 << w;
    // U_w is odd, so the inverse exists; w is small enough to search
    let inverse = (1..modulus)
        .step_by(2)
        .find(|x| (u[w] * x).rem_euclid(modulus) == 1)
        .unwrap_or(1);
    (2 * u[w - 1] * inverse).rem_euclid(modulus)
}

/// Norm `N(a + b*tau) = a^2 + mu*a*b + 2*b^2`.
pub fn norm(mu: Mu, a: i64, b: i64) -> i64 {
    a * a + mu.value() * a * b + 2 * b * b
}

// round(n / 2^w), halves rounded up
fn round_shift(n: i64, w: usize) -> i64 {
    (2 * n + (1 << w)).div_euclid(1 << (w + 1))
}

/// Representatives `alpha_u = u mods tau^w` for odd `u` in `1..2^(w-1)`,
/// indexed by `u / 2`.
///
/// Each `alpha_u` is the element of least norm congruent to `u` modulo
/// `tau^w`, found by rounding `u / tau^w` in Q[tau] and searching a small
/// neighbourhood of the rounded quotient. Ties are broken towards the
/// smaller `tau` coefficient so the set does not depend on the search order.
pub fn alphas(mu: Mu, w: usize) -> Vec<(i64, i64)> {
    let (a, b) = tau_pow(mu, w);
    // conjugate of tau^w; u / tau^w = u * conj / 2^w since N(tau^w) = 2^w
    let (c0, c1) = (a + mu.value() * b, -b);

    (1..1i64 << (w - 1))
        .step_by(2)
        .map(|u| {
            let (f0, f1) = (round_shift(u * c0, w), round_shift(u * c1, w));
            let mut best: Option<((i64, i64, i64, i64, i64), (i64, i64))> = None;
            for q0 in f0 - 2..=f0 + 2 {
                for q1 in f1 - 2..=f1 + 2 {
                    // u - q * tau^w
                    let beta = u - (q0 * a - 2 * q1 * b);
                    let gamma = -(q0 * b + q1 * a + mu.value() * q1 * b);
                    let key = (
                        norm(mu, beta, gamma),
                        gamma.abs(),
                        beta.abs(),
                        gamma,
                        beta,
                    );
                    if best.is_none_or(|(best_key, _)| key < best_key) {
                        best = Some((key, (beta, gamma)));
                    }
                }
            }
            best.map_or((u, 0), |(_, alpha)| alpha)
        })
        .collect()
}

/// An element `r0 + r1*tau` of Z[tau].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZTau {
    pub r0: BigInt,
    pub r1: BigInt,
}

impl ZTau {
    pub fn new(r0: BigInt, r1: BigInt) -> Self {
        ZTau { r0, r1 }
    }

    pub fn is_zero(&self) -> bool {
        self.r0.is_zero() && self.r1.is_zero()
    }

    /// `N(r0 + r1*tau) = r0^2 + mu*r0*r1 + 2*r1^2`.
    pub fn norm(&self, mu: Mu) -> BigInt {
        &self.r0 * &self.r0 + &self.r0 * &self.r1 * mu.value() + &self.r1 * &self.r1 * 2
    }

    /// `tau*(r0 + r1*tau) = -2*r1 + (r0 + mu*r1)*tau`.
    pub fn mul_tau(&self, mu: Mu) -> Self {
        ZTau {
            r0: &self.r1 * -2i64,
            r1: &self.r0 + &self.r1 * mu.value(),
        }
    }

    /// `(r0 + r1*tau) / tau = (r1 + mu*r0/2) - (r0/2)*tau`. Exact only when
    /// `r0` is even, which is when tau divides the element.
    pub fn div_tau(&self, mu: Mu) -> Self {
        let half: BigInt = &self.r0 >> 1;
        ZTau {
            r0: &self.r1 + &half * mu.value(),
            r1: -half,
        }
    }

    /// Adds `sign * (beta + gamma*tau)`.
    pub fn add_small(&mut self, (beta, gamma): (i64, i64), negative: bool) {
        if negative {
            self.r0 -= beta;
            self.r1 -= gamma;
        } else {
            self.r0 += beta;
            self.r1 += gamma;
        }
    }
}

/// Evaluates `sum d_i * tau^i` for width-w tau-NAF digits, where a digit `d`
/// stands for `sign(d) * alpha_|d|`.
pub fn evaluate(digits: &[i8], mu: Mu, w: usize) -> ZTau {
    let alphas = alphas(mu, w);
    let mut acc = ZTau::new(BigInt::zero(), BigInt::zero());
    for &digit in digits.iter().rev() {
        acc = acc.mul_tau(mu);
        if digit != 0 {
            acc.add_small(alphas[usize::from(digit.unsigned_abs()) / 2], digit < 0);
        }
    }
    acc
}
