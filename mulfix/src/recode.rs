//! Scalar recodings consumed by the multiplication loops.
//!
//! All recoders take the magnitude of the scalar and return digits least
//! significant first. Digit buffers are reserved up front from the bounds
//! below, so a recoding either fits or fails with
//! [`MulFixError::Allocation`] before any digit is produced. Each recoder
//! accepts the window widths of the method that consumes it and rejects
//! others with [`MulFixError::InvalidWindow`].

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::errors::{MulFixError, try_vec};
use crate::method::Method;
use crate::tau::{self, Mu, ZTau};

/// Number of `w`-bit windows in a `bits`-bit scalar.
#[inline]
pub const fn window_len(bits: usize, w: usize) -> usize {
    bits.div_ceil(w)
}

/// Upper bound on the length of a width-w NAF of a `bits`-bit scalar.
#[inline]
pub const fn naf_len(bits: usize) -> usize {
    bits + 1
}

/// Number of `w`-digit groups of a width-2 NAF of a `bits`-bit scalar.
#[inline]
pub const fn group_len(bits: usize, w: usize) -> usize {
    naf_len(bits).div_ceil(w)
}

/// Upper bound on the length of an unreduced width-w tau-NAF of a
/// `bits`-bit scalar: the norm of the remainder drops by half each step,
/// and the norm of `k` is `k^2`.
#[inline]
pub const fn tnaf_len(bits: usize, w: usize) -> usize {
    2 * bits + w + 3
}

/// Largest absolute value of a group of `w` width-2 NAF digits.
///
/// The densest pattern alternates non-zero and zero digits from the top,
/// `1010...`, giving `(2^(w+1) - 2) / 3` for even `w` and
/// `(2^(w+1) - 1) / 3` for odd `w`. Meaningful for `w` up to
/// [`crate::MAX_DEPTH`].
pub const fn naf_window_bound(w: usize) -> i16 {
    let top = (1i16 << (w + 1)) - 1;
    if w % 2 == 0 { (top - 1) / 3 } else { top / 3 }
}

#[inline]
fn low_bits(k: &BigUint, w: usize) -> u64 {
    k.iter_u64_digits().next().unwrap_or(0) & ((1u64 << w) - 1)
}

/// Splits `k` into `w`-bit windows.
pub fn windows(k: &BigUint, w: usize) -> Result<Vec<u8>, MulFixError> {
    Method::Yao.check_depth(w)?;
    let bits = k.bits() as usize;
    let len = window_len(bits, w);
    let mut out = try_vec(len)?;
    for i in 0..len {
        let window = (0..w)
            .rev()
            .fold(0u8, |acc, j| (acc << 1) | u8::from(k.bit((i * w + j) as u64)));
        out.push(window);
    }
    Ok(out)
}

/// Width-w non-adjacent form of `k`.
///
/// Every non-zero digit is odd with absolute value below `2^(w-1)`, and any
/// `w` consecutive digits hold at most one non-zero. For `w = 2` this is the
/// ordinary NAF.
pub fn naf(k: &BigUint, w: usize) -> Result<Vec<i8>, MulFixError> {
    Method::Lwnaf.check_depth(w)?;
    let mut digits = try_vec(naf_len(k.bits() as usize))?;
    let modulus = 1i64 << w;
    let mut k = k.clone();

    while !k.is_zero() {
        let mut digit = 0i64;
        if k.is_odd() {
            digit = low_bits(&k, w) as i64;
            if digit >= modulus / 2 {
                digit -= modulus;
            }
            if digit > 0 {
                k -= digit as u64;
            } else {
                k += digit.unsigned_abs();
            }
        }
        digits.push(digit as i8);
        k >>= 1;
    }

    Ok(digits)
}

/// Groups width-2 NAF digits into `w`-digit windows, each read as a signed
/// binary number. Missing high digits of the last group count as zero.
pub fn group_naf(naf: &[i8], w: usize) -> Result<Vec<i16>, MulFixError> {
    Method::NafWindow.check_depth(w)?;
    let mut groups = try_vec(naf.len().div_ceil(w))?;
    for chunk in naf.chunks(w) {
        let value = chunk
            .iter()
            .rev()
            .fold(0i16, |acc, &digit| (acc << 1) + i16::from(digit));
        groups.push(value);
    }
    Ok(groups)
}

// x mod 2^w as a value in 0..2^w
fn mod_pow2(x: &BigInt, w: usize) -> i64 {
    let (_, limbs) = x.mod_floor(&BigInt::from(1u64 << w)).to_u64_digits();
    limbs.first().copied().unwrap_or(0) as i64
}

/// Width-w tau-adic NAF of `k` on a Koblitz curve with trace `mu`.
///
/// A non-zero digit `d` is odd with `|d| < 2^(w-1)` and stands for
/// `sign(d) * alpha_|d|` from [`tau::alphas`]; the digits satisfy
/// `k = sum d_i * tau^i` in Z[tau]. The scalar is not reduced modulo
/// `(tau^m - 1) / (tau - 1)`, so the expansion is about twice as long as the
/// binary one.
pub fn tnaf(k: &BigUint, mu: Mu, w: usize) -> Result<Vec<i8>, MulFixError> {
    Method::Koblitz.check_depth(w)?;
    let alphas = tau::alphas(mu, w);
    let t = tau::tw(mu, w);
    let modulus = 1i64 << w;
    let mut digits = try_vec(tnaf_len(k.bits() as usize, w))?;

    let mut r = ZTau::new(BigInt::from(k.clone()), BigInt::zero());
    while !r.is_zero() {
        let mut digit = 0i64;
        if r.r0.is_odd() {
            // u = (r0 + r1*t_w) mods 2^w
            digit = (mod_pow2(&r.r0, w) + mod_pow2(&r.r1, w) * t) % modulus;
            if digit >= modulus / 2 {
                digit -= modulus;
            }
            // r -= u, with u replaced by its representative alpha_|u|
            r.add_small(alphas[digit.unsigned_abs() as usize / 2], digit > 0);
        }
        digits.push(digit as i8);
        r = r.div_tau(mu);
    }

    Ok(digits)
}
