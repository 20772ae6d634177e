//! Binary field GF(2^m) in polynomial basis.
//!
//! Elements are stored as four little-endian `u64` limbs, which covers every
//! extension degree up to 255. The reduction polynomial comes from a
//! [`FieldParams`] marker type, so `Gf2m<Gf163>` and `Gf2m<Gf233>` are
//! distinct types.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// Number of 64-bit limbs in a field element.
pub const LIMBS: usize = 4;

/// Parameters of a binary field: the extension degree and the irreducible
/// reduction polynomial.
pub trait FieldParams:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Extension degree m, at most 255.
    const DEGREE: usize;
    /// Reduction polynomial f(x), including the x^m term.
    const MODULUS: [u64; LIMBS];
}

/// GF(2^163) with f(x) = x^163 + x^7 + x^6 + x^3 + 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gf163;

impl FieldParams for Gf163 {
    const DEGREE: usize = 163;
    const MODULUS: [u64; LIMBS] = [0x00000000000000c9, 0, 0x0000000800000000, 0];
}

/// GF(2^233) with f(x) = x^233 + x^74 + 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gf233;

impl FieldParams for Gf233 {
    const DEGREE: usize = 233;
    const MODULUS: [u64; LIMBS] = [0x0000000000000001, 0x0000000000000400, 0, 0x0000020000000000];
}

/// Element of GF(2^m), always kept reduced (degree < m).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Gf2m<P: FieldParams> {
    limbs: [u64; LIMBS],
    #[serde(skip)]
    _params: PhantomData<P>,
}

impl<P: FieldParams> Gf2m<P> {
    pub const ZERO: Self = Self::from_limbs([0; LIMBS]);

    pub const ONE: Self = Self::from_limbs([1, 0, 0, 0]);

    /// Build an element from little-endian limbs. The caller guarantees the
    /// value is already reduced.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Gf2m {
            limbs,
            _params: PhantomData,
        }
    }

    /// Build an element from a `u64`, reducing if m <= 64.
    pub fn from_u64(value: u64) -> Self {
        Self::from_limbs(reduce::<P>([value, 0, 0, 0]))
    }

    /// Build an element from arbitrary limbs by discarding every bit at or
    /// above position m.
    pub fn from_limbs_truncated(mut limbs: [u64; LIMBS]) -> Self {
        for (i, limb) in limbs.iter_mut().enumerate() {
            let low = i * 64;
            if low >= P::DEGREE {
                *limb = 0;
            } else if P::DEGREE - low < 64 {
                *limb &= (1u64 << (P::DEGREE - low)) - 1;
            }
        }
        Self::from_limbs(limbs)
    }

    #[inline]
    pub fn limbs(&self) -> [u64; LIMBS] {
        self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0; LIMBS]
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs == [1, 0, 0, 0]
    }

    /// Coefficient of x^i.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        bit(&self.limbs, i)
    }

    /// Degree of the polynomial, `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        degree(&self.limbs)
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplicative inverse by the binary extended Euclidean algorithm.
    /// Returns `None` for zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let mut u = self.limbs;
        let mut v = P::MODULUS;
        let mut g1 = Self::ONE.limbs;
        let mut g2 = [0u64; LIMBS];

        // Invariant: u = g1 * a and v = g2 * a modulo f.
        while u != [1, 0, 0, 0] {
            let du = degree(&u)?;
            let dv = degree(&v)?;
            if du < dv {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
                xor_shifted(&mut u, &v, dv - du);
                xor_shifted(&mut g1, &g2, dv - du);
            } else {
                xor_shifted(&mut u, &v, du - dv);
                xor_shifted(&mut g1, &g2, du - dv);
            }
        }

        Some(Self::from_limbs(reduce::<P>(g1)))
    }
}

#[inline]
fn bit(limbs: &[u64; LIMBS], i: usize) -> bool {
    i < 64 * LIMBS && (limbs[i / 64] >> (i % 64)) & 1 == 1
}

fn degree(limbs: &[u64; LIMBS]) -> Option<usize> {
    limbs
        .iter()
        .enumerate()
        .rev()
        .find(|(_, limb)| **limb != 0)
        .map(|(i, limb)| 64 * i + 63 - limb.leading_zeros() as usize)
}

#[inline]
fn xor_assign(dst: &mut [u64; LIMBS], src: &[u64; LIMBS]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// dst ^= src * x^shift, dropping bits past the top limb.
fn xor_shifted(dst: &mut [u64; LIMBS], src: &[u64; LIMBS], shift: usize) {
    let words = shift / 64;
    let bits = shift % 64;
    for i in (words..LIMBS).rev() {
        let j = i - words;
        let mut limb = src[j] << bits;
        if bits != 0 && j > 0 {
            limb |= src[j - 1] >> (64 - bits);
        }
        dst[i] ^= limb;
    }
}

#[inline]
fn shl1(limbs: &mut [u64; LIMBS]) {
    for i in (1..LIMBS).rev() {
        limbs[i] = (limbs[i] << 1) | (limbs[i - 1] >> 63);
    }
    limbs[0] <<= 1;
}

/// Reduce a polynomial of degree < 256 modulo f.
fn reduce<P: FieldParams>(mut limbs: [u64; LIMBS]) -> [u64; LIMBS] {
    while let Some(d) = degree(&limbs) {
        if d < P::DEGREE {
            break;
        }
        xor_shifted(&mut limbs, &P::MODULUS, d - P::DEGREE);
    }
    limbs
}

impl<P: FieldParams> Add for Gf2m<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut limbs = self.limbs;
        xor_assign(&mut limbs, &rhs.limbs);
        Self::from_limbs(limbs)
    }
}

impl<P: FieldParams> AddAssign for Gf2m<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        xor_assign(&mut self.limbs, &rhs.limbs);
    }
}

// Characteristic 2: subtraction is addition.
#[allow(clippy::suspicious_arithmetic_impl)]
impl<P: FieldParams> Sub for Gf2m<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

#[allow(clippy::suspicious_op_assign_impl)]
impl<P: FieldParams> SubAssign for Gf2m<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self += rhs;
    }
}

impl<P: FieldParams> Neg for Gf2m<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl<P: FieldParams> Mul for Gf2m<P> {
    type Output = Self;

    /// Right-to-left shift-and-add multiplication, reducing `a * x^i` as it
    /// is shifted so every intermediate stays below degree m.
    fn mul(self, rhs: Self) -> Self {
        let mut a = self.limbs;
        let mut r = [0u64; LIMBS];
        let top = match rhs.degree() {
            Some(d) => d,
            None => return Self::ZERO,
        };

        for i in 0..=top {
            if bit(&rhs.limbs, i) {
                xor_assign(&mut r, &a);
            }
            shl1(&mut a);
            if bit(&a, P::DEGREE) {
                xor_assign(&mut a, &P::MODULUS);
            }
        }

        Self::from_limbs(r)
    }
}

impl<P: FieldParams> MulAssign for Gf2m<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: FieldParams> Div for Gf2m<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        match rhs.try_inverse() {
            Some(inv) => self * inv,
            None => panic!("division by zero in GF(2^{})", P::DEGREE),
        }
    }
}

impl<P: FieldParams> Display for Gf2m<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<P: FieldParams> Debug for Gf2m<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
