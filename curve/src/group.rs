use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use num_bigint::{BigInt, Sign};

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;
    /// The Frobenius map (x, y) -> (x^2, y^2).
    fn frobenius(&self) -> Self;

    /// Reference left-to-right double-and-add over the bits of `|k|`, with
    /// the sign of `k` applied at the end.
    fn scalar_mul(&self, scalar: &BigInt) -> Self {
        let magnitude = scalar.magnitude();
        let mut result = Self::identity();

        for i in (0..magnitude.bits()).rev() {
            result = result.double();
            if magnitude.bit(i) {
                result = result + *self;
            }
        }

        if scalar.sign() == Sign::Minus {
            result.negate()
        } else {
            result
        }
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }

    #[inline]
    fn mul_i64(&self, n: i64) -> Self {
        let result = self.mul_u64(n.unsigned_abs());
        if n < 0 {
            result.negate()
        } else {
            result
        }
    }
}
