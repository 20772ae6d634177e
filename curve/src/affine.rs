use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::params::{BaseField, CurveParams};
use crate::Group;

/// Affine point on the binary curve y^2 + xy = x^3 + a*x^2 + b.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Affine<C: CurveParams> {
    /// The x-coordinate of the point
    pub x: BaseField<C>,
    /// The y-coordinate of the point
    pub y: BaseField<C>,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl<C: CurveParams> Affine<C> {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BaseField::<C>::ZERO,
        y: BaseField::<C>::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point.
    pub fn new(x: BaseField<C>, y: BaseField<C>) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 + xy = x^3 + a*x^2 + b.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let x2 = self.x.square();
        let lhs = self.y.square() + self.x * self.y;
        let rhs = x2 * self.x + C::A * x2 + C::B;

        lhs == rhs
    }

    /// Generator point of the parameter set.
    pub fn generator() -> Self {
        Affine::new(C::GENERATOR_X, C::GENERATOR_Y)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // x = 0 marks the point of order two
        if self.x.is_zero() {
            return Self::INFINITY;
        }

        // λ = x + y/x
        let lambda = self.x + self.y / self.x;

        // x_r = λ^2 + λ + a
        let x_r = lambda.square() + lambda + C::A;

        // y_r = x^2 + (λ + 1)x_r
        let y_r = self.x.square() + (lambda + BaseField::<C>::ONE) * x_r;

        Affine::new(x_r, y_r)
    }

    /// Negate a point: -(x, y) = (x, x + y).
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, self.x + self.y)
    }

    /// Frobenius endomorphism (x, y) -> (x^2, y^2).
    pub fn frobenius(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x.square(), self.y.square())
    }
}

impl<C: CurveParams> Group for Affine<C> {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn frobenius(&self) -> Self {
        Self::frobenius(self)
    }
}

// Implement addition for affine points
impl<C: CurveParams> Add for Affine<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        // Equal x means P = Q or P = -Q
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                return Self::INFINITY;
            }
        }

        // λ = (y1 + y2) / (x1 + x2)
        let sum_x = self.x + other.x;
        let lambda = (self.y + other.y) / sum_x;

        // x_r = λ^2 + λ + x1 + x2 + a
        let x_r = lambda.square() + lambda + sum_x + C::A;

        // y_r = λ(x1 + x_r) + x_r + y1
        let y_r = lambda * (self.x + x_r) + x_r + self.y;

        Affine::new(x_r, y_r)
    }
}

impl<C: CurveParams> AddAssign for Affine<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: CurveParams> Sub for Affine<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<C: CurveParams> SubAssign for Affine<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<C: CurveParams> Neg for Affine<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl<C: CurveParams> Mul<&BigInt> for Affine<C> {
    type Output = Self;

    fn mul(self, scalar: &BigInt) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sect163k1, Sect163r2, Sect233k1};

    type K163 = Affine<Sect163k1>;

    #[test]
    fn test_infinity() {
        let inf = K163::INFINITY;
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
    }

    #[test]
    fn test_generators_on_curve() {
        assert!(Affine::<Sect163k1>::generator().is_on_curve());
        assert!(Affine::<Sect163r2>::generator().is_on_curve());
        assert!(Affine::<Sect233k1>::generator().is_on_curve());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = K163::generator();
        let inf = K163::INFINITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert_eq!(inf + inf, inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = K163::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g + g, g2);
    }

    #[test]
    fn test_point_negation() {
        let g = K163::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, K163::INFINITY);
        assert_eq!(-neg_g, g);
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = K163::generator();
        let result = g.scalar_mul(&BigInt::from(5));

        // 5*G = G + G + G + G + G
        let expected = g + g + g + g + g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero_and_sign() {
        let g = K163::generator();
        assert_eq!(g.scalar_mul(&BigInt::from(0)), K163::INFINITY);
        assert_eq!(g.scalar_mul(&BigInt::from(1)), g);
        assert_eq!(g.scalar_mul(&BigInt::from(-7)), -g.mul_u64(7));
        assert_eq!(g.mul_i64(-7), -g.mul_u64(7));
    }

    #[test]
    fn test_associativity() {
        let g = K163::generator();
        let a = BigInt::from(3);
        let b = BigInt::from(5);

        // (a + b) * G = a*G + b*G
        let left = g * &(&a + &b);
        let right = g * &a + g * &b;

        assert_eq!(left, right);
    }

    #[test]
    fn test_generator_order() {
        let g = K163::generator();
        let n = BigInt::from(Sect163k1::order());
        assert_eq!(g.scalar_mul(&n), K163::INFINITY);

        let g = Affine::<Sect163r2>::generator();
        let n = BigInt::from(Sect163r2::order());
        assert_eq!(g.scalar_mul(&n), Affine::INFINITY);
        assert_eq!(g.scalar_mul(&(n - 1)), -g);
    }

    #[test]
    fn test_frobenius_characteristic_equation() {
        // tau^2 P + 2P = mu * tau P, mu = 1 when a = 1 and -1 when a = 0
        let g = K163::generator();
        let lhs = g.frobenius().frobenius() + g.double();
        assert_eq!(lhs, g.frobenius());

        let h = Affine::<Sect233k1>::generator();
        let lhs = h.frobenius().frobenius() + h.double();
        assert_eq!(lhs, -h.frobenius());
    }
}
