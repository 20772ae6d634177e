use crate::affine::Affine;
use crate::params::{BaseField, CurveParams};
use crate::Group;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Projective point on the binary curve.
/// Represents a point in homogeneous coordinates (X:Y:Z) where (x,y) = (X/Z, Y/Z).
/// The point at infinity is represented as (0:1:0).
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Projective<C: CurveParams> {
    pub x: BaseField<C>,
    pub y: BaseField<C>,
    pub z: BaseField<C>,
}

impl<C: CurveParams> Projective<C> {
    /// The point at infinity (identity element): (0:1:0)
    pub const INFINITY: Self = Projective {
        x: BaseField::<C>::ZERO,
        y: BaseField::<C>::ONE,
        z: BaseField::<C>::ZERO,
    };

    /// Create a new projective point.
    pub fn new(x: BaseField<C>, y: BaseField<C>, z: BaseField<C>) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine<C> {
        match self.z.try_inverse() {
            Some(z_inv) => Affine::new(self.x * z_inv, self.y * z_inv),
            None => Affine::INFINITY,
        }
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine<C>) -> Self {
        if point.is_infinity() {
            return Self::INFINITY;
        }

        Projective::new(point.x, point.y, BaseField::<C>::ONE)
    }

    /// Check if a point is on the curve: Y^2*Z + X*Y*Z = X^3 + a*X^2*Z + b*Z^3.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let x2 = self.x.square();
        let z2 = self.z.square();
        let lhs = (self.y.square() + self.x * self.y) * self.z;
        let rhs = x2 * self.x + C::A * x2 * self.z + C::B * z2 * self.z;

        lhs == rhs
    }

    /// Generator point of the parameter set.
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling: 2*P.
    ///
    /// With B = XZ and C = X^2 + YZ (so that λ = C/B):
    /// D = C^2 + CB + aB^2, X' = BD, Y' = X^4 B + (C + B)D, Z' = B^3.
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.x.is_zero() {
            return Self::INFINITY;
        }

        let b = self.x * self.z;
        let c = self.x.square() + self.y * self.z;
        let b2 = b.square();
        let d = c.square() + c * b + C::A * b2;

        let x4 = self.x.square().square();
        Projective::new(b * d, x4 * b + (c + b) * d, b2 * b)
    }

    /// Mixed addition with an affine point (Z2 = 1).
    pub fn add_affine(&self, other: &Affine<C>) -> Self {
        if other.is_infinity() {
            return *self;
        }
        if self.is_infinity() {
            return Self::from_affine(other);
        }

        let u = self.y + other.y * self.z;
        let v = self.x + other.x * self.z;
        if v.is_zero() {
            return if u.is_zero() {
                self.double()
            } else {
                Self::INFINITY
            };
        }

        let w = self.z;
        let v2 = v.square();
        let v3 = v2 * v;
        let a = (u.square() + u * v + C::A * v2) * w + v3;

        Projective::new(
            v * a,
            u * (self.x * v2 + a) + a * v + self.y * v3,
            v3 * w,
        )
    }

    /// Negate a point: -(X:Y:Z) = (X:X+Y:Z).
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Projective::new(self.x, self.x + self.y, self.z)
    }

    /// Frobenius endomorphism, squaring every coordinate.
    pub fn frobenius(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Projective::new(self.x.square(), self.y.square(), self.z.square())
    }

    /// Batch normalization: convert multiple projective points to affine.
    /// Shares one field inversion across the whole slice (Montgomery's trick);
    /// points at infinity are passed through.
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine<C>> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut running = BaseField::<C>::ONE;
        for point in points {
            prefix.push(running);
            if !point.is_infinity() {
                running *= point.z;
            }
        }

        let mut inv = match running.try_inverse() {
            Some(inv) => inv,
            None => return points.iter().map(Self::to_affine).collect(),
        };

        let mut out = vec![Affine::INFINITY; points.len()];
        for (i, point) in points.iter().enumerate().rev() {
            if point.is_infinity() {
                continue;
            }
            let z_inv = inv * prefix[i];
            inv *= point.z;
            out[i] = Affine::new(point.x * z_inv, point.y * z_inv);
        }
        out
    }
}

impl<C: CurveParams> Group for Projective<C> {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
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

impl<C: CurveParams> PartialEq for Projective<C> {
    /// Equality of the represented points, not of the coordinates.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => {
                self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
            }
            _ => false,
        }
    }
}

impl<C: CurveParams> Eq for Projective<C> {}

// Implement addition for projective points
impl<C: CurveParams> Add for Projective<C> {
    type Output = Self;

    /// With U = Y1Z2 + Y2Z1, V = X1Z2 + X2Z1, W = Z1Z2 (so that λ = U/V):
    /// A = (U^2 + UV + aV^2)W + V^3, X3 = VA, Z3 = V^3 W,
    /// Y3 = U(X1 V^2 Z2 + A) + AV + Y1 V^3 Z2.
    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        let u = self.y * other.z + other.y * self.z;
        let v = self.x * other.z + other.x * self.z;
        if v.is_zero() {
            return if u.is_zero() {
                self.double()
            } else {
                Self::INFINITY
            };
        }

        let w = self.z * other.z;
        let v2 = v.square();
        let v3 = v2 * v;
        let a = (u.square() + u * v + C::A * v2) * w + v3;

        Projective::new(
            v * a,
            u * (self.x * v2 * other.z + a) + a * v + self.y * v3 * other.z,
            v3 * w,
        )
    }
}

impl<C: CurveParams> Add<Affine<C>> for Projective<C> {
    type Output = Self;

    fn add(self, other: Affine<C>) -> Self {
        self.add_affine(&other)
    }
}

impl<C: CurveParams> AddAssign for Projective<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<C: CurveParams> AddAssign<Affine<C>> for Projective<C> {
    fn add_assign(&mut self, other: Affine<C>) {
        *self = self.add_affine(&other);
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: CurveParams> Sub for Projective<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<C: CurveParams> SubAssign for Projective<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<C: CurveParams> SubAssign<Affine<C>> for Projective<C> {
    fn sub_assign(&mut self, other: Affine<C>) {
        *self = self.add_affine(&other.negate());
    }
}

impl<C: CurveParams> Neg for Projective<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl<C: CurveParams> Mul<&BigInt> for Projective<C> {
    type Output = Self;

    fn mul(self, scalar: &BigInt) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

// Conversions
impl<C: CurveParams> From<Affine<C>> for Projective<C> {
    fn from(point: Affine<C>) -> Self {
        Projective::from_affine(&point)
    }
}

impl<C: CurveParams> From<&Affine<C>> for Projective<C> {
    fn from(point: &Affine<C>) -> Self {
        Projective::from_affine(point)
    }
}

impl<C: CurveParams> From<Projective<C>> for Affine<C> {
    fn from(point: Projective<C>) -> Self {
        point.to_affine()
    }
}

impl<C: CurveParams> From<&Projective<C>> for Affine<C> {
    fn from(point: &Projective<C>) -> Self {
        point.to_affine()
    }
}
