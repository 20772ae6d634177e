// Binary curves in short Weierstrass form: y^2 + xy = x^3 + a*x^2 + b
//
// sect163k1 (NIST K-163): a = 1, b = 1, cofactor 2, Koblitz
//   order n = 0x4000000000000000000020108a2e0cc0d99f8a5ef (163 bits)
// sect163r2 (NIST B-163): a = 1, random b, cofactor 2
//   order n = 0x40000000000000000000292fe77e70c12a4234c33 (163 bits)
// sect233k1 (NIST K-233): a = 0, b = 1, cofactor 4, Koblitz
//   order n = 0x8000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf (232 bits)

use core::fmt::Debug;
use core::hash::Hash;
use num_bigint::BigUint;

use crate::basefield::{FieldParams, Gf163, Gf233, Gf2m};

/// Field element type of the curve `C`.
pub type BaseField<C> = Gf2m<<C as CurveParams>::Field>;

/// Optimization class of the `a` coefficient.
///
/// On Koblitz curves the class fixes the sign convention of the Frobenius
/// map: `tau^2 = mu*tau - 2` with `mu = 1` for `One` and `mu = -1` for `Zero`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coefficient {
    Zero,
    One,
    General,
}

/// Parameter set of a binary elliptic curve.
///
/// Implemented by zero-sized marker types; points and precomputed tables
/// carry the marker as a type parameter instead of reading a global context.
pub trait CurveParams:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    type Field: FieldParams;

    const NAME: &'static str;
    const A: Gf2m<Self::Field>;
    const B: Gf2m<Self::Field>;
    const GENERATOR_X: Gf2m<Self::Field>;
    const GENERATOR_Y: Gf2m<Self::Field>;
    /// Order of the generator, hexadecimal without prefix.
    const ORDER_HEX: &'static str;
    const COFACTOR: u64;
    /// Whether the curve is a Koblitz (anomalous binary) curve, where the
    /// Frobenius endomorphism can replace doublings.
    const KOBLITZ: bool;

    /// Prime order of the generator.
    fn order() -> BigUint {
        BigUint::parse_bytes(Self::ORDER_HEX.as_bytes(), 16).unwrap_or_default()
    }

    /// Bit length of the generator order.
    fn order_bits() -> usize {
        Self::order().bits() as usize
    }

    fn a_class() -> Coefficient {
        if Self::A.is_zero() {
            Coefficient::Zero
        } else if Self::A.is_one() {
            Coefficient::One
        } else {
            Coefficient::General
        }
    }
}

/// NIST K-163.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect163k1;

impl CurveParams for Sect163k1 {
    type Field = Gf163;

    const NAME: &'static str = "sect163k1";
    const A: Gf2m<Gf163> = Gf2m::ONE;
    const B: Gf2m<Gf163> = Gf2m::ONE;
    const GENERATOR_X: Gf2m<Gf163> = Gf2m::from_limbs([
        0xde4e6d5e5c94eee8,
        0x7bbc11acaa07d793,
        0x00000002fe13c053,
        0x0000000000000000,
    ]);
    const GENERATOR_Y: Gf2m<Gf163> = Gf2m::from_limbs([
        0x0536d538ccdaa3d9,
        0x5d38ff58321f2e80,
        0x0000000289070fb0,
        0x0000000000000000,
    ]);
    const ORDER_HEX: &'static str = "4000000000000000000020108a2e0cc0d99f8a5ef";
    const COFACTOR: u64 = 2;
    const KOBLITZ: bool = true;
}

/// NIST B-163.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect163r2;

impl CurveParams for Sect163r2 {
    type Field = Gf163;

    const NAME: &'static str = "sect163r2";
    const A: Gf2m<Gf163> = Gf2m::ONE;
    const B: Gf2m<Gf163> = Gf2m::from_limbs([
        0x512f78744a3205fd,
        0xb8c953ca1481eb10,
        0x000000020a601907,
        0x0000000000000000,
    ]);
    const GENERATOR_X: Gf2m<Gf163> = Gf2m::from_limbs([
        0xd4994637e8343e36,
        0x86a2d57ea0991168,
        0x00000003f0eba162,
        0x0000000000000000,
    ]);
    const GENERATOR_Y: Gf2m<Gf163> = Gf2m::from_limbs([
        0xb11c5c0c797324f1,
        0x71a0094fa2cdd545,
        0x00000000d51fbc6c,
        0x0000000000000000,
    ]);
    const ORDER_HEX: &'static str = "40000000000000000000292fe77e70c12a4234c33";
    const COFACTOR: u64 = 2;
    const KOBLITZ: bool = false;
}

/// NIST K-233.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect233k1;

impl CurveParams for Sect233k1 {
    type Field = Gf233;

    const NAME: &'static str = "sect233k1";
    const A: Gf2m<Gf233> = Gf2m::ZERO;
    const B: Gf2m<Gf233> = Gf2m::ONE;
    const GENERATOR_X: Gf2m<Gf233> = Gf2m::from_limbs([
        0x0a4c9d6eefad6126,
        0x149563a419c26bf5,
        0x7e731af129f22ff4,
        0x0000017232ba853a,
    ]);
    const GENERATOR_Y: Gf2m<Gf233> = Gf2m::from_limbs([
        0x56e0c11056fae6a3,
        0x27a8cd9bf18aeb9b,
        0x19b7f70f555a67c4,
        0x000001db537dece8,
    ]);
    const ORDER_HEX: &'static str = "8000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf";
    const COFACTOR: u64 = 4;
    const KOBLITZ: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_order_bits() {
        assert_eq!(Sect163k1::order_bits(), 163);
        assert_eq!(Sect163r2::order_bits(), 163);
        assert_eq!(Sect233k1::order_bits(), 232);
    }

    fn check_hasse_bound<C: CurveParams>() {
        // |n*h - (2^m + 1)| <= 2*sqrt(2^m)
        let m = C::Field::DEGREE;
        let group_order = BigInt::from(C::order() * C::COFACTOR);
        let q_plus_one = (BigInt::from(1u32) << m) + 1u32;
        let trace = (group_order - q_plus_one).magnitude().clone();
        assert!(trace.bits() as usize <= m.div_ceil(2) + 1, "{}", C::NAME);
    }

    #[test]
    fn test_cofactor_matches_field_size() {
        check_hasse_bound::<Sect163k1>();
        check_hasse_bound::<Sect163r2>();
        check_hasse_bound::<Sect233k1>();
        // a cofactor one too small is far off 2^m
        let m = <Sect163k1 as CurveParams>::Field::DEGREE;
        let wrong = BigInt::from(Sect163k1::order()) - (BigInt::from(1) << m);
        assert!(wrong.magnitude().bits() as usize > m.div_ceil(2) + 1);
    }

    #[test]
    fn test_coefficient_class() {
        assert_eq!(Sect163k1::a_class(), Coefficient::One);
        assert_eq!(Sect163r2::a_class(), Coefficient::One);
        assert_eq!(Sect233k1::a_class(), Coefficient::Zero);
    }
}
