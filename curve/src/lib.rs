//! Elliptic curve groups over binary fields GF(2^m).
//!
//! This crate provides binary field arithmetic in polynomial basis, curve
//! parameter sets for NIST K-163, B-163 and K-233, affine and projective
//! curve points, the Frobenius endomorphism used on Koblitz curves, and
//! helpers for random sampling. Curve parameters are carried by marker types
//! implementing [`CurveParams`], never by global state.

mod affine;
mod basefield;
mod group;
mod params;
mod projective;
mod random;

pub use affine::Affine;
pub use basefield::{FieldParams, Gf163, Gf233, Gf2m, LIMBS};
pub use group::Group;
pub use params::{BaseField, Coefficient, CurveParams, Sect163k1, Sect163r2, Sect233k1};
pub use projective::Projective;
pub use random::RandomField;
