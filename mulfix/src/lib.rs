//! Fixed-base scalar multiplication over binary elliptic curves.
//!
//! When the same point is multiplied by many scalars, as with the generator
//! in key generation and signing, most of the doublings can be moved out of
//! the multiplication into a one-time table. This crate builds such tables
//! and multiplies with them, using one of several methods:
//!
//! - [`Method::Binary`]: `2^i * P` for every bit, additions only
//! - [`Method::Yao`]: Yao's windowing over `2^(i*w) * P`
//! - [`Method::NafWindow`]: Yao's windowing over grouped NAF digits
//! - [`Method::Comb`] and [`Method::CombDouble`]: Lim-Lee combs with one or
//!   two tables
//! - [`Method::Lwnaf`]: width-w NAF over odd multiples, or the tau-adic NAF
//!   on Koblitz curves
//! - [`Method::Koblitz`]: width-w tau-NAF, doublings replaced by the
//!   Frobenius map
//!
//! Every method computes the same product; they differ in table size and
//! in the number of additions and doublings per multiplication.
//!
//! # Example
//!
//! ```
//! use curve::{Affine, Group, Sect163k1};
//! use mulfix::{FixedBaseTable, Method};
//! use num_bigint::BigInt;
//!
//! let table = FixedBaseTable::<Sect163k1>::generator(Method::Comb, 4).unwrap();
//! let k = BigInt::from(5);
//! let point = table.mul(&k).unwrap();
//! assert_eq!(point, Affine::<Sect163k1>::generator().scalar_mul(&k));
//! ```
//!
//! # Side channels
//!
//! None of the methods run in constant time: digit-dependent table
//! indexing and skipped additions leak information about the scalar
//! through timing and memory access.

mod basic;
mod comb;
mod combd;
mod constants;
mod errors;
mod koblitz;
mod lwnaf;
mod method;
mod nafwi;
pub mod recode;
mod table;
pub mod tau;
mod yao;

#[cfg(test)]
mod tests;

pub use constants::{DEFAULT_DEPTH, DEFAULT_METHOD, MAX_DEPTH, MIN_DEPTH, MIN_NAF_DEPTH};
pub use errors::MulFixError;
pub use method::Method;
pub use table::{FixedBaseTable, mul_fix, mul_gen, precompute, precompute_with};
