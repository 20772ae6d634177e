use rand::Rng;

use crate::basefield::{FieldParams, Gf2m, LIMBS};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<P: FieldParams> RandomField for Gf2m<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [0u64; LIMBS];
        for limb in limbs.iter_mut() {
            *limb = rng.random();
        }
        Gf2m::from_limbs_truncated(limbs)
    }
}
