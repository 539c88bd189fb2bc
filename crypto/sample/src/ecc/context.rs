use std::sync::atomic::{AtomicU64, Ordering};

use p256::elliptic_curve::subtle::ConstantTimeEq;
use p256::{ProjectivePoint, PublicKey, SecretKey};

use sample_crypto_core::{Ec256Private, Ec256Public};

#[cfg(feature = "debug-rng")]
use crate::rng::DebugRng;
use crate::error::{CryptoError, CryptoResult};
use crate::rng::{RandomSource, SystemRng, draw_secret_key};

use super::{private_from_secret_key, public_from_key, public_key_from};

/**
    Global counter giving each context a process-unique id for log correlation.
*/
static CONTEXT_COUNTER: AtomicU64 = AtomicU64::new(1);

/**
    An open P-256 context.

    Owns the random source used for private keys and ECDSA nonces. Operations
    that draw randomness take `&mut self`, so a context can only be driven from
    one place at a time. Release it with [`EccContext::close`], or let it drop.
*/
pub struct EccContext<R: RandomSource> {
    id: u64,
    pub(super) source: R,
}

#[cfg(feature = "debug-rng")]
impl EccContext<DebugRng> {
    /**
        Open a context backed by the deterministic debug generator.
    */
    pub fn open() -> Self {
        Self::with_source(DebugRng::new())
    }
}

impl EccContext<SystemRng> {
    /**
        Open a context backed by operating-system entropy.
    */
    pub fn open_system() -> Self {
        Self::with_source(SystemRng)
    }
}

impl<R: RandomSource> EccContext<R> {
    pub fn with_source(source: R) -> Self {
        let id = CONTEXT_COUNTER.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "opened ECC context #{id} (deterministic source: {})",
            source.is_deterministic()
        );
        Self { id, source }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_deterministic(&self) -> bool {
        self.source.is_deterministic()
    }

    /**
        Release the context. Equivalent to dropping it, and always succeeds.
    */
    pub fn close(self) -> CryptoResult<()> {
        drop(self);
        Ok(())
    }

    /**
        Generate a private/public key pair.

        The private scalar comes from the context's random source. The pair is
        checked before it is returned: the public point must be `G·d`, lie on
        the curve, and not be the identity.
    */
    pub fn create_key_pair(&mut self) -> CryptoResult<(Ec256Private, Ec256Public)> {
        let secret = draw_secret_key(&mut self.source)?;
        let public = secret.public_key();

        if !key_pair_is_valid(&secret, &public) {
            return Err(CryptoError::KeyPairInvalid);
        }

        let public = public_from_key(&public)?;
        log::debug!("ECC context #{}: generated key pair", self.id);
        Ok((private_from_secret_key(&secret), public))
    }

    /**
        Whether `public` is a valid, non-identity point on P-256.
    */
    pub fn check_point(&self, public: &Ec256Public) -> bool {
        public_key_from(public).is_ok()
    }
}

impl<R: RandomSource> Drop for EccContext<R> {
    fn drop(&mut self) {
        log::debug!("closed ECC context #{}", self.id);
    }
}

/**
    Pairwise check: recompute `G·d` and compare, then confirm the public point
    survives a decode (on curve, not identity).
*/
pub(super) fn key_pair_is_valid(secret: &SecretKey, public: &PublicKey) -> bool {
    let expected = ProjectivePoint::GENERATOR * *secret.to_nonzero_scalar();
    if !bool::from(expected.ct_eq(&public.to_projective())) {
        return false;
    }
    match public_from_key(public) {
        Ok(boundary) => public_key_from(&boundary).is_ok(),
        Err(_) => false,
    }
}
