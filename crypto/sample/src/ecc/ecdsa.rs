use ecdsa::hazmat::SignPrimitive;
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::elliptic_curve::subtle::ConstantTimeEq;
use p256::{FieldBytes, SecretKey};
use sha2::{Digest, Sha256};

use sample_crypto_core::{Ec256Private, Ec256Public, Ec256Signature};

use crate::error::{CryptoError, CryptoResult, check_u32_len};
use crate::rng::{MAX_SCALAR_DRAWS, RandomSource, draw_secret_key};

use super::context::key_pair_is_valid;
use super::{EccContext, public_key_from, secret_key_from, to_array};

impl<R: RandomSource> EccContext<R> {
    /**
        ECDSA-SHA256 signature over `data` with `private`.

        - `z` = SHA-256(data) read big-endian and reduced mod `n`
        - an ephemeral pair is drawn from the context's source and redrawn
          while its scalar equals the signing key
        - the result `(r, s)` is returned as `(x, y)`, each little-endian

        No low-S normalization is applied.
    */
    pub fn ecdsa_sign(
        &mut self,
        data: &[u8],
        private: &Ec256Private,
    ) -> CryptoResult<Ec256Signature> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter("data to sign is empty"));
        }
        check_u32_len("data to sign", data.len())?;

        let signing_key = secret_key_from(private)?;
        let z = Sha256::digest(data);
        let ephemeral = self.draw_ephemeral(&signing_key)?;

        let d = signing_key.to_nonzero_scalar();
        let k = ephemeral.to_nonzero_scalar();
        let (signature, _) = d
            .as_ref()
            .try_sign_prehashed(*k.as_ref(), &z)
            .map_err(|e| CryptoError::EcdsaSigningFailed(e.to_string()))?;

        let (r, s) = signature.split_bytes();
        log::debug!("ECC context #{}: signed {} bytes", self.id(), data.len());
        Ok(Ec256Signature::from_be(&to_array(&r), &to_array(&s)))
    }

    /**
        Verify an ECDSA-SHA256 signature produced by [`EccContext::ecdsa_sign`].

        Returns `Ok(false)` for a well-formed but wrong signature. A public key
        that is not on the curve is an error.
    */
    pub fn ecdsa_verify(
        &self,
        data: &[u8],
        public: &Ec256Public,
        signature: &Ec256Signature,
    ) -> CryptoResult<bool> {
        if data.is_empty() {
            return Err(CryptoError::InvalidParameter("signed data is empty"));
        }
        check_u32_len("signed data", data.len())?;

        let public = public_key_from(public)?;
        let (r, s) = signature.to_be();
        let Ok(signature) = Signature::from_scalars(
            FieldBytes::clone_from_slice(&r),
            FieldBytes::clone_from_slice(&s),
        ) else {
            // r or s is zero or not below n
            return Ok(false);
        };

        let valid = VerifyingKey::from(&public).verify(data, &signature).is_ok();
        log::debug!("ECC context #{}: signature valid: {valid}", self.id());
        Ok(valid)
    }

    /**
        Draw an ephemeral key for signing. A draw equal to the signing key is
        discarded; the deterministic generator always repeats itself, so the
        loop is bounded.
    */
    fn draw_ephemeral(&mut self, signing_key: &SecretKey) -> CryptoResult<SecretKey> {
        for _ in 0..MAX_SCALAR_DRAWS {
            let candidate = draw_secret_key(&mut self.source)?;
            if !key_pair_is_valid(&candidate, &candidate.public_key()) {
                return Err(CryptoError::KeyPairInvalid);
            }
            if bool::from(candidate.ct_eq(signing_key)) {
                log::trace!("ephemeral key equals the signing key, redrawing");
                continue;
            }
            return Ok(candidate);
        }
        Err(CryptoError::NonceCollision(MAX_SCALAR_DRAWS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_crypto_core::Status;

    #[test]
    fn sign_then_verify() {
        let mut ctx = EccContext::open_system();
        let (private, public) = ctx.create_key_pair().unwrap();
        let signature = ctx.ecdsa_sign(b"quote body", &private).unwrap();
        assert!(ctx.ecdsa_verify(b"quote body", &public, &signature).unwrap());
    }

    #[test]
    fn tampered_message_or_signature_rejected() {
        let mut ctx = EccContext::open_system();
        let (private, public) = ctx.create_key_pair().unwrap();
        let signature = ctx.ecdsa_sign(b"msg2", &private).unwrap();

        assert!(!ctx.ecdsa_verify(b"msg3", &public, &signature).unwrap());

        let mut bad = signature;
        bad.x[0] ^= 0x80;
        assert!(!ctx.ecdsa_verify(b"msg2", &public, &bad).unwrap());

        let (_, other) = ctx.create_key_pair().unwrap();
        assert!(!ctx.ecdsa_verify(b"msg2", &other, &signature).unwrap());
    }

    #[test]
    fn zero_signature_is_not_valid() {
        let mut ctx = EccContext::open_system();
        let (_, public) = ctx.create_key_pair().unwrap();
        let zero = Ec256Signature::from_be(&[0u8; 32], &[0u8; 32]);
        assert!(!ctx.ecdsa_verify(b"msg", &public, &zero).unwrap());
    }

    #[test]
    fn empty_data_is_invalid_parameter() {
        let mut ctx = EccContext::open_system();
        let (private, public) = ctx.create_key_pair().unwrap();
        let err = ctx.ecdsa_sign(b"", &private).unwrap_err();
        assert_eq!(err.status(), Status::InvalidParameter);
        let signature = ctx.ecdsa_sign(b"x", &private).unwrap();
        let err = ctx.ecdsa_verify(b"", &public, &signature).unwrap_err();
        assert_eq!(err.status(), Status::InvalidParameter);
    }

    #[cfg(feature = "debug-rng")]
    #[test]
    fn debug_signatures_are_reproducible() {
        let mut system = EccContext::open_system();
        let (private, public) = system.create_key_pair().unwrap();

        let mut ctx = EccContext::open();
        let a = ctx.ecdsa_sign(b"reproducible", &private).unwrap();
        let b = ctx.ecdsa_sign(b"reproducible", &private).unwrap();
        assert_eq!(a, b);
        assert!(ctx.ecdsa_verify(b"reproducible", &public, &a).unwrap());
    }

    #[cfg(feature = "debug-rng")]
    #[test]
    fn debug_key_cannot_sign_with_debug_nonce() {
        let mut ctx = EccContext::open();
        let (private, _) = ctx.create_key_pair().unwrap();
        let err = ctx.ecdsa_sign(b"collides", &private).unwrap_err();
        assert!(matches!(err, CryptoError::NonceCollision(_)));
        assert_eq!(err.status(), Status::Unexpected);
    }
}
