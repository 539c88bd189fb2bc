use std::collections::TryReserveError;

use thiserror::Error;

use sample_crypto_core::{SizeError, Status};

/**
    Errors from the sample crypto provider.

    Every variant maps onto exactly one coarse [`Status`] via [`CryptoError::status`].
*/
#[derive(Debug, Clone, Error)]
pub enum CryptoError {
    // ── Sizes (delegated to sample-crypto-core) ───────────────────────
    #[error(transparent)]
    Size(#[from] SizeError),

    // ── Parameter validation ──────────────────────────────────────────
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("IV must be 12 bytes, got {0}")]
    InvalidIvLength(usize),
    #[error("{what} length {len} exceeds the 32-bit limit")]
    LengthOverflow { what: &'static str, len: usize },
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    // ── Memory ────────────────────────────────────────────────────────
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    // ── Random source ─────────────────────────────────────────────────
    #[error("random source failed: {0}")]
    RandomSource(String),
    #[error("no valid scalar after {0} draws from the random source")]
    ScalarExhausted(u32),
    #[error("ephemeral key kept colliding with the signing key after {0} draws")]
    NonceCollision(u32),

    // ── ECC ───────────────────────────────────────────────────────────
    #[error("private key is zero or not below the group order")]
    InvalidPrivateKey,
    #[error("public key is not a valid point on P-256")]
    InvalidPublicKey,
    #[error("generated key pair failed validation")]
    KeyPairInvalid,
    #[error("ECC operation failed: {0}")]
    EccOperation(String),

    // ── ECDSA ─────────────────────────────────────────────────────────
    #[error("ECDSA signing failed: {0}")]
    EcdsaSigningFailed(String),

    // ── AES-GCM / CMAC ────────────────────────────────────────────────
    #[error("AES-GCM operation failed")]
    AesGcm,
    #[error("authentication tag mismatch")]
    MacMismatch,
}

impl CryptoError {
    /**
        Translate this error into the coarse outcome reported at the boundary.
    */
    pub fn status(&self) -> Status {
        match self {
            Self::Size(_)
            | Self::InvalidParameter(_)
            | Self::InvalidIvLength(_)
            | Self::LengthOverflow { .. }
            | Self::BufferTooSmall { .. }
            | Self::InvalidPrivateKey
            | Self::InvalidPublicKey
            | Self::MacMismatch => Status::InvalidParameter,
            Self::OutOfMemory(_) => Status::OutOfMemory,
            Self::RandomSource(_)
            | Self::ScalarExhausted(_)
            | Self::NonceCollision(_)
            | Self::KeyPairInvalid
            | Self::EccOperation(_)
            | Self::EcdsaSigningFailed(_)
            | Self::AesGcm => Status::Unexpected,
        }
    }
}

impl From<TryReserveError> for CryptoError {
    fn from(e: TryReserveError) -> Self {
        Self::OutOfMemory(e.to_string())
    }
}

/**
    Type alias for results that may return a [`CryptoError`].
*/
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/**
    Collapse an operation result into its boundary [`Status`].
*/
pub fn status_of<T>(result: &CryptoResult<T>) -> Status {
    match result {
        Ok(_) => Status::Success,
        Err(e) => e.status(),
    }
}

/**
    Reject lengths that do not fit the 32-bit length fields of the
    attestation message formats.
*/
pub(crate) fn check_u32_len(what: &'static str, len: usize) -> CryptoResult<()> {
    if u32::try_from(len).is_err() {
        return Err(CryptoError::LengthOverflow { what, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_map_to_invalid_parameter() {
        assert_eq!(
            CryptoError::InvalidIvLength(16).status(),
            Status::InvalidParameter
        );
        assert_eq!(CryptoError::MacMismatch.status(), Status::InvalidParameter);
        assert_eq!(
            CryptoError::from(SizeError {
                kind: "CMAC key",
                expected: 16,
                actual: 3
            })
            .status(),
            Status::InvalidParameter
        );
    }

    #[test]
    fn allocation_failure_maps_to_out_of_memory() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(CryptoError::from(err).status(), Status::OutOfMemory);
    }

    #[test]
    fn everything_else_is_unexpected() {
        assert_eq!(CryptoError::NonceCollision(64).status(), Status::Unexpected);
        assert_eq!(CryptoError::KeyPairInvalid.status(), Status::Unexpected);
    }

    #[test]
    fn status_of_success() {
        let ok: CryptoResult<()> = Ok(());
        assert_eq!(status_of(&ok), Status::Success);
        let err: CryptoResult<()> = Err(CryptoError::AesGcm);
        assert_eq!(status_of(&err), Status::Unexpected);
    }

    #[test]
    fn u32_length_limit() {
        assert!(check_u32_len("source", u32::MAX as usize).is_ok());
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            check_u32_len("source", u32::MAX as usize + 1),
            Err(CryptoError::LengthOverflow { .. })
        ));
    }
}
